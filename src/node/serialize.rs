//! Implements `serde` (de)serialization of [SyntaxNode] trees, using the JSON shape emitted by the
//! upstream formula parser.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::node::{BinaryOperator, Number, SyntaxNode};

/// Borrowed serialized form. Each binary operator gets its own tag, as the parser does.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum NodeReprRef<'a> {
    Number { value: &'a Number },
    Pi,
    E,
    Variable { name: &'a str },
    Negation { expression: &'a SyntaxNode },
    Power { expression: &'a SyntaxNode, power: &'a SyntaxNode },
    Addition { left: &'a SyntaxNode, right: &'a SyntaxNode },
    Subtraction { left: &'a SyntaxNode, right: &'a SyntaxNode },
    Multiplication { left: &'a SyntaxNode, right: &'a SyntaxNode },
    Division { left: &'a SyntaxNode, right: &'a SyntaxNode },
    Function { name: &'a str, arguments: &'a [SyntaxNode] },
    Paren { expression: &'a SyntaxNode },
    Unrecognized,
}

/// Owned deserialized form. Unknown fields (such as an `id` left behind by an older renderer)
/// are ignored, and unknown tags fall through to `Unrecognized`.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum NodeRepr {
    Number { value: Number },
    Pi,
    E,
    Variable { name: String },
    Negation { expression: Box<SyntaxNode> },
    Power { expression: Box<SyntaxNode>, power: Box<SyntaxNode> },
    Addition { left: Box<SyntaxNode>, right: Box<SyntaxNode> },
    Subtraction { left: Box<SyntaxNode>, right: Box<SyntaxNode> },
    Multiplication { left: Box<SyntaxNode>, right: Box<SyntaxNode> },
    Division { left: Box<SyntaxNode>, right: Box<SyntaxNode> },
    Function { name: String, arguments: Vec<SyntaxNode> },
    Paren { expression: Box<SyntaxNode> },
    #[serde(other)]
    Unrecognized,
}

impl<'a> From<&'a SyntaxNode> for NodeReprRef<'a> {
    fn from(node: &'a SyntaxNode) -> Self {
        match node {
            SyntaxNode::Number(value) => Self::Number { value },
            SyntaxNode::Pi => Self::Pi,
            SyntaxNode::E => Self::E,
            SyntaxNode::Variable(name) => Self::Variable { name },
            SyntaxNode::Negation(expression) => Self::Negation { expression },
            SyntaxNode::Power { expression, power } => Self::Power { expression, power },
            SyntaxNode::Binary { operator, left, right } => {
                let (left, right) = (left.as_ref(), right.as_ref());
                match operator {
                    BinaryOperator::Addition => Self::Addition { left, right },
                    BinaryOperator::Subtraction => Self::Subtraction { left, right },
                    BinaryOperator::Multiplication => Self::Multiplication { left, right },
                    BinaryOperator::Division => Self::Division { left, right },
                }
            },
            SyntaxNode::FunctionCall { name, arguments } => Self::Function { name, arguments },
            SyntaxNode::Grouping(expression) => Self::Paren { expression },
            SyntaxNode::Unrecognized => Self::Unrecognized,
        }
    }
}

impl From<NodeRepr> for SyntaxNode {
    fn from(repr: NodeRepr) -> Self {
        match repr {
            NodeRepr::Number { value } => SyntaxNode::Number(value),
            NodeRepr::Pi => SyntaxNode::Pi,
            NodeRepr::E => SyntaxNode::E,
            NodeRepr::Variable { name } => SyntaxNode::Variable(name),
            NodeRepr::Negation { expression } => SyntaxNode::Negation(expression),
            NodeRepr::Power { expression, power } => SyntaxNode::Power { expression, power },
            NodeRepr::Addition { left, right }
                => SyntaxNode::Binary { operator: BinaryOperator::Addition, left, right },
            NodeRepr::Subtraction { left, right }
                => SyntaxNode::Binary { operator: BinaryOperator::Subtraction, left, right },
            NodeRepr::Multiplication { left, right }
                => SyntaxNode::Binary { operator: BinaryOperator::Multiplication, left, right },
            NodeRepr::Division { left, right }
                => SyntaxNode::Binary { operator: BinaryOperator::Division, left, right },
            NodeRepr::Function { name, arguments } => SyntaxNode::FunctionCall { name, arguments },
            NodeRepr::Paren { expression } => SyntaxNode::Grouping(expression),
            NodeRepr::Unrecognized => SyntaxNode::Unrecognized,
        }
    }
}

impl Serialize for SyntaxNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeReprRef::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SyntaxNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NodeRepr::deserialize(deserializer).map(SyntaxNode::from)
    }
}

impl SyntaxNode {
    /// Serializes this tree into the parser's JSON format. Two trees are considered the same
    /// input exactly when their canonical serializations are equal.
    pub fn canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a tree from the parser's JSON format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
