//! The definition of the syntax tree itself.

use crate::node::Number;

/// One of the four binary arithmetic operators.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl BinaryOperator {
    /// The symbol drawn for this operator, and used in canonical text.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
        }
    }
}

/// A node in the syntax tree, as produced by an upstream formula parser. See the
/// [module-level documentation](crate::node) for how these are exchanged as JSON.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum SyntaxNode {
    /// A number literal.
    Number(Number),

    /// The constant π.
    Pi,

    /// Euler's number.
    E,

    /// A named variable.
    Variable(String),

    /// A unary minus applied to an expression.
    Negation(Box<SyntaxNode>),

    /// A base expression raised to a power.
    Power {
        expression: Box<SyntaxNode>,
        power: Box<SyntaxNode>,
    },

    /// A binary arithmetic operation.
    Binary {
        operator: BinaryOperator,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
    },

    /// A named function applied to an ordered list of arguments.
    FunctionCall {
        name: String,
        arguments: Vec<SyntaxNode>,
    },

    /// An explicit pair of parentheses.
    Grouping(Box<SyntaxNode>),

    /// A node type which the parser emitted but this crate doesn't know about. Renders as
    /// nothing.
    Unrecognized,
}

impl SyntaxNode {
    /// Creates a new `SyntaxNode::Number`.
    pub fn number(value: impl Into<Number>) -> Self {
        Self::Number(value.into())
    }

    /// Creates a new `SyntaxNode::Variable`.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn negation(expression: SyntaxNode) -> Self {
        Self::Negation(Box::new(expression))
    }

    pub fn power(expression: SyntaxNode, power: SyntaxNode) -> Self {
        Self::Power { expression: Box::new(expression), power: Box::new(power) }
    }

    pub fn binary(operator: BinaryOperator, left: SyntaxNode, right: SyntaxNode) -> Self {
        Self::Binary { operator, left: Box::new(left), right: Box::new(right) }
    }

    pub fn add(left: SyntaxNode, right: SyntaxNode) -> Self {
        Self::binary(BinaryOperator::Addition, left, right)
    }

    pub fn subtract(left: SyntaxNode, right: SyntaxNode) -> Self {
        Self::binary(BinaryOperator::Subtraction, left, right)
    }

    pub fn multiply(left: SyntaxNode, right: SyntaxNode) -> Self {
        Self::binary(BinaryOperator::Multiplication, left, right)
    }

    pub fn divide(left: SyntaxNode, right: SyntaxNode) -> Self {
        Self::binary(BinaryOperator::Division, left, right)
    }

    pub fn function_call(name: impl Into<String>, arguments: Vec<SyntaxNode>) -> Self {
        Self::FunctionCall { name: name.into(), arguments }
    }

    pub fn grouping(expression: SyntaxNode) -> Self {
        Self::Grouping(Box::new(expression))
    }

    /// Returns true if this node is given an operator identifier when rendered, i.e. it is a
    /// `Power` or a `Binary` node.
    pub fn has_operator(&self) -> bool {
        matches!(self, Self::Power { .. } | Self::Binary { .. })
    }
}
