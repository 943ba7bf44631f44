//! Converts a syntax tree into a tree of display tokens, which a front end can lay out as nested,
//! clickable boxes.
//!
//! [render] produces three things from a single traversal:
//!   - a [DisplayPart] tree, the tokens to draw;
//!   - the canonical text of the expression;
//!   - an [OperatorTable], correlating each [DisplayPart::Operator] token back to the syntax node
//!     it was drawn for.
//!
//! The syntax tree itself is never modified. Operator identifiers are only meaningful together
//! with the table from the same pass; every render assigns them afresh.

use core::fmt;

use tracing::{trace, warn};

use crate::nav::{PartPath, PartPathNavigator};
use crate::node::{Slot, SyntaxNode, SyntaxPath};

/// Identifies an operator token within one render pass.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct OperatorId(pub usize);

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named constant.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn name(&self) -> &'static str {
        match self {
            Constant::Pi => "PI",
            Constant::E => "E",
        }
    }
}

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Paren {
    Open,
    Close,
}

impl Paren {
    pub fn as_str(&self) -> &'static str {
        match self {
            Paren::Open => "(",
            Paren::Close => ")",
        }
    }
}

/// A token in the display tree.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum DisplayPart {
    /// Plain text: a number literal, a variable name, or the sign of a negation.
    Terminal(String),

    /// A named constant.
    Constant(Constant),

    /// An operator symbol, carrying the identifier of the syntax node it was drawn for.
    Operator { symbol: &'static str, id: OperatorId },

    /// The name label of a function call.
    Function(String),

    /// A parenthesis.
    Punctuation(Paren),

    /// An ordered sequence of parts, drawn as one box.
    Group(Vec<DisplayPart>),
}

impl DisplayPart {
    /// A group with no members, which is what unrecognised nodes render as.
    pub fn empty() -> DisplayPart {
        DisplayPart::Group(vec![])
    }

    /// Returns the members of this part if it is a group, or `None` otherwise.
    pub fn members(&self) -> Option<&[DisplayPart]> {
        if let DisplayPart::Group(members) = self {
            Some(members)
        } else {
            None
        }
    }

    /// Returns the operator identifier of this part if it is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        if let DisplayPart::Operator { id, .. } = self {
            Some(*id)
        } else {
            None
        }
    }

    /// The text drawn for this part, or `None` for groups.
    pub fn text(&self) -> Option<&str> {
        match self {
            DisplayPart::Terminal(s) | DisplayPart::Function(s) => Some(s),
            DisplayPart::Constant(c) => Some(c.name()),
            DisplayPart::Operator { symbol, .. } => Some(symbol),
            DisplayPart::Punctuation(p) => Some(p.as_str()),
            DisplayPart::Group(_) => None,
        }
    }
}

/// Returns true if a front end should let the user select this part. Operators, function labels
/// and parentheses can't be selected; everything else, including whole groups, can.
pub fn is_selectable(part: &DisplayPart) -> bool {
    !matches!(
        part,
        DisplayPart::Operator { .. } | DisplayPart::Function(_) | DisplayPart::Punctuation(_)
    )
}

/// Maps each operator identifier assigned during a render pass to the path of the syntax node it
/// was assigned to.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct OperatorTable {
    paths: Vec<SyntaxPath>,
}

impl OperatorTable {
    fn assign(&mut self, path: SyntaxPath) -> OperatorId {
        self.paths.push(path);
        OperatorId(self.paths.len() - 1)
    }

    /// The path of the node which was given `id`, if it was assigned in this pass.
    pub fn get(&self, id: OperatorId) -> Option<&SyntaxPath> {
        self.paths.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OperatorId, &SyntaxPath)> {
        self.paths.iter().enumerate().map(|(i, p)| (OperatorId(i), p))
    }
}

/// The result of rendering a syntax tree.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Rendered {
    pub part: DisplayPart,
    pub text: String,
    pub operators: OperatorTable,
}

/// Renders a syntax tree. See the [module-level documentation](crate::render).
pub fn render(root: &SyntaxNode) -> Rendered {
    let mut pass = RenderPass::default();
    let (part, text) = pass.node(root, SyntaxPath::root());
    trace!(
        target: "exprbox::render",
        operators = pass.operators.len(),
        text = %text,
        "rendered syntax tree"
    );

    Rendered { part, text, operators: pass.operators }
}

#[derive(Default)]
struct RenderPass {
    operators: OperatorTable,
}

impl RenderPass {
    fn node(&mut self, node: &SyntaxNode, path: SyntaxPath) -> (DisplayPart, String) {
        match node {
            SyntaxNode::Number(value) => {
                let text = value.to_string();
                (DisplayPart::Terminal(text.clone()), text)
            },

            SyntaxNode::Pi => (DisplayPart::Constant(Constant::Pi), Constant::Pi.name().into()),
            SyntaxNode::E => (DisplayPart::Constant(Constant::E), Constant::E.name().into()),

            SyntaxNode::Variable(name) => (DisplayPart::Terminal(name.clone()), name.clone()),

            SyntaxNode::Negation(inner) => {
                let (part, text) = self.node(inner, path.child(Slot::Expression));
                (
                    DisplayPart::Group(vec![DisplayPart::Terminal("-".into()), part]),
                    format!("-{}", text),
                )
            },

            SyntaxNode::Power { expression, power } => {
                let (base_part, base_text) = self.node(expression, path.child(Slot::Expression));
                let (exp_part, exp_text) = self.node(power, path.child(Slot::Power));
                self.binop("^", path, (base_part, base_text), (exp_part, exp_text))
            },

            SyntaxNode::Binary { operator, left, right } => {
                let left = self.node(left, path.child(Slot::Left));
                let right = self.node(right, path.child(Slot::Right));
                self.binop(operator.symbol(), path, left, right)
            },

            SyntaxNode::FunctionCall { name, arguments } => {
                let mut parts = vec![
                    DisplayPart::Function(name.clone()),
                    DisplayPart::Punctuation(Paren::Open),
                ];
                let mut text = format!("{}(", name);

                // Argument texts are run together with no separator
                for (i, arg) in arguments.iter().enumerate() {
                    let (arg_part, arg_text) = self.node(arg, path.child(Slot::Argument(i)));
                    parts.push(arg_part);
                    text.push_str(&arg_text);
                }

                parts.push(DisplayPart::Punctuation(Paren::Close));
                text.push(')');
                (DisplayPart::Group(parts), text)
            },

            SyntaxNode::Grouping(inner) => {
                let (part, text) = self.node(inner, path.child(Slot::Expression));

                // Splice an inner group between the parentheses instead of nesting it
                let members = match part {
                    DisplayPart::Group(members) => members,
                    other => vec![other],
                };
                let mut parts = Vec::with_capacity(members.len() + 2);
                parts.push(DisplayPart::Punctuation(Paren::Open));
                parts.extend(members);
                parts.push(DisplayPart::Punctuation(Paren::Close));

                (DisplayPart::Group(parts), format!("({})", text))
            },

            SyntaxNode::Unrecognized => {
                warn!(target: "exprbox::render", path = %path, "unrecognised node rendered as nothing");
                (DisplayPart::empty(), String::new())
            },
        }
    }

    /// Builds the parts for an operator with two operands, which have already been rendered. The
    /// identifier is assigned after both operands, so identifiers follow post-order.
    fn binop(
        &mut self,
        symbol: &'static str,
        path: SyntaxPath,
        (left_part, left_text): (DisplayPart, String),
        (right_part, right_text): (DisplayPart, String),
    ) -> (DisplayPart, String) {
        let id = self.operators.assign(path);
        (
            DisplayPart::Group(vec![left_part, DisplayPart::Operator { symbol, id }, right_part]),
            format!("{} {} {}", left_text, symbol, right_text),
        )
    }
}

/// Whether a box can be, and is, selected. Passed to [Renderer]s for each part drawn.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct BoxState {
    pub selectable: bool,
    pub selected: bool,
}

/// Implemented by front ends which lay out a display tree.
pub trait Renderer {
    /// Prepare to draw a new display tree.
    fn init(&mut self);

    /// Draw a single token which is not a group.
    fn draw(&mut self, part: &DisplayPart, state: BoxState);

    /// Begin drawing a group box. Its members are drawn next, followed by
    /// [close_group](Renderer::close_group).
    fn open_group(&mut self, state: BoxState);

    /// Finish drawing the group box most recently opened.
    fn close_group(&mut self, state: BoxState);

    /// Initialises the renderer and draws an entire display tree, highlighting the part at
    /// `selection` if one is given.
    fn draw_all(&mut self, root: &DisplayPart, selection: Option<&PartPath>) where Self: Sized {
        self.init();
        self.layout(root, selection.map(|p| p.to_navigator()));
    }

    /// Walks a display tree, calling the drawing methods for each part in document order.
    fn layout(&mut self, part: &DisplayPart, path: Option<PartPathNavigator>) where Self: Sized {
        let state = BoxState {
            selectable: is_selectable(part),
            selected: path.as_ref().map_or(false, |p| p.here()),
        };

        match part {
            DisplayPart::Group(members) => {
                self.open_group(state);
                for (i, member) in members.iter().enumerate() {
                    let member_path = path.as_ref().and_then(|p| p.step_if_next(i));
                    self.layout(member, member_path);
                }
                self.close_group(state);
            },
            _ => self.draw(part, state),
        }
    }
}
