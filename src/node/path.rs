//! Structural addresses of nodes within a syntax tree.

use core::fmt;

use crate::node::SyntaxNode;

/// One step down from a node into one of its children, named after the field being descended
/// into.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Slot {
    Left,
    Right,
    /// The inner node of a `Negation` or `Grouping`, or the base of a `Power`.
    Expression,
    /// The exponent of a `Power`.
    Power,
    /// The argument of a `FunctionCall` at the given index.
    Argument(usize),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Left => write!(f, "left"),
            Slot::Right => write!(f, "right"),
            Slot::Expression => write!(f, "expression"),
            Slot::Power => write!(f, "power"),
            Slot::Argument(i) => write!(f, "arguments[{}]", i),
        }
    }
}

/// Describes the steps which must be taken down a syntax tree from its root to reach a
/// particular node. The empty path refers to the root itself.
#[derive(PartialEq, Eq, Debug, Clone, Default, Hash)]
pub struct SyntaxPath {
    steps: Vec<Slot>,
}

impl SyntaxPath {
    pub fn new(steps: Vec<Slot>) -> Self { Self { steps } }

    pub fn root() -> Self { Self::default() }

    /// Returns a new path which descends one step further than this one.
    pub fn child(&self, slot: Slot) -> Self {
        let mut steps = self.steps.clone();
        steps.push(slot);
        Self { steps }
    }

    /// Splits this path into the path to the parent node and the final step, or returns `None`
    /// for the root path.
    pub fn split_last(&self) -> Option<(SyntaxPath, Slot)> {
        let (last, rest) = self.steps.split_last()?;
        Some((SyntaxPath::new(rest.to_vec()), *last))
    }

    /// Follows this path from `root`, returning the node it refers to, or `None` if a step does
    /// not exist on the node it is applied to.
    pub fn resolve<'a>(&self, root: &'a SyntaxNode) -> Option<&'a SyntaxNode> {
        self.steps.iter().try_fold(root, |node, slot| node.child(*slot))
    }

    /// A mutable variant of [resolve](SyntaxPath::resolve).
    pub fn resolve_mut<'a>(&self, root: &'a mut SyntaxNode) -> Option<&'a mut SyntaxNode> {
        let mut node = root;
        for slot in &self.steps {
            node = node.child_mut(*slot)?;
        }
        Some(node)
    }
}

impl fmt::Display for SyntaxPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "root")?;
        for slot in &self.steps {
            write!(f, ".{}", slot)?;
        }
        Ok(())
    }
}

impl SyntaxNode {
    /// Returns the child of this node in the given slot, if this kind of node has that slot.
    pub fn child(&self, slot: Slot) -> Option<&SyntaxNode> {
        match (self, slot) {
            (SyntaxNode::Binary { left, .. }, Slot::Left) => Some(left),
            (SyntaxNode::Binary { right, .. }, Slot::Right) => Some(right),
            (SyntaxNode::Power { expression, .. }, Slot::Expression) => Some(expression),
            (SyntaxNode::Power { power, .. }, Slot::Power) => Some(power),
            (SyntaxNode::Negation(inner) | SyntaxNode::Grouping(inner), Slot::Expression)
                => Some(inner),
            (SyntaxNode::FunctionCall { arguments, .. }, Slot::Argument(i)) => arguments.get(i),
            _ => None,
        }
    }

    /// A mutable variant of [child](SyntaxNode::child).
    pub fn child_mut(&mut self, slot: Slot) -> Option<&mut SyntaxNode> {
        match (self, slot) {
            (SyntaxNode::Binary { left, .. }, Slot::Left) => Some(left),
            (SyntaxNode::Binary { right, .. }, Slot::Right) => Some(right),
            (SyntaxNode::Power { expression, .. }, Slot::Expression) => Some(expression),
            (SyntaxNode::Power { power, .. }, Slot::Power) => Some(power),
            (SyntaxNode::Negation(inner) | SyntaxNode::Grouping(inner), Slot::Expression)
                => Some(inner),
            (SyntaxNode::FunctionCall { arguments, .. }, Slot::Argument(i)) => arguments.get_mut(i),
            _ => None,
        }
    }
}
