//! Removes one operand of an operator from a syntax tree, putting the other operand in the
//! operator's place.

use core::mem;

use tracing::debug;

use crate::node::{Slot, SyntaxNode, SyntaxPath};
use crate::render::{OperatorId, OperatorTable};
use crate::search::Direction;
use crate::settings::ArgumentCollapse;

/// Deletes one operand of the operator which was given `id` in the render pass that produced
/// `operators`. `direction` names the operand being removed:
///   - for a `Power`, `Right` keeps the base and `Left` keeps the exponent;
///   - for a binary operation, `Right` keeps the left operand and `Left` keeps the right one.
///
/// The retained operand takes the operator node's place. If the operator was the root, it becomes
/// the new root. If it was an argument of a function call, `collapse` decides whether the other
/// arguments survive.
///
/// If `id` is unknown, or its path no longer leads to an operator node, the tree is returned
/// unchanged.
pub fn delete_subtree(
    mut root: SyntaxNode,
    operators: &OperatorTable,
    id: OperatorId,
    direction: Direction,
    collapse: ArgumentCollapse,
) -> SyntaxNode {
    let path = match operators.get(id) {
        Some(path) => path,
        None => {
            debug!(target: "exprbox::edit", id = %id, "no node was given this operator id");
            return root;
        }
    };

    let matched = path.resolve(&root).map_or(false, SyntaxNode::has_operator);
    if !matched {
        debug!(target: "exprbox::edit", id = %id, path = %path, "operator path does not lead to an operator");
        return root;
    }

    debug!(target: "exprbox::edit", id = %id, path = %path, direction = %direction, "deleting operand");
    match path.split_last() {
        // Reassign root
        None => retained_operand(root, direction),

        Some((parent_path, slot)) => {
            reparent(&mut root, &parent_path, slot, direction, collapse);
            root
        }
    }
}

/// Replaces the operator node at `slot` of the node at `parent_path` with its retained operand.
fn reparent(
    root: &mut SyntaxNode,
    parent_path: &SyntaxPath,
    slot: Slot,
    direction: Direction,
    collapse: ArgumentCollapse,
) {
    let parent = match parent_path.resolve_mut(root) {
        Some(parent) => parent,
        None => return,
    };

    if let (SyntaxNode::FunctionCall { arguments, .. }, Slot::Argument(i)) = (&mut *parent, slot) {
        if i >= arguments.len() { return; }
        let matched = mem::replace(&mut arguments[i], SyntaxNode::Unrecognized);
        let keep = retained_operand(matched, direction);

        match collapse {
            ArgumentCollapse::ReplaceAll => *arguments = vec![keep],
            ArgumentCollapse::ReplaceMatched => arguments[i] = keep,
        }
        return;
    }

    if let Some(child) = parent.child_mut(slot) {
        let matched = mem::replace(child, SyntaxNode::Unrecognized);
        *child = retained_operand(matched, direction);
    }
}

/// Consumes an operator node, returning the operand which survives deleting the operand on the
/// `direction` side. Other nodes are returned unchanged.
fn retained_operand(node: SyntaxNode, direction: Direction) -> SyntaxNode {
    match (node, direction) {
        (SyntaxNode::Power { expression, .. }, Direction::Right) => *expression,
        (SyntaxNode::Power { power, .. }, Direction::Left) => *power,
        (SyntaxNode::Binary { left, .. }, Direction::Right) => *left,
        (SyntaxNode::Binary { right, .. }, Direction::Left) => *right,
        (other, _) => other,
    }
}
