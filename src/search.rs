//! Finds the operator which "owns" a selected token, and so decides how much of the expression a
//! deletion removes.

use core::fmt;

use crate::nav::PartPath;
use crate::render::{DisplayPart, OperatorId};

/// Which operand of an operator is being removed.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// An operator token located by [find_enclosing_operator].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct FoundOperator {
    pub id: OperatorId,
    pub path: PartPath,
}

impl FoundOperator {
    /// Given the selection this operator was found for, works out which side of the operator is
    /// being removed: if the selection comes after the operator in document order, it is the
    /// right operand, otherwise the left.
    pub fn direction(&self, selected: &PartPath) -> Direction {
        if *selected > self.path {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

/// Searches breadth-first for the operator nearest to the selected part, by distance in the
/// display tree.
///
/// The search starts with the members of the group immediately containing the selection (not
/// including the selection itself). If any of them is an operator, the leftmost one is returned.
/// Otherwise the search moves one layer down, to the members of every group in the current layer,
/// and repeats until it runs out of parts.
///
/// Returns `None` if the selection is the root part, doesn't resolve within `root`, or no operator
/// is found.
pub fn find_enclosing_operator(root: &DisplayPart, selected: &PartPath) -> Option<FoundOperator> {
    selected.resolve(root)?;
    let (parent_path, selected_index) = selected.parent()?;
    let siblings = parent_path.resolve(root)?.members()?;

    let mut frontier = siblings
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != selected_index)
        .map(|(i, part)| (parent_path.child(i), part))
        .collect::<Vec<_>>();

    while !frontier.is_empty() {
        let found = frontier
            .iter()
            .find_map(|(path, part)| part.operator_id().map(|id| (id, path)));
        if let Some((id, path)) = found {
            return Some(FoundOperator { id, path: path.clone() });
        }

        // Replace with the next layer down and repeat
        frontier = frontier
            .into_iter()
            .flat_map(|(path, part)| {
                part.members()
                    .into_iter()
                    .flatten()
                    .enumerate()
                    .map(move |(i, member)| (path.child(i), member))
            })
            .collect();
    }

    None
}
