//! Lays out arithmetic expression trees as nested, clickable boxes, and lets a user prune them by
//! deleting a selected box.
//!
//! A [Visualizer] holds a [SyntaxNode] tree from an upstream parser, [renders](render::render) it
//! into a [DisplayPart] tree, and applies deletions to the tree when asked to.

pub mod error;
pub mod node;
pub mod nav;
pub mod render;
pub mod renderers;
pub mod search;
pub mod edit;
pub mod settings;
pub mod visualizer;

#[cfg(test)]
mod tests;

pub use crate::{
    error::VisualizerError,
    nav::PartPath,
    node::{BinaryOperator, Number, SyntaxNode, SyntaxPath},
    render::{DisplayPart, OperatorId, Rendered},
    search::Direction,
    settings::{ArgumentCollapse, VisualizerSettings},
    visualizer::{DeleteOutcome, Visualizer},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
