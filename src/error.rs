use thiserror::Error;

use crate::nav::PartPath;

#[derive(Debug, Error)]
pub enum VisualizerError {
    /// The selection isn't inside any operator, so removing it would leave an invalid formula.
    #[error("Delete not allowed for the selected node, formula may become invalid")]
    NoEnclosingOperator,

    #[error("no part at {0} in the current render")]
    InvalidSelection(PartPath),

    #[error("part at {0} cannot be selected")]
    NotSelectable(PartPath),

    #[error("no syntax tree has been rendered yet")]
    NothingRendered,

    #[error("malformed syntax tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}
