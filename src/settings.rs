//! Settings which change how a [Visualizer](crate::visualizer::Visualizer) edits its tree.

use serde::{Deserialize, Serialize};

/// What happens to a function call's other arguments when an operator directly inside one of its
/// arguments is deleted.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentCollapse {
    /// The whole argument list is replaced by the retained operand, discarding any sibling
    /// arguments. This is how deletion has always behaved, so it remains the default, although it
    /// is probably not what a user expects for multi-argument functions.
    #[default]
    ReplaceAll,

    /// Only the argument containing the deleted operator is replaced.
    ReplaceMatched,
}

#[derive(PartialEq, Eq, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    pub argument_collapse: ArgumentCollapse,
}

impl VisualizerSettings {
    /// Loads settings from JSON. Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
