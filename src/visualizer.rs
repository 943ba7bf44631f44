//! The [Visualizer] session, which owns a syntax tree and its latest render, and implements
//! selection and deletion on top of them.

use tracing::{debug, trace, warn};

use crate::edit::delete_subtree;
use crate::error::VisualizerError;
use crate::nav::PartPath;
use crate::node::SyntaxNode;
use crate::render::{self, DisplayPart, OperatorId, Rendered};
use crate::search::{find_enclosing_operator, Direction};
use crate::settings::VisualizerSettings;

/// The token a user currently has selected. Refers to a position in the current render, not to a
/// syntax node, so it is dropped whenever the tree is re-rendered.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Selection {
    pub path: PartPath,
}

/// The result of a successful call to [Visualizer::request_delete].
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum DeleteOutcome {
    /// There was no selection, so nothing happened.
    NothingSelected,

    /// One operand of the operator with this identifier (from the render before the deletion) was
    /// removed.
    Deleted { operator: OperatorId, direction: Direction },
}

/// Holds the state of one expression being displayed and edited.
#[derive(Debug, Default)]
pub struct Visualizer {
    tree: Option<SyntaxNode>,
    tree_json: String,
    rendered: Option<Rendered>,
    selection: Option<Selection>,
    render_count: usize,
    settings: VisualizerSettings,
}

impl Visualizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: VisualizerSettings) -> Self {
        Self { settings, ..Self::default() }
    }

    /// Replaces the syntax tree and re-renders it.
    ///
    /// If `tree` serializes identically to the current tree, this does nothing and returns false.
    /// Otherwise returns true.
    pub fn set_syntax_tree(&mut self, tree: SyntaxNode) -> Result<bool, VisualizerError> {
        let json = tree.canonical_json()?;
        if self.tree.is_some() && json == self.tree_json {
            trace!(target: "exprbox::visualizer", "syntax tree unchanged, skipping render");
            return Ok(false);
        }

        self.tree_json = json;
        self.tree = Some(tree);
        self.rerender();
        Ok(true)
    }

    /// Parses a syntax tree from the parser's JSON output, then behaves like
    /// [set_syntax_tree](Visualizer::set_syntax_tree).
    pub fn set_syntax_tree_json(&mut self, json: &str) -> Result<bool, VisualizerError> {
        let tree = SyntaxNode::from_json(json)?;
        self.set_syntax_tree(tree)
    }

    /// Selects the token at `path` in the current render, replacing any previous selection.
    ///
    /// On failure the previous selection is still cleared.
    pub fn select_token(&mut self, path: PartPath) -> Result<(), VisualizerError> {
        self.clear_selection();

        let rendered = self.rendered.as_ref().ok_or(VisualizerError::NothingRendered)?;
        let part = path.resolve(&rendered.part)
            .ok_or_else(|| VisualizerError::InvalidSelection(path.clone()))?;
        if !render::is_selectable(part) {
            return Err(VisualizerError::NotSelectable(path));
        }

        trace!(target: "exprbox::visualizer", path = %path, "selected token");
        self.selection = Some(Selection { path });
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Deletes the selected token along with one operand of its nearest enclosing operator, and
    /// moves the other operand into the operator's place.
    ///
    /// The selection is always cleared. If the selection has no enclosing operator, the tree is
    /// left alone and [VisualizerError::NoEnclosingOperator] is returned; its message is suitable
    /// for showing to the user.
    pub fn request_delete(&mut self) -> Result<DeleteOutcome, VisualizerError> {
        let selection = match self.selection.take() {
            Some(selection) => selection,
            None => return Ok(DeleteOutcome::NothingSelected),
        };
        let rendered = self.rendered.as_ref().ok_or(VisualizerError::NothingRendered)?;

        // Find hierarchically closest operator
        let operator = match find_enclosing_operator(&rendered.part, &selection.path) {
            Some(operator) => operator,
            None => {
                warn!(
                    target: "exprbox::visualizer",
                    path = %selection.path,
                    "delete rejected, selection has no enclosing operator"
                );
                return Err(VisualizerError::NoEnclosingOperator);
            }
        };
        let direction = operator.direction(&selection.path);

        let tree = self.tree.take().ok_or(VisualizerError::NothingRendered)?;
        let tree = delete_subtree(
            tree,
            &rendered.operators,
            operator.id,
            direction,
            self.settings.argument_collapse,
        );
        debug!(
            target: "exprbox::visualizer",
            operator = %operator.id,
            direction = %direction,
            "deleted subtree"
        );

        let json = tree.canonical_json();
        self.tree = Some(tree);
        self.rerender();
        self.tree_json = json?;

        Ok(DeleteOutcome::Deleted { operator: operator.id, direction })
    }

    /// Returns true if a front end should let the user select this part.
    pub fn is_selectable(&self, part: &DisplayPart) -> bool {
        render::is_selectable(part)
    }

    fn rerender(&mut self) {
        self.selection = None;
        self.rendered = self.tree.as_ref().map(render::render);
        self.render_count += 1;
    }

    pub fn tree(&self) -> Option<&SyntaxNode> {
        self.tree.as_ref()
    }

    /// The canonical serialization of the current tree, or an empty string if none has been set.
    pub fn syntax_tree_json(&self) -> &str {
        &self.tree_json
    }

    pub fn rendered(&self) -> Option<&Rendered> {
        self.rendered.as_ref()
    }

    pub fn parts(&self) -> Option<&DisplayPart> {
        self.rendered.as_ref().map(|r| &r.part)
    }

    /// The canonical text of the current tree, or an empty string if none has been set.
    pub fn canonical_text(&self) -> &str {
        self.rendered.as_ref().map_or("", |r| r.text.as_str())
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The part the current selection refers to.
    pub fn selected_part(&self) -> Option<&DisplayPart> {
        let selection = self.selection.as_ref()?;
        selection.path.resolve(&self.rendered.as_ref()?.part)
    }

    /// How many times a tree has been rendered by this session.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn settings(&self) -> &VisualizerSettings {
        &self.settings
    }
}
