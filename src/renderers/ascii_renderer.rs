use crate::render::{BoxState, DisplayPart, Renderer};

/// Draws a display tree onto a single line of text.
///
/// Selectable tokens are drawn in square brackets and non-selectable tokens as they are, so
/// `5 + 3` becomes `[5] + [3]`. The selected part is drawn in braces instead; a selected group
/// wraps all of its members, as in `{[1] + [2]} * [x]`.
#[derive(Default, Clone, Debug)]
pub struct AsciiRenderer {
    groups: Vec<Vec<String>>,
    pub line: String,
}

impl AsciiRenderer {
    fn put(&mut self, piece: String) {
        if piece.is_empty() { return; }
        if let Some(group) = self.groups.last_mut() {
            group.push(piece);
        }
    }
}

impl Renderer for AsciiRenderer {
    fn init(&mut self) {
        self.groups = vec![vec![]];
        self.line = String::new();
    }

    fn draw(&mut self, part: &DisplayPart, state: BoxState) {
        let text = part.text().unwrap_or_default();
        let piece = match state {
            BoxState { selected: true, .. } => format!("{{{}}}", text),
            BoxState { selectable: true, .. } => format!("[{}]", text),
            _ => text.to_string(),
        };
        self.put(piece);
        self.line = self.groups.first().map(|g| g.join(" ")).unwrap_or_default();
    }

    fn open_group(&mut self, _state: BoxState) {
        self.groups.push(vec![]);
    }

    fn close_group(&mut self, state: BoxState) {
        let members = self.groups.pop().unwrap_or_default().join(" ");
        if self.groups.is_empty() {
            // Unbalanced close; keep what we have as the root
            self.groups.push(vec![]);
        }

        let piece = if state.selected && !members.is_empty() {
            format!("{{{}}}", members)
        } else {
            members
        };
        self.put(piece);
        self.line = self.groups.first().map(|g| g.join(" ")).unwrap_or_default();
    }
}
