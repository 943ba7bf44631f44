//! Addresses of tokens within a rendered display tree.

use core::fmt;

use crate::render::DisplayPart;

/// Describes the movements which must be taken down a display tree to reach a particular token.
/// Each entry is an index into the members of a [DisplayPart::Group]. The empty path refers to the
/// root part.
///
/// Paths are ordered in document order: a group comes before its members, and members come in
/// left-to-right order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Default, Hash)]
pub struct PartPath {
    path: Vec<usize>,
}

impl PartPath {
    pub fn new(path: Vec<usize>) -> Self { Self { path } }

    pub fn to_navigator(&self) -> PartPathNavigator {
        PartPathNavigator {
            path: self,
            index: 0,
        }
    }

    /// Adds index to this path.
    pub fn push(&mut self, index: usize) {
        self.path.push(index);
    }

    /// Returns a clone of this path with `index` added to it.
    pub fn child(&self, index: usize) -> PartPath {
        let mut path = self.clone();
        path.push(index);
        path
    }

    /// Splits this path into the path of the group containing the token, and the token's index in
    /// that group. Returns `None` for the root path, which isn't contained in anything.
    pub fn parent(&self) -> Option<(PartPath, usize)> {
        let (last, rest) = self.path.split_last()?;
        Some((PartPath::new(rest.to_vec()), *last))
    }

    /// Follows this path from `root`, returning the part it refers to, or `None` if it leads
    /// outside the tree.
    pub fn resolve<'a>(&self, root: &'a DisplayPart) -> Option<&'a DisplayPart> {
        self.path.iter().try_fold(root, |part, i| part.members()?.get(*i))
    }
}

impl fmt::Display for PartPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.path.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{}", index)?;
        }
        write!(f, "]")
    }
}

/// A cursor over a [PartPath], used while walking down a display tree in step with it.
pub struct PartPathNavigator<'a> {
    path: &'a PartPath,
    index: usize,
}

impl<'a> PartPathNavigator<'a> {
    /// The next index in the path, or `None` if the path ends here.
    pub fn next(&self) -> Option<usize> {
        self.path.path.get(self.index).copied()
    }

    /// Returns true if there are no indices left in the path; in other words, the path refers to
    /// the part currently being visited.
    pub fn here(&self) -> bool {
        self.index == self.path.path.len()
    }

    /// Returns a navigator one step further along the path, making it relative to one part deeper
    /// into the tree.
    pub fn step(&self) -> PartPathNavigator<'a> {
        PartPathNavigator { index: self.index + 1, path: self.path }
    }

    /// Helper method for renderers. Returns a navigator created by `step`, if `next` returns the
    /// given value.
    pub fn step_if_next(&self, required_next: usize) -> Option<PartPathNavigator<'a>> {
        if self.next() == Some(required_next) {
            Some(self.step())
        } else {
            None
        }
    }
}
