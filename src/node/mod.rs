//! The syntax tree representing an arithmetic expression, as produced by an upstream parser.
//!
//! Trees are exchanged with the parser as JSON, where every node is an object tagged by a `type`
//! field:
//!
//! ```text
//! {"type": "ADDITION",
//!  "left": {"type": "NUMBER", "value": 5},
//!  "right": {"type": "VARIABLE", "name": "x"}}
//! ```
//!
//! Nodes can be addressed structurally with a [SyntaxPath], which is how rendered operators are
//! correlated back to the node they came from.

mod syntax;
pub use syntax::*;

mod number;
pub use number::*;

mod path;
pub use path::*;

mod serialize;
