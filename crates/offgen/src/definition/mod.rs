//! Hand-authored schema of namespaces and requested offsets.
//!
//! A [`DefinitionTree`] is a pure value: it is built once (in code or from a
//! JSON definitions file), validated, and then only read. Resolution results
//! live in a separate [`Resolution`](crate::resolve::Resolution).
//!
//! ## Traversal order
//!
//! Pre-order, depth-first: a namespace's own offsets come before its child
//! namespaces, children in list order. Namespace ids are assigned in this
//! order, and previous-found-field chaining relies on it.

mod markers;
mod node;
mod selector;
mod tree;

pub use markers::*;
pub use node::*;
pub use selector::*;
pub use tree::*;
