//! Offset resolution engine.
//!
//! Maps a [`DefinitionTree`](crate::definition::DefinitionTree) onto a
//! [`TypeDatabase`](crate::types::TypeDatabase) in one pre-order pass.
//!
//! ## Matching rules
//!
//! - **Namespace**: either chained from the declared type of an already
//!   resolved field (`previous_found_field`), or the first `Class` matching
//!   the optional namespace and class-name filters.
//! - **Interface fallback**: a chained type that is a field-less interface is
//!   replaced by the first class implementing it.
//! - **Field**: the type's instance fields, narrowed by type and name
//!   constraints (exact or anonymous-prefix), then picked by the offset's
//!   `FieldSelector`.
//!
//! "First" always means first in `TypeDatabase` order (sorted by full name)
//! or declared field order.
//!
//! Failures are recorded per node and logged; the pass never aborts.

mod engine;
mod state;

pub use engine::*;
pub use state::*;
