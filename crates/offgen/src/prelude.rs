//! Prelude module for convenient imports
//!
//! ```ignore
//! use offgen::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Schema: `DefinitionTree`, `NamespaceDefinition`, `OffsetDefinition`, `FieldSelector`
//! - Types: `TypeDatabase`, `TypeRecord`, `FieldRecord`, `ClassKind`
//! - Engine: `Resolver`, `Resolution`, `NodeState`
//! - Output: `Generator`, `GeneratorConfig`, `Header`, `RenderOptions`
//! - Error handling: `Error`, `Result`

// Schema
pub use crate::definition::{
    DefinitionTree, FieldSelector, MatchMarkers, NamespaceDefinition, OffsetDefinition,
};

// Reflected types
pub use crate::types::{ClassKind, FieldRecord, TypeDatabase, TypeProvider, TypeRecord};

// Resolution
pub use crate::resolve::{NodeState, Resolution, Resolver};

// Output
pub use crate::config::GeneratorConfig;
pub use crate::generator::Generator;
pub use crate::render::{Header, RenderOptions};

// Error handling
pub use crate::error::{Error, Result};
