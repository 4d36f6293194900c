//! # offgen
//!
//! Offset header generator for reflected game types.
//!
//! This crate provides:
//! - A sorted snapshot of reflected types (`TypeDatabase`) and the
//!   `TypeProvider` seam that produces it
//! - The hand-authored schema of requested offsets (`DefinitionTree`)
//! - The resolution engine mapping the schema onto the snapshot
//! - C++ header rendering of the resolved schema
//! - The `Generator` pipeline tying these together

pub mod config;
pub mod consistency;
pub mod definition;
pub mod error;
pub mod generator;
pub mod prelude;
pub mod render;
pub mod resolve;
pub mod types;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use consistency::ConsistencyInfo;
pub use definition::{
    DefinitionTree, FieldSelector, FlatNamespace, MatchMarkers, NamespaceDefinition, NamespaceId,
    OffsetDefinition, OffsetId,
};
pub use error::{Error, ResolveError, Result};
pub use generator::{GenerationReport, Generator};
pub use render::{
    CppWriter, Header, LineEnding, RenderOptions, render_document, render_scope, save_document,
};
pub use resolve::{NodeState, Resolution, ResolutionSummary, Resolver, resolve};
pub use types::{
    ClassKind, FieldRecord, ProcessTarget, SnapshotFile, TypeDatabase, TypeProvider, TypeRecord,
    TypeSnapshot, format_type_dump, save_type_dump,
};
