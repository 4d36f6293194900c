//! Reflected type metadata.
//!
//! This module holds the immutable snapshot the resolver works against:
//!
//! - **Records**: `TypeRecord` / `FieldRecord` as reported by the inspector
//! - **Database**: a sorted, indexed view over all records
//! - **Provider**: the seam through which a snapshot is produced
//! - **Dump**: a human-readable listing of the whole snapshot
//!
//! ## Ordering
//!
//! `TypeDatabase` sorts records by full name (stable). Every "first match"
//! rule in the resolver refers to this order.

mod database;
mod dump;
mod provider;
mod record;

pub use database::*;
pub use dump::*;
pub use provider::*;
pub use record::*;
