//! Header generation.
//!
//! Folds a definition tree and its resolution into a C++ header:
//!
//! ```text
//! #pragma once
//! #include "stdafx.h"
//!
//! /*
//!     Generated using offgen
//!     At 2026-10-19 12:00:00
//!     Game version 0.16.0.12345
//! */
//!
//! namespace offsets
//! {
//!     namespace Player
//!     {
//!         Profile = 0x5B0;
//!     }
//! }
//! ```
//!
//! Indentation is one tab per depth. Offsets that did not resolve are
//! omitted unless `RenderOptions::mark_unresolved` is set.

mod renderer;
mod writer;

pub use renderer::*;
pub use writer::*;
