//! # `intentml` Core
//!
//! Core types for compiling spreadsheet-authored voice applications into
//! platform interaction models.
//!
//! This crate provides the fundamental building blocks shared by the
//! compiler service: the typed intermediate representation (intents, slots,
//! views, downloads, invocations, publishing rows), the error type, locale
//! handling and configuration.
//!
//! ## Design Principles
//!
//! - **Pure data**: nothing in this crate performs I/O
//! - **Type Safety**: closed enums for sheet roles and cell values
//! - **Composition Over Inheritance**: compilers borrow read-only views of
//!   the model, they never subclass it

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types for compiler operations
pub mod error;

/// Locale tags and the fixed locale table
pub mod locale;

/// Type definitions for sheets and the intermediate representation
pub mod types;

/// Configuration types for the compiler
pub mod config;

pub use config::{GenerationConfig, IntentMLConfig, ValidationConfig};
pub use error::{IntentMLError, Result};
pub use locale::{Locale, LocaleTable};
pub use types::{
    CellValue, Download, Intent, Invocation, ModelDefinition, NormalizedRow, PublishingInfo,
    Sheet, SheetRole, SheetSource, Slot, SlotDefinition, SlotValue, View,
};
