//! Shared data model for the RigScript toolkit: unit contexts, sheet layout
//! and notation configuration, identifier handling, and the sentinel
//! vocabulary of the translated output.

pub mod config;
pub mod context;
pub mod error;
pub mod ident;
pub mod sentinel;

pub use config::{EngineConfig, Notation, SheetLayout};
pub use context::{ContextCell, UnitContext};
pub use error::{ModelError, Result};
pub use ident::SplitIdentifier;
