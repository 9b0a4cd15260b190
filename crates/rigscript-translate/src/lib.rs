//! Rule-based translation of natural-language test procedures into canonical
//! rig command notation.
//!
//! The pipeline makes two passes over a sheet: [`resolve_contexts`] assigns a
//! unit context to every row, then [`TranslationEngine::run`] dispatches a
//! fixed translator sequence per row and applies the emissions under
//! last-write-wins.

pub mod context;
pub mod engine;
pub mod procedures;
pub mod report;
pub mod rules;
pub mod wordnum;

pub use context::resolve_contexts;
pub use engine::{Emit, RowCtx, RowListener, TranslationEngine, Translator};
pub use procedures::ProcedureIndex;
pub use report::{AlertRecord, RunReport};
