//! Engine configuration.
//!
//! Column layout and notation are explicit immutable values handed to the
//! engine once, at construction; nothing here changes mid-run.

/// Column roles of a script sheet, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub identifier: usize,
    pub text: usize,
    pub context: usize,
    pub output: usize,
    pub alert: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            identifier: 0,
            text: 1,
            context: 2,
            output: 3,
            alert: 4,
        }
    }
}

/// Output notation of canonical commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notation {
    /// Token separator.
    pub separator: char,
    /// Marker introducing free-text comments; the trailing space is part of
    /// the marker.
    pub comment_marker: String,
}

impl Default for Notation {
    fn default() -> Self {
        Self {
            separator: ':',
            comment_marker: "### ".to_string(),
        }
    }
}

/// Immutable configuration consumed by the translation engine.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub layout: SheetLayout,
    pub notation: Notation,
}
