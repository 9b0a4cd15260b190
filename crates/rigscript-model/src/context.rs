use std::fmt;

use crate::sentinel::DECLARATION_MARK;

/// Which sub-unit the instructions of a row apply to.
///
/// Carried between rows by the context resolver and rendered into the
/// context column of the translated sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitContext {
    Unit1,
    Unit2,
    /// Both units at once.
    Units,
}

impl UnitContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unit1 => "UNIT1",
            Self::Unit2 => "UNIT2",
            Self::Units => "UNITS",
        }
    }
}

impl fmt::Display for UnitContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value stored in a row's context slot after the resolver pass.
///
/// Declaration rows carry the `*` marker instead of a unit label; they state
/// context for following rows and are never translated themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextCell {
    Declaration,
    Unit(UnitContext),
}

impl ContextCell {
    /// Parses a context cell back from its sheet representation.
    pub fn parse(cell: &str) -> Option<Self> {
        match cell.trim() {
            DECLARATION_MARK => Some(Self::Declaration),
            "UNIT1" => Some(Self::Unit(UnitContext::Unit1)),
            "UNIT2" => Some(Self::Unit(UnitContext::Unit2)),
            "UNITS" => Some(Self::Unit(UnitContext::Units)),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Declaration => DECLARATION_MARK,
            Self::Unit(unit) => unit.as_str(),
        }
    }

    /// The unit label, if this cell holds one.
    pub fn unit(self) -> Option<UnitContext> {
        match self {
            Self::Unit(unit) => Some(unit),
            Self::Declaration => None,
        }
    }
}

impl fmt::Display for ContextCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
