//! Sentinel strings shared between the translator and the output files.
//!
//! These are stable on purpose: operators locate low-confidence rows by
//! searching the translated sheet for them, and the downstream import keys
//! off the declaration marker.

/// Context-slot marker for declaration rows.
pub const DECLARATION_MARK: &str = "*";

/// Identifier prefix that marks a non-conforming export.
pub const ID_EXPORT_PREFIX: &str = "ID : ";

/// Channel token when no `RTn` designator was found.
pub const NO_CHANNEL: &str = "No CH";

/// Address token when no `SAn` designator was found.
pub const NO_ADDRESS: &str = "No ADD";

/// Channel description when an enable/disable form names none.
pub const NO_1553_CHANNEL: &str = "No 1553 Channel";

/// Procedure lookup: the id row exists but its name cell is empty.
pub const PROCEDURE_NAME_NOT_FOUND: &str = "ALERT! PROCEDURE NAME NOT FOUND";

/// Procedure lookup: no row contains the id.
pub const PROCEDURE_NO_MATCH: &str = "ALERT! NO MATCH FOUND IN PROCEDURE FILE";

// Alert annotations written into the error slot.

/// Unconditional manual-review flag (ARINC values vary too much).
pub const ALERT_MANUAL_REVIEW: &str = "ALERT!";

/// Inspection assignments need their value range verified by hand.
pub const ALERT_CHECK_VALUE_RANGE: &str = "ALERT! - Check Value Range";

/// 1553 set form translated without a channel designator.
pub const ALERT_NO_1553_CHANNEL: &str = "No 1553 CH";

/// 1553 set form translated from an unrecognized component combination.
pub const ALERT_CHECK_ROW: &str = "ALERT!! - PLS CHECK";

/// Disable form without a channel description.
pub const ALERT_NO_DISABLE_CHANNEL: &str = "NO DISABLE CH";

/// Enable form without a channel description.
pub const ALERT_NO_ENABLE_CHANNEL: &str = "NO ENABLE CH";

/// A key or procedure reference matched on a row with no resolved context.
pub const ALERT_UNIT_NOT_DETERMINED: &str = "ALERT! UNIT NOT DETERMINED";
