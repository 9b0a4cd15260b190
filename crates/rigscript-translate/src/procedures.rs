//! Identifier-to-name lookups against the standalone procedures sheet.

use rigscript_ingest::Sheet;
use rigscript_model::sentinel::{PROCEDURE_NAME_NOT_FOUND, PROCEDURE_NO_MATCH};
use tracing::warn;

/// Cross-reference table scanned when a row refers to another procedure by id.
///
/// Lookup is a linear scan in table order and the first identifier cell that
/// contains the requested id as a substring wins. Lookups never fail: absent
/// entries resolve to alert-valued sentinels that land in the canonical
/// output, where reviewers can search for them.
#[derive(Debug, Clone, Default)]
pub struct ProcedureIndex {
    entries: Vec<(String, Option<String>)>,
}

impl ProcedureIndex {
    /// Builds the index from the first two columns of a procedures sheet:
    /// identifier in the first, procedure name in the second.
    pub fn from_sheet(sheet: &Sheet) -> Self {
        let mut entries = Vec::new();
        for index in 0..sheet.row_count() {
            let Some(id) = sheet.get(index, 0) else {
                continue;
            };
            let name = sheet.get(index, 1).map(str::to_owned);
            entries.push((id.to_owned(), name));
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves an id to its procedure name, or to an alert sentinel when the
    /// table has no usable entry.
    pub fn lookup(&self, id: &str) -> &str {
        for (entry_id, name) in &self.entries {
            if entry_id.contains(id) {
                return match name {
                    Some(name) => name,
                    None => {
                        warn!(id, entry = %entry_id, "procedure entry has no name");
                        PROCEDURE_NAME_NOT_FOUND
                    }
                };
            }
        }
        warn!(id, "no procedure entry contains id");
        PROCEDURE_NO_MATCH
    }
}

#[cfg(test)]
mod tests {
    use super::ProcedureIndex;
    use rigscript_ingest::Sheet;
    use rigscript_model::sentinel::{PROCEDURE_NAME_NOT_FOUND, PROCEDURE_NO_MATCH};

    fn index() -> ProcedureIndex {
        ProcedureIndex::from_sheet(&Sheet::from_rows(vec![
            vec![Some("SYS-4142-A".into()), Some("Cold start".into())],
            vec![Some("SYS-4142-B".into()), Some("Warm start".into())],
            vec![Some("SYS-5000".into()), None],
        ]))
    }

    #[test]
    fn substring_match_wins_in_table_order() {
        assert_eq!(index().lookup("4142"), "Cold start");
    }

    #[test]
    fn unnamed_entry_resolves_to_sentinel() {
        assert_eq!(index().lookup("5000"), PROCEDURE_NAME_NOT_FOUND);
    }

    #[test]
    fn unknown_id_resolves_to_sentinel() {
        assert_eq!(index().lookup("9999"), PROCEDURE_NO_MATCH);
    }

    #[test]
    fn rows_without_identifier_are_skipped() {
        let index = ProcedureIndex::from_sheet(&Sheet::from_rows(vec![
            vec![None, Some("orphan".into())],
            vec![Some("SYS-1".into()), Some("Lamp test".into())],
        ]));
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("SYS-1"), "Lamp test");
    }
}
