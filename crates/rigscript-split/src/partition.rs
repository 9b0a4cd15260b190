//! Groups consecutive rows by identifier and writes one workbook per group.

use std::fs;
use std::path::Path;

use rigscript_ingest::{CellStyle, SaveOptions, Sheet};
use rigscript_model::{EngineConfig, SplitIdentifier};
use tracing::{debug, info};

use crate::error::{Result, SplitError};

/// Header cell written above the commands of every module file.
const HEADER: &str = "Actions";
/// Marks the identifier segment inside a module file name.
const FILE_MARK: char = '@';
/// Wide enough for multi-command cells produced by ramp expansion.
const COMMAND_COLUMN_WIDTH: f64 = 150.0;

/// One workbook written by the partitioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFile {
    pub file_name: String,
    pub module: String,
    pub rows: usize,
}

/// What a partition run produced.
#[derive(Debug, Clone, Default)]
pub struct SplitReport {
    /// Rows read from the source sheet.
    pub rows: usize,
    /// Files in write order.
    pub files: Vec<ModuleFile>,
}

impl SplitReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

struct Group {
    module: String,
    file_module: String,
    id: String,
    commands: Vec<Option<String>>,
}

impl Group {
    fn new(ident: &SplitIdentifier<'_>, command: Option<String>) -> Self {
        Self {
            module: ident.module.to_owned(),
            file_module: ident.module_filename(),
            id: ident.id.to_owned(),
            commands: vec![command],
        }
    }

    /// Group boundaries compare the trailing id segment only.
    fn matches(&self, ident: &SplitIdentifier<'_>) -> bool {
        self.id == ident.id
    }

    /// The file takes its module path from the last row of the group.
    fn push(&mut self, ident: &SplitIdentifier<'_>, command: Option<String>) {
        self.module = ident.module.to_owned();
        self.file_module = ident.module_filename();
        self.commands.push(command);
    }

    fn file_name(&self) -> String {
        format!("{}{FILE_MARK}{}{FILE_MARK}.xlsx", self.file_module, self.id)
    }
}

fn module_file_options() -> SaveOptions {
    SaveOptions {
        column_styles: vec![(
            0,
            CellStyle {
                font_size: Some(10.0),
                align_left: true,
                ..CellStyle::default()
            },
        )],
        column_widths: vec![(0, COMMAND_COLUMN_WIDTH)],
    }
}

fn write_group(group: &Group, out_dir: &Path) -> Result<ModuleFile> {
    let mut rows: Vec<Vec<Option<String>>> = Vec::with_capacity(group.commands.len() + 1);
    rows.push(vec![Some(HEADER.to_owned())]);
    rows.extend(group.commands.iter().map(|command| vec![command.clone()]));

    let file_name = group.file_name();
    let path = out_dir.join(&file_name);
    Sheet::from_rows(rows).save(&path, &module_file_options())?;
    debug!(file = %path.display(), rows = group.commands.len(), "module file written");
    Ok(ModuleFile {
        file_name,
        module: group.module.clone(),
        rows: group.commands.len(),
    })
}

/// Splits a translated sheet into one workbook per run of rows sharing a
/// trailing identifier segment, named `<module>@<id>@.xlsx` with path
/// slashes flattened to underscores.
///
/// Every row must carry a well-formed `<module>/<id>` identifier; the first
/// malformed cell aborts the whole run so a bad export cannot scatter
/// misnamed files.
pub fn split_sheet(sheet: &Sheet, config: &EngineConfig, out_dir: &Path) -> Result<SplitReport> {
    fs::create_dir_all(out_dir).map_err(|source| SplitError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let layout = config.layout;
    let mut report = SplitReport {
        rows: sheet.row_count(),
        ..SplitReport::default()
    };
    let mut group: Option<Group> = None;

    for index in 0..sheet.row_count() {
        let raw = sheet.get(index, layout.identifier).unwrap_or("");
        let ident = SplitIdentifier::parse(raw).map_err(|source| SplitError::Identifier {
            row: index + 1,
            source,
        })?;
        let command = sheet.get(index, layout.output).map(str::to_owned);
        match group.as_mut() {
            Some(current) if current.matches(&ident) => current.push(&ident, command),
            Some(current) => {
                let finished = std::mem::replace(current, Group::new(&ident, command));
                report.files.push(write_group(&finished, out_dir)?);
            }
            None => group = Some(Group::new(&ident, command)),
        }
    }
    if let Some(last) = group {
        report.files.push(write_group(&last, out_dir)?);
    }

    info!(
        rows = report.rows,
        files = report.file_count(),
        folder = %out_dir.display(),
        "sheet partitioned"
    );
    Ok(report)
}
