// Data processing pipeline: ingestion, processing, and storage

pub mod ingestion;
pub mod processing;
pub mod storage;

use chrono::Local;
use metrics::counter;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::constants::LAST_UPDATED_FORMAT;
use crate::error::{ExportError, Result};
use crate::types::{CompleteDocument, MemberRecord, MemberStatus, RawTable, SearchEntry};
use ingestion::LoadOptions;
use processing::{detect_structure, RecordAssembler, Statistics, TableLayout};
use storage::WrittenFiles;

/// Members read from one sheet, before anything is written.
#[derive(Debug, Clone)]
pub struct ProcessedTable {
    pub layout: TableLayout,
    pub members: Vec<MemberRecord>,
    /// Rows inside the member sections that produced no record.
    pub skipped_rows: usize,
}

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub source_file: String,
    pub layout: TableLayout,
    pub statistics: Statistics,
    pub skipped_rows: usize,
    pub document: CompleteDocument,
    pub search: Vec<SearchEntry>,
    /// `None` on a dry run.
    pub written: Option<WrittenFiles>,
}

pub struct Pipeline {
    config: Config,
    assembler: RecordAssembler,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let assembler = RecordAssembler::from_config(&config);
        Self { config, assembler }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify every row of both member sections. Fails only when the sheet
    /// has no data start row.
    pub fn process_table(&self, table: &RawTable) -> Result<ProcessedTable> {
        let layout = detect_structure(table)?;

        let mut sections = vec![(MemberStatus::Active, layout.active_range())];
        if let Some(range) = layout.inactive_range() {
            sections.push((MemberStatus::Inactive, range));
        }

        let mut members = Vec::new();
        let mut skipped_rows = 0;
        for (status, range) in sections {
            let before = members.len();
            for row in &table.rows[range.clone()] {
                counter!("parus_rows_scanned_total").increment(1);
                match self.assembler.assemble(row, status) {
                    Some(record) => members.push(record),
                    None => skipped_rows += 1,
                }
            }
            let added = members.len() - before;
            counter!("parus_members_total", "status" => status.as_str()).increment(added as u64);
            debug!(
                "Section {} rows {}..{} produced {} members",
                status, range.start, range.end, added
            );
        }
        counter!("parus_rows_skipped_total").increment(skipped_rows as u64);

        Ok(ProcessedTable {
            layout,
            members,
            skipped_rows,
        })
    }

    /// Build both output documents from the member list.
    pub fn build_documents(
        members: Vec<MemberRecord>,
        statistics: &Statistics,
        source_file: &str,
        last_updated: String,
    ) -> (CompleteDocument, Vec<SearchEntry>) {
        let search = members.iter().map(SearchEntry::from).collect();
        let document = CompleteDocument {
            metadata: statistics.to_metadata(last_updated, source_file.to_string()),
            members,
        };
        (document, search)
    }

    /// Load `input`, classify its rows, and write both JSON files unless
    /// `dry_run` is set. Nothing is written when loading or structure
    /// detection fails.
    #[instrument(skip(self, input), fields(input = %input.display()))]
    pub fn run(&self, input: &Path, dry_run: bool) -> Result<PipelineResult> {
        let started = Instant::now();
        info!("🚀 Processing {}", input.display());

        let options = LoadOptions {
            sheet: self.config.sheet.clone(),
            csv_delimiter: self.csv_delimiter()?,
        };
        let table = ingestion::load_table(input, &options)?;

        let processed = self.process_table(&table)?;
        let statistics = Statistics::from_members(&processed.members);
        info!(
            "✅ Processed {} members ({} active, {} inactive, {} rows skipped)",
            statistics.total, statistics.active, statistics.inactive, processed.skipped_rows
        );

        let last_updated = Local::now().format(LAST_UPDATED_FORMAT).to_string();
        let (document, search) =
            Self::build_documents(processed.members, &statistics, &table.source, last_updated);

        let written = if dry_run {
            info!("Dry run; no files written");
            None
        } else {
            Some(storage::write_outputs(
                &self.config.complete_path(),
                &self.config.search_path(),
                &document,
                &search,
            )?)
        };

        info!("Pipeline finished in {:?}", started.elapsed());
        Ok(PipelineResult {
            source_file: table.source,
            layout: processed.layout,
            statistics,
            skipped_rows: processed.skipped_rows,
            document,
            search,
            written,
        })
    }

    fn csv_delimiter(&self) -> Result<u8> {
        u8::try_from(self.config.csv_delimiter).map_err(|_| {
            ExportError::Config(format!(
                "csv_delimiter '{}' is not a single-byte character",
                self.config.csv_delimiter
            ))
        })
    }
}
