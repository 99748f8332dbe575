//! Sequential batch conversion of an assets directory

use crate::convert::TextureCompressor;
use crate::error::Result;
use crate::report;
use crate::scan::{self, Candidate};
use crate::settings::CompressionSettings;
use crate::summary::{BatchSummary, FileOutcome};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Converts every candidate in a directory, one after another
pub struct BatchConverter<C> {
    settings: CompressionSettings,
    compressor: C,
}

impl<C: TextureCompressor> BatchConverter<C> {
    pub fn new(settings: CompressionSettings, compressor: C) -> Self {
        Self {
            settings,
            compressor,
        }
    }

    pub fn settings(&self) -> &CompressionSettings {
        &self.settings
    }

    /// Candidates that a run would convert
    pub fn plan(&self, assets_dir: &Path) -> Result<Vec<Candidate>> {
        scan::find_candidates(assets_dir)
    }

    /// Convert every candidate in `assets_dir`, writing the report to `out`
    /// and per-file failures to `err`.
    ///
    /// Any error from the compressor is recorded against that file and the
    /// batch moves on.
    /// A missing directory or a failing `out` aborts the run.
    pub fn run<W: Write, E: Write>(
        &self,
        assets_dir: &Path,
        out: &mut W,
        err: &mut E,
    ) -> Result<BatchSummary> {
        report::write_banner(out, &self.settings)?;
        debug!(
            "Max texture size {}px is informational and not passed to the converter",
            self.settings.max_texture_size()
        );

        let candidates = self.plan(assets_dir)?;
        let mut summary = BatchSummary::default();

        if candidates.is_empty() {
            report::write_no_candidates(out)?;
            return Ok(summary);
        }

        report::write_found(out, candidates.len())?;

        for candidate in candidates {
            let outcome = self.convert_one(candidate, out, err)?;
            summary.push(outcome);
        }

        report::write_summary(out, &summary)?;
        info!(
            "Converted {}/{} file(s) in {}",
            summary.succeeded(),
            summary.total(),
            assets_dir.display()
        );

        Ok(summary)
    }

    fn convert_one<W: Write, E: Write>(
        &self,
        candidate: Candidate,
        out: &mut W,
        err: &mut E,
    ) -> Result<FileOutcome> {
        let original_bytes = scan::file_size(&candidate.input_path);
        report::write_file_start(out, &candidate, original_bytes)?;

        let outcome = match self.compressor.compress(
            &candidate.input_path,
            &candidate.output_path,
            &self.settings,
        ) {
            Ok(()) => {
                let compressed_bytes = scan::file_size(&candidate.output_path);
                info!(
                    "{}: {} -> {} bytes",
                    candidate.file_name, original_bytes, compressed_bytes
                );
                FileOutcome::converted(candidate, original_bytes, compressed_bytes)
            }
            Err(e) => {
                warn!("{}: {}", candidate.file_name, e);
                FileOutcome::failed(candidate, original_bytes, e.to_string())
            }
        };

        report::write_file_result(out, err, &outcome)?;
        Ok(outcome)
    }
}
