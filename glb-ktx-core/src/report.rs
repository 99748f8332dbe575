//! Console report
//!
//! Everything the user sees on the console. Progress and totals are meant for
//! stdout, per-file failures for stderr. The writers take any [`Write`] so the
//! batch driver can be pointed at buffers in tests.

use crate::format::{format_bytes, format_percent};
use crate::scan::Candidate;
use crate::settings::CompressionSettings;
use crate::summary::{BatchSummary, FileOutcome};
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title and the active settings
pub fn write_banner<W: Write>(out: &mut W, settings: &CompressionSettings) -> io::Result<()> {
    writeln!(out, "GLB to KTX2 Converter")?;
    writeln!(out, "=====================\n")?;
    writeln!(out, "Settings:")?;
    writeln!(
        out,
        "  - Quality: {}/255 (lower = smaller files)",
        settings.quality()
    )?;
    writeln!(
        out,
        "  - Compression: {}/5 (higher = better compression)",
        settings.compression()
    )?;
    writeln!(
        out,
        "  - Max texture size: {}px\n",
        settings.max_texture_size()
    )
}

pub fn write_no_candidates<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No GLB files found to convert.")
}

pub fn write_found<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Found {count} GLB file(s) to convert")?;
    writeln!(out, "{}", rule())
}

/// Header printed before the converter runs
pub fn write_file_start<W: Write>(
    out: &mut W,
    candidate: &Candidate,
    original_bytes: u64,
) -> io::Result<()> {
    writeln!(out, "\nConverting: {}", candidate.input_path.display())?;
    writeln!(out, "  Original size: {}", format_bytes(original_bytes))
}

/// Result lines printed after the converter returns.
///
/// Successes go to `out`, failures to `err`.
pub fn write_file_result<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    outcome: &FileOutcome,
) -> io::Result<()> {
    match (&outcome.error, outcome.compressed_bytes) {
        (None, Some(compressed)) => {
            writeln!(out, "  ✓ Compressed size: {}", format_bytes(compressed))?;
            writeln!(
                out,
                "  ✓ Savings: {}% smaller",
                format_percent(outcome.savings_percent())
            )
        }
        (Some(error), _) => {
            // The file header on `out` must appear before the error
            out.flush()?;
            writeln!(err, "  ✗ Error: {error}")
        }
        (None, None) => Ok(()),
    }
}

/// Closing block with the batch totals
pub fn write_summary<W: Write>(out: &mut W, summary: &BatchSummary) -> io::Result<()> {
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "Conversion Summary")?;
    writeln!(out, "{}", rule())?;
    writeln!(
        out,
        "Successfully converted: {}/{} files",
        summary.succeeded(),
        summary.total()
    )?;

    if summary.succeeded() > 0 {
        let original = summary.converted_original_bytes();
        let compressed = summary.converted_compressed_bytes();
        let saved = summary.saved_bytes();
        let saved_text = if saved < 0 {
            format!("-{}", format_bytes(saved.unsigned_abs()))
        } else {
            format_bytes(saved as u64)
        };

        writeln!(out, "Total original size: {}", format_bytes(original))?;
        writeln!(out, "Total compressed size: {}", format_bytes(compressed))?;
        writeln!(
            out,
            "Total savings: {}% ({} saved)",
            format_percent(summary.total_savings_percent()),
            saved_text
        )?;
    }

    writeln!(out, "\nConversion complete!")
}

/// Candidate list printed instead of converting
pub fn write_plan<W: Write>(out: &mut W, candidates: &[Candidate]) -> io::Result<()> {
    if candidates.is_empty() {
        return write_no_candidates(out);
    }

    writeln!(out, "Would convert {} GLB file(s):", candidates.len())?;
    for candidate in candidates {
        writeln!(
            out,
            "  {} -> {}",
            candidate.input_path.display(),
            candidate.output_path.display()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_banner() {
        let text = render(|out| write_banner(out, &CompressionSettings::default()));
        assert!(text.starts_with("GLB to KTX2 Converter\n"));
        assert!(text.contains("  - Quality: 128/255 (lower = smaller files)\n"));
        assert!(text.contains("  - Compression: 5/5 (higher = better compression)\n"));
        assert!(text.contains("  - Max texture size: 4096px\n"));
    }

    #[test]
    fn test_file_result_lines() {
        let candidate = Candidate::new(Path::new("assets"), "a.glb");
        let ok = FileOutcome::converted(candidate.clone(), 1000, 250);
        let mut err = Vec::new();
        let text = render(|out| write_file_result(out, &mut err, &ok));
        assert_eq!(
            text,
            "  ✓ Compressed size: 250 Bytes\n  ✓ Savings: 75.0% smaller\n"
        );
        assert!(err.is_empty());

        let failed = FileOutcome::failed(candidate, 1000, "Command failed: npx");
        let text = render(|out| write_file_result(out, &mut err, &failed));
        assert!(text.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "  ✗ Error: Command failed: npx\n"
        );
    }

    #[test]
    fn test_summary_without_successes_skips_totals() {
        let mut summary = BatchSummary::default();
        summary.push(FileOutcome::failed(
            Candidate::new(Path::new("assets"), "a.glb"),
            10,
            "x",
        ));
        let text = render(|out| write_summary(out, &summary));
        assert!(text.contains("Successfully converted: 0/1 files\n"));
        assert!(!text.contains("Total savings"));
        assert!(text.ends_with("\nConversion complete!\n"));
    }

    #[test]
    fn test_summary_reports_growth() {
        let mut summary = BatchSummary::default();
        summary.push(FileOutcome::converted(
            Candidate::new(Path::new("assets"), "a.glb"),
            1024,
            2048,
        ));
        let text = render(|out| write_summary(out, &summary));
        assert!(text.contains("Total savings: -100.0% (-1 KB saved)\n"));
    }
}
