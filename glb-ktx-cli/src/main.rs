//! GLB to KTX2 Converter CLI
//!
//! Compresses the textures of every `.glb` model in an assets directory.

use anyhow::{Context, Result};
use clap::Parser;
use glb_ktx_core::convert::{DEFAULT_PROGRAM, DEFAULT_TOOL};
use glb_ktx_core::settings::{DEFAULT_COMPRESSION, DEFAULT_MAX_TEXTURE_SIZE, DEFAULT_QUALITY};
use glb_ktx_core::{BatchConverter, CompressionSettings, GltfTransform, report};
use serde_json::json;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glb-ktx")]
#[command(about = "Convert GLB models to KTX2 (ETC1S) compressed variants")]
#[command(version)]
struct Cli {
    /// Directory containing the .glb files
    #[arg(short, long, default_value = "assets")]
    assets_dir: PathBuf,

    /// ETC1S quality, 1-255 (lower = smaller files)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY)]
    quality: u8,

    /// Compression level, 0-5 (higher = better compression, slower)
    #[arg(short, long, default_value_t = DEFAULT_COMPRESSION)]
    compression: u8,

    /// Maximum texture dimension in pixels (displayed only, not passed to the converter)
    #[arg(long, default_value_t = DEFAULT_MAX_TEXTURE_SIZE)]
    max_texture_size: u32,

    /// Program used to launch the converter
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    program: String,

    /// Converter package run by the program
    #[arg(long, default_value = DEFAULT_TOOL)]
    tool: String,

    /// List the files that would be converted and exit
    #[arg(long)]
    dry_run: bool,

    /// Print the summary as JSON after the report
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Result<CompressionSettings> {
        CompressionSettings::new(self.quality, self.compression, self.max_texture_size)
            .context("Invalid compression settings")
    }

    fn compressor(&self) -> GltfTransform {
        let compressor = GltfTransform::new(&self.program, &self.tool);
        match converter_working_dir(&self.assets_dir) {
            Some(dir) => compressor.with_working_dir(dir),
            None => compressor,
        }
    }
}

/// The converter runs next to the assets folder so project-local tools resolve
fn converter_working_dir(assets_dir: &Path) -> Option<PathBuf> {
    assets_dir
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    run(&cli, &mut stdout.lock(), &mut stderr.lock())
}

fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> Result<()> {
    let converter = BatchConverter::new(cli.settings()?, cli.compressor());

    if cli.dry_run {
        let candidates = converter
            .plan(&cli.assets_dir)
            .with_context(|| format!("Failed to scan {}", cli.assets_dir.display()))?;
        report::write_plan(out, &candidates)?;
        return Ok(());
    }

    let summary = converter
        .run(&cli.assets_dir, out, err)
        .with_context(|| format!("Conversion of {} aborted", cli.assets_dir.display()))?;

    if cli.json {
        let report = json!({
            "settings": converter.settings(),
            "summary": summary,
        });
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    }

    Ok(())
}
