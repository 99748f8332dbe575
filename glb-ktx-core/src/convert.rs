//! Texture compressor invocation
//!
//! The actual ETC1S encoding happens in an external program. This module only
//! knows how to build its command line, run it to completion and turn a bad
//! exit into an error.

use crate::error::{GlbKtxError, Result};
use crate::settings::CompressionSettings;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Default program used to launch the converter
pub const DEFAULT_PROGRAM: &str = "npx";

/// Default converter package run by [`DEFAULT_PROGRAM`]
pub const DEFAULT_TOOL: &str = "gltf-transform";

/// Something that can write a KTX2-compressed copy of a GLB file
pub trait TextureCompressor {
    /// Compress `input` into `output`, blocking until done
    fn compress(&self, input: &Path, output: &Path, settings: &CompressionSettings) -> Result<()>;
}

impl<T: TextureCompressor + ?Sized> TextureCompressor for &T {
    fn compress(&self, input: &Path, output: &Path, settings: &CompressionSettings) -> Result<()> {
        (**self).compress(input, output, settings)
    }
}

/// Runs `gltf-transform etc1s` as a subprocess
#[derive(Debug, Clone)]
pub struct GltfTransform {
    program: OsString,
    tool: OsString,
    working_dir: Option<PathBuf>,
}

impl Default for GltfTransform {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_TOOL)
    }
}

impl GltfTransform {
    pub fn new(program: impl Into<OsString>, tool: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            tool: tool.into(),
            working_dir: None,
        }
    }

    /// Run the converter from `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Arguments after the program name
    pub fn args(
        &self,
        input: &Path,
        output: &Path,
        settings: &CompressionSettings,
    ) -> Vec<OsString> {
        vec![
            self.tool.clone(),
            "etc1s".into(),
            input.into(),
            output.into(),
            "--quality".into(),
            settings.quality().to_string().into(),
            "--compression".into(),
            settings.compression().to_string().into(),
        ]
    }

    /// Printable form of the full command line
    pub fn command_line(
        &self,
        input: &Path,
        output: &Path,
        settings: &CompressionSettings,
    ) -> String {
        let mut line = quote_arg(&self.program);
        for arg in self.args(input, output, settings) {
            line.push(' ');
            line.push_str(&quote_arg(&arg));
        }
        line
    }

    fn command(&self, input: &Path, output: &Path, settings: &CompressionSettings) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(input, output, settings));
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl TextureCompressor for GltfTransform {
    fn compress(&self, input: &Path, output: &Path, settings: &CompressionSettings) -> Result<()> {
        let command_line = self.command_line(input, output, settings);
        debug!("Running {}", command_line);

        let result = self
            .command(input, output, settings)
            .output()
            .map_err(|e| GlbKtxError::tool_launch(command_line.clone(), e))?;

        if !result.stdout.is_empty() {
            debug!("{}", String::from_utf8_lossy(&result.stdout).trim_end());
        }

        if result.status.success() {
            Ok(())
        } else {
            Err(GlbKtxError::tool_failed(
                command_line,
                result.status.code(),
                String::from_utf8_lossy(&result.stderr),
            ))
        }
    }
}

fn quote_arg(arg: &OsString) -> String {
    let arg = arg.to_string_lossy();
    if arg.is_empty() || arg.contains(char::is_whitespace) {
        format!("\"{arg}\"")
    } else {
        arg.into_owned()
    }
}
