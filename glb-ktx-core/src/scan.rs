//! Asset directory scanning
//!
//! Lists the assets directory, picks the `.glb` files that still need a
//! compressed variant and works out where that variant goes.

use crate::error::{GlbKtxError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Extension of convertible model files
pub const GLB_EXTENSION: &str = ".glb";

/// Marker that identifies already-compressed outputs
pub const KTX_SUFFIX: &str = "-ktx";

/// A model file selected for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub file_name: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Candidate {
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            input_path: dir.join(file_name),
            output_path: dir.join(output_name(file_name)),
        }
    }
}

/// Whether a directory entry name should be converted
pub fn is_candidate(file_name: &str) -> bool {
    file_name.ends_with(GLB_EXTENSION) && !file_name.contains(KTX_SUFFIX)
}

/// Name of the compressed variant, `<stem>-ktx<ext>`
pub fn output_name(file_name: &str) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    match path.extension() {
        Some(ext) => format!("{stem}{KTX_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{KTX_SUFFIX}"),
    }
}

/// List the names of the regular files in `dir`, sorted.
///
/// Fails if the directory itself cannot be read. Directories and names that
/// are not valid UTF-8 are skipped.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let read_dir = fs::read_dir(dir).map_err(|e| GlbKtxError::read_dir(dir, e))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| GlbKtxError::read_dir(dir, e))?;
        // Follows symlinks, so a link to a model counts as a model
        if entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => debug!("Skipping non UTF-8 entry {:?}", name),
        }
    }

    names.sort();
    Ok(names)
}

/// Find every convertible model in `dir`
pub fn find_candidates(dir: &Path) -> Result<Vec<Candidate>> {
    let candidates = list_entries(dir)?
        .iter()
        .filter(|name| is_candidate(name))
        .map(|name| Candidate::new(dir, name))
        .collect::<Vec<_>>();

    debug!(
        "Found {} candidate(s) in {}",
        candidates.len(),
        dir.display()
    );
    Ok(candidates)
}

/// Size of a file in bytes, or 0 if it cannot be statted
pub fn file_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            trace!("Could not stat {}: {}", path.display(), e);
            0
        }
    }
}
