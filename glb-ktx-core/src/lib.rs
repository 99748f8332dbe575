//! GLB to KTX2 batch converter
//!
//! Scans an assets directory for `.glb` models, runs an external texture
//! compressor on each one to produce a `-ktx` sibling and reports the size
//! savings. The compression itself is delegated to `gltf-transform etc1s`;
//! this crate handles discovery, invocation and bookkeeping.
//!
//! # Example
//!
//! ```rust,no_run
//! use glb_ktx_core::{BatchConverter, CompressionSettings, GltfTransform};
//! use std::path::Path;
//!
//! let converter = BatchConverter::new(CompressionSettings::default(), GltfTransform::default());
//! let summary = converter.run(
//!     Path::new("assets"),
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! )?;
//! println!("{}/{} converted", summary.succeeded(), summary.total());
//!
//! # Ok::<(), glb_ktx_core::GlbKtxError>(())
//! ```

pub mod batch;
pub mod convert;
pub mod error;
pub mod format;
pub mod report;
pub mod scan;
pub mod settings;
pub mod summary;

// Re-export main types
pub use batch::BatchConverter;
pub use convert::{GltfTransform, TextureCompressor};
pub use error::{GlbKtxError, Result};
pub use format::{format_bytes, savings_percent};
pub use scan::{Candidate, file_size, find_candidates, is_candidate};
pub use settings::CompressionSettings;
pub use summary::{BatchSummary, FileOutcome};
