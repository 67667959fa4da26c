//! Recodarr-Common: Shared media model and formatting helpers.
//!
//! This crate provides the pure, I/O-free pieces used across recodarr:
//!
//! - **Media Model**: [`MediaAsset`] and [`EncodedFile`], the catalog view of a
//!   library item and the file currently on disk for it
//! - **Size Formatting**: [`format_size`] for human-readable byte counts
//!
//! # Examples
//!
//! ```
//! use recodarr_common::{format_size, EncodedFile, MediaAsset};
//!
//! let asset = MediaAsset {
//!     title: "Heat".to_string(),
//!     library_path: "/movies/Heat (1995)".to_string(),
//!     encoded_file: Some(EncodedFile {
//!         file_path: "/movies/Heat (1995)/Heat.mkv".to_string(),
//!         size_bytes: 1536,
//!         video_codec: Some("h264".to_string()),
//!     }),
//! };
//!
//! assert_eq!(asset.size_bytes(), 1536);
//! assert_eq!(format_size(asset.size_bytes()), "1.50 KB");
//! assert_eq!(format_size(0), "N/A");
//! ```

pub mod media;
pub mod size;

pub use media::*;
pub use size::format_size;
