//! Catalog view of media assets.
//!
//! These types are the read-only shape every other component works with.
//! Catalog clients convert their own wire formats into [`MediaAsset`].

/// A single item in the media library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    /// Display name.
    pub title: String,
    /// Canonical folder known to the catalog service.
    pub library_path: String,
    /// The file currently on disk, if one has been imported.
    pub encoded_file: Option<EncodedFile>,
}

/// The materialized file backing a [`MediaAsset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFile {
    /// Path to the file on disk; this is what gets submitted for transcoding.
    pub file_path: String,
    pub size_bytes: u64,
    /// Normalized codec identifier, e.g. `"x265"` or `"h264"`.
    pub video_codec: Option<String>,
}

impl MediaAsset {
    /// Size used for ranking. Assets without a file count as zero bytes.
    pub fn size_bytes(&self) -> u64 {
        self.encoded_file.as_ref().map_or(0, |f| f.size_bytes)
    }

    pub fn video_codec(&self) -> Option<&str> {
        self.encoded_file
            .as_ref()
            .and_then(|f| f.video_codec.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(file: Option<EncodedFile>) -> MediaAsset {
        MediaAsset {
            title: "Alien".to_string(),
            library_path: "/movies/Alien (1979)".to_string(),
            encoded_file: file,
        }
    }

    #[test]
    fn test_missing_file_has_zero_size() {
        let a = asset(None);
        assert_eq!(a.size_bytes(), 0);
        assert_eq!(a.video_codec(), None);
    }

    #[test]
    fn test_accessors_read_through_file() {
        let a = asset(Some(EncodedFile {
            file_path: "/movies/Alien (1979)/Alien.mkv".to_string(),
            size_bytes: 42,
            video_codec: Some("h264".to_string()),
        }));
        assert_eq!(a.size_bytes(), 42);
        assert_eq!(a.video_codec(), Some("h264"));
    }

    #[test]
    fn test_file_without_codec() {
        let a = asset(Some(EncodedFile {
            file_path: "/movies/Alien (1979)/Alien.mkv".to_string(),
            size_bytes: 42,
            video_codec: None,
        }));
        assert_eq!(a.video_codec(), None);
        assert_eq!(a.size_bytes(), 42);
    }
}
