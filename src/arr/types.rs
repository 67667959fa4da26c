use recodarr_common::{EncodedFile, MediaAsset};
use serde::Deserialize;

/// Movie record as returned by `GET /api/v3/movie`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarrMovie {
    pub title: String,
    #[serde(default)]
    pub path: String,
    pub movie_file: Option<RadarrMovieFile>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarrMovieFile {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub size: u64,
    pub media_info: Option<RadarrMediaInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarrMediaInfo {
    pub video_codec: Option<String>,
}

impl From<RadarrMovie> for MediaAsset {
    fn from(movie: RadarrMovie) -> Self {
        let encoded_file = movie.movie_file.map(|file| EncodedFile {
            file_path: file.path,
            size_bytes: file.size,
            video_codec: file.media_info.and_then(|info| info.video_codec),
        });

        MediaAsset {
            title: movie.title,
            library_path: movie.path,
            encoded_file,
        }
    }
}
