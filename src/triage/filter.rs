use recodarr_common::MediaAsset;

/// Codec identifiers that already use the target encoding
pub const TARGET_CODECS: [&str; 2] = ["x265", "h265"];

/// Check if an asset still needs transcoding
///
/// Requires a file on disk with a known codec outside [`TARGET_CODECS`].
pub fn is_candidate(asset: &MediaAsset) -> bool {
    match asset.video_codec() {
        Some(codec) => !TARGET_CODECS.contains(&codec),
        None => false,
    }
}
