use recodarr_common::MediaAsset;
use std::cmp::Reverse;

/// Order assets by on-disk size, largest first
///
/// Returns a new sequence; assets without a file count as zero bytes. Equal
/// sizes keep no particular order.
pub fn rank(assets: impl IntoIterator<Item = MediaAsset>) -> Vec<MediaAsset> {
    let mut ranked: Vec<MediaAsset> = assets.into_iter().collect();
    ranked.sort_unstable_by_key(|asset| Reverse(asset.size_bytes()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use recodarr_common::EncodedFile;

    fn asset(title: &str, size: Option<u64>) -> MediaAsset {
        MediaAsset {
            title: title.to_string(),
            library_path: format!("/movies/{}", title),
            encoded_file: size.map(|size_bytes| EncodedFile {
                file_path: format!("/movies/{}/{}.mkv", title, title),
                size_bytes,
                video_codec: Some("h264".to_string()),
            }),
        }
    }

    fn titles(assets: &[MediaAsset]) -> Vec<&str> {
        assets.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_largest_first() {
        let ranked = rank(vec![
            asset("small", Some(10)),
            asset("large", Some(1000)),
            asset("medium", Some(500)),
        ]);
        assert_eq!(titles(&ranked), vec!["large", "medium", "small"]);
    }

    #[test]
    fn test_missing_file_ranks_last() {
        let ranked = rank(vec![
            asset("none", None),
            asset("tiny", Some(1)),
            asset("big", Some(900)),
        ]);
        assert_eq!(titles(&ranked), vec!["big", "tiny", "none"]);
    }

    #[test]
    fn test_non_increasing_with_ties() {
        let ranked = rank(vec![
            asset("a", Some(5)),
            asset("b", Some(7)),
            asset("c", Some(5)),
            asset("d", None),
            asset("e", Some(7)),
        ]);
        let sizes: Vec<u64> = ranked.iter().map(MediaAsset::size_bytes).collect();
        assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn test_input_is_not_modified() {
        let catalog = vec![asset("small", Some(1)), asset("large", Some(2))];
        let ranked = rank(catalog.iter().cloned());
        assert_eq!(titles(&catalog), vec!["small", "large"]);
        assert_eq!(titles(&ranked), vec!["large", "small"]);
    }

    #[test]
    fn test_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
