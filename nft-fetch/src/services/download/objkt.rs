use super::DownloadItem;
use crate::helpers::ipfs::ipfs_to_https;
use crate::helpers::naming::sanitize_file_stem;
use crate::interfaces::objkt::Token;

use tracing::warn;

/// Lists the thumbnails of `tokens` as `name.jpeg` files.
///
/// Tokens sharing a name map to the same file, the last one wins.
pub fn token_items<'a>(
    tokens: impl IntoIterator<Item = &'a Token>,
    ipfs_gateway_uri: &str,
) -> Vec<DownloadItem> {
    tokens
        .into_iter()
        .filter_map(|token| {
            let Some(source) = token.thumbnail_source() else {
                warn!("Token {} has no image, skipping", token.token_id);
                return None;
            };
            let stem = token.name.as_deref().unwrap_or(&token.token_id);

            Some(DownloadItem {
                file_name: format!("{}.jpeg", sanitize_file_stem(stem)),
                image_uri: ipfs_to_https(ipfs_gateway_uri, source),
            })
        })
        .collect()
}
