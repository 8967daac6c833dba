use super::DownloadItem;
use crate::helpers::ipfs::ipfs_to_https;
use crate::interfaces::fxhash::{GenToken, Iteration, IterationWindow};

use tracing::warn;

/// `NNNN-hash.png`, sortable by iteration number.
pub fn iteration_file_name(iteration: u32, hash: &str) -> String {
    format!("{:04}-{}.png", iteration, hash)
}

/// Lists the iterations to download, optionally restricted to `window`.
///
/// The window is matched against iteration numbers, not list positions.
pub fn iteration_items(
    token: &GenToken,
    window: Option<IterationWindow>,
    ipfs_gateway_uri: &str,
) -> Vec<DownloadItem> {
    token
        .entire_collection
        .iter()
        .filter_map(|iteration| match iteration.iteration {
            Some(number) => Some((number, iteration)),
            None => {
                warn!(
                    "Iteration {} has no iteration number, skipping",
                    iteration.name.as_deref().unwrap_or("without a name")
                );
                None
            }
        })
        .filter(|(number, _)| window.map_or(true, |w| w.contains(*number)))
        .filter_map(|(number, iteration)| iteration_item(number, iteration, ipfs_gateway_uri))
        .collect()
}

fn iteration_item(
    number: u32,
    iteration: &Iteration,
    ipfs_gateway_uri: &str,
) -> Option<DownloadItem> {
    let metadata = iteration.metadata.as_ref();
    let hash = metadata.and_then(|m| m.iteration_hash.as_deref());
    let display_uri = metadata.and_then(|m| m.display_uri.as_deref());

    match (hash, display_uri) {
        (Some(hash), Some(display_uri)) => Some(DownloadItem {
            file_name: iteration_file_name(number, hash),
            image_uri: ipfs_to_https(ipfs_gateway_uri, display_uri),
        }),
        _ => {
            warn!(
                "Iteration #{} has no hash or display URI, skipping",
                number
            );
            None
        }
    }
}
