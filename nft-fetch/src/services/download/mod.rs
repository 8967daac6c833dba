pub mod fxhash;
pub mod http;
pub mod objkt;

use crate::interfaces::error::{DownloadError, StorageError};
use crate::services::storage::file::ensure_output_dir;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::path::Path;
use tracing::{error, info, warn};

/// Source of image bytes for a resolved URI.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageFetcher {
    async fn fetch(&self, uri: &str) -> Result<Vec<u8>, DownloadError>;
}

/// A single image to download: the target file name and its HTTP URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadItem {
    pub file_name: String,
    pub image_uri: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Downloads `items` one after the other into `out_dir`.
///
/// Items whose file already exists are skipped without fetching. A failed
/// item is logged and the loop moves on; only a failure to create `out_dir`
/// is returned.
pub async fn download_items<F>(
    fetcher: &F,
    items: &[DownloadItem],
    out_dir: &Path,
) -> Result<DownloadSummary, StorageError>
where
    F: ImageFetcher + Sync + ?Sized,
{
    ensure_output_dir(out_dir).await?;

    let mut summary = DownloadSummary::default();
    for item in items {
        let file_path = out_dir.join(&item.file_name);

        if tokio::fs::try_exists(&file_path).await.unwrap_or(false) {
            warn!("File already exists. Skipping {}", file_path.display());
            summary.skipped += 1;
            continue;
        }

        match download_item(fetcher, item, &file_path).await {
            Ok(()) => summary.written += 1,
            Err(e) => {
                error!("Error while downloading {}: {}", item.image_uri, e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "Download finished in {}: {} written, {} skipped, {} failed",
        out_dir.display(),
        summary.written,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

async fn download_item<F>(
    fetcher: &F,
    item: &DownloadItem,
    file_path: &Path,
) -> Result<(), DownloadError>
where
    F: ImageFetcher + Sync + ?Sized,
{
    info!("Fetching image from {}", item.image_uri);
    let bytes = fetcher.fetch(&item.image_uri).await?;

    info!("Writing file... {}", file_path.display());
    tokio::fs::write(file_path, bytes)
        .await
        .map_err(|source| DownloadError::Write {
            path: file_path.to_path_buf(),
            source,
        })
}
