use futures::future;
use tokio::fs;

use crate::assets;
use crate::config::InputSource;
use crate::errors::{AppError, AppResult};

use super::client::ReleaseClient;

/// Run one upload batch: read the inputs, resolve the asset pattern, and
/// POST every matched file to the upload endpoint concurrently.
///
/// The first failure in resolution order becomes the run's error; the other
/// uploads are never cancelled and run to completion.
pub async fn run(inputs: &dyn InputSource) -> AppResult<()> {
    let upload_url = inputs.get("upload_url");
    let asset_path = inputs.get("asset_path");
    let token = inputs.get("token");

    let client = ReleaseClient::new(&token)?;
    let files = assets::resolve_pattern(&asset_path).await?;

    if files.is_empty() {
        return Err(AppError::NoFilesFound);
    }

    log::info!("Uploading {} files to {}", files.len(), upload_url);
    log::info!("Files: {}", files.join("\n"));

    let uploads = files
        .iter()
        .map(|file| upload_asset(&client, &upload_url, file));
    future::join_all(uploads)
        .await
        .into_iter()
        .collect::<AppResult<()>>()
}

async fn upload_asset(client: &ReleaseClient, upload_url: &str, file: &str) -> AppResult<()> {
    log::debug!("Uploading {} to {}", file, upload_url);

    let size = fs::metadata(file).await?.len();
    let stream = fs::File::open(file).await?;
    client.upload(upload_url, size, stream).await?;

    log::debug!("Uploaded {} to {}", file, upload_url);
    Ok(())
}
