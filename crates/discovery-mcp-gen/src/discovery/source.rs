use std::path::Path;

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde::Deserialize;

use crate::discovery::Document;

const DISCOVERY_BASE_URL: &str = "https://www.googleapis.com/discovery/v1/apis";

/// A Discovery Document mapped from disk, parsed on demand.
pub struct DocumentSource {
  file: AsyncMmapFile,
}

impl DocumentSource {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .map_err(|error| anyhow::anyhow!("failed to read {}: {error}", path.display()))?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<Document> {
    Ok(Document::from_slice(self.file.as_slice())?)
  }
}

/// One entry of the public API directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiDirectoryEntry {
  pub name: String,
  pub version: String,
  pub title: String,
  pub description: String,
  pub discovery_rest_url: String,
  pub documentation_link: String,
  pub preferred: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiDirectory {
  items: Vec<ApiDirectoryEntry>,
}

pub fn document_url(api: &str, version: &str) -> String {
  format!("{DISCOVERY_BASE_URL}/{api}/{version}/rest")
}

/// Downloads the Discovery Document for `api` at `version` from googleapis.com.
pub async fn fetch_document(api: &str, version: &str) -> anyhow::Result<Document> {
  fetch_document_url(&document_url(api, version)).await
}

pub async fn fetch_document_url(url: &str) -> anyhow::Result<Document> {
  let body = fetch_bytes(url).await?;
  Ok(Document::from_slice(&body)?)
}

/// Lists every API published in the discovery directory.
pub async fn list_apis() -> anyhow::Result<Vec<ApiDirectoryEntry>> {
  let body = fetch_bytes(DISCOVERY_BASE_URL).await?;
  let directory: ApiDirectory =
    serde_json::from_slice(&body).map_err(|error| anyhow::anyhow!("failed to parse API list: {error}"))?;
  Ok(directory.items)
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
  let response = reqwest::get(url)
    .await
    .map_err(|error| anyhow::anyhow!("failed to fetch {url}: {error}"))?;

  let status = response.status();
  if !status.is_success() {
    let body = response.text().await.unwrap_or_default();
    anyhow::bail!("failed to fetch {url}: {status}\n{body}");
  }

  Ok(response.bytes().await?.to_vec())
}
