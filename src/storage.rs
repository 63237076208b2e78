//! Object storage client for yacht and article images.

use crate::config::Config;
use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Uploads files to the backend's storage API and builds their public URLs.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

/// A file that was stored successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub path: String,
    pub public_url: String,
}

impl StorageClient {
    pub fn new(http: reqwest::Client, base_url: &str, service_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        Self::new(http, &config.supabase_url, &config.supabase_service_key)
    }

    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url, bucket, path)
    }

    /// Upload `bytes` to `bucket/path`. Existing objects are not overwritten.
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject> {
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path);
        let size = bytes.len();

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header("content-type", content_type)
            .header("cache-control", "max-age=3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .context("Failed to send request to storage API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Storage API error ({}): {}", status, body);
        }

        info!(bucket, path, size, "Uploaded file to storage");
        Ok(StoredObject {
            path: path.to_string(),
            public_url: self.public_url(bucket, path),
        })
    }
}

/// Lowercase extension of an uploaded file name, `jpg` when absent.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "jpg".to_string())
}

/// `<yacht_id>/<unix_millis>-<index>.<ext>`
pub fn yacht_image_path(yacht_id: Uuid, index: usize, file_name: &str) -> String {
    format!(
        "{}/{}-{}.{}",
        yacht_id,
        Utc::now().timestamp_millis(),
        index,
        file_extension(file_name)
    )
}

/// `article_<unix_millis>.<ext>`
pub fn article_image_path(file_name: &str) -> String {
    format!(
        "article_{}.{}",
        Utc::now().timestamp_millis(),
        file_extension(file_name)
    )
}
