// Downloader module: fetches mod JARs over HTTP and writes them through a FileSystem

use crate::fs::FileSystem;
use crate::mods::Mod;
use crate::ui;
use anyhow::Result;
use async_trait::async_trait;
use indicatif::ProgressBar;
use log::debug;
use reqwest::{Client, Response};
use tokio::runtime::{Handle, RuntimeFlavor};

/// User-Agent string for all HTTP requests
const USER_AGENT: &str = concat!("mcmods/", env!("CARGO_PKG_VERSION"));

lazy_static::lazy_static! {
    /// Shared HTTP client; follows redirects (reqwest's default policy)
    static ref CLIENT: Client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client");
}

/// Get a reference to the shared HTTP client
pub fn client() -> &'static Client {
    &CLIENT
}

/// Fetches a mod's latest package to a path under the install root
#[async_trait]
pub trait ModDownloader: Send + Sync {
    async fn download(&self, m: &Mod, rel_path: &str) -> Result<()>;
}

pub struct HttpModDownloader<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> HttpModDownloader<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl ModDownloader for HttpModDownloader<'_> {
    async fn download(&self, m: &Mod, rel_path: &str) -> Result<()> {
        if let Some((dir, _)) = rel_path.rsplit_once('/') {
            blocking(|| self.fs.mkdir_all(dir))?;
        }

        ui::dim(&format!("  Downloading {}\n    to: {}", m.latest_url, rel_path));

        let response = client().get(&m.latest_url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Download failed: {} ({})", m.latest_url, response.status());
        }

        let pb = match response.content_length() {
            Some(size) => ui::download_bar(size),
            None => ui::download_bar_indeterminate(),
        };
        pb.set_message(m.cli_name.clone());

        let data = match read_body(response, &pb).await {
            Ok(data) => data,
            Err(e) => {
                ui::clear_bar(&pb);
                return Err(e);
            }
        };
        ui::finish_download_success(&pb, &m.friendly_name);

        debug!("Writing {} bytes to {}", data.len(), rel_path);
        blocking(|| self.fs.write_file(rel_path, &data))
    }
}

/// Run a synchronous `FileSystem` call (an FTP upload can take a while).
///
/// On a multi-threaded runtime the worker hands its other tasks off first;
/// elsewhere the call just runs inline.
fn blocking<T>(op: impl FnOnce() -> Result<T>) -> Result<T> {
    match Handle::try_current().map(|handle| handle.runtime_flavor()) {
        Ok(RuntimeFlavor::MultiThread) => tokio::task::block_in_place(op),
        _ => op(),
    }
}

async fn read_body(mut response: Response, pb: &ProgressBar) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        pb.inc(chunk.len() as u64);
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}
