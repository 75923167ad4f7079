use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Resolves the endpoint and data directory, honoring the
    /// `POSTBOARD_ENDPOINT` and `POSTBOARD_DATA_DIR` overrides.
    pub fn from_env() -> Result<Self> {
        let endpoint =
            env::var("POSTBOARD_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let data_dir = match env::var_os("POSTBOARD_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .context("Could not resolve a user data directory")?
                .join("postboard"),
        };

        Ok(Self { endpoint, data_dir })
    }
}
