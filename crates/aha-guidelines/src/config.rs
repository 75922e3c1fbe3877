use std::path::{Path, PathBuf};

use guideline_store::ScoringWeights;

use crate::error::AppError;

const DEFAULT_PORT: u16 = 8787;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Stdio,
}

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub transport: Transport,
    pub bind_addr: String,
    pub port: u16,
    /// Persisted guideline collection; missing or malformed falls back to samples.
    pub guidelines_path: String,
    /// Directory served under `/public/`, also holds the widget HTML and logo.
    pub public_dir: String,
    /// Externally reachable origin used to build asset URLs.
    pub public_base_url: String,
    pub scoring_weights: ScoringWeights,
}

impl Config {
    /// Optional:
    /// - `AHA_TRANSPORT`: "http" (default) or "stdio"
    /// - `AHA_BIND_ADDR` (default: "0.0.0.0")
    /// - `PORT` (default: 8787)
    /// - `AHA_GUIDELINES_PATH` (default: "guidelines.json")
    /// - `AHA_PUBLIC_DIR` (default: "public")
    /// - `AHA_PUBLIC_BASE_URL` (default: "http://localhost:{PORT}")
    /// - `AHA_SCORING_WEIGHTS`: JSON object overriding any scoring weight
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let transport = match lookup("AHA_TRANSPORT").as_deref().map(str::trim) {
            None | Some("") => Transport::Http,
            Some(value) if value.eq_ignore_ascii_case("http") => Transport::Http,
            Some(value) if value.eq_ignore_ascii_case("stdio") => Transport::Stdio,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "AHA_TRANSPORT must be \"http\" or \"stdio\", got \"{other}\""
                )))
            }
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("invalid PORT \"{raw}\": {e}")))?,
            None => DEFAULT_PORT,
        };

        let scoring_weights = match lookup("AHA_SCORING_WEIGHTS") {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::Config(format!("invalid AHA_SCORING_WEIGHTS: {e}")))?,
            None => ScoringWeights::default(),
        };

        let public_base_url = lookup("AHA_PUBLIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        Ok(Self {
            transport,
            bind_addr: lookup("AHA_BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            guidelines_path: lookup("AHA_GUIDELINES_PATH")
                .unwrap_or_else(|| "guidelines.json".to_string()),
            public_dir: lookup("AHA_PUBLIC_DIR").unwrap_or_else(|| "public".to_string()),
            public_base_url,
            scoring_weights,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn guidelines_path(&self) -> PathBuf {
        Path::new(&self.guidelines_path).to_path_buf()
    }

    pub fn public_dir(&self) -> PathBuf {
        Path::new(&self.public_dir).to_path_buf()
    }
}
