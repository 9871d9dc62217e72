use anyhow::{Context, Result};

/// アプリケーション設定（environment から読み込み）
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
}

impl Config {
    /// Load configuration from a `.env` file and the process environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Missing .env is not an error

        let openai_api_key =
            std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;

        if openai_api_key.trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY is empty");
        }

        Ok(Self { openai_api_key })
    }
}
