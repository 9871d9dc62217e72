use anyhow::Result;
use ikuji_core::Mode;

/// 質問応答の薄いラッパー
///
/// Binds the cached config to the core pipeline.
pub async fn ask_expert(mode: Mode, question: &str) -> Result<String> {
    let config = super::config::get()?;
    ikuji_core::ai::ask_expert(mode, question, config).await
}
