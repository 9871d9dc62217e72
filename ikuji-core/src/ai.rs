//! 質問応答パイプライン
//!
//! Builds the two-message prompt for the selected mode and performs one
//! chat-completion call.

use crate::Config;
use crate::models::Mode;
use crate::openai::{self, ChatRequest, Message};
use anyhow::Result;
use tracing::{error, info};

/// Maximum allowed question length to prevent abuse
const MAX_QUESTION_LENGTH: usize = 1000;

/// LLM model used for answers
const MODEL: &str = "gpt-3.5-turbo";

/// Temperature for LLM sampling
const LLM_TEMPERATURE: f32 = 0.7;

/// Build the completion request for a question
///
/// The prompt is always exactly two messages: the mode's fixed system
/// instruction followed by the user's question.
pub fn build_request(mode: Mode, question: &str) -> ChatRequest {
    ChatRequest::new(
        MODEL,
        vec![Message::system(mode.system_prompt()), Message::user(question)],
    )
    .temperature(LLM_TEMPERATURE)
}

/// Ask the selected expert a question and return the answer text
///
/// Validates the question, sends a single completion request, and returns
/// the answer. Any failure (auth, network, rate limit, malformed payload)
/// surfaces as one error; there are no retries.
pub async fn ask_expert(mode: Mode, question: &str, config: &Config) -> Result<String> {
    use std::time::Instant;

    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!("Question cannot be empty");
    }
    if question.chars().count() > MAX_QUESTION_LENGTH {
        anyhow::bail!(
            "Question too long: {} characters (max {})",
            question.chars().count(),
            MAX_QUESTION_LENGTH
        );
    }

    let request = build_request(mode, question);
    let start = Instant::now();

    let result = openai::chat_completion(&request, &config.openai_api_key).await;
    let duration_ms = start.elapsed().as_millis();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            error!(
                mode = ?mode,
                duration_ms = %duration_ms,
                "LLM API error"
            );
            return Err(e);
        }
    };

    let answer = response.content_or_err()?.to_string();

    info!(
        model = %MODEL,
        mode = ?mode,
        duration_ms = %duration_ms,
        "LLM call completed"
    );

    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            openai_api_key: "sk-test".to_string(),
        }
    }

    #[test]
    fn test_build_request_shape() {
        let request = build_request(Mode::Nutrition, "3歳の子どもにおすすめの朝食メニューを教えてください。");

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, Mode::Nutrition.system_prompt());
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(
            request.messages[1].content,
            "3歳の子どもにおすすめの朝食メニューを教えてください。"
        );
    }

    #[test]
    fn test_build_request_uses_selected_mode_prompt() {
        let nutrition = build_request(Mode::Nutrition, "質問");
        let sleep = build_request(Mode::Sleep, "質問");

        assert_eq!(nutrition.messages[0].content, Mode::Nutrition.system_prompt());
        assert_eq!(sleep.messages[0].content, Mode::Sleep.system_prompt());
        assert_ne!(nutrition.messages[0].content, sleep.messages[0].content);
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected_without_network() {
        for mode in Mode::ALL {
            let err = ask_expert(mode, "", &test_config()).await.unwrap_err();
            assert!(err.to_string().contains("empty"));
        }
    }

    #[tokio::test]
    async fn test_whitespace_question_is_rejected_without_network() {
        let err = ask_expert(Mode::Sleep, "   \n\t  ", &test_config())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[tokio::test]
    async fn test_overlong_question_is_rejected_without_network() {
        let question = "あ".repeat(MAX_QUESTION_LENGTH + 1);
        let err = ask_expert(Mode::Nutrition, &question, &test_config())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("too long"));
    }
}
