//! Live integration test against the real OpenAI API
//!
//! Run with: cargo test -p ikuji-core --test ask_live -- --ignored --nocapture

use anyhow::Result;
use ikuji_core::{Config, Mode, ai};

/// One real question per mode
struct TestCase {
    mode: Mode,
    question: &'static str,
}

const TEST_CASES: &[TestCase] = &[
    TestCase {
        mode: Mode::Nutrition,
        question: "3歳の子どもにおすすめの朝食メニューを教えてください。",
    },
    TestCase {
        mode: Mode::Sleep,
        question: "5歳の子どもが夜なかなか寝付けません。どうすればよいでしょうか？",
    },
];

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY and makes real API calls"]
async fn test_ask_expert_live() -> Result<()> {
    let config = Config::from_env()?;

    for case in TEST_CASES {
        let answer = ai::ask_expert(case.mode, case.question, &config).await?;
        println!("--- {:?}: {}\n{}\n", case.mode, case.question, answer);
        assert!(!answer.trim().is_empty(), "empty answer for {:?}", case.mode);
    }

    Ok(())
}
