use serde::{Deserialize, Serialize};

/// 動作モード: どの専門家に質問するか
///
/// The mode fully determines the input label, the placeholder text, and the
/// system instruction sent with the question. Serializable so it can cross
/// the server-function boundary from the wasm frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// 子どもの栄養
    Nutrition,
    /// 子どもの睡眠
    Sleep,
}

impl Mode {
    /// All selectable modes, in display order
    pub const ALL: [Mode; 2] = [Mode::Nutrition, Mode::Sleep];

    /// Short label shown next to the radio option
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Nutrition => "子どもの栄養",
            Mode::Sleep => "子どもの睡眠",
        }
    }

    /// Label above the question input
    #[must_use]
    pub fn input_label(self) -> &'static str {
        match self {
            Mode::Nutrition => "子どもの栄養に関する質問を入力してください。",
            Mode::Sleep => "子どもの睡眠に関する質問を入力してください。",
        }
    }

    /// Example question shown as the input placeholder
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Mode::Nutrition => "例：3歳の子どもにおすすめの朝食メニューを教えてください。",
            Mode::Sleep => "例：5歳の子どもが夜なかなか寝付けません。どうすればよいでしょうか？",
        }
    }

    /// Short description of what the mode answers, shown on the page
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Mode::Nutrition => {
                "入力フォームに質問を入力し「質問する」ボタンを押すことで、子どもの健康な発育を支える食事や栄養バランスについてアドバイスを提供します。"
            }
            Mode::Sleep => {
                "入力フォームに質問を入力し「質問する」ボタンを押すことで、子どもの睡眠習慣や睡眠の問題についてのアドバイスを提供します。"
            }
        }
    }

    /// Fixed system instruction paired with this mode
    #[must_use]
    pub fn system_prompt(self) -> &'static str {
        match self {
            Mode::Nutrition => {
                "あなたは子どもの栄養の専門家です。\n\
                 子どもの健康な発育を支える食事や栄養バランスについて、科学的根拠に基づいたアドバイスを提供してください。\n\
                 回答は分かりやすく、実践的で、親が実際に取り入れやすい内容にしてください。\n\
                 年齢に応じた栄養素の必要量や食事のポイントも含めてください。"
            }
            Mode::Sleep => {
                "あなたは子どもの睡眠の専門家です。\n\
                 子どもの睡眠習慣や睡眠の問題について、科学的根拠に基づいたアドバイスを提供してください。\n\
                 年齢に応じた適切な睡眠時間、睡眠環境の整え方、睡眠リズムの改善方法などを含めて、\n\
                 親が実践しやすい具体的なアドバイスを提供してください。"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompts_are_fixed_and_differ() {
        let nutrition = Mode::Nutrition.system_prompt();
        let sleep = Mode::Sleep.system_prompt();

        assert!(!nutrition.is_empty());
        assert!(!sleep.is_empty());
        assert_ne!(nutrition, sleep);

        // Selecting one mode never changes the other's instruction
        assert_eq!(Mode::Nutrition.system_prompt(), nutrition);
        assert_eq!(Mode::Sleep.system_prompt(), sleep);
    }

    #[test]
    fn test_prompts_match_their_topic() {
        assert!(Mode::Nutrition.system_prompt().contains("栄養"));
        assert!(Mode::Sleep.system_prompt().contains("睡眠"));
    }

    #[test]
    fn test_labels_and_placeholders_differ_per_mode() {
        assert_ne!(Mode::Nutrition.label(), Mode::Sleep.label());
        assert_ne!(Mode::Nutrition.input_label(), Mode::Sleep.input_label());
        assert_ne!(Mode::Nutrition.placeholder(), Mode::Sleep.placeholder());
    }

    #[test]
    fn test_mode_serde_round_trip() {
        for mode in Mode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            let back: Mode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mode);
        }
    }
}
