use std::{fs, path::Path};

pub const DEFAULT_MODEL: &str = "claude-opus-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 500;

pub const DEFAULT_PROMPT: &str = "今日のひとことを生成してください。以下の条件をランダムに組み合わせて創作してください：
視点（1つ選択）：

物の視点（本、椅子、雲、信号機など）
時間の概念（昨日、来週、3秒後など）
感情の擬人化（嫉妬、安堵、驚きなど）
抽象概念（重力、沈黙、速度など）

文体（1つ選択）：

疑問文で終わる
感嘆符で終わる
体言止め
命令形
「〜らしい」調

必須要素（2つ以上含む）：

数字または数学的概念
色の名前
天気・自然現象
身体の部位
時間の単位
音に関する表現

禁止ワード：
心、人生、今日、毎日、大切、きっと、思う、感じる
文字数： 150文字以内
その他：

メタファーを1つ以上使用
SNSでシェアしたくなる現代的な軽さ
一言のみ回答（説明不要）";

/// Everything the endpoint sends to the provider. No request data is ever
/// interpolated into `prompt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub model: String,
    pub max_tokens: u32,
    pub prompt: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl PromptConfig {
    /// Replaces the built-in prompt with the trimmed contents of `path`.
    pub fn with_prompt_file(mut self, path: &Path) -> std::io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "prompt file is empty",
            ));
        }
        self.prompt = text.to_string();
        Ok(self)
    }
}
