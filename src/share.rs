use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;

pub const HASHTAG: &str = "#今日のひとこと";
pub const SHARE_INTENT_URL: &str = "https://twitter.com/intent/tweet";
pub const COPY_ACK: &str = "ひとことをクリップボードにコピーしました";

pub fn share_text(episode: &str) -> String {
    format!("今日のひとこと：\n\n{episode}\n\n{HASHTAG}")
}

pub fn share_intent_url(episode: &str) -> String {
    format!(
        "{SHARE_INTENT_URL}?text={}",
        urlencoding::encode(&share_text(episode))
    )
}

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> std::io::Result<()>;
}

/// Sets the terminal's clipboard with an OSC 52 escape sequence.
pub struct TerminalClipboard<W: Write> {
    out: W,
}

impl<W: Write> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn set_text(&mut self, text: &str) -> std::io::Result<()> {
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        self.out.flush()
    }
}
