//! チャットモード

use super::{AppMode, GamesMode, Mode};
use crate::app::App;
use crate::chat::Submission;
use crate::ui::chat_view;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use std::time::Instant;
use tracing::info;

/// チャットモード状態（会話そのものは `App::chat` が持つ）
pub struct ChatMode {
    /// 現在の入力テキスト
    pub input: String,
    /// 直近の送信結果（画面のヒント表示用）
    pub last_submission: Option<Submission>,
}

impl ChatMode {
    /// 新しいチャットモードインスタンスを作成
    pub fn new() -> Self {
        Self { input: String::new(), last_submission: None }
    }

    /// 入力テキストに文字を追加
    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// 入力テキストから最後の文字を削除
    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// 入力を送信する。ゲームを開く入力ならゲームモードへ遷移。
    pub fn submit(&mut self, app: &mut App, now: Instant) -> Option<AppMode> {
        let submission = app.chat.submit(&self.input, now);
        self.last_submission = Some(submission);
        match submission {
            Submission::Ignored | Submission::Busy => None,
            Submission::Queued => {
                info!(target: "app", "submit_prompt: {}", self.input);
                self.input.clear();
                None
            }
            Submission::OpenGame(kind) => {
                self.input.clear();
                app.games.open(kind, now);
                Some(AppMode::Games(GamesMode::new()))
            }
        }
    }
}

impl Default for ChatMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Mode for ChatMode {
    fn update(&mut self, app: &mut App, now: Instant) {
        app.update(now);
    }

    fn render(&self, app: &App, f: &mut Frame) {
        let hint = match self.last_submission {
            Some(Submission::Busy) if app.chat.is_pending() => Some("Espera a que AKI termine de responder"),
            _ => None,
        };
        chat_view::render(f, &app.chat, &self.input, hint, app.elapsed_time());
    }

    fn handle_key(&mut self, app: &mut App, key: KeyEvent) -> Result<Option<AppMode>> {
        match key.code {
            KeyCode::Esc => Ok(Some(AppMode::Menu(super::MenuMode::new()))),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Ok(Some(AppMode::Exit))
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.chat.new_conversation();
                self.input.clear();
                Ok(None)
            }
            KeyCode::Enter => Ok(self.submit(app, Instant::now())),
            KeyCode::Backspace => {
                self.pop_char();
                Ok(None)
            }
            KeyCode::Char(ch) => {
                self.push_char(ch);
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}
