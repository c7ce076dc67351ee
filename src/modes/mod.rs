//! モードシステム: 複数のUIモード（メニュー、チャット、ゲーム）を管理

use crate::app::App;
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::Instant;

/// 各モードが実装すべきトレイト
pub trait Mode {
    /// フレーム毎の非ブロッキング更新処理（返信の到着、tick など）
    fn update(&mut self, app: &mut App, now: Instant);

    /// 画面描画
    fn render(&self, app: &App, f: &mut Frame);

    /// キーイベント処理
    /// 戻り値: Some(次のモード) でモード遷移、None で同じモード継続
    fn handle_key(&mut self, app: &mut App, key: KeyEvent) -> Result<Option<AppMode>>;
}

/// アプリケーションが取り得るモードの列挙型
pub enum AppMode {
    Menu(MenuMode),
    Chat(ChatMode),
    Games(GamesMode),
    Exit,
}

impl AppMode {
    /// 現在のモードで update() を呼び出す
    pub fn update(&mut self, app: &mut App, now: Instant) {
        match self {
            AppMode::Menu(m) => m.update(app, now),
            AppMode::Chat(m) => m.update(app, now),
            AppMode::Games(m) => m.update(app, now),
            AppMode::Exit => {}
        }
    }

    /// 現在のモードで render() を呼び出す
    pub fn render(&self, app: &App, f: &mut Frame) {
        match self {
            AppMode::Menu(m) => m.render(app, f),
            AppMode::Chat(m) => m.render(app, f),
            AppMode::Games(m) => m.render(app, f),
            AppMode::Exit => {}
        }
    }

    /// 現在のモードで handle_key() を呼び出す
    pub fn handle_key(&mut self, app: &mut App, key: KeyEvent) -> Result<Option<AppMode>> {
        match self {
            AppMode::Menu(m) => m.handle_key(app, key),
            AppMode::Chat(m) => m.handle_key(app, key),
            AppMode::Games(m) => m.handle_key(app, key),
            AppMode::Exit => Ok(None),
        }
    }
}

pub mod chat;
pub mod games;
pub mod menu;

pub use chat::ChatMode;
pub use games::GamesMode;
pub use menu::MenuMode;
