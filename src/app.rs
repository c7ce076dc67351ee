//! アプリケーション状態管理モジュール
//!
//! チャットとゲームハブを一つずつ所有するコンポジションルート。
//! 各モードはここへの参照を受け取って操作する。

use crate::chat::ChatSession;
use crate::config::Config;
use crate::games::GameHub;
use std::time::Instant;

/// アプリケーション全体で共有する状態
pub struct App {
    /// 設定
    pub config: Config,
    /// 現在の会話
    pub chat: ChatSession,
    /// ミニゲーム
    pub games: GameHub,
    /// アプリケーション開始時刻
    pub started: Instant,
}

impl App {
    /// 新しいアプリケーションインスタンスを作成
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// 設定を指定してアプリケーションインスタンスを作成
    pub fn with_config(config: Config) -> Self {
        let chat = ChatSession::new(&config);
        let games = GameHub::new(&config);
        Self { config, chat, games, started: Instant::now() }
    }

    /// 乱数シードを固定したインスタンス（テスト用）
    pub fn seeded(config: Config, seed: u64) -> Self {
        let chat = ChatSession::seeded(&config, seed);
        let games = GameHub::seeded(&config, seed.wrapping_add(1));
        Self { config, chat, games, started: Instant::now() }
    }

    /// 時間経過による更新（返信の到着・AIの手・tick）
    pub fn update(&mut self, now: Instant) {
        self.chat.update(now);
        self.games.update(now);
    }

    /// アプリケーション開始からの経過時間を取得
    pub fn elapsed_time(&self) -> std::time::Duration {
        self.started.elapsed()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
