//! ゲームモード: チェス / ハングマン / グリッドチェイスのパネル

use super::{AppMode, ChatMode, Mode};
use crate::app::App;
use crate::games::chess::BOARD_SIZE;
use crate::games::{Direction, GameKind};
use crate::ui::games_view;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use std::time::Instant;
use tracing::{debug, info};

/// ゲームモード状態（ゲーム本体は `App::games` が持つ）
pub struct GamesMode {
    /// チェス盤上のカーソル (row, col)
    pub cursor: (usize, usize),
}

impl GamesMode {
    pub fn new() -> Self {
        // 白のキング前のポーン
        Self { cursor: (6, 4) }
    }

    fn move_cursor(&mut self, dr: i32, dc: i32) {
        let max = BOARD_SIZE as i32 - 1;
        let row = (self.cursor.0 as i32 + dr).clamp(0, max);
        let col = (self.cursor.1 as i32 + dc).clamp(0, max);
        self.cursor = (row as usize, col as usize);
    }

    fn handle_chess_key(&mut self, app: &mut App, code: KeyCode) {
        match code {
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, col) = self.cursor;
                app.games.select_square(row as i32, col as i32);
            }
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, app: &mut App, code: KeyCode) {
        let dir = match code {
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            _ => return,
        };
        app.games.steer(dir);
    }
}

impl Default for GamesMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Mode for GamesMode {
    fn update(&mut self, app: &mut App, now: Instant) {
        app.update(now);
    }

    fn render(&self, app: &App, f: &mut Frame) {
        games_view::render(f, &app.games, self.cursor);
    }

    fn handle_key(&mut self, app: &mut App, key: KeyEvent) -> Result<Option<AppMode>> {
        let now = Instant::now();
        match key.code {
            KeyCode::Esc => {
                app.games.close();
                info!(target: "app", "games mode: returning to chat");
                return Ok(Some(AppMode::Chat(ChatMode::new())));
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(AppMode::Exit));
            }
            KeyCode::Tab => {
                let next = app.games.active().next();
                app.games.switch(next, now);
                return Ok(None);
            }
            _ => {}
        }

        let active = app.games.active();
        match (active, key.code) {
            // ハングマンでは数字・英字が入力になるため、タブ切替とリスタートは他のゲームのみ
            (GameKind::Chess | GameKind::GridChase, KeyCode::Char('1')) => app.games.switch(GameKind::Chess, now),
            (GameKind::Chess | GameKind::GridChase, KeyCode::Char('2')) => app.games.switch(GameKind::Hangman, now),
            (GameKind::Chess | GameKind::GridChase, KeyCode::Char('3')) => app.games.switch(GameKind::GridChase, now),
            (GameKind::Chess | GameKind::GridChase, KeyCode::Char('r')) => app.games.restart(active, now),
            (GameKind::Hangman, KeyCode::Enter) if app.games.hangman().is_over() => {
                app.games.restart(GameKind::Hangman, now)
            }
            (GameKind::Hangman, KeyCode::Char(ch)) => app.games.guess_letter(ch),
            (GameKind::Chess, code) => self.handle_chess_key(app, code),
            (GameKind::GridChase, code) => self.handle_grid_key(app, code),
            _ => {}
        }

        if tracing::enabled!(target: "app", tracing::Level::DEBUG) {
            let json = match app.games.active() {
                GameKind::Chess => serde_json::to_string(&app.games.chess().snapshot()),
                GameKind::Hangman => serde_json::to_string(&app.games.hangman().snapshot()),
                GameKind::GridChase => serde_json::to_string(&app.games.grid().snapshot()),
            };
            if let Ok(json) = json {
                debug!(target: "app", snapshot = %json, "game snapshot");
            }
        }
        Ok(None)
    }
}
