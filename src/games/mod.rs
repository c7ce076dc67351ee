//! ミニゲーム群とそれを束ねるハブ
//!
//! ハブはチェス・ハングマン・グリッドチェイスを一つずつ保持し、
//! パネルの表示状態に応じてタイマー（tick ループ / AIの遅延手）を駆動する。

pub mod chess;
pub mod grid_chase;
pub mod hangman;
pub mod timer;

pub use chess::{ChessGame, ChessOutcome, ChessPhase, ChessSnapshot};
pub use grid_chase::{ChaseOutcome, Direction, GridChase, GridSnapshot};
pub use hangman::{Hangman, HangmanOutcome, HangmanSnapshot};
pub use timer::{Deferred, TickLoop};

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Chess,
    Hangman,
    GridChase,
}

impl GameKind {
    pub fn all() -> [GameKind; 3] {
        [GameKind::Chess, GameKind::Hangman, GameKind::GridChase]
    }

    pub fn next(self) -> GameKind {
        match self {
            GameKind::Chess => GameKind::Hangman,
            GameKind::Hangman => GameKind::GridChase,
            GameKind::GridChase => GameKind::Chess,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::Chess => write!(f, "Ajedrez"),
            GameKind::Hangman => write!(f, "Ahorcado"),
            GameKind::GridChase => write!(f, "Pac-Man"),
        }
    }
}

/// ゲームパネル全体の状態
#[derive(Debug)]
pub struct GameHub {
    chess: ChessGame,
    hangman: Hangman,
    grid: GridChase,
    active: GameKind,
    open: bool,
    ticker: TickLoop,
    ai_move: Deferred,
    ai_delay: Duration,
    chase_probability: f64,
    rng: StdRng,
}

impl GameHub {
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// 乱数シードを固定したハブ（テスト用）
    pub fn seeded(config: &Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &Config, mut rng: StdRng) -> Self {
        let chess = new_chess(&mut rng);
        let hangman = Hangman::random(&mut rng);
        Self {
            chess,
            hangman,
            grid: GridChase::new(config.chase_probability),
            active: GameKind::Chess,
            open: false,
            ticker: TickLoop::new(config.tick_interval()),
            ai_move: Deferred::new(),
            ai_delay: config.ai_delay(),
            chase_probability: config.chase_probability,
            rng,
        }
    }

    pub fn is_open(&self) -> bool { self.open }
    pub fn active(&self) -> GameKind { self.active }
    pub fn chess(&self) -> &ChessGame { &self.chess }
    pub fn hangman(&self) -> &Hangman { &self.hangman }
    pub fn grid(&self) -> &GridChase { &self.grid }
    pub fn is_ticking(&self) -> bool { self.ticker.is_running() }
    pub fn ai_move_pending(&self) -> bool { self.ai_move.is_pending() }

    /// パネルを開いて指定のゲームを表示する
    pub fn open(&mut self, kind: GameKind, now: Instant) {
        self.open = true;
        self.active = kind;
        info!(target: "app", game = %kind, "game panel opened");
        self.sync_ticker(now);
    }

    /// パネルを閉じる。全ゲームの状態は破棄され、次回は新しいゲームになる。
    pub fn close(&mut self) {
        self.open = false;
        self.ticker.stop();
        self.ai_move.cancel();
        self.reset_all();
        info!(target: "app", "game panel closed");
    }

    pub fn switch(&mut self, kind: GameKind, now: Instant) {
        if self.active != kind {
            self.active = kind;
            debug!(target: "app", game = %kind, "game tab switched");
        }
        self.sync_ticker(now);
    }

    pub fn restart(&mut self, kind: GameKind, now: Instant) {
        match kind {
            GameKind::Chess => {
                self.ai_move.cancel();
                self.chess = new_chess(&mut self.rng);
            }
            GameKind::Hangman => self.hangman = Hangman::random(&mut self.rng),
            GameKind::GridChase => {
                self.ticker.stop();
                self.grid = GridChase::new(self.chase_probability);
            }
        }
        info!(target: "app", game = %kind, "game restarted");
        self.sync_ticker(now);
    }

    // ===== 入力 =====

    pub fn select_square(&mut self, row: i32, col: i32) {
        if self.open && self.active == GameKind::Chess {
            self.chess.select_square(row, col);
        }
    }

    pub fn guess_letter(&mut self, letter: char) {
        if self.open && self.active == GameKind::Hangman {
            self.hangman.guess(letter);
        }
    }

    pub fn steer(&mut self, dir: Direction) {
        if self.open && self.active == GameKind::GridChase {
            self.grid.steer(dir);
        }
    }

    /// 時間経過の処理: AIの遅延手と tick ループ
    pub fn update(&mut self, now: Instant) {
        if self.chess.phase() == ChessPhase::AiTurn {
            self.ai_move.schedule(now, self.ai_delay);
            if self.ai_move.fire(now) {
                self.chess.play_ai_move();
            }
        } else {
            self.ai_move.cancel();
        }

        if self.ticker.tick_due(now) {
            self.grid.tick(&mut self.rng);
        }
        if self.grid.is_over() {
            self.ticker.stop();
        }
    }

    /// グリッドチェイスが見えている間だけ tick ループを回す
    fn sync_ticker(&mut self, now: Instant) {
        if self.open && self.active == GameKind::GridChase && !self.grid.is_over() {
            self.ticker.start(now);
        } else {
            self.ticker.stop();
        }
    }

    fn reset_all(&mut self) {
        self.chess = new_chess(&mut self.rng);
        self.hangman = Hangman::random(&mut self.rng);
        self.grid = GridChase::new(self.chase_probability);
        self.active = GameKind::Chess;
    }
}

/// ハブの乱数から派生したシードで新しいチェスを作る
fn new_chess(rng: &mut StdRng) -> ChessGame {
    ChessGame::from_board(chess::Board::standard(), rng.gen_range(0..u64::MAX))
}
