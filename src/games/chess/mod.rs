//! チェス風ゲーム: 人間(白) 対 AKI(黒)
//!
//! チェック・チェックメイトの判定は無く、キングを取った側の勝ち。

pub mod ai;
pub mod board;

pub use board::{BOARD_SIZE, Board, Color, Move, Piece, PieceKind};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const STATUS_YOUR_TURN: &str = "Tu turno (blancas)";
pub const STATUS_AI_TURN: &str = "Turno de AKI...";
pub const STATUS_WHITE_WINS: &str = "¡Ganaste! Derrotaste a AKI 🎉";
pub const STATUS_BLACK_WINS: &str = "AKI ganó la partida";
pub const STATUS_DRAW: &str = "No hay más movimientos para AKI. ¡Empate!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChessPhase {
    AwaitingSelection,
    AwaitingDestination,
    AiTurn,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChessOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

/// 描画層が読む盤面スナップショット
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChessSnapshot {
    pub board: Board,
    pub selected: Option<(usize, usize)>,
    pub targets: Vec<(usize, usize)>,
    pub phase: ChessPhase,
    pub turn: Color,
    pub outcome: Option<ChessOutcome>,
    pub status: String,
}

#[derive(Debug)]
pub struct ChessGame {
    board: Board,
    selected: Option<(usize, usize)>,
    targets: Vec<Move>,
    phase: ChessPhase,
    turn: Color,
    outcome: Option<ChessOutcome>,
    status: String,
    rng: StdRng,
}

impl ChessGame {
    pub fn new() -> Self {
        Self::with_rng(Board::standard(), StdRng::from_entropy())
    }

    /// 乱数シードを固定したゲーム（テスト用）
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Board::standard(), StdRng::seed_from_u64(seed))
    }

    /// 任意の局面から白番で始める
    pub fn from_board(board: Board, seed: u64) -> Self {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, rng: StdRng) -> Self {
        Self {
            board,
            selected: None,
            targets: Vec::new(),
            phase: ChessPhase::AwaitingSelection,
            turn: Color::White,
            outcome: None,
            status: STATUS_YOUR_TURN.to_string(),
            rng,
        }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn phase(&self) -> ChessPhase { self.phase }
    pub fn turn(&self) -> Color { self.turn }
    pub fn outcome(&self) -> Option<ChessOutcome> { self.outcome }
    pub fn status(&self) -> &str { &self.status }
    pub fn selected(&self) -> Option<(usize, usize)> { self.selected }
    pub fn targets(&self) -> &[Move] { &self.targets }
    pub fn is_over(&self) -> bool { self.phase == ChessPhase::GameOver }

    pub fn legal_moves(&self, row: usize, col: usize) -> Vec<Move> {
        self.board.legal_moves(row, col)
    }

    pub fn all_moves(&self, color: Color) -> Vec<Move> {
        self.board.all_moves(color)
    }

    pub fn snapshot(&self) -> ChessSnapshot {
        ChessSnapshot {
            board: self.board.clone(),
            selected: self.selected,
            targets: self.targets.iter().map(|m| (m.to_row, m.to_col)).collect(),
            phase: self.phase,
            turn: self.turn,
            outcome: self.outcome,
            status: self.status.clone(),
        }
    }

    /// マスをクリックする。無効な操作は何もしない。
    pub fn select_square(&mut self, row: i32, col: i32) {
        if !matches!(
            self.phase,
            ChessPhase::AwaitingSelection | ChessPhase::AwaitingDestination
        ) || self.turn != Color::White
            || !Board::in_bounds(row, col)
        {
            return;
        }
        let (row, col) = (row as usize, col as usize);

        if self.selected.is_some() {
            if let Some(mv) = self.targets.iter().find(|m| m.lands_on(row, col)).copied() {
                self.apply_move(mv);
                return;
            }
            if self.selected == Some((row, col)) {
                return;
            }
        }

        match self.board.get(row, col) {
            Some(piece) if piece.color == Color::White => {
                self.selected = Some((row, col));
                self.targets = self.board.legal_moves(row, col);
                self.phase = ChessPhase::AwaitingDestination;
                debug!(target: "chess", row, col, targets = self.targets.len(), "piece selected");
            }
            _ => self.clear_selection(),
        }
    }

    /// 手を適用する。キングを取ったら即終局。
    ///
    /// 手番の色の駒で、その駒の生成手に含まれる移動先でなければ何もしない。
    pub fn apply_move(&mut self, mv: Move) {
        let movable_phase = match self.turn {
            Color::White => matches!(
                self.phase,
                ChessPhase::AwaitingSelection | ChessPhase::AwaitingDestination
            ),
            Color::Black => self.phase == ChessPhase::AiTurn,
        };
        if !movable_phase {
            return;
        }
        let Some(moving) = self.board.get(mv.from_row, mv.from_col) else {
            return;
        };
        if moving.color != self.turn {
            return;
        }
        // 取る駒は盤面から求め直す
        let Some(mv) = self
            .board
            .legal_moves(mv.from_row, mv.from_col)
            .into_iter()
            .find(|m| m.lands_on(mv.to_row, mv.to_col))
        else {
            debug!(target: "chess", from = ?(mv.from_row, mv.from_col), to = ?(mv.to_row, mv.to_col), "illegal move ignored");
            return;
        };

        let captured = self.board.apply(&mv);
        self.clear_selection();
        info!(
            target: "chess",
            color = ?moving.color,
            from = ?(mv.from_row, mv.from_col),
            to = ?(mv.to_row, mv.to_col),
            captured = ?captured.map(|p| p.kind),
            "move applied"
        );

        if captured.is_some_and(|p| p.kind == PieceKind::King) {
            let (outcome, status) = match moving.color {
                Color::White => (ChessOutcome::WhiteWins, STATUS_WHITE_WINS),
                Color::Black => (ChessOutcome::BlackWins, STATUS_BLACK_WINS),
            };
            self.finish(outcome, status);
            return;
        }

        self.turn = moving.color.opponent();
        match self.turn {
            Color::Black => {
                self.phase = ChessPhase::AiTurn;
                self.status = STATUS_AI_TURN.to_string();
            }
            Color::White => {
                self.phase = ChessPhase::AwaitingSelection;
                self.status = STATUS_YOUR_TURN.to_string();
            }
        }
    }

    /// AIの手番なら一手指す。合法手が無ければ引き分けで終局。
    pub fn play_ai_move(&mut self) {
        if self.phase != ChessPhase::AiTurn || self.turn != Color::Black {
            return;
        }
        match ai::choose_move(&self.board, Color::Black, &mut self.rng) {
            Some(mv) => self.apply_move(mv),
            None => self.finish(ChessOutcome::Draw, STATUS_DRAW),
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
        if self.phase == ChessPhase::AwaitingDestination {
            self.phase = ChessPhase::AwaitingSelection;
        }
    }

    fn finish(&mut self, outcome: ChessOutcome, status: &str) {
        self.phase = ChessPhase::GameOver;
        self.outcome = Some(outcome);
        self.status = status.to_string();
        info!(target: "chess", ?outcome, "game over");
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}
