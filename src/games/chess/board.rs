use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// ポーンの前進方向（行の増分）
    fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    fn pawn_start_row(self) -> i32 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// AIが取る駒を選ぶときの価値
    pub fn value(self) -> u32 {
        match self {
            PieceKind::King => 100,
            PieceKind::Queen => 9,
            PieceKind::Rook => 5,
            PieceKind::Bishop | PieceKind::Knight => 3,
            PieceKind::Pawn => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn lands_on(&self, row: usize, col: usize) -> bool {
        self.to_row == row && self.to_col == col
    }
}

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 8x8 盤面。行0が黒の初期段、行7が白の初期段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self { squares: [[None; BOARD_SIZE]; BOARD_SIZE] }
    }

    /// 通常の初期配置
    pub fn standard() -> Self {
        use PieceKind::*;
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut board = Self::empty();
        for (col, kind) in back.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Black, kind));
            board.squares[1][col] = Some(Piece::new(Color::Black, Pawn));
            board.squares[6][col] = Some(Piece::new(Color::White, Pawn));
            board.squares[7][col] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    pub fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.squares.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// 盤外の指定は無視する
    pub fn set(&mut self, row: usize, col: usize, piece: Option<Piece>) {
        if let Some(square) = self.squares.get_mut(row).and_then(|r| r.get_mut(col)) {
            *square = piece;
        }
    }

    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    fn at(&self, row: i32, col: i32) -> Option<Piece> {
        self.squares[row as usize][col as usize]
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .filter(|p| p.color == color && p.kind == kind)
            .count()
    }

    /// 駒の移動先候補（チェック判定なしの幾何的な合法手のみ）
    pub fn legal_moves(&self, row: usize, col: usize) -> Vec<Move> {
        let Some(piece) = self.get(row, col) else {
            return Vec::new();
        };
        let (r, c) = (row as i32, col as i32);
        let mut moves = Vec::new();

        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(piece, r, c, &mut moves),
            PieceKind::Knight => {
                for (dr, dc) in KNIGHT_JUMPS {
                    self.push_step(piece, r, c, r + dr, c + dc, &mut moves);
                }
            }
            PieceKind::Bishop => self.slide(piece, r, c, &DIAGONALS, &mut moves),
            PieceKind::Rook => self.slide(piece, r, c, &ORTHOGONALS, &mut moves),
            PieceKind::Queen => {
                self.slide(piece, r, c, &DIAGONALS, &mut moves);
                self.slide(piece, r, c, &ORTHOGONALS, &mut moves);
            }
            PieceKind::King => {
                for dr in -1..=1 {
                    for dc in -1..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        self.push_step(piece, r, c, r + dr, c + dc, &mut moves);
                    }
                }
            }
        }

        moves
    }

    /// 指定色の全合法手（行優先で盤面を走査した順）
    pub fn all_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.get(row, col).is_some_and(|p| p.color == color) {
                    moves.extend(self.legal_moves(row, col));
                }
            }
        }
        moves
    }

    /// 手を適用し、ポーンが最終段に達したらクイーンに昇格させる。
    /// 取られた駒を返す。
    /// 盤外を含む手は何もせず `None`。
    pub fn apply(&mut self, mv: &Move) -> Option<Piece> {
        if mv.from_row >= BOARD_SIZE
            || mv.from_col >= BOARD_SIZE
            || mv.to_row >= BOARD_SIZE
            || mv.to_col >= BOARD_SIZE
        {
            return None;
        }
        let moving = self.squares[mv.from_row][mv.from_col].take();
        let captured = self.squares[mv.to_row][mv.to_col].take();

        let placed = moving.map(|p| {
            if p.kind == PieceKind::Pawn && mv.to_row == p.color.promotion_row() {
                Piece::new(p.color, PieceKind::Queen)
            } else {
                p
            }
        });
        self.squares[mv.to_row][mv.to_col] = placed;
        captured
    }

    fn pawn_moves(&self, piece: Piece, r: i32, c: i32, moves: &mut Vec<Move>) {
        let dir = piece.color.forward();
        let next = r + dir;

        if Board::in_bounds(next, c) && self.at(next, c).is_none() {
            moves.push(make_move(r, c, next, c, None));

            let double = r + dir * 2;
            if r == piece.color.pawn_start_row()
                && Board::in_bounds(double, c)
                && self.at(double, c).is_none()
            {
                moves.push(make_move(r, c, double, c, None));
            }
        }

        for dc in [-1, 1] {
            let tc = c + dc;
            if !Board::in_bounds(next, tc) {
                continue;
            }
            if let Some(target) = self.at(next, tc) {
                if target.color != piece.color {
                    moves.push(make_move(r, c, next, tc, Some(target)));
                }
            }
        }
    }

    fn push_step(&self, piece: Piece, r: i32, c: i32, tr: i32, tc: i32, moves: &mut Vec<Move>) {
        if !Board::in_bounds(tr, tc) {
            return;
        }
        match self.at(tr, tc) {
            None => moves.push(make_move(r, c, tr, tc, None)),
            Some(target) if target.color != piece.color => {
                moves.push(make_move(r, c, tr, tc, Some(target)))
            }
            Some(_) => {}
        }
    }

    fn slide(&self, piece: Piece, r: i32, c: i32, dirs: &[(i32, i32)], moves: &mut Vec<Move>) {
        for &(dr, dc) in dirs {
            let (mut tr, mut tc) = (r + dr, c + dc);
            while Board::in_bounds(tr, tc) {
                match self.at(tr, tc) {
                    None => moves.push(make_move(r, c, tr, tc, None)),
                    Some(target) => {
                        if target.color != piece.color {
                            moves.push(make_move(r, c, tr, tc, Some(target)));
                        }
                        break;
                    }
                }
                tr += dr;
                tc += dc;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

fn make_move(r: i32, c: i32, tr: i32, tc: i32, captured: Option<Piece>) -> Move {
    Move {
        from_row: r as usize,
        from_col: c as usize,
        to_row: tr as usize,
        to_col: tc as usize,
        captured,
    }
}
