//! パックマン風の追いかけっこ
//!
//! 1 tick の処理順:
//! 1. バッファされた方向が壁でなければ採用
//! 2. プレイヤーを1マス進め、ペレットを食べる
//! 3. ペレットが0なら勝利（追跡者は動かず、衝突判定もしない）
//! 4. 衝突判定 → 追跡者の移動 → 衝突判定

use color_eyre::Result;
use color_eyre::eyre::eyre;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{DEFAULT_CHASE_PROBABILITY, PELLET_SCORE};

/// 組み込みマップ: `#` 壁 / `.` ペレット / ` ` 空き / `P` プレイヤー / `G` 追跡者
pub const DEFAULT_MAP: &str = "\
###################
#........#........#
#.##.###.#.###.##.#
#.................#
#.##.#.#####.#.##.#
#....#...#...#....#
####.### # ###.####
#.......  G.......#
####.#.#####.#.####
#........#........#
#.##.###.#.###.##.#
#..#.....P.....#..#
##.#.#.#####.#.#.##
#....#...#...#....#
#.######.#.######.#
#.................#
###################";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Pellet,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// 同距離のときの優先順
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChaseOutcome {
    Won,
    Caught,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub cells: Vec<Vec<Cell>>,
    pub player: Pos,
    pub pursuer: Pos,
    pub score: u32,
    pub pellets_left: usize,
    pub outcome: Option<ChaseOutcome>,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct GridChase {
    cells: Vec<Vec<Cell>>,
    player: Pos,
    player_dir: Direction,
    buffered: Option<Direction>,
    pursuer: Pos,
    pursuer_dir: Direction,
    score: u32,
    pellets_left: usize,
    outcome: Option<ChaseOutcome>,
    chase_probability: f64,
}

impl GridChase {
    /// 組み込みマップで開始
    pub fn new(chase_probability: f64) -> Self {
        Self::from_map(DEFAULT_MAP, chase_probability).expect("valid built-in map")
    }

    /// ASCIIマップを解析して開始する。確率は 0..=1 に丸め、NaN は既定値にする。
    pub fn from_map(map: &str, chase_probability: f64) -> Result<Self> {
        let rows: Vec<&str> = map.lines().filter(|l| !l.is_empty()).collect();
        let width = rows.first().map(|r| r.chars().count()).ok_or_else(|| eyre!("map is empty"))?;

        let mut cells = Vec::with_capacity(rows.len());
        let mut player = None;
        let mut pursuer = None;
        let mut pellets_left = 0;

        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(eyre!("map row {r} has width {} (expected {width})", line.chars().count()));
            }
            let mut row = Vec::with_capacity(width);
            for (c, glyph) in line.chars().enumerate() {
                let cell = match glyph {
                    '#' => Cell::Wall,
                    '.' => {
                        pellets_left += 1;
                        Cell::Pellet
                    }
                    ' ' => Cell::Empty,
                    'P' => {
                        if player.replace(Pos::new(r, c)).is_some() {
                            return Err(eyre!("map has more than one player start"));
                        }
                        Cell::Empty
                    }
                    'G' => {
                        if pursuer.replace(Pos::new(r, c)).is_some() {
                            return Err(eyre!("map has more than one pursuer start"));
                        }
                        Cell::Empty
                    }
                    other => return Err(eyre!("unknown map glyph {other:?} at ({r}, {c})")),
                };
                row.push(cell);
            }
            cells.push(row);
        }

        let player = player.ok_or_else(|| eyre!("map has no player start 'P'"))?;
        let pursuer = pursuer.ok_or_else(|| eyre!("map has no pursuer start 'G'"))?;

        Ok(Self {
            cells,
            player,
            player_dir: Direction::Left,
            buffered: None,
            pursuer,
            pursuer_dir: Direction::Up,
            score: 0,
            pellets_left,
            outcome: None,
            chase_probability: if chase_probability.is_nan() {
                DEFAULT_CHASE_PROBABILITY
            } else {
                chase_probability.clamp(0.0, 1.0)
            },
        })
    }

    pub fn player(&self) -> Pos { self.player }
    pub fn pursuer(&self) -> Pos { self.pursuer }
    pub fn player_direction(&self) -> Direction { self.player_dir }
    pub fn score(&self) -> u32 { self.score }
    pub fn pellets_left(&self) -> usize { self.pellets_left }
    pub fn outcome(&self) -> Option<ChaseOutcome> { self.outcome }
    pub fn is_over(&self) -> bool { self.outcome.is_some() }
    pub fn chase_probability(&self) -> f64 { self.chase_probability }

    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.cells.get(pos.row).and_then(|r| r.get(pos.col)).copied()
    }

    /// 方向キー入力をバッファする（最後の入力が勝つ）
    pub fn steer(&mut self, dir: Direction) {
        if !self.is_over() {
            self.buffered = Some(dir);
        }
    }

    pub fn status(&self) -> String {
        match self.outcome {
            None => format!("Puntos: {}  ·  Quedan {} píldoras", self.score, self.pellets_left),
            Some(ChaseOutcome::Won) => format!("¡Ganaste! Puntos: {}", self.score),
            Some(ChaseOutcome::Caught) => format!("AKI te atrapó. Puntos: {}", self.score),
        }
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            cells: self.cells.clone(),
            player: self.player,
            pursuer: self.pursuer,
            score: self.score,
            pellets_left: self.pellets_left,
            outcome: self.outcome,
            status: self.status(),
        }
    }

    /// 1ステップ進める。終局後は何もしない。
    pub fn tick<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        if self.is_over() {
            return;
        }

        if let Some(dir) = self.buffered {
            if self.step(self.player, dir).is_some() {
                self.player_dir = dir;
                self.buffered = None;
            }
        }
        if let Some(next) = self.step(self.player, self.player_dir) {
            self.player = next;
            self.eat();
        }

        if self.pellets_left == 0 {
            self.finish(ChaseOutcome::Won);
            return;
        }
        if self.player == self.pursuer {
            self.finish(ChaseOutcome::Caught);
            return;
        }

        self.move_pursuer(rng);
        if self.player == self.pursuer {
            self.finish(ChaseOutcome::Caught);
        }
    }

    fn eat(&mut self) {
        let Pos { row, col } = self.player;
        if self.cells[row][col] == Cell::Pellet {
            self.cells[row][col] = Cell::Empty;
            self.score += PELLET_SCORE;
            self.pellets_left -= 1;
        }
    }

    fn move_pursuer<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        let options: Vec<(Direction, Pos)> = Direction::ALL
            .into_iter()
            .filter_map(|d| self.step(self.pursuer, d).map(|p| (d, p)))
            .collect();
        if options.is_empty() {
            return;
        }

        let chosen = if rng.gen_bool(self.chase_probability) {
            options
                .iter()
                .min_by_key(|(_, p)| p.manhattan(self.player))
                .copied()
        } else {
            options.choose(rng).copied()
        };

        if let Some((dir, pos)) = chosen {
            self.pursuer_dir = dir;
            self.pursuer = pos;
            debug!(target: "grid", ?dir, row = pos.row, col = pos.col, "pursuer moved");
        }
    }

    /// `dir` 方向の隣が壁・範囲外でなければその位置
    fn step(&self, from: Pos, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = from.row.checked_add_signed(dr as isize)?;
        let col = from.col.checked_add_signed(dc as isize)?;
        let next = Pos::new(row, col);
        match self.cell(next)? {
            Cell::Wall => None,
            _ => Some(next),
        }
    }

    fn finish(&mut self, outcome: ChaseOutcome) {
        self.outcome = Some(outcome);
        info!(target: "grid", ?outcome, score = self.score, "grid chase finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_map_parses() {
        let g = GridChase::new(0.75);
        assert!(g.pellets_left() > 0);
        assert_eq!(g.cell(g.player()), Some(Cell::Empty));
        assert_eq!(g.cell(g.pursuer()), Some(Cell::Empty));
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn malformed_maps_are_rejected() {
        assert!(GridChase::from_map("", 0.5).is_err());
        assert!(GridChase::from_map("#P.#\n#G#", 0.5).is_err());
        assert!(GridChase::from_map("#P.G#\n#..P#", 0.5).is_err());
        assert!(GridChase::from_map("#P.x#\n#.G.#", 0.5).is_err());
        assert!(GridChase::from_map("#P..#", 0.5).is_err());
    }

    #[test]
    fn player_eats_pellet_and_scores() {
        let mut g = GridChase::from_map("#####\n#P..#\n#####\n#G  #\n#####", 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        g.steer(Direction::Right);
        g.tick(&mut rng);
        assert_eq!(g.player(), Pos::new(1, 2));
        assert_eq!(g.score(), PELLET_SCORE);
        assert_eq!(g.pellets_left(), 1);
    }

    #[test]
    fn blocked_buffered_direction_keeps_current_heading() {
        // 上が壁なので Up は採用されず、Right のまま進む
        let mut g = GridChase::from_map("######\n#P...#\n######\n#G   #\n######", 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        g.steer(Direction::Right);
        g.tick(&mut rng);
        g.steer(Direction::Up);
        g.tick(&mut rng);
        assert_eq!(g.player(), Pos::new(1, 3));
        assert_eq!(g.player_direction(), Direction::Right);
    }

    #[test]
    fn player_stops_at_wall() {
        let mut g = GridChase::from_map("#####\n#.P.#\n#####\n#G  #\n#####", 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        g.steer(Direction::Right);
        g.tick(&mut rng);
        g.tick(&mut rng);
        assert_eq!(g.player(), Pos::new(1, 3));
    }

    #[test]
    fn finished_game_ignores_ticks_and_input() {
        let mut g = GridChase::from_map("####\n#P.#\n####\n#G #\n####", 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        g.steer(Direction::Right);
        g.tick(&mut rng);
        assert_eq!(g.outcome(), Some(ChaseOutcome::Won));
        let snap = g.snapshot();
        g.steer(Direction::Left);
        g.tick(&mut rng);
        assert_eq!(g.player(), snap.player);
        assert_eq!(g.score(), snap.score);
    }
}
