//! 黒番AI: 取れる駒があれば最も価値の高いものを取り、無ければランダムに指す。

use rand::Rng;
use rand::seq::SliceRandom;

use super::board::{Board, Color, Move};

/// AIの手を選ぶ。合法手が無ければ `None`。
///
/// 同じ価値の取り方が複数ある場合は走査順で先に見つかったものを選ぶ。
pub fn choose_move<G: Rng + ?Sized>(board: &Board, color: Color, rng: &mut G) -> Option<Move> {
    let moves = board.all_moves(color);

    let mut best: Option<(u32, Move)> = None;
    for mv in moves.iter().filter(|m| m.is_capture()) {
        let value = mv.captured.map(|p| p.kind.value()).unwrap_or(0);
        if best.is_none_or(|(v, _)| value > v) {
            best = Some((value, *mv));
        }
    }
    if let Some((_, mv)) = best {
        return Some(mv);
    }

    moves.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::board::{Piece, PieceKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn prefers_highest_value_capture() {
        let mut b = Board::empty();
        b.set(0, 0, Some(Piece::new(Color::Black, PieceKind::King)));
        b.set(4, 4, Some(Piece::new(Color::Black, PieceKind::Queen)));
        b.set(4, 6, Some(Piece::new(Color::White, PieceKind::Pawn)));
        b.set(6, 4, Some(Piece::new(Color::White, PieceKind::Rook)));
        let mut rng = StdRng::seed_from_u64(1);
        let mv = choose_move(&b, Color::Black, &mut rng).unwrap();
        assert_eq!((mv.to_row, mv.to_col), (6, 4));
        assert_eq!(mv.captured.map(|p| p.kind), Some(PieceKind::Rook));
    }

    #[test]
    fn ties_go_to_first_encountered() {
        let mut b = Board::empty();
        b.set(2, 2, Some(Piece::new(Color::Black, PieceKind::Rook)));
        b.set(2, 0, Some(Piece::new(Color::White, PieceKind::Knight)));
        b.set(2, 5, Some(Piece::new(Color::White, PieceKind::Bishop)));
        let mut rng = StdRng::seed_from_u64(3);
        let mv = choose_move(&b, Color::Black, &mut rng).unwrap();
        // 縦方向を先に、次に左 (2,0)、右 (2,5) の順に生成される
        assert_eq!((mv.to_row, mv.to_col), (2, 0));
    }

    #[test]
    fn no_pieces_no_move() {
        let b = Board::empty();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(choose_move(&b, Color::Black, &mut rng).is_none());
    }

    #[test]
    fn random_move_is_legal() {
        let b = Board::standard();
        let legal = b.all_moves(Color::Black);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let mv = choose_move(&b, Color::Black, &mut rng).unwrap();
            assert!(legal.contains(&mv));
        }
    }
}
