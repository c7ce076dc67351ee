use aki_tui::games::grid_chase::{ChaseOutcome, Direction, GridChase, Pos};
use rand::SeedableRng;
use rand::rngs::StdRng;
mod common;

#[ctor::ctor]
fn _init() { common::init(); }

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn eating_last_pellet_on_pursuer_square_is_a_win() {
    let mut g = GridChase::from_map("#####\n#P.G#\n#####", 1.0).expect("map");
    let mut rng = rng();

    // 1 tick目: プレイヤーは左の壁で止まり、追跡者が最後のペレットの上へ
    g.tick(&mut rng);
    assert_eq!(g.player(), Pos::new(1, 1));
    assert_eq!(g.pursuer(), Pos::new(1, 2));
    assert!(!g.is_over());

    g.steer(Direction::Right);
    g.tick(&mut rng);
    assert_eq!(g.player(), Pos::new(1, 2));
    assert_eq!(g.pellets_left(), 0);
    assert_eq!(g.outcome(), Some(ChaseOutcome::Won));
    // 勝利した tick では追跡者は動かない
    assert_eq!(g.pursuer(), Pos::new(1, 2));
    assert_eq!(g.score(), 10);
}

#[test]
fn walking_into_pursuer_is_caught() {
    let mut g = GridChase::from_map("#####\n#P G#\n#.###\n#####", 1.0).expect("map");
    let mut rng = rng();
    g.tick(&mut rng);
    assert_eq!(g.pursuer(), Pos::new(1, 2));

    g.steer(Direction::Right);
    g.tick(&mut rng);
    assert_eq!(g.outcome(), Some(ChaseOutcome::Caught));
    assert_eq!(g.pellets_left(), 1);
    assert!(g.status().starts_with("AKI te atrapó"));
}

#[test]
fn pursuer_closes_in_when_always_chasing() {
    let mut g = GridChase::from_map("#####\n#PG #\n#.###\n#####", 1.0).expect("map");
    g.tick(&mut rng());
    assert_eq!(g.pursuer(), Pos::new(1, 1));
    assert_eq!(g.outcome(), Some(ChaseOutcome::Caught));
}

#[test]
fn score_tracks_pellets_eaten_on_default_map() {
    let mut g = GridChase::new(0.75);
    let initial = g.pellets_left();
    let mut rng = rng();
    let dirs = Direction::ALL;
    for i in 0..2_000 {
        g.steer(dirs[(i / 7) % dirs.len()]);
        g.tick(&mut rng);
        let eaten = (initial - g.pellets_left()) as u32;
        assert_eq!(g.score(), eaten * 10);
    }
    let snap = g.snapshot();
    assert_eq!(snap.score, g.score());
    assert_eq!(snap.status, g.status());
}

#[test]
fn out_of_range_chase_probability_is_sanitized() {
    let map = "#####\n#P.G#\n#####";
    let g = GridChase::from_map(map, f64::NAN).expect("map");
    assert_eq!(g.chase_probability(), aki_tui::config::DEFAULT_CHASE_PROBABILITY);
    assert_eq!(GridChase::from_map(map, 3.0).expect("map").chase_probability(), 1.0);
    assert_eq!(GridChase::from_map(map, -1.0).expect("map").chase_probability(), 0.0);

    // NaN を渡しても tick は進む
    let mut g = GridChase::from_map(map, f64::NAN).expect("map");
    g.tick(&mut rng());
    assert_eq!(g.pursuer(), Pos::new(1, 2));
}
