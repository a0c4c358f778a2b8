//! Whole-match behavior through the public API

use multiball_pong::MatchConfig;
use multiball_pong::consts::{BALL_MAX_SPEED, BALL_MIN_SPEED};
use multiball_pong::sim::{
    MatchEvent, MatchState, PaddleCommand, PaddleRole, TickInput, seeded, tick,
};

fn scripted_input(t: u64) -> TickInput {
    let command = match (t / 37) % 3 {
        0 => PaddleCommand::Up,
        1 => PaddleCommand::Down,
        _ => PaddleCommand::Idle,
    };
    TickInput::player(command)
}

fn run(seed: u64, ticks: u64) -> MatchState {
    let mut rng = seeded(seed);
    let mut state = MatchState::new(&MatchConfig::default(), &mut rng).unwrap();
    for t in 0..ticks {
        tick(&mut state, &scripted_input(t), &mut rng);
    }
    state
}

#[test]
fn test_deterministic_replay() {
    let a = run(1234, 2000);
    let b = run(1234, 2000);

    assert_eq!(a.score, b.score);
    assert_eq!(a.left, b.left);
    assert_eq!(a.right, b.right);
    for (x, y) in a.balls.iter().zip(&b.balls) {
        assert_eq!(x.pos.x.to_bits(), y.pos.x.to_bits());
        assert_eq!(x.pos.y.to_bits(), y.pos.y.to_bits());
        assert_eq!(x.vel.x.to_bits(), y.vel.x.to_bits());
        assert_eq!(x.vel.y.to_bits(), y.vel.y.to_bits());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let a = run(1, 50);
    let b = run(2, 50);
    assert_ne!(a.balls, b.balls);
}

#[test]
fn test_match_invariants_hold_every_tick() {
    let mut rng = seeded(77);
    let mut state = MatchState::new(&MatchConfig::default(), &mut rng).unwrap();
    let roster = state.balls.len();
    let mut last = state.score;

    for t in 0..3000 {
        tick(&mut state, &scripted_input(t), &mut rng);

        // Balls are never created or destroyed
        assert_eq!(state.balls.len(), roster);

        // Paddles stay inside the arena
        for paddle in [&state.left, &state.right] {
            assert!(paddle.pos.y >= state.arena.top);
            assert!(paddle.pos.y <= state.arena.bottom() - paddle.height);
        }

        // Score only grows, by exactly the number of exits this tick
        let exits = state
            .events
            .iter()
            .filter(|e| matches!(e, MatchEvent::Scored { .. }))
            .count() as u32;
        assert!(state.score.player >= last.player);
        assert!(state.score.opponent >= last.opponent);
        assert_eq!(state.score.total() - last.total(), exits);

        // A ball scores at most once per tick and is re-served from the center
        for event in &state.events {
            if let MatchEvent::Scored { ball, .. } = *event {
                let same = state
                    .events
                    .iter()
                    .filter(|e| matches!(e, MatchEvent::Scored { ball: b, .. } if *b == ball))
                    .count();
                assert_eq!(same, 1);

                let b = &state.balls[ball];
                assert_eq!(b.pos, state.arena.center());
                for c in [b.vel.x.abs(), b.vel.y.abs()] {
                    assert!((BALL_MIN_SPEED..BALL_MAX_SPEED).contains(&c));
                }
            }
        }
        last = state.score;
    }

    assert_eq!(state.ticks, 3000);
}

#[test]
fn test_patrol_paddles_sweep_without_input() {
    let mut config = MatchConfig::default();
    config.left_paddle.role = PaddleRole::Patrol;
    config.right_paddle.role = PaddleRole::Patrol;
    config.balls.clear();

    let mut rng = seeded(5);
    let mut state = MatchState::new(&config, &mut rng).unwrap();
    let mut seen_top = false;
    let mut seen_bottom = false;
    for _ in 0..500 {
        tick(&mut state, &TickInput::default(), &mut rng);
        seen_top |= state.right.pos.y == state.arena.top;
        seen_bottom |= state.right.pos.y == state.arena.bottom() - state.right.height;
    }
    assert!(seen_top && seen_bottom);
    assert_eq!(state.score.total(), 0);
}
