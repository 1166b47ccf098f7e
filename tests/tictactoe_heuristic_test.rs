//! Tests for the heuristic opponent's priority rules and tie-breaking.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tictactoe::{
    Board, Game, GameStatus, LowestIndex, MoveOutcome, Player, Position, RandomTieBreaker, Rule,
    TieBreaker, heuristic,
};

/// Records every candidate list it is offered and answers with the last one.
#[derive(Default)]
struct Recording {
    offered: Vec<Vec<Position>>,
}

impl TieBreaker for Recording {
    fn pick(&mut self, candidates: &[Position]) -> Option<Position> {
        self.offered.push(candidates.to_vec());
        candidates.last().copied()
    }
}

fn board(notation: &str) -> Board {
    notation.parse().unwrap()
}

#[test]
fn test_immediate_win_beats_block() {
    // X X _ / O O _ / _ _ _ with X to move.
    let game = Game::replay(&[1, 4, 2, 5]).unwrap();
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.heuristic_move(&mut LowestIndex), Some(Position::TopRight));
}

#[test]
fn test_blocks_opponent_line() {
    let b = board("X__OO____");
    assert_eq!(
        heuristic::heuristic_move(&b, Player::X, &mut LowestIndex),
        Some(Position::MiddleRight)
    );
}

#[test]
fn test_win_and_block_ignore_tie_breaker() {
    let mut recorder = Recording::default();
    heuristic::heuristic_move(&board("XX_OO____"), Player::X, &mut recorder);
    heuristic::heuristic_move(&board("X__OO____"), Player::X, &mut recorder);
    heuristic::heuristic_move(&Board::new(), Player::X, &mut recorder);
    assert!(recorder.offered.is_empty());
}

#[test]
fn test_corner_candidates_are_the_empty_corners() {
    // Center and corner 1 taken, no lines in play.
    let b = board("O___X____");
    let mut recorder = Recording::default();
    let choice = heuristic::choose(&b, Player::O, &mut recorder).unwrap();

    assert_eq!(choice.rule, Rule::Corner);
    assert_eq!(choice.position, Position::BottomRight);
    assert_eq!(
        recorder.offered,
        vec![vec![Position::TopRight, Position::BottomLeft, Position::BottomRight]]
    );
}

#[test]
fn test_fallback_offers_all_empty_cells() {
    let b = board("XOX_X_OXO");
    let mut recorder = Recording::default();
    let choice = heuristic::choose(&b, Player::O, &mut recorder).unwrap();

    assert_eq!(choice.rule, Rule::Fallback);
    assert_eq!(recorder.offered, vec![vec![Position::MiddleLeft, Position::MiddleRight]]);
}

#[test]
fn test_no_move_on_finished_game() {
    let game = Game::replay(&[1, 4, 2, 5, 3]).unwrap();
    assert_eq!(game.heuristic_move(&mut LowestIndex), None);
}

#[test]
fn test_heuristic_does_not_mutate_game() {
    let game = Game::replay(&[1, 4, 2, 5]).unwrap();
    let before = game.clone();
    let _ = game.heuristic_move(&mut LowestIndex);
    assert_eq!(game, before);
}

#[test]
fn test_random_corner_choice_covers_all_corners() {
    let b = board("____X____");
    let mut tb = RandomTieBreaker::new(StdRng::seed_from_u64(2024));
    let seen: HashSet<Position> = (0..200)
        .filter_map(|_| heuristic::heuristic_move(&b, Player::O, &mut tb))
        .collect();
    let corners: HashSet<Position> = Position::CORNERS.into_iter().collect();
    assert_eq!(seen, corners);
}

#[test]
fn test_seeded_self_play_always_legal() {
    for seed in 0..50 {
        let mut x_tb = RandomTieBreaker::seeded(seed);
        let mut o_tb = RandomTieBreaker::seeded(seed + 1000);
        let mut game = Game::new();

        while !game.is_over() {
            let pos = match game.current_player() {
                Player::X => game.heuristic_move(&mut x_tb),
                Player::O => game.heuristic_move(&mut o_tb),
            }
            .expect("in-progress game has a move");
            game.place(pos).expect("heuristic move is legal");
        }

        assert!(game.move_count() <= 9);
        assert_ne!(game.status(), GameStatus::InProgress);
    }
}

#[test]
fn test_lowest_index_self_play_is_draw() {
    let mut game = Game::new();
    while let Some(pos) = game.heuristic_move(&mut LowestIndex) {
        game.place(pos).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_one_ply_heuristic_can_be_forked() {
    // O answers 1 with the center, 9 with corner 3, then must block 7,
    // leaving X two threats (4 and 8).
    let mut game = Game::new();
    game.make_move(1).unwrap();
    let o1 = game.heuristic_move(&mut LowestIndex).unwrap();
    assert_eq!(o1, Position::Center);
    game.place(o1).unwrap();

    game.make_move(9).unwrap();
    let o2 = game.heuristic_move(&mut LowestIndex).unwrap();
    assert_eq!(o2, Position::TopRight);
    game.place(o2).unwrap();

    game.make_move(7).unwrap();
    let o3 = game.heuristic_move(&mut LowestIndex).unwrap();
    assert_eq!(o3, Position::MiddleLeft);
    game.place(o3).unwrap();

    assert_eq!(game.make_move(8), Ok(MoveOutcome::Win(Player::X)));
}
