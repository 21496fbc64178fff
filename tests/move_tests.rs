//! Move validation, execution and scoring tests.
//!
//! These tests verify the rule engine through the public API:
//! - Stacking rules for foundations and tableau
//! - Score accounting, including the foundation round-trip penalty
//! - Stock draws and recycling
//! - Win detection

use klondike_engine::piles::PileKind;
use klondike_engine::{
    is_valid_move, Card, FaceDownPolicy, GameConfig, GameError, GameState, Location, MoveKind,
    MoveRequest, Pile, Rank, Suit, Table,
};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn cards(text: &[&str]) -> Vec<Card> {
    text.iter().map(|s| card(s)).collect()
}

/// Build a state from explicit piles; every unused card goes to the stock.
fn layout(piles: &[(Location, &[&str])]) -> GameState {
    let mut table = Table::default();
    let mut used = Vec::new();
    for &(location, text) in piles {
        let placed = cards(text);
        used.extend(placed.iter().copied());
        *table.pile_mut(location).unwrap() = Pile::from_cards(placed);
    }
    let rest = klondike_engine::core::build_deck()
        .into_iter()
        .filter(|c| !used.contains(c))
        .collect();
    table.stock = Pile::from_cards(rest);
    GameState::from_table(table, FaceDownPolicy::Tracked).unwrap()
}

/// Test the validator examples.
#[test]
fn test_validator_table() {
    let empty: &[Card] = &[];

    assert!(is_valid_move(&cards(&["Ah"]), PileKind::Foundation, empty));
    assert!(is_valid_move(&cards(&["2h"]), PileKind::Foundation, &cards(&["Ah"])));
    assert!(!is_valid_move(&cards(&["2s"]), PileKind::Foundation, &cards(&["Ah"])));
    assert!(is_valid_move(&cards(&["Kc"]), PileKind::Tableau, empty));
    assert!(is_valid_move(&cards(&["Qh"]), PileKind::Tableau, &cards(&["Ks"])));
    assert!(!is_valid_move(&cards(&["Qs"]), PileKind::Tableau, &cards(&["Kc"])));
}

/// Test that a red Jack on a red King is rejected and nothing changes.
#[test]
fn test_rejected_move_is_side_effect_free() {
    let mut state = layout(&[
        (Location::Tableau(0), &["Kd"]),
        (Location::Tableau(1), &["Jh"]),
    ]);
    let before = state.clone();

    let result = state.request_move(MoveRequest::new(Location::Tableau(1), Location::Tableau(0)));

    assert_eq!(result, Err(GameError::InvalidMove));
    assert_eq!(state, before);
    assert_eq!(state.tableau()[0].cards(), &[card("Kd")]);
    assert_eq!(state.tableau()[1].cards(), &[card("Jh")]);
}

/// Test the -5 net of a waste -> foundation -> tableau round trip.
#[test]
fn test_foundation_round_trip_score() {
    let mut state = layout(&[(Location::Waste, &["Ah"]), (Location::Tableau(0), &["2s"])]);

    state
        .request_move(MoveRequest::new(Location::Waste, Location::Foundation(0)))
        .unwrap();
    assert_eq!(state.score(), 10);

    state
        .request_move(MoveRequest::new(Location::Foundation(0), Location::Tableau(0)))
        .unwrap();
    assert_eq!(state.score(), -5);
    assert_eq!(state.tableau()[0].cards(), &[card("2s"), card("Ah")]);
}

/// Test that tableau-to-tableau and waste-to-tableau moves score nothing.
#[test]
fn test_neutral_moves_score_zero() {
    let mut state = layout(&[
        (Location::Waste, &["Jd"]),
        (Location::Tableau(0), &["Qs"]),
        (Location::Tableau(1), &["10c"]),
    ]);

    state
        .request_move(MoveRequest::new(Location::Waste, Location::Tableau(0)))
        .unwrap();
    state
        .request_move(MoveRequest::new(Location::Tableau(1), Location::Tableau(0)))
        .unwrap();

    assert_eq!(state.score(), 0);
    assert_eq!(
        state.tableau()[0].cards(),
        &[card("Qs"), card("Jd"), card("10c")]
    );
}

/// Test moving a whole face-up run onto an empty column.
#[test]
fn test_king_run_to_empty_column() {
    let mut state = layout(&[(Location::Tableau(3), &["Kh", "Qc", "Jd"])]);

    let record = state
        .request_move(MoveRequest::with_run(Location::Tableau(3), Location::Tableau(5), 3))
        .unwrap();

    assert_eq!(record.cards.as_slice(), cards(&["Kh", "Qc", "Jd"]).as_slice());
    assert!(state.tableau()[3].is_empty());
    assert_eq!(state.tableau()[5].len(), 3);
}

/// Test stock exhaustion and recycling.
#[test]
fn test_stock_exhaustion_and_recycle() {
    let mut state = GameState::new_game(&GameConfig::new().with_seed(11));
    let original_stock = state.stock().cards().to_vec();

    for _ in 0..original_stock.len() {
        let record = state.draw_or_recycle();
        assert_eq!(record.kind, MoveKind::Draw);
    }
    assert!(state.stock().is_empty());
    let waste = state.waste().cards().to_vec();
    assert_eq!(waste.len(), 24);

    let recycle = state.draw_or_recycle();
    assert_eq!(recycle.kind, MoveKind::Recycle);
    assert_eq!(recycle.cards.as_slice(), waste.as_slice());
    assert!(state.waste().is_empty());
    let mut reversed = waste.clone();
    reversed.reverse();
    assert_eq!(state.stock().cards(), reversed.as_slice());
    assert_eq!(state.stock().cards(), original_stock.as_slice());

    // Drawing resumes normally from the refilled stock.
    let next = state.draw_or_recycle();
    assert_eq!(next.kind, MoveKind::Draw);
    assert_eq!(next.cards.as_slice(), &[*original_stock.last().unwrap()]);
    assert_eq!(state.waste().len(), 1);
    assert_eq!(state.stock().len(), 23);
    assert_eq!(state.score(), 0);
}

/// Test that move records match the log.
#[test]
fn test_move_log_records_every_operation() {
    let mut state = layout(&[(Location::Waste, &["Ac"])]);

    let drawn = state.draw_or_recycle();
    state.undo().unwrap();
    let moved = state
        .request_move(MoveRequest::new(Location::Waste, Location::Foundation(3)))
        .unwrap();
    let _ = state.request_move(MoveRequest::new(Location::Waste, Location::Foundation(0)));

    assert_eq!(drawn.kind, MoveKind::Draw);
    assert_eq!(state.moves().len(), 1);
    assert_eq!(state.moves().back(), Some(&moved));
}

fn foundations_through(table: &mut Table, last: Rank) {
    for (pile, suit) in table.foundations.iter_mut().zip(Suit::ALL) {
        for rank in Rank::ALL.into_iter().filter(|&r| r <= last) {
            pile.push(Card::new(rank, suit));
        }
    }
}

/// Test win detection boundaries.
#[test]
fn test_win_requires_all_thirteen() {
    let mut table = Table::default();
    foundations_through(&mut table, Rank::Queen);
    table.stock = Pile::from_cards(cards(&["Kh", "Kd", "Kc", "Ks"]));
    let twelve = GameState::from_table(table.clone(), FaceDownPolicy::Tracked).unwrap();
    assert!(!twelve.is_won());

    let mut full = Table::default();
    foundations_through(&mut full, Rank::King);
    let won = GameState::from_table(full, FaceDownPolicy::Tracked).unwrap();
    assert!(won.is_won());

    // Three full suits and one short is not a win.
    let mut almost = Table::default();
    foundations_through(&mut almost, Rank::King);
    let king = almost.foundations[3].pop().unwrap();
    almost.waste.push(king);
    let almost = GameState::from_table(almost, FaceDownPolicy::Tracked).unwrap();
    assert!(!almost.is_won());
}

/// Test finishing a game by moving the last four Kings.
#[test]
fn test_finishing_moves_win() {
    let mut table = Table::default();
    foundations_through(&mut table, Rank::Queen);
    table.waste = Pile::from_cards(cards(&["Kh"]));
    table.tableau[0] = Pile::from_cards(cards(&["Kd"]));
    table.tableau[1] = Pile::from_cards(cards(&["Kc"]));
    table.tableau[2] = Pile::from_cards(cards(&["Ks"]));
    let mut state = GameState::from_table(table, FaceDownPolicy::Tracked).unwrap();

    state.auto_move_to_foundation(Location::Waste).unwrap();
    for i in 0..3 {
        assert!(!state.is_won());
        state.auto_move_to_foundation(Location::Tableau(i)).unwrap();
    }

    assert!(state.is_won());
    assert_eq!(state.score(), 40);
}

/// Test that malformed layouts are refused.
#[test]
fn test_from_table_rejects_partial_deck() {
    let mut table = Table::default();
    table.stock = Pile::from_cards(cards(&["Ah", "2h"]));

    assert!(matches!(
        GameState::from_table(table, FaceDownPolicy::Tracked),
        Err(GameError::InvalidLayout(_))
    ));
}
