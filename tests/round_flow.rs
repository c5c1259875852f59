// Integration tests (native) for the `carrot-patch` crate.
// These tests avoid wasm-specific functionality and exercise the pure round
// logic and placement math so they can run under `cargo test` on the host.

use carrot_patch::game::field::{ITEM_SIZE, scatter};
use carrot_patch::game::rng::FieldRng;
use carrot_patch::game::round::{ClickOutcome, ItemKind, Phase, Round, TickOutcome};
use carrot_patch::{CARROT_COUNT, ROUND_DURATION_SECS};

fn fresh_round() -> Round {
    let mut round = Round::new(CARROT_COUNT);
    round.begin(ROUND_DURATION_SECS);
    round
}

// Click every carrot before the clock runs out: the round ends won and the
// countdown can no longer move state.
#[test]
fn full_harvest_wins_and_freezes_the_clock() {
    let mut round = fresh_round();
    for left in (1..CARROT_COUNT).rev() {
        assert_eq!(
            round.item_clicked(ItemKind::Carrot),
            ClickOutcome::Scored { left }
        );
    }
    assert_eq!(round.item_clicked(ItemKind::Carrot), ClickOutcome::Cleared);
    assert_eq!(round.phase(), Phase::Ended);
    assert_eq!(round.carrots_left(), 0);

    let frozen = round.remaining_secs();
    assert_eq!(round.tick(), TickOutcome::Ignored);
    assert_eq!(round.remaining_secs(), frozen);
}

// One bug click ends the round lost no matter how much score or time is left.
#[test]
fn bug_click_loses_with_time_on_the_clock() {
    let mut round = fresh_round();
    assert_eq!(round.tick(), TickOutcome::Counting { remaining: ROUND_DURATION_SECS - 1 });
    round.item_clicked(ItemKind::Carrot);
    assert_eq!(round.item_clicked(ItemKind::Bug), ClickOutcome::Struck);
    assert_eq!(round.phase(), Phase::Ended);
    // The display would stay frozen at the last rendered value.
    assert_eq!(round.remaining_secs(), ROUND_DURATION_SECS - 1);
}

// Let the timer run out below the target: lost.
#[test]
fn expiry_short_of_target_loses() {
    let mut round = fresh_round();
    round.item_clicked(ItemKind::Carrot);
    for _ in 1..ROUND_DURATION_SECS {
        assert!(matches!(round.tick(), TickOutcome::Counting { .. }));
    }
    assert_eq!(round.tick(), TickOutcome::Expired { win: false });
}

// Replay after any ending starts from a clean slate.
#[test]
fn replay_resets_regardless_of_prior_ending() {
    let mut round = fresh_round();
    round.item_clicked(ItemKind::Bug);
    assert_eq!(round.phase(), Phase::Ended);

    round.begin(ROUND_DURATION_SECS);
    assert!(round.is_running());
    assert_eq!(round.score(), 0);
    assert_eq!(round.carrots_left(), CARROT_COUNT);
    assert_eq!(round.remaining_secs(), ROUND_DURATION_SECS);
}

// Manual stop aborts the running round; input afterwards is inert until replay.
#[test]
fn manual_stop_then_replay() {
    let mut round = fresh_round();
    assert!(round.abort());
    assert_eq!(round.item_clicked(ItemKind::Carrot), ClickOutcome::Ignored);
    assert_eq!(round.tick(), TickOutcome::Ignored);

    round.begin(ROUND_DURATION_SECS);
    assert_eq!(
        round.item_clicked(ItemKind::Carrot),
        ClickOutcome::Scored { left: CARROT_COUNT - 1 }
    );
}

// Spawning N items of a kind yields exactly N in-bounds positions.
#[test]
fn spawn_positions_match_count_and_bounds() {
    let mut rng = FieldRng::from_seed(0xCA0_007);
    let (w, h) = (640.0, 360.0);
    let spots = scatter(&mut rng, CARROT_COUNT, w, h);
    assert_eq!(spots.len(), CARROT_COUNT as usize);
    for (x, y) in spots {
        assert!(x >= 0.0 && x <= w - ITEM_SIZE);
        assert!(y >= 0.0 && y <= h - ITEM_SIZE);
    }
}
