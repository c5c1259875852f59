//! Carrot Patch core crate.
//!
//! A timed browser clicker: a field of carrot and bug sprites, a countdown,
//! and a single play/stop control. Clicking every carrot before the clock
//! runs out wins the round; clicking a bug ends it on the spot. The crate
//! builds its own DOM scaffold at mount time and exposes `start_game()` /
//! `dispose_game()` to the hosting page.

use wasm_bindgen::prelude::*;

pub mod game;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// -----------------------------------------------------------------------------
// Round tuning constants (shared between controller, spawner, and tests)
// -----------------------------------------------------------------------------

/// Carrots spawned per round; also the score needed to win.
pub const CARROT_COUNT: u32 = 5;
/// Bugs spawned per round.
pub const BUG_COUNT: u32 = 5;
/// Countdown length of one round, in seconds.
pub const ROUND_DURATION_SECS: u32 = 5;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Page-facing entrypoints
// -----------------------------------------------------------------------------

/// Mounts the game scaffold under `document.body` and wires all input.
/// The game starts Idle; the toggle button begins the first round.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::mount()
}

/// Tears the game down: removes listeners, cancels any running countdown,
/// stops audio, and drops the controller. Safe to call when never mounted.
#[wasm_bindgen]
pub fn dispose_game() {
    game::unmount();
}
