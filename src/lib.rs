//! Typing Treasure core crate.
//!
//! A dungeon of seven rooms, each sealed by a door that shows a word (plain,
//! scrambled or chunked). Type it before the timer runs out to open the door;
//! miss and a fireball or arrow costs you a life. The platform-independent
//! gameplay lives in [`game`]; [`web`] wires it to a canvas, the DOM and the
//! browser animation loop.

use wasm_bindgen::prelude::*;

pub mod game;
pub mod web;

pub use game::{Game, GameConfig, Key, Snapshot};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Door words. Lowercase ASCII only; every entry is typeable on a plain keyboard.
// -----------------------------------------------------------------------------

pub const WORDS: &[&str] = &[
    "brave", "shield", "mystic", "ember", "dragon", "vault", "sapphire", "quest", "shadow",
    "riddle", "cipher", "eclipse", "onyx", "phoenix", "valor", "glyph", "artifact", "runic",
    "emberfall", "starforge",
];

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())
}

/// Start with a JSON config; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let cfg = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    web::start(cfg)
}
