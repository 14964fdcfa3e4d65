//! Browser binding
//!
//! The page forwards `keydown`/`keyup`/`mousemove` events, calls `step` from
//! its animation frame callback and paints the returned JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;
use crate::input::InputAdapter;
use crate::sim::GameOutcome;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // A second init (page re-import) is harmless
    let _ = console_log::init_with_level(log::Level::Info);
}

fn parse_config(config_json: Option<String>) -> Result<GameConfig, JsValue> {
    match config_json {
        Some(json) => GameConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string())),
        None => Ok(GameConfig::default()),
    }
}

/// One game session driven by the page
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    input: InputAdapter,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a session; `config_json` may omit any field
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebGame, JsValue> {
        let mut web_game = WebGame {
            game: Game::new(),
            input: InputAdapter::new(),
        };
        web_game.reset(config_json)?;
        Ok(web_game)
    }

    /// Restart with a new (or default) configuration
    pub fn reset(&mut self, config_json: Option<String>) -> Result<(), JsValue> {
        let config = parse_config(config_json)?;
        self.input.clear();
        self.game
            .reset(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `KeyboardEvent.key` of a key-down; returns whether the game uses it
    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.on_key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.on_key_up(key)
    }

    /// Pointer x relative to the canvas left edge
    pub fn pointer_move(&mut self, canvas_x: f32) {
        self.input.on_pointer_move(canvas_x);
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.set_autopilot(enabled);
    }

    /// Advance one tick and return the snapshot as JSON
    pub fn step(&mut self) -> Result<String, JsValue> {
        let signals = self.input.signals();
        let result = self
            .game
            .step(&signals)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(&result.snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// "InProgress", "Won" or "Lost"
    pub fn outcome(&self) -> String {
        match self.game.outcome().unwrap_or_default() {
            GameOutcome::InProgress => "InProgress",
            GameOutcome::Won => "Won",
            GameOutcome::Lost => "Lost",
        }
        .to_string()
    }
}
