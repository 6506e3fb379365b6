// Browser smoke test; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_builds_canvas_and_hud() {
    typing_treasure::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("tt-canvas").is_some());
    assert!(doc.get_element_by_id("tt-overlay").is_some());
    assert!(typing_treasure::web::pause_game());
    assert!(typing_treasure::web::resume_game());
}

#[wasm_bindgen_test]
fn second_start_resizes_canvas_to_new_playfield() {
    use wasm_bindgen::JsCast;

    typing_treasure::start_game().unwrap();
    typing_treasure::start_game_with_config(r#"{"playfield_w": 640, "playfield_h": 360}"#)
        .unwrap();
    let canvas: web_sys::HtmlCanvasElement = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("tt-canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!((canvas.width(), canvas.height()), (640, 360));

    typing_treasure::start_game().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (960, 540));
}

#[wasm_bindgen_test]
fn scene_with_fireball_renders() {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use typing_treasure::game::{Game, GameConfig, HazardKind};
    use wasm_bindgen::JsCast;

    let cfg = GameConfig {
        fire_chance: 1.0,
        round_time_base: 0.01,
        round_time_floor: 0.01,
        ..GameConfig::default()
    };
    let mut game = Game::seeded(cfg, 2);
    game.step(100.0);
    let snap = game.snapshot();
    assert_eq!(snap.hazard.as_ref().map(|h| h.kind), Some(HazardKind::Fire));

    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement =
        doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(960);
    canvas.set_height(540);
    let ctx: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    typing_treasure::web::render::render_scene(&ctx, &snap, &mut SmallRng::seed_from_u64(1));
}
