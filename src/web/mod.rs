//! Browser runtime: canvas + DOM setup, keyboard and button listeners, and the
//! `requestAnimationFrame` loop that drives a [`Game`] and draws its snapshot.
//!
//! The game lives in a thread-local cell; every JS callback borrows it for
//! the duration of one call, so input, delayed events and frame updates never
//! interleave.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::game::{Game, GameConfig, Key};

pub mod hud;
pub mod logger;
pub mod render;

const CANVAS_ID: &str = "tt-canvas";

struct Runtime {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    game: Game,
    /// Camera-shake jitter only; gameplay randomness stays inside `Game`.
    jitter: SmallRng,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

/// Run `f` against the live game, if the runtime has been started.
fn with_game<T>(f: impl FnOnce(&mut Game) -> T) -> Option<T> {
    RUNTIME.with(|cell| cell.borrow_mut().as_mut().map(|rt| f(&mut rt.game)))
}

pub fn start(cfg: GameConfig) -> Result<(), JsValue> {
    logger::init(log::LevelFilter::Info);

    // A second start only swaps in a fresh game; listeners and the loop stay.
    let restarted = RUNTIME.with(|cell| {
        if let Some(rt) = cell.borrow_mut().as_mut() {
            fit_canvas(&rt.canvas, &cfg);
            rt.game = Game::new(cfg.clone());
            true
        } else {
            false
        }
    });
    if restarted {
        return Ok(());
    }

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        c.set_attribute("style", "display:block; margin:40px auto 0; border-radius:14px; border:2px solid #222; box-shadow:0 0 32px 0 rgba(0,0,0,0.25);").ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    fit_canvas(&canvas, &cfg);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    hud::ensure_hud(&doc)?;

    RUNTIME.with(|cell| {
        cell.replace(Some(Runtime {
            canvas,
            ctx,
            game: Game::new(cfg),
            jitter: SmallRng::from_entropy(),
        }))
    });

    install_keyboard(&win)?;
    install_buttons(&doc)?;
    start_loop();
    log::info!("typing treasure started");
    Ok(())
}

fn fit_canvas(canvas: &HtmlCanvasElement, cfg: &GameConfig) {
    canvas.set_width(cfg.playfield_w as u32);
    canvas.set_height(cfg.playfield_h as u32);
}

fn install_keyboard(win: &web_sys::Window) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        // Keep the page from scrolling on space / arrows; space is still typed.
        if matches!(evt.code().as_str(), "Space" | "ArrowUp" | "ArrowDown") {
            evt.prevent_default();
        }
        if evt.ctrl_key() || evt.meta_key() || evt.alt_key() {
            return;
        }
        let key = Key::from_dom(&evt.key());
        if key == Key::Backspace {
            evt.prevent_default();
        }
        with_game(|g| g.handle_key(key));
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn on_click(doc: &web_sys::Document, id: &str, action: fn(&mut Game)) -> Result<(), JsValue> {
    let Some(el) = doc.get_element_by_id(id) else {
        return Ok(());
    };
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        with_game(action);
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn install_buttons(doc: &web_sys::Document) -> Result<(), JsValue> {
    on_click(doc, hud::PAUSE_BTN_ID, |g| {
        g.pause();
    })?;
    on_click(doc, hud::RESUME_BTN_ID, |g| {
        g.resume();
    })?;
    on_click(doc, hud::OVERLAY_RESUME_ID, |g| {
        g.resume();
    })?;
    on_click(doc, hud::RESTART_BTN_ID, |g| g.restart())?;
    on_click(doc, hud::OVERLAY_RESTART_ID, |g| g.restart())?;
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        RUNTIME.with(|cell| {
            if let Some(rt) = cell.borrow_mut().as_mut() {
                tick(rt, ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(f: &FrameCallback) {
    if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn tick(rt: &mut Runtime, now_ms: f64) {
    rt.game.frame(now_ms);
    let snap = rt.game.snapshot();
    rt.ctx.clear_rect(
        0.0,
        0.0,
        rt.canvas.width() as f64,
        rt.canvas.height() as f64,
    );
    render::render_scene(&rt.ctx, &snap, &mut rt.jitter);
    if let Some(doc) = window().and_then(|w| w.document()) {
        hud::update_hud(&doc, &snap);
    }
}

// --- Command surface for host pages -------------------------------------------

#[wasm_bindgen]
pub fn pause_game() -> bool {
    with_game(|g| g.pause()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn resume_game() -> bool {
    with_game(|g| g.resume()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn restart_game() {
    with_game(|g| g.restart());
}

/// Current snapshot as JSON, or `undefined` before the game starts.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn snapshot_json() -> Result<Option<String>, JsValue> {
    match with_game(|g| g.snapshot_json()) {
        Some(Ok(json)) => Ok(Some(json)),
        Some(Err(e)) => Err(JsValue::from_str(&e.to_string())),
        None => Ok(None),
    }
}
