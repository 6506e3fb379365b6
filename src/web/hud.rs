//! DOM side of the game: stats bar, typing panel, timer bar, buttons and the
//! pause / game-over overlay. Elements are created on demand so the crate works
//! on a bare page, and reused when the host page already provides them.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::game::{CharMark, Snapshot, format_score};

pub const STATS_ID: &str = "tt-stats";
pub const LIVES_ID: &str = "tt-lives";
pub const TARGET_ID: &str = "tt-target";
pub const TYPED_ID: &str = "tt-typed";
pub const TIMER_BAR_ID: &str = "tt-timer-bar";
pub const TIMER_TEXT_ID: &str = "tt-timer-text";
pub const OVERLAY_ID: &str = "tt-overlay";
pub const OVERLAY_TITLE_ID: &str = "tt-overlay-title";
pub const OVERLAY_MSG_ID: &str = "tt-overlay-msg";
pub const PAUSE_BTN_ID: &str = "tt-pause";
pub const RESUME_BTN_ID: &str = "tt-resume";
pub const RESTART_BTN_ID: &str = "tt-restart";
pub const OVERLAY_RESUME_ID: &str = "tt-overlay-resume";
pub const OVERLAY_RESTART_ID: &str = "tt-overlay-restart";

const OK_COLOR: &str = "#53ffa1";
const ERR_COLOR: &str = "#ff5d73";
const PENDING_COLOR: &str = "#9aa3b2";

const PANEL_STYLE: &str = "font-family:'Fira Code', monospace; padding:4px 10px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#e9ecf1;";
const OVERLAY_SHOWN: &str = "position:fixed; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:10px; background:rgba(5,8,20,0.72); color:#e9ecf1; font-family:'Fira Code', monospace; z-index:60;";
const OVERLAY_HIDDEN: &str = "display:none;";

fn ensure_div(
    doc: &Document,
    parent: &web_sys::Element,
    id: &str,
    tag: &str,
    style: &str,
    text: &str,
) -> Result<(), JsValue> {
    if doc.get_element_by_id(id).is_none() {
        let el = doc.create_element(tag)?;
        el.set_id(id);
        el.set_text_content(Some(text));
        el.set_attribute("style", style).ok();
        parent.append_child(&el)?;
    }
    Ok(())
}

pub fn ensure_hud(doc: &Document) -> Result<(), JsValue> {
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let body: &web_sys::Element = body.as_ref();

    let top = format!("position:fixed; top:10px; left:12px; z-index:45; {PANEL_STYLE}");
    ensure_div(doc, body, STATS_ID, "div", &top, "")?;
    let lives = format!("position:fixed; top:10px; right:12px; z-index:45; {PANEL_STYLE}");
    ensure_div(doc, body, LIVES_ID, "div", &lives, "")?;

    let panel = format!(
        "position:fixed; bottom:24px; left:50%; transform:translateX(-50%); font-size:20px; z-index:30; min-width:320px; text-align:center; {PANEL_STYLE}"
    );
    ensure_div(doc, body, TARGET_ID, "div", &panel.replace("bottom:24px", "bottom:110px"), "")?;
    ensure_div(doc, body, TYPED_ID, "div", &panel.replace("bottom:24px", "bottom:64px"), "")?;
    ensure_div(
        doc,
        body,
        TIMER_BAR_ID,
        "div",
        "position:fixed; bottom:40px; left:50%; transform:translateX(-50%); height:8px; width:320px; background:#53ffa1; border-radius:4px; z-index:30;",
        "",
    )?;
    ensure_div(doc, body, TIMER_TEXT_ID, "div", &panel, "")?;

    let buttons = "position:fixed; top:52px; left:12px; z-index:45; display:flex; gap:6px;";
    if doc.get_element_by_id("tt-buttons").is_none() {
        let row = doc.create_element("div")?;
        row.set_id("tt-buttons");
        row.set_attribute("style", buttons).ok();
        body.append_child(&row)?;
        ensure_div(doc, &row, PAUSE_BTN_ID, "button", "", "Pause")?;
        ensure_div(doc, &row, RESUME_BTN_ID, "button", "", "Resume")?;
        ensure_div(doc, &row, RESTART_BTN_ID, "button", "", "Restart")?;
    }

    if doc.get_element_by_id(OVERLAY_ID).is_none() {
        let overlay = doc.create_element("div")?;
        overlay.set_id(OVERLAY_ID);
        overlay.set_attribute("style", OVERLAY_HIDDEN).ok();
        body.append_child(&overlay)?;
        ensure_div(doc, &overlay, OVERLAY_TITLE_ID, "h2", "margin:0;", "")?;
        ensure_div(doc, &overlay, OVERLAY_MSG_ID, "p", "margin:0;", "")?;
        ensure_div(doc, &overlay, OVERLAY_RESUME_ID, "button", "", "Resume")?;
        ensure_div(doc, &overlay, OVERLAY_RESTART_ID, "button", "", "Restart")?;
    }
    Ok(())
}

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn set_html(doc: &Document, id: &str, html: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_inner_html(html);
    }
}

/// Push the snapshot into the DOM widgets.
pub fn update_hud(doc: &Document, snap: &Snapshot) {
    set_text(
        doc,
        STATS_ID,
        &format!(
            "Level {}/{}  Score {}  Streak {}",
            snap.level,
            snap.max_level,
            format_score(snap.score),
            snap.streak
        ),
    );
    set_html(doc, LIVES_ID, &hearts_html(snap.lives, snap.max_lives));
    set_text(doc, TARGET_ID, &snap.target);
    set_html(doc, TYPED_ID, &typed_html(snap));
    set_text(doc, TIMER_TEXT_ID, &snap.timer_text());
    if let Some(bar) = doc.get_element_by_id(TIMER_BAR_ID) {
        let style = format!(
            "position:fixed; bottom:40px; left:50%; transform:translateX(-50%); height:8px; width:{:.0}px; background:{}; border-radius:4px; z-index:30;",
            320.0 * snap.timer_ratio,
            if snap.timer_ratio < 0.25 { ERR_COLOR } else { OK_COLOR }
        );
        bar.set_attribute("style", &style).ok();
    }
    if let Some(overlay) = doc.get_element_by_id(OVERLAY_ID) {
        match &snap.overlay {
            Some(view) => {
                overlay.set_attribute("style", OVERLAY_SHOWN).ok();
                set_text(doc, OVERLAY_TITLE_ID, view.title);
                set_text(doc, OVERLAY_MSG_ID, &view.message);
                // Resume only makes sense while the run is still going.
                if let Some(btn) = doc.get_element_by_id(OVERLAY_RESUME_ID) {
                    let style = if snap.over { "display:none;" } else { "" };
                    btn.set_attribute("style", style).ok();
                }
            }
            None => {
                overlay.set_attribute("style", OVERLAY_HIDDEN).ok();
            }
        }
    }
}

fn escape_html(c: char, out: &mut String) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        ' ' => out.push_str("&nbsp;"),
        _ => out.push(c),
    }
}

/// Typing panel markup: typed characters green or red, then the rest of the
/// target grey (red once anything typed is wrong).
pub fn typed_html(snap: &Snapshot) -> String {
    let mut html = String::new();
    for m in &snap.chars {
        let color = match m.mark {
            CharMark::Correct => OK_COLOR,
            CharMark::Wrong | CharMark::Blocked => ERR_COLOR,
            CharMark::Pending => PENDING_COLOR,
        };
        html.push_str("<span style=\"color:");
        html.push_str(color);
        html.push_str("\">");
        escape_html(m.ch, &mut html);
        html.push_str("</span>");
    }
    html
}

/// Filled hearts for remaining lives, hollow ones for lost lives.
pub fn hearts_html(lives: u32, max_lives: u32) -> String {
    let filled = lives.min(max_lives);
    let mut html = String::new();
    for _ in 0..filled {
        html.push_str("<span style='color:#ff4d4d;font-size:16px;margin-right:6px;'>♥</span>");
    }
    for _ in filled..max_lives {
        html.push_str("<span style='color:#6b6b6b;font-size:16px;margin-right:6px;'>♡</span>");
    }
    html
}
