//! Canvas drawing of a game snapshot: dungeon backdrop, door, player,
//! hazard and the treasure chest on the last level.

use rand::Rng;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use crate::game::{HazardKind, Snapshot};

pub fn render_scene<R: Rng>(ctx: &CanvasRenderingContext2d, snap: &Snapshot, jitter: &mut R) {
    // Camera shake: random offset while frames remain.
    let (ox, oy) = if snap.shake_frames > 0 {
        (jitter.gen_range(-3.0..3.0), jitter.gen_range(-2.0..2.0))
    } else {
        (0.0, 0.0)
    };
    ctx.save();
    ctx.translate(ox, oy).ok();

    draw_background(ctx, snap.playfield_w, snap.playfield_h);
    if snap.treasure_visible {
        draw_treasure(ctx, snap.playfield_w, snap.playfield_h);
    }
    draw_door(ctx, snap);
    draw_player(ctx, snap);
    draw_hazard(ctx, snap);

    // Ground shadow under the player
    let p = &snap.player;
    ctx.set_fill_style_str("rgba(0,0,0,0.35)");
    ctx.begin_path();
    ctx.ellipse(
        p.x + p.w / 2.0,
        snap.playfield_h - 86.0,
        24.0,
        8.0,
        0.0,
        0.0,
        std::f64::consts::TAU,
    )
    .ok();
    ctx.fill();

    ctx.restore();
}

fn with_stops(grad: CanvasGradient, stops: &[(f32, &str)]) -> CanvasGradient {
    for (offset, color) in stops {
        grad.add_color_stop(*offset, color).ok();
    }
    grad
}

fn vertical_gradient(
    ctx: &CanvasRenderingContext2d,
    top: f64,
    bottom: f64,
    stops: &[(f32, &str)],
) -> CanvasGradient {
    with_stops(ctx.create_linear_gradient(0.0, top, 0.0, bottom), stops)
}

fn draw_background(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    // Dungeon sky, darkening toward the floor.
    let sky = vertical_gradient(
        ctx,
        0.0,
        h,
        &[(0.0, "#0f1330"), (0.6, "#111633"), (1.0, "#0c1026")],
    );
    ctx.set_fill_style_canvas_gradient(&sky);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Far columns
    ctx.set_global_alpha(0.06);
    ctx.set_fill_style_str("#a4b1ff");
    let mut x = 0.0;
    while x < w {
        ctx.fill_rect(x, 80.0, 36.0, h - 240.0);
        x += 52.0;
    }
    ctx.set_global_alpha(1.0);

    // Floor tiles
    let mut i = 0;
    let mut x = 0.0;
    while x < w {
        ctx.set_fill_style_str(if i % 2 == 1 { "#1b2147" } else { "#1a1f40" });
        ctx.fill_rect(x, h - 80.0, 40.0, 80.0);
        x += 40.0;
        i += 1;
    }
    ctx.set_fill_style_str("rgba(255,255,255,0.08)");
    ctx.fill_rect(0.0, h - 80.0, w, 2.0);
}

fn draw_door(ctx: &CanvasRenderingContext2d, snap: &Snapshot) {
    let d = &snap.door;
    ctx.set_fill_style_str("#2b2f55");
    ctx.fill_rect(d.x - 8.0, d.y - 8.0, d.w + 16.0, d.h + 16.0);

    // Two leaves sliding apart as the door opens
    let leaf_w = (d.w / 2.0) * (1.0 - snap.door_open);
    ctx.set_fill_style_str("#5a628c");
    ctx.fill_rect(d.x, d.y, leaf_w, d.h);
    ctx.fill_rect(d.x + d.w - leaf_w, d.y, leaf_w, d.h);

    ctx.set_fill_style_str("rgba(255,255,255,0.12)");
    for i in 0..5 {
        let yy = d.y + 10.0 + i as f64 * (d.h - 20.0) / 4.0;
        ctx.fill_rect(d.x + 6.0, yy, d.w - 12.0, 2.0);
    }

    if snap.door_open < 0.99 {
        ctx.set_font("bold 22px ui-sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str("#e9ecf1");
        ctx.fill_text(&snap.target, d.x + d.w / 2.0, d.y + d.h / 2.0)
            .ok();
    }
}

fn draw_player(ctx: &CanvasRenderingContext2d, snap: &Snapshot) {
    let p = &snap.player;
    let body = vertical_gradient(ctx, p.y, p.y + p.h, &[(0.0, "#8fd7ff"), (1.0, "#59b6ff")]);
    ctx.set_fill_style_canvas_gradient(&body);
    ctx.fill_rect(p.x, p.y, p.w, p.h);
    // Head + eyes
    ctx.set_fill_style_str("#f5faff");
    ctx.fill_rect(p.x + 8.0, p.y - 18.0, 20.0, 18.0);
    ctx.set_fill_style_str("#111325");
    ctx.fill_rect(p.x + 12.0, p.y - 11.0, 4.0, 4.0);
    ctx.fill_rect(p.x + 20.0, p.y - 11.0, 4.0, 4.0);
    // Shield
    ctx.set_fill_style_str("#6efacc");
    ctx.fill_rect(p.x - 10.0, p.y + 10.0, 8.0, 24.0);
    // Sword
    ctx.set_fill_style_str("#ffd27a");
    ctx.fill_rect(p.x + p.w + 2.0, p.y + 10.0, 10.0, 22.0);
    ctx.set_fill_style_str("#ffe9b6");
    ctx.fill_rect(p.x + p.w + 4.0, p.y, 6.0, 10.0);
}

fn draw_hazard(ctx: &CanvasRenderingContext2d, snap: &Snapshot) {
    let Some(h) = &snap.hazard else {
        return;
    };
    let r = &h.rect;
    match h.kind {
        HazardKind::Fire => {
            let (cx, cy) = (r.x + r.w / 2.0, r.y + r.h / 2.0);
            // Hot core fading out to the flame edge
            match ctx.create_radial_gradient(cx, cy, 4.0, cx, cy, 18.0) {
                Ok(grad) => {
                    let grad = with_stops(
                        grad,
                        &[(0.0, "#fff1b8"), (0.4, "#ffb34d"), (1.0, "#ff5d73")],
                    );
                    ctx.set_fill_style_canvas_gradient(&grad);
                }
                Err(_) => ctx.set_fill_style_str("#ffb34d"),
            }
            ctx.begin_path();
            ctx.arc(cx, cy, 14.0, 0.0, std::f64::consts::TAU).ok();
            ctx.fill();
            // Trail
            ctx.set_global_alpha(0.4);
            ctx.set_fill_style_str("#ff7a9b");
            ctx.fill_rect(r.x + 20.0, r.y + 8.0, 28.0, 12.0);
            ctx.set_global_alpha(1.0);
        }
        HazardKind::Arrow => {
            ctx.set_fill_style_str("#c9d1e6");
            ctx.fill_rect(r.x, r.y, r.w, r.h);
            // Tip
            ctx.set_fill_style_str("#e6eefc");
            ctx.begin_path();
            ctx.move_to(r.x, r.y - 6.0);
            ctx.line_to(r.x, r.y + r.h + 6.0);
            ctx.line_to(r.x - 12.0, r.y + r.h / 2.0);
            ctx.close_path();
            ctx.fill();
            // Fletching
            ctx.set_fill_style_str("#a3b3e6");
            ctx.fill_rect(r.x + r.w - 4.0, r.y - 6.0, 3.0, r.h + 12.0);
        }
    }
}

fn draw_treasure(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    let (x, y, cw, ch) = (w - 200.0, h - 160.0, 120.0, 70.0);
    ctx.set_fill_style_str("#9b6b2c");
    ctx.fill_rect(x, y, cw, ch);
    ctx.set_fill_style_str("#b8853a");
    ctx.fill_rect(x, y, cw, 18.0);
    ctx.set_fill_style_str("#ffd27a");
    ctx.fill_rect(x + cw / 2.0 - 6.0, y + 24.0, 12.0, 22.0);
    // Glow
    ctx.set_global_alpha(0.18);
    ctx.set_fill_style_str("#fffdbb");
    ctx.fill_rect(x - 12.0, y - 30.0, cw + 24.0, 18.0);
    ctx.set_global_alpha(1.0);
}
