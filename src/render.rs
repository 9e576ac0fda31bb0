use crate::body::{Body, PartKind};
use glam::Vec2;
use serde::{Deserialize, Serialize};

const LINE_WIDTH: f32 = 2.0;
const LABEL_SIZE: f32 = 9.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Color { a, ..self }
    }
}

const ACCENT: Color = Color::rgba(255, 255, 255, 0.4);
const SEAM: Color = Color::rgba(255, 255, 255, 0.2);
const HOLE: Color = Color::rgba(255, 255, 255, 0.3);
const LABEL_BRIGHT: Color = Color::rgba(255, 255, 255, 0.9);
const LABEL_DIM: Color = Color::rgba(255, 255, 255, 0.8);

/// Host-provided drawing backend. `push` composes a translation, a rotation
/// and an alpha multiplier onto the current state; primitive coordinates are
/// in the pushed local frame. Effective alpha is the state alpha times the
/// color alpha.
pub trait Surface {
    fn clear(&mut self);
    fn push(&mut self, translation: Vec2, rotation: f32, alpha: f32);
    fn pop(&mut self);
    fn fill_circle(&mut self, centre: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, centre: Vec2, radius: f32, width: f32, color: Color);
    fn fill_round_rect(&mut self, min: Vec2, size: Vec2, corner: f32, color: Color);
    fn stroke_round_rect(&mut self, min: Vec2, size: Vec2, corner: f32, width: f32, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn stroke_curve(
        &mut self,
        from: Vec2,
        ctrl_a: Vec2,
        ctrl_b: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    );
    fn fill_text(&mut self, text: &str, centre: Vec2, size: f32, color: Color);
}

pub fn draw_body(body: &Body, surface: &mut dyn Surface) {
    if body.opacity <= 0.0 {
        return;
    }

    surface.push(body.centre(), body.rotation, body.opacity);
    match body.kind {
        PartKind::Disc => draw_disc(body, surface),
        PartKind::Bar => draw_bar(body, surface),
        PartKind::Bracket => draw_bracket(body, surface),
        PartKind::Plate => draw_plate(body, surface),
        PartKind::Bolt => draw_bolt(body, surface),
    }
    surface.pop();
}

fn draw_disc(body: &Body, surface: &mut dyn Surface) {
    let r = body.size.x.min(body.size.y) * 0.5;

    surface.fill_circle(Vec2::ZERO, r, body.fill);
    surface.stroke_circle(Vec2::ZERO, r, LINE_WIDTH, body.edge);

    // hub
    surface.fill_circle(Vec2::ZERO, r * 0.25, body.edge);

    // spiral accent out from the hub
    surface.stroke_curve(
        Vec2::new(r * 0.25, 0.0),
        Vec2::new(r * 0.5, -r * 0.4),
        Vec2::new(r * 0.8, -r * 0.2),
        Vec2::new(r * 0.9, 0.0),
        1.5,
        ACCENT,
    );

    if r > 22.0 {
        surface.fill_text(&body.label, Vec2::new(0.0, r * 0.55), LABEL_SIZE, LABEL_BRIGHT);
    }
}

fn draw_bar(body: &Body, surface: &mut dyn Surface) {
    let hw = body.size.x * 0.5;
    let hh = body.size.y * 0.5;

    surface.fill_round_rect(Vec2::new(-hw, -hh), body.size, 4.0, body.fill);
    surface.stroke_round_rect(Vec2::new(-hw, -hh), body.size, 4.0, LINE_WIDTH, body.edge);

    // centre seam
    surface.stroke_line(
        Vec2::new(0.0, -hh + 8.0),
        Vec2::new(0.0, hh - 8.0),
        1.0,
        SEAM,
    );

    // coupling holes at either end
    surface.fill_circle(Vec2::new(0.0, -hh + 10.0), 3.0, HOLE);
    surface.fill_circle(Vec2::new(0.0, hh - 10.0), 3.0, HOLE);

    if body.size.y > 60.0 {
        // counter-rotate so the label stays upright
        surface.push(Vec2::ZERO, -body.rotation, 1.0);
        surface.fill_text(&body.label, Vec2::ZERO, LABEL_SIZE, LABEL_DIM);
        surface.pop();
    }
}

fn draw_bracket(body: &Body, surface: &mut dyn Surface) {
    let hw = body.size.x * 0.5;
    let hh = body.size.y * 0.5;

    let outline = [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh * 0.3),
        Vec2::new(hw * 0.3, hh * 0.3),
        Vec2::new(hw * 0.3, hh),
        Vec2::new(-hw, hh),
    ];
    surface.fill_polygon(&outline, body.fill);
    surface.stroke_polygon(&outline, LINE_WIDTH, body.edge);

    // bolt holes
    surface.fill_circle(Vec2::new(-hw * 0.4, -hh * 0.3), 3.0, body.edge);
    surface.fill_circle(Vec2::new(hw * 0.4, -hh * 0.3), 3.0, body.edge);

    surface.fill_text(&body.label, Vec2::new(0.0, -hh * 0.3), LABEL_SIZE, body.edge);
}

fn draw_plate(body: &Body, surface: &mut dyn Surface) {
    let hw = body.size.x * 0.5;
    let hh = body.size.y * 0.5;

    surface.fill_round_rect(Vec2::new(-hw, -hh), body.size, 3.0, body.fill);
    surface.stroke_round_rect(Vec2::new(-hw, -hh), body.size, 3.0, LINE_WIDTH, body.edge);

    // centre hole
    surface.fill_circle(Vec2::ZERO, 4.0, body.edge);

    surface.fill_text(
        &body.label,
        Vec2::new(0.0, hh + 4.0 + LABEL_SIZE * 0.5),
        LABEL_SIZE,
        body.edge,
    );
}

fn draw_bolt(body: &Body, surface: &mut dyn Surface) {
    let r = body.size.x.min(body.size.y) * 0.5;

    let mut hex = [Vec2::ZERO; 6];
    for (i, pt) in hex.iter_mut().enumerate() {
        let angle = std::f32::consts::FRAC_PI_3 * i as f32 - std::f32::consts::FRAC_PI_6;
        *pt = Vec2::new(angle.cos(), angle.sin()) * r;
    }
    surface.fill_polygon(&hex, body.fill);
    surface.stroke_polygon(&hex, LINE_WIDTH, body.edge);

    // inner ring
    surface.stroke_circle(Vec2::ZERO, r * 0.45, 1.0, body.edge.with_alpha(0.3));
}
