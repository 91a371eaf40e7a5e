//! Frame drawing with macroquad

use glam::Vec2;
use macroquad::color::{self, Color};
use macroquad::math::vec2;
use macroquad::texture::{DrawTextureParams, Texture2D, draw_texture_ex};
use macroquad::{shapes, text, window};

use super::shapes::{
    self as layout, BOT_PROJECTILE_RADIUS, BUTTON_FONT_SIZE, BUTTON_LABEL_INSET, HUD_FONT_SIZE,
    HudLine, PLAYER_PROJECTILE_RADIUS, Rect, Rgb, TANK_SPRITE_SIZE, TITLE_FONT_SIZE, TITLE_Y,
    colors,
};
use crate::consts::{HEIGHT, WIDTH};
use crate::sim::{GameSession, SessionSummary, Tank};
use crate::ui::Button;

fn rgb(c: Rgb) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

fn fill_rect(r: Rect, c: Rgb) {
    shapes::draw_rectangle(r.x, r.y, r.w, r.h, rgb(c));
}

/// Text with its top-left corner at `pos`
fn draw_text_at(s: &str, pos: Vec2, size: f32, c: Rgb) {
    let dims = text::measure_text(s, None, size as u16, 1.0);
    text::draw_text(s, pos.x, pos.y + dims.offset_y, size, rgb(c));
}

fn draw_centered_text(s: &str, y: f32, size: f32, c: Rgb) {
    let dims = text::measure_text(s, None, size as u16, 1.0);
    draw_text_at(s, Vec2::new(WIDTH / 2.0 - dims.width / 2.0, y), size, c);
}

pub struct SceneRenderer {
    tank: Texture2D,
    background: Texture2D,
}

impl SceneRenderer {
    pub fn new(tank: Texture2D, background: Texture2D) -> Self {
        Self { tank, background }
    }

    /// Playfield, tanks, projectiles and HUD
    pub fn draw_session(&self, session: &GameSession) {
        draw_texture_ex(
            &self.background,
            0.0,
            0.0,
            color::WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(WIDTH, HEIGHT)),
                ..Default::default()
            },
        );

        for bot in &session.bots {
            self.draw_tank(bot);
            for p in &bot.projectiles {
                shapes::draw_circle(p.pos.x, p.pos.y, BOT_PROJECTILE_RADIUS, rgb(colors::RED));
            }
        }

        self.draw_tank(&session.player);
        for p in &session.player.projectiles {
            shapes::draw_circle(
                p.pos.x,
                p.pos.y,
                PLAYER_PROJECTILE_RADIUS,
                rgb(colors::YELLOW),
            );
        }

        for line in layout::hud_lines(session) {
            draw_hud_line(&line);
        }
    }

    fn draw_tank(&self, tank: &Tank) {
        let origin = layout::sprite_origin(tank.pos);
        draw_texture_ex(
            &self.tank,
            origin.x,
            origin.y,
            color::WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(TANK_SPRITE_SIZE, TANK_SPRITE_SIZE)),
                rotation: layout::sprite_rotation(tank.angle),
                ..Default::default()
            },
        );

        let (back, fill) = layout::health_bar(tank);
        fill_rect(back, colors::RED);
        fill_rect(fill, colors::GREEN);
    }

    pub fn draw_main_menu(&self, buttons: &[Button], mouse: Vec2) {
        window::clear_background(rgb(colors::DARK_GRAY));
        draw_centered_text("Tank Battle", TITLE_Y, TITLE_FONT_SIZE, colors::WHITE);
        draw_buttons(buttons, mouse);
    }

    pub fn draw_game_over(&self, summary: &SessionSummary, buttons: &[Button], mouse: Vec2) {
        window::clear_background(rgb(colors::DARK_GRAY));
        draw_centered_text(
            &layout::game_over_title(summary),
            TITLE_Y,
            TITLE_FONT_SIZE,
            colors::WHITE,
        );
        draw_buttons(buttons, mouse);
    }
}

fn draw_hud_line(line: &HudLine) {
    draw_text_at(&line.text, line.pos, HUD_FONT_SIZE, line.color);
}

fn draw_buttons(buttons: &[Button], mouse: Vec2) {
    for button in buttons {
        let r = button.rect;
        let c = layout::button_color(r.contains(mouse));
        fill_rect(
            Rect {
                x: r.x,
                y: r.y,
                w: r.w,
                h: r.h,
            },
            c,
        );
        let label = Vec2::new(r.x, r.y) + BUTTON_LABEL_INSET;
        draw_text_at(button.label, label, BUTTON_FONT_SIZE, colors::BLACK);
    }
}
