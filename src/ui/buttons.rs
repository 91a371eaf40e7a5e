//! Button layout and hit testing

use glam::Vec2;

use super::router::MenuAction;
use crate::consts::WIDTH;

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

/// Axis-aligned button bounds (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ButtonRect {
    /// Horizontally centred button with its top edge at `y`
    pub fn centered(y: f32) -> Self {
        Self {
            x: WIDTH / 2.0 - BUTTON_WIDTH / 2.0,
            y,
            w: BUTTON_WIDTH,
            h: BUTTON_HEIGHT,
        }
    }

    /// Left and top edges are inside, right and bottom edges are not
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub action: MenuAction,
    pub rect: ButtonRect,
}

pub fn main_menu_buttons() -> [Button; 2] {
    [
        Button {
            label: "Play",
            action: MenuAction::Play,
            rect: ButtonRect::centered(200.0),
        },
        Button {
            label: "Exit",
            action: MenuAction::Exit,
            rect: ButtonRect::centered(280.0),
        },
    ]
}

/// Stacked 60 units apart below the game-over title
pub fn end_screen_buttons() -> [Button; 3] {
    let row = |i: usize| ButtonRect::centered(200.0 + i as f32 * 60.0);
    [
        Button {
            label: "Menu",
            action: MenuAction::Menu,
            rect: row(0),
        },
        Button {
            label: "Restart",
            action: MenuAction::Restart,
            rect: row(1),
        },
        Button {
            label: "Exit",
            action: MenuAction::Exit,
            rect: row(2),
        },
    ]
}

/// Action of the first button under `point`
pub fn button_at(buttons: &[Button], point: Vec2) -> Option<MenuAction> {
    buttons
        .iter()
        .find(|b| b.rect.contains(point))
        .map(|b| b.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = ButtonRect::centered(200.0);
        assert_eq!(r.x, 540.0);
        assert!(r.contains(Vec2::new(540.0, 200.0)));
        assert!(r.contains(Vec2::new(739.9, 249.9)));
        assert!(!r.contains(Vec2::new(740.0, 220.0)));
        assert!(!r.contains(Vec2::new(600.0, 250.0)));
    }

    #[test]
    fn test_main_menu_hit() {
        let buttons = main_menu_buttons();
        assert_eq!(button_at(&buttons, Vec2::new(640.0, 225.0)), Some(MenuAction::Play));
        assert_eq!(button_at(&buttons, Vec2::new(640.0, 300.0)), Some(MenuAction::Exit));
        assert_eq!(button_at(&buttons, Vec2::new(640.0, 265.0)), None);
    }

    #[test]
    fn test_end_screen_layout() {
        let buttons = end_screen_buttons();
        let ys: Vec<f32> = buttons.iter().map(|b| b.rect.y).collect();
        assert_eq!(ys, vec![200.0, 260.0, 320.0]);
        assert_eq!(button_at(&buttons, Vec2::new(600.0, 270.0)), Some(MenuAction::Restart));
        assert_eq!(button_at(&buttons, Vec2::new(10.0, 270.0)), None);
    }
}
