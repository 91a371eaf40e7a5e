//! Menu and screen flow
//!
//! Pure state: the frontend polls input, hit-tests buttons here and feeds the
//! resulting actions to the [`Router`].

pub mod buttons;
pub mod router;

pub use buttons::{Button, ButtonRect, button_at, end_screen_buttons, main_menu_buttons};
pub use router::{Flow, MenuAction, Router, Screen};
