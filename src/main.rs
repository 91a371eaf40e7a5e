//! Tank Battle entry point
//!
//! Loads assets, then runs the menu / game / game-over loop at a fixed rate.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use macroquad::input::{self, KeyCode, MouseButton};
use macroquad::time::{get_frame_time, get_time};
use macroquad::window::{self, Conf};

use tank_battle::assets::{self, Assets};
use tank_battle::audio::AudioManager;
use tank_battle::consts::{FPS, HEIGHT, WIDTH};
use tank_battle::frame_pacer::FramePacer;
use tank_battle::renderer::SceneRenderer;
use tank_battle::sim::{TickInput, advance_level_if_cleared, tick};
use tank_battle::ui::{Flow, Router, Screen, button_at, end_screen_buttons, main_menu_buttons};

fn window_conf() -> Conf {
    Conf {
        window_title: "Tank Battle".to_owned(),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn new_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn read_input() -> TickInput {
    TickInput {
        up: input::is_key_down(KeyCode::W),
        down: input::is_key_down(KeyCode::S),
        left: input::is_key_down(KeyCode::A),
        right: input::is_key_down(KeyCode::D),
        fire: input::is_key_pressed(KeyCode::Space),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tank Battle starting...");

    let assets = match Assets::load(assets::ASSET_DIR).await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("Asset loading failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut audio = AudioManager::new(assets.shoot, assets.explosion, assets.engine);
    let renderer = SceneRenderer::new(assets.tank, assets.background);
    let menu_buttons = main_menu_buttons();
    let end_buttons = end_screen_buttons();
    let mut router = Router::new();
    let mut pacer = FramePacer::new(FPS);

    loop {
        pacer.start(get_time());

        if let Some(session) = router.session_mut() {
            tick(session, &read_input(), get_frame_time() * 1000.0);
            audio.handle_events(&session.events);
            audio.set_engine_loop(session.player_moving);
        }

        let (mx, my) = input::mouse_position();
        let mouse = Vec2::new(mx, my);
        let clicked = input::is_mouse_button_pressed(MouseButton::Left);

        let action = match router.screen() {
            Screen::MainMenu => {
                renderer.draw_main_menu(&menu_buttons, mouse);
                clicked.then(|| button_at(&menu_buttons, mouse)).flatten()
            }
            Screen::Playing(session) => {
                renderer.draw_session(session);
                None
            }
            Screen::GameOver(summary) => {
                renderer.draw_game_over(summary, &end_buttons, mouse);
                clicked.then(|| button_at(&end_buttons, mouse)).flatten()
            }
        };

        // The next wave spawns after the cleared field has been drawn
        if let Some(session) = router.session_mut() {
            advance_level_if_cleared(session);
        }
        if router.finish_session_if_over().is_some() {
            audio.set_engine_loop(false);
        }

        if let Some(action) = action {
            if router.apply(action, new_seed()) == Flow::Exit {
                break;
            }
        }

        let wait = pacer.end(get_time());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        window::next_frame().await;
    }

    log::info!(
        "Tank Battle exiting after {} session(s)",
        router.sessions_started()
    );
}
