//! Screen state machine
//!
//! Menu → Playing → GameOver → (Menu | Playing). Transitions replace the
//! current screen in place, so any number of replays runs in constant stack.

use crate::sim::{GameSession, SessionSummary};

/// What a clicked button asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Menu,
    Restart,
    Exit,
}

/// Whether the main loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub enum Screen {
    MainMenu,
    Playing(Box<GameSession>),
    GameOver(SessionSummary),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::MainMenu => "menu",
            Screen::Playing(_) => "playing",
            Screen::GameOver(_) => "game-over",
        }
    }
}

#[derive(Debug)]
pub struct Router {
    screen: Screen,
    sessions_started: u32,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            screen: Screen::MainMenu,
            sessions_started: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The running session, if on the playing screen
    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        match &mut self.screen {
            Screen::Playing(session) => Some(&mut **session),
            _ => None,
        }
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Dispatch a button action. `seed` seeds a session if one is started.
    pub fn apply(&mut self, action: MenuAction, seed: u64) -> Flow {
        match (&self.screen, action) {
            (_, MenuAction::Exit) => {
                log::info!("Exit requested from {} screen", self.screen.name());
                return Flow::Exit;
            }
            (Screen::MainMenu, MenuAction::Play) | (Screen::GameOver(_), MenuAction::Restart) => {
                self.start_session(seed);
            }
            (Screen::GameOver(_), MenuAction::Menu) => {
                self.screen = Screen::MainMenu;
            }
            (screen, action) => {
                log::debug!("Ignoring {:?} on {} screen", action, screen.name());
            }
        }
        Flow::Continue
    }

    /// Move a finished session to the game-over screen.
    ///
    /// Returns the summary on the frame the transition happens.
    pub fn finish_session_if_over(&mut self) -> Option<SessionSummary> {
        let Screen::Playing(session) = &self.screen else {
            return None;
        };
        if !session.is_over() {
            return None;
        }
        let summary = session.summary();
        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("Game over: {}", json),
            Err(e) => log::warn!("Could not encode session summary: {}", e),
        }
        self.screen = Screen::GameOver(summary);
        Some(summary)
    }

    fn start_session(&mut self, seed: u64) {
        self.sessions_started += 1;
        log::info!("Starting session #{} (seed {})", self.sessions_started, seed);
        self.screen = Screen::Playing(Box::new(GameSession::new(seed)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    fn kill_player(router: &mut Router) {
        let session = router.session_mut().unwrap();
        session.player.params.health = 0;
    }

    #[test]
    fn test_menu_play_starts_session() {
        let mut r = Router::new();
        assert!(matches!(r.screen(), Screen::MainMenu));
        assert_eq!(r.apply(MenuAction::Play, 1), Flow::Continue);
        assert!(matches!(r.screen(), Screen::Playing(_)));
        assert_eq!(r.session_mut().unwrap().phase, GamePhase::Playing);
    }

    #[test]
    fn test_exit_from_any_screen() {
        let mut r = Router::new();
        assert_eq!(r.apply(MenuAction::Exit, 0), Flow::Exit);
        r.apply(MenuAction::Play, 0);
        kill_player(&mut r);
        r.finish_session_if_over();
        assert_eq!(r.apply(MenuAction::Exit, 0), Flow::Exit);
    }

    #[test]
    fn test_death_leads_to_game_over_with_summary() {
        let mut r = Router::new();
        r.apply(MenuAction::Play, 5);
        assert!(r.finish_session_if_over().is_none());

        r.session_mut().unwrap().score = 140;
        kill_player(&mut r);
        let summary = r.finish_session_if_over().unwrap();
        assert_eq!(summary.score, 140);
        assert_eq!(summary.levels_cleared, 0);
        assert!(matches!(r.screen(), Screen::GameOver(_)));
        assert!(r.finish_session_if_over().is_none());
    }

    #[test]
    fn test_end_screen_menu_and_restart() {
        let mut r = Router::new();
        r.apply(MenuAction::Play, 1);
        kill_player(&mut r);
        r.finish_session_if_over();

        r.apply(MenuAction::Menu, 2);
        assert!(matches!(r.screen(), Screen::MainMenu));

        r.apply(MenuAction::Play, 3);
        kill_player(&mut r);
        r.finish_session_if_over();
        r.apply(MenuAction::Restart, 4);
        let session = r.session_mut().unwrap();
        assert_eq!(session.level, 1);
        assert_eq!(session.score, 0);
        assert_eq!(r.sessions_started(), 3);
    }

    #[test]
    fn test_irrelevant_actions_ignored() {
        let mut r = Router::new();
        assert_eq!(r.apply(MenuAction::Restart, 0), Flow::Continue);
        assert!(matches!(r.screen(), Screen::MainMenu));

        r.apply(MenuAction::Play, 0);
        r.apply(MenuAction::Menu, 0);
        assert!(matches!(r.screen(), Screen::Playing(_)));
    }

    #[test]
    fn test_many_replays_do_not_nest() {
        let mut r = Router::new();
        r.apply(MenuAction::Play, 0);
        for seed in 0..1_000 {
            kill_player(&mut r);
            r.finish_session_if_over();
            r.apply(MenuAction::Restart, seed);
        }
        assert_eq!(r.sessions_started(), 1_001);
        assert!(matches!(r.screen(), Screen::Playing(_)));
    }
}
