//! Game driver: a [`Session`] plus the stores, wired to the HUD.

use log::{debug, info};

use tile_smash_core::{ConfigError, Session, SessionConfig, TapOutcome};
use tile_smash_store::{HighScoreStore, SettingsStore};

use crate::hud::Hud;
use crate::types::{GridPos, ToolbarAction};

/// What a tick did beyond moving the countdown
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    pub remaining_fraction: f32,
    pub game_over_entered: bool,
    /// The final score made the high-score list
    pub high_score_added: bool,
    pub leaderboard_opened: bool,
}

#[derive(Debug)]
pub struct Game {
    session: Session,
    high_scores: HighScoreStore,
    settings: SettingsStore,
    leaderboard_open: bool,
    /// Pause state to restore when the leaderboard closes
    paused_before_leaderboard: bool,
    /// Score of the last finished game, highlighted on the leaderboard
    latest_score: Option<u64>,
}

impl Game {
    /// Start a game. The sound preference comes from `settings`.
    pub fn new(
        mut config: SessionConfig,
        seed: u64,
        high_scores: HighScoreStore,
        settings: SettingsStore,
    ) -> Result<Self, ConfigError> {
        config.sound_enabled = settings.sound_enabled();
        let session = Session::new(config, seed)?;
        Ok(Self::with_session(session, high_scores, settings))
    }

    /// Default configuration with stores in the per-user data directory
    pub fn open_default(seed: u64) -> Result<Self, ConfigError> {
        Self::new(
            SessionConfig::default(),
            seed,
            HighScoreStore::open_default(),
            SettingsStore::open_default(),
        )
    }

    pub fn with_session(
        mut session: Session,
        high_scores: HighScoreStore,
        settings: SettingsStore,
    ) -> Self {
        session.set_sound_enabled(settings.sound_enabled());
        Self {
            session,
            high_scores,
            settings,
            leaderboard_open: false,
            paused_before_leaderboard: false,
            latest_score: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn high_scores(&self) -> &HighScoreStore {
        &self.high_scores
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn leaderboard_open(&self) -> bool {
        self.leaderboard_open
    }

    pub fn latest_score(&self) -> Option<u64> {
        self.latest_score
    }

    pub fn tap(&mut self, pos: GridPos, hud: &mut impl Hud) -> Option<TapOutcome> {
        let outcome = self.session.tap(pos)?;
        hud.set_score(outcome.total_score);
        Some(outcome)
    }

    /// Forward one finished animation. Returns true when input is open.
    pub fn complete_one(&mut self) -> bool {
        self.session.complete_one()
    }

    pub fn tick(&mut self, now_ms: u64, hud: &mut impl Hud) -> TickReport {
        let tick = self.session.tick(now_ms);
        hud.set_remaining_fraction(tick.remaining_fraction);

        let mut report = TickReport {
            remaining_fraction: tick.remaining_fraction,
            game_over_entered: tick.game_over_entered,
            ..TickReport::default()
        };
        if tick.game_over_entered {
            report.high_score_added = self.submit_score();
            if report.high_score_added {
                report.leaderboard_opened = self.open_leaderboard(hud);
            }
        }
        report
    }

    fn submit_score(&mut self) -> bool {
        let score = self.session.score();
        self.latest_score = Some(score);
        let added = self.high_scores.add(score);
        info!("final score {} (high score: {})", score, added);
        added
    }

    /// Apply a toolbar action. Returns false when the action does not apply
    /// in the current state.
    pub fn apply(&mut self, action: ToolbarAction, hud: &mut impl Hud) -> bool {
        debug!("toolbar action {:?}", action);
        match action {
            ToolbarAction::PlayPause => {
                if self.session.is_over() || self.leaderboard_open {
                    return false;
                }
                self.session.toggle_pause();
                true
            }
            ToolbarAction::ToggleSound => {
                let enabled = self.settings.toggle_sound();
                self.session.set_sound_enabled(enabled);
                true
            }
            ToolbarAction::ShowLeaderboard => self.open_leaderboard(hud),
            ToolbarAction::CloseLeaderboard => self.close_leaderboard(hud),
            ToolbarAction::ResetScores => {
                self.high_scores.reset();
                if self.leaderboard_open {
                    hud.set_score_list(&self.high_scores.leaderboard(self.latest_score));
                }
                true
            }
            ToolbarAction::PlayAgain => {
                if !self.session.is_over() {
                    return false;
                }
                self.close_leaderboard(hud);
                self.session.restart();
                self.latest_score = None;
                hud.set_score(self.session.score());
                hud.set_remaining_fraction(self.session.remaining_fraction());
                true
            }
        }
    }

    fn open_leaderboard(&mut self, hud: &mut impl Hud) -> bool {
        if self.leaderboard_open {
            return false;
        }
        self.paused_before_leaderboard = self.session.paused();
        self.session.set_paused(true);
        self.leaderboard_open = true;
        hud.set_score_list(&self.high_scores.leaderboard(self.latest_score));
        hud.set_open(true);
        true
    }

    fn close_leaderboard(&mut self, hud: &mut impl Hud) -> bool {
        if !self.leaderboard_open {
            return false;
        }
        self.leaderboard_open = false;
        if !self.paused_before_leaderboard {
            self.session.set_paused(false);
        }
        hud.set_open(false);
        true
    }
}
