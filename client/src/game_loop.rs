use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use snake_common::log;
use snake_common::snake::{SessionEvent, SnakeSession};
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::input::HostCommand;
use crate::profile::ProfileStore;
use crate::render::FrameRenderer;

/// Roughly a 60 Hz display.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const SPEED_STEP: f64 = 1.0;
/// Range the speed keys step within. Speeds configured outside it are kept
/// until a key moves them toward it.
const MIN_KEY_SPEED: f64 = 1.0;
const MAX_KEY_SPEED: f64 = 60.0;

/// Sole owner of the session: every command and every frame goes through here.
pub struct GameHost<R: FrameRenderer, P: ProfileStore> {
    session: SnakeSession,
    renderer: R,
    profile: P,
}

impl<R: FrameRenderer, P: ProfileStore> GameHost<R, P> {
    pub fn new(session: SnakeSession, renderer: R, profile: P) -> Self {
        Self {
            session,
            renderer,
            profile,
        }
    }

    pub fn session(&self) -> &SnakeSession {
        &self.session
    }

    pub fn apply(&mut self, command: HostCommand, now: Duration) -> ControlFlow<()> {
        match command {
            HostCommand::Steer(direction) => {
                if self.session.state().is_active() {
                    self.session.set_direction(direction);
                } else {
                    self.session.start(now);
                }
            }
            HostCommand::StartOrRestart => {
                if !self.session.state().is_active() {
                    self.session.start(now);
                }
            }
            HostCommand::TogglePause => self.session.toggle_pause(now),
            HostCommand::SpeedUp => self.change_speed(SPEED_STEP),
            HostCommand::SpeedDown => self.change_speed(-SPEED_STEP),
            HostCommand::ToggleWrap => {
                let wrap = !self.session.grid().wrap;
                self.session.set_wrap(wrap);
                self.save_settings();
            }
            HostCommand::Redraw => self.renderer.invalidate(),
            HostCommand::Quit => {
                self.session.stop(now);
                self.handle_events();
                return ControlFlow::Break(());
            }
        }
        self.handle_events();
        ControlFlow::Continue(())
    }

    pub fn frame(&mut self, now: Duration) -> Result<(), String> {
        let frame = self.session.frame(now);
        self.handle_events();
        self.renderer.render(&frame.snapshot)
    }

    fn change_speed(&mut self, delta: f64) {
        let current = self.session.speed();
        let low = current.min(MIN_KEY_SPEED);
        let high = current.max(MAX_KEY_SPEED);
        let speed = (current + delta).clamp(low, high);
        if speed == current {
            return;
        }
        match self.session.set_speed(speed) {
            Ok(()) => self.save_settings(),
            Err(e) => log!("Rejected speed {}: {}", speed, e),
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.profile.save_settings(self.session.settings()) {
            log!("Failed to save settings: {}", e);
        }
    }

    fn handle_events(&mut self) {
        for event in self.session.take_events() {
            match event {
                SessionEvent::GameOver(report) => {
                    if let Some(high_score) = report.new_high_score
                        && let Err(e) = self.profile.save_high_score(high_score)
                    {
                        log!("Failed to save high score: {}", e);
                    }
                }
                SessionEvent::PlayerRequired => {
                    log!("Start ignored: no player name set");
                }
                SessionEvent::Started { .. } | SessionEvent::FoodEaten { .. } => {}
            }
        }
    }
}

/// Drives frames at display cadence and applies commands between them until
/// `Quit` arrives or the command channel closes. Dropping out of the loop
/// drops the frame timer with it.
pub async fn run_game_loop<R: FrameRenderer, P: ProfileStore>(
    host: &mut GameHost<R, P>,
    mut command_rx: mpsc::UnboundedReceiver<HostCommand>,
) -> Result<(), String> {
    let origin = Instant::now();
    let mut frames = interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = frames.tick() => {
                host.frame(origin.elapsed())?;
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                if host.apply(command, origin.elapsed()).is_break() {
                    break;
                }
            }
        }
    }

    Ok(())
}
