use std::time::Duration;

use crate::config::Validate;
use crate::{log, SessionRng};
use super::body::Snake;
use super::clock::TickClock;
use super::food::spawn_food;
use super::grid::GridConfig;
use super::settings::GameSettings;
use super::snapshot::{FoodView, Snapshot};
use super::types::{
    DeathReason, Direction, Food, GameOverReport, RunState, SessionEvent, StartOutcome,
    TickOutcome,
};

pub const POINTS_PER_FOOD: u32 = 10;

/// Result of sampling the session for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub tick: Option<TickOutcome>,
    pub snapshot: Snapshot,
}

/// Single-player snake run and everything it mutates. All timestamps are
/// offsets from an origin chosen by the host; the session never reads a clock.
pub struct SnakeSession {
    grid: GridConfig,
    speed: f64,
    clock: TickClock,
    rng: SessionRng,
    state: RunState,
    player: Option<String>,
    snake: Snake,
    food: Option<Food>,
    score: u32,
    high_score: u32,
    started_at: Duration,
    paused_at: Option<Duration>,
    paused_total: Duration,
    final_elapsed: Option<Duration>,
    events: Vec<SessionEvent>,
}

impl SnakeSession {
    pub fn new(settings: GameSettings, high_score: u32, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        let grid = settings.grid();

        Ok(Self {
            grid,
            speed: settings.speed,
            clock: TickClock::new(settings.speed)?,
            rng,
            state: RunState::Idle,
            player: None,
            snake: Snake::spawn(&grid),
            food: None,
            score: 0,
            high_score,
            started_at: Duration::ZERO,
            paused_at: None,
            paused_total: Duration::ZERO,
            final_elapsed: None,
            events: Vec::new(),
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn set_player(&mut self, name: &str) -> Result<(), String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("player name must not be empty".to_string());
        }
        self.player = Some(trimmed.to_string());
        Ok(())
    }

    /// Begins a fresh run from any state. Without a player the call changes
    /// nothing and asks the host for one instead.
    pub fn start(&mut self, now: Duration) -> StartOutcome {
        let Some(player) = self.player.clone() else {
            self.events.push(SessionEvent::PlayerRequired);
            return StartOutcome::PlayerRequired;
        };

        self.snake = Snake::spawn(&self.grid);
        self.score = 0;
        self.food = Some(spawn_food(&self.snake, &self.grid, &mut self.rng, now));
        self.started_at = now;
        self.paused_at = None;
        self.paused_total = Duration::ZERO;
        self.final_elapsed = None;
        self.clock.reset(now);
        self.state = RunState::Running;

        log!("{} started a run on a {}x{} grid", player, self.grid.size, self.grid.size);
        self.events.push(SessionEvent::Started { player });
        StartOutcome::Started
    }

    pub fn pause(&mut self, now: Duration) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
            self.paused_at = Some(now);
        }
    }

    pub fn resume(&mut self, now: Duration) {
        if self.state == RunState::Paused {
            self.close_pause(now);
            self.state = RunState::Running;
        }
    }

    pub fn toggle_pause(&mut self, now: Duration) {
        match self.state {
            RunState::Running => self.pause(now),
            RunState::Paused => self.resume(now),
            RunState::Idle | RunState::GameOver => {}
        }
    }

    /// Ends the current run as if it had collided.
    pub fn stop(&mut self, now: Duration) {
        if self.state.is_active() {
            self.end_run(now, DeathReason::Stopped);
        }
    }

    /// Returns whether the request was accepted. It takes effect on the next tick.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.snake.request_direction(direction)
    }

    pub fn set_speed(&mut self, ticks_per_second: f64) -> Result<(), String> {
        GameSettings {
            speed: ticks_per_second,
            ..self.settings()
        }
        .validate()?;
        self.clock.set_speed(ticks_per_second)?;
        self.speed = ticks_per_second;
        log!("Speed set to {} ticks/s", ticks_per_second);
        Ok(())
    }

    pub fn set_wrap(&mut self, enabled: bool) {
        if self.grid.wrap != enabled {
            self.grid.wrap = enabled;
            log!("Wall wrap {}", if enabled { "enabled" } else { "disabled" });
        }
    }

    pub fn settings(&self) -> GameSettings {
        GameSettings {
            grid_size: self.grid.size,
            speed: self.speed,
            wrap: self.grid.wrap,
        }
    }

    /// Applies at most one tick if one is due, then samples the result.
    pub fn frame(&mut self, now: Duration) -> Frame {
        let tick = if self.state == RunState::Running && self.clock.is_due(now) {
            self.clock.mark(now);
            Some(self.tick(now))
        } else {
            None
        };

        Frame {
            tick,
            snapshot: self.snapshot(now),
        }
    }

    pub fn snapshot(&self, now: Duration) -> Snapshot {
        Snapshot {
            state: self.state,
            player: self.player.clone(),
            score: self.score,
            high_score: self.high_score,
            elapsed: self.elapsed(now),
            grid_size: self.grid.size,
            wrap: self.grid.wrap,
            speed: self.speed,
            snake_cells: self.snake.cells().copied().collect(),
            food: self.food.map(|food| FoodView {
                cell: food.cell,
                age: now.saturating_sub(food.spawned_at),
            }),
        }
    }

    /// Run time excluding pauses; frozen once the run is over.
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.state {
            RunState::Idle => Duration::ZERO,
            RunState::GameOver => self.final_elapsed.unwrap_or_default(),
            RunState::Running | RunState::Paused => {
                let until = self.paused_at.unwrap_or(now);
                until
                    .saturating_sub(self.started_at)
                    .saturating_sub(self.paused_total)
            }
        }
    }

    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn tick(&mut self, now: Duration) -> TickOutcome {
        let direction = self.snake.commit_direction();
        let advance = self
            .snake
            .advance(direction, &self.grid, self.food.map(|food| food.cell));

        if let Some(reason) = advance.collision {
            self.end_run(now, reason);
            return TickOutcome::Collided(reason);
        }

        if advance.grows {
            self.snake.grow(advance.new_head);
            self.score += POINTS_PER_FOOD;
            self.food = Some(spawn_food(&self.snake, &self.grid, &mut self.rng, now));
            log!(
                "Ate food at ({}, {}). Score: {}",
                advance.new_head.x,
                advance.new_head.y,
                self.score
            );
            self.events.push(SessionEvent::FoodEaten {
                cell: advance.new_head,
                score: self.score,
            });
            TickOutcome::Grew
        } else {
            self.snake.move_to(advance.new_head);
            TickOutcome::Moved
        }
    }

    fn close_pause(&mut self, now: Duration) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += now.saturating_sub(paused_at);
        }
    }

    fn end_run(&mut self, now: Duration, reason: DeathReason) {
        self.close_pause(now);
        let elapsed = now
            .saturating_sub(self.started_at)
            .saturating_sub(self.paused_total);
        self.final_elapsed = Some(elapsed);
        self.state = RunState::GameOver;

        let new_high_score = if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.score)
        } else {
            None
        };

        let player = self.player.clone().unwrap_or_default();
        log!("{} game over ({:?}). Score: {}", player, reason, self.score);
        if let Some(high_score) = new_high_score {
            log!("New high score: {}", high_score);
        }

        self.events.push(SessionEvent::GameOver(GameOverReport {
            player,
            score: self.score,
            elapsed,
            reason,
            new_high_score,
        }));
    }
}
