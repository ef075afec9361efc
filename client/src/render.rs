use std::collections::HashSet;
use std::io::{self, Stdout, Write};

use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use snake_common::snake::{Cell, RunState, Snapshot};

const HEAD: &str = "@@";
const BODY: &str = "[]";
const FOOD_BIG: &str = "()";
const FOOD_SMALL: &str = "<>";
const EMPTY: &str = "  ";

pub trait FrameRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), String>;

    /// Forces the next render to repaint everything.
    fn invalidate(&mut self) {}
}

/// Builds the text lines for one frame: HUD, bordered board, status line.
pub fn compose_frame(snapshot: &Snapshot) -> Vec<String> {
    let size = snapshot.grid_size as i32;
    let body: HashSet<Cell> = snapshot.snake_cells.iter().copied().collect();
    let head = snapshot.head();
    let food = snapshot.food;

    let mut lines = Vec::with_capacity(size as usize + 3);
    lines.push(hud_line(snapshot));

    let border = format!("+{}+", "-".repeat(size as usize * 2));
    lines.push(border.clone());
    for y in 0..size {
        let mut row = String::with_capacity(size as usize * 2 + 2);
        row.push('|');
        for x in 0..size {
            let cell = Cell::new(x, y);
            let glyph = if head == Some(cell) {
                HEAD
            } else if body.contains(&cell) {
                BODY
            } else if let Some(food) = food.filter(|food| food.cell == cell) {
                if food.pulse() > 0.5 { FOOD_BIG } else { FOOD_SMALL }
            } else {
                EMPTY
            };
            row.push_str(glyph);
        }
        row.push('|');
        lines.push(row);
    }
    lines.push(border);
    lines.push(status_line(snapshot));
    lines
}

fn hud_line(snapshot: &Snapshot) -> String {
    format!(
        "Player: {}  Score: {}  High: {}  Time: {}  Speed: {}  Walls: {}",
        snapshot.player.as_deref().unwrap_or("-"),
        snapshot.score,
        snapshot.high_score,
        snapshot.clock(),
        snapshot.speed,
        if snapshot.wrap { "Off" } else { "On" },
    )
}

fn status_line(snapshot: &Snapshot) -> String {
    match snapshot.state {
        RunState::Idle => "Press Space or an arrow key to start".to_string(),
        RunState::Running => "Arrows/WASD steer  P pause  +/- speed  T walls  Q quit".to_string(),
        RunState::Paused => "Paused - press P to resume".to_string(),
        RunState::GameOver => format!(
            "{} - Game Over! You survived {}  Score: {}  (Space to play again)",
            snapshot.player.as_deref().unwrap_or("Player"),
            snapshot.clock(),
            snapshot.score,
        ),
    }
}

pub struct TerminalRenderer {
    stdout: Stdout,
    needs_clear: bool,
    last_height: usize,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            needs_clear: true,
            last_height: 0,
        }
    }

    fn draw_lines(&mut self, lines: &[String]) -> io::Result<()> {
        if self.needs_clear {
            queue!(self.stdout, Clear(ClearType::All))?;
        }
        for (row, line) in lines.iter().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, row as u16),
                Clear(ClearType::UntilNewLine),
                Print(line)
            )?;
        }
        self.stdout.flush()
    }
}

impl FrameRenderer for TerminalRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), String> {
        let lines = compose_frame(snapshot);
        if lines.len() != self.last_height {
            self.needs_clear = true;
            self.last_height = lines.len();
        }

        let result = self.draw_lines(&lines);
        self.needs_clear = false;

        result.map_err(|e| format!("Failed to draw frame: {}", e))
    }

    fn invalidate(&mut self) {
        self.needs_clear = true;
    }
}

/// Owns raw mode and the alternate screen; restores the terminal on drop.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> Result<Self, String> {
        terminal::enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {}", e))?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
            .map_err(|e| format!("Failed to enter alternate screen: {}", e))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::snake::FoodView;
    use std::time::Duration;

    fn create_snapshot(state: RunState) -> Snapshot {
        Snapshot {
            state,
            player: Some("Ada".to_string()),
            score: 20,
            high_score: 50,
            elapsed: Duration::from_secs(75),
            grid_size: 6,
            wrap: false,
            speed: 8.0,
            snake_cells: vec![Cell::new(2, 3), Cell::new(1, 3)],
            food: Some(FoodView {
                cell: Cell::new(4, 1),
                age: Duration::ZERO,
            }),
        }
    }

    #[test]
    fn test_frame_has_hud_board_and_status() {
        let lines = compose_frame(&create_snapshot(RunState::Running));

        assert_eq!(lines.len(), 6 + 4);
        assert_eq!(lines[0], "Player: Ada  Score: 20  High: 50  Time: 01:15  Speed: 8  Walls: On");
        assert_eq!(lines[1], "+------------+");
        assert_eq!(lines[8], "+------------+");
        assert!(lines.iter().skip(2).take(6).all(|row| row.chars().count() == 14));
    }

    #[test]
    fn test_snake_and_food_are_drawn_in_their_cells() {
        let lines = compose_frame(&create_snapshot(RunState::Running));

        assert_eq!(lines[2 + 3], "|  []@@      |");
        // Zero age puts the pulse at its midpoint, below the big-glyph threshold.
        assert_eq!(lines[2 + 1], "|        <>  |");
    }

    #[test]
    fn test_game_over_status_shows_survival_time() {
        let lines = compose_frame(&create_snapshot(RunState::GameOver));

        assert_eq!(
            lines.last().unwrap(),
            "Ada - Game Over! You survived 01:15  Score: 20  (Space to play again)"
        );
    }

    #[test]
    fn test_wrap_shows_walls_off() {
        let snapshot = Snapshot {
            wrap: true,
            ..create_snapshot(RunState::Paused)
        };

        let lines = compose_frame(&snapshot);

        assert!(lines[0].ends_with("Walls: Off"));
        assert_eq!(lines.last().unwrap(), "Paused - press P to resume");
    }
}
