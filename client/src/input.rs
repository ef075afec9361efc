use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use snake_common::log;
use snake_common::snake::Direction;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    Steer(Direction),
    StartOrRestart,
    TogglePause,
    SpeedUp,
    SpeedDown,
    ToggleWrap,
    Redraw,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<HostCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(HostCommand::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => HostCommand::Steer(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => HostCommand::Steer(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => HostCommand::Steer(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            HostCommand::Steer(Direction::Right)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => HostCommand::TogglePause,
        KeyCode::Char(' ') | KeyCode::Enter => HostCommand::StartOrRestart,
        KeyCode::Char('+') | KeyCode::Char('=') => HostCommand::SpeedUp,
        KeyCode::Char('-') | KeyCode::Char('_') => HostCommand::SpeedDown,
        KeyCode::Char('t') | KeyCode::Char('T') => HostCommand::ToggleWrap,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => HostCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Forwards terminal input until the receiver is gone or the stream ends.
pub async fn forward_key_events(command_tx: mpsc::UnboundedSender<HostCommand>) {
    let mut events = EventStream::new();

    while let Some(event) = events.next().await {
        let command = match event {
            Ok(Event::Key(key)) => map_key(key),
            Ok(Event::Resize(_, _)) => Some(HostCommand::Redraw),
            Ok(_) => None,
            Err(e) => {
                log!("Failed to read terminal input: {}", e);
                Some(HostCommand::Quit)
            }
        };

        if let Some(command) = command
            && command_tx.send(command).is_err()
        {
            break;
        }
    }
}
