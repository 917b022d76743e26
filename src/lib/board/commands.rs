use log::warn;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc::Sender,
};

use super::{activity_board::UiEvent, document::NodeId, error::CommandError};

pub const HELP: &str = "commands: refresh | select <activity> | email <address> | submit | \
signup <email> <activity> | delete <row> | quit";

/// Parses one input line into the events it stands for. `signup` expands into
/// filling the form and submitting it.
pub fn parse_command(line: &str) -> Result<Vec<UiEvent>, CommandError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    match command {
        "" => Err(CommandError::Empty),
        "refresh" => Ok(vec![UiEvent::Refresh]),
        "submit" => Ok(vec![UiEvent::Submit]),
        "quit" | "exit" => Ok(vec![UiEvent::Quit]),
        "select" if !rest.is_empty() => Ok(vec![UiEvent::SelectActivity(rest.to_owned())]),
        "select" => Err(CommandError::Usage("select <activity>")),
        "email" => Ok(vec![UiEvent::EnterEmail(rest.to_owned())]),
        "signup" => match rest.split_once(char::is_whitespace) {
            Some((email, activity)) if !activity.trim().is_empty() => Ok(vec![
                UiEvent::EnterEmail(email.to_owned()),
                UiEvent::SelectActivity(activity.trim().to_owned()),
                UiEvent::Submit,
            ]),
            _ => Err(CommandError::Usage("signup <email> <activity>")),
        },
        "delete" if rest.is_empty() => Err(CommandError::Usage("delete <row>")),
        "delete" => rest
            .parse::<NodeId>()
            .map(|node| vec![UiEvent::Delete(node)])
            .map_err(|_| CommandError::BadRow(rest.to_owned())),
        other => Err(CommandError::Unknown(other.to_owned())),
    }
}

/// Reads commands line by line and forwards their events until input ends,
/// `quit` is read or the board stops listening.
pub async fn forward_commands<R: AsyncBufRead + Unpin>(reader: R, events: Sender<UiEvent>) {
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                warn!("Failed to read a command: {}", err);
                break;
            }
        };
        let parsed = match parse_command(&line) {
            Ok(parsed) => parsed,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                warn!("{}. {}", err, HELP);
                continue;
            }
        };
        for event in parsed {
            let quit = event == UiEvent::Quit;
            if events.send(event).await.is_err() || quit {
                return;
            }
        }
    }
}
