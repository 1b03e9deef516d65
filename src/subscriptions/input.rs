//! Line-based command input
//!
//! Stands in for a host's gesture recognizers. One command per line:
//!
//! ```text
//! show [secs] <title> [| <subtitle>]
//! tap
//! drag            begin a drag
//! move <dy>       cumulative translation, positive downward
//! release <dy>    end the drag
//! dismiss
//! status
//! quit
//! ```

use crate::handlers::Message;
use shout_util::BannerEvent;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::Sender;

/// Parse one command line. Unknown or malformed input maps to [`Message::Ignore`].
pub fn parse_command(line: &str) -> Message {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((line, ""));

    match command.to_ascii_lowercase().as_str() {
        "" => Message::Ignore,
        "show" => parse_show(rest),
        "tap" => Message::Banner(BannerEvent::Tap),
        "drag" => Message::Banner(BannerEvent::DragBegin),
        "move" => match parse_offset(rest) {
            Some(dy) => Message::Banner(BannerEvent::DragUpdate(dy)),
            None => Message::Ignore,
        },
        "release" => match parse_offset(rest) {
            Some(dy) => Message::Banner(BannerEvent::DragEnd(dy)),
            None => Message::Ignore,
        },
        "dismiss" => Message::Dismiss,
        "status" => Message::Status,
        "quit" | "exit" => Message::Quit,
        other => {
            tracing::warn!("Unknown command: {}", other);
            Message::Ignore
        }
    }
}

fn parse_show(rest: &str) -> Message {
    let (duration, text) = match rest.split_once(char::is_whitespace) {
        Some((secs, text)) => match secs.parse::<f64>() {
            // Rejects negative, NaN, infinite and out of range values
            Ok(secs) => match Duration::try_from_secs_f64(secs) {
                Ok(duration) => (Some(duration), text.trim()),
                Err(_) => {
                    tracing::warn!("Banner duration must be a non-negative number of seconds");
                    return Message::Ignore;
                }
            },
            Err(_) => (None, rest),
        },
        None if rest.parse::<f64>().is_ok() => {
            tracing::warn!("show needs a title");
            return Message::Ignore;
        }
        None => (None, rest),
    };

    if text.is_empty() {
        tracing::warn!("show needs a title");
        return Message::Ignore;
    }

    let (title, subtitle) = text
        .split_once('|')
        .map(|(t, s)| (t.trim(), s.trim()))
        .unwrap_or((text, ""));

    Message::Show {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        duration,
    }
}

fn parse_offset(rest: &str) -> Option<f32> {
    match rest.parse::<f32>() {
        Ok(dy) if dy.is_finite() => Some(dy),
        _ => {
            tracing::warn!("Expected a drag offset, got {:?}", rest);
            None
        }
    }
}

/// Forward commands read from `reader` until it ends, then ask the host to quit.
pub async fn listen<R>(reader: R, tx: Sender<Message>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let message = parse_command(&line);
                if message == Message::Ignore {
                    continue;
                }
                if tx.send(message).await.is_err() {
                    return;
                }
            }
            Ok(None) => break,
            Err(err) => {
                tracing::error!("Failed to read input: {}", err);
                break;
            }
        }
    }

    if let Err(err) = tx.send(Message::Quit).await {
        tracing::trace!("host already gone: {:?}", err);
    }
}
