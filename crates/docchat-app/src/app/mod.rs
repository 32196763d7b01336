pub mod setup;
pub mod task;
pub mod repl;

pub use setup::{setup_from_cli, AppConfig};
pub use task::run_task_mode;
pub use repl::run_repl_mode;

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use docchat_stream::{ChatStreamer, ReplyEvent};
use docchat_types::ChatMessage;

/// Text of one streamed turn, and whether it ended in a transport failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub reply: String,
    pub failed: bool,
}

/// Stream one reply to `out` as it arrives
pub async fn stream_turn<W: Write>(
    streamer: &ChatStreamer,
    messages: &[ChatMessage],
    documents: &[String],
    out: &mut W,
) -> Result<TurnOutcome> {
    let mut reply = streamer.chat_completion(messages, documents);
    let mut outcome = TurnOutcome {
        reply: String::new(),
        failed: false,
    };

    loop {
        match reply.next_event().await {
            ReplyEvent::Delta(text) => {
                write!(out, "{}", text)?;
                out.flush()?;
                outcome.reply.push_str(&text);
            }
            ReplyEvent::ErrorDelta(text) => {
                write!(out, "{}", text.bright_red())?;
                out.flush()?;
                outcome.failed = true;
            }
            ReplyEvent::Done => break,
        }
    }

    writeln!(out)?;
    Ok(outcome)
}

/// Stream one reply to stdout
pub async fn stream_turn_to_stdout(
    streamer: &ChatStreamer,
    messages: &[ChatMessage],
    documents: &[String],
) -> Result<TurnOutcome> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    stream_turn(streamer, messages, documents, &mut handle).await
}
