use anyhow::Result;
use colored::Colorize;

use docchat_stream::ChatStreamer;
use docchat_types::ChatMessage;
use crate::app::{stream_turn_to_stdout, AppConfig};

/// Run in task mode - answer a single message and exit
pub async fn run_task_mode(app_config: AppConfig, message: String) -> Result<()> {
    let streamer = ChatStreamer::new(app_config.backend);

    if !streamer.config().is_configured() {
        eprintln!("{}", "No backend configured - replying with a simulated response".bright_black());
    }

    let mut messages = app_config.history;
    messages.push(ChatMessage::user(message));

    let outcome = stream_turn_to_stdout(&streamer, &messages, &app_config.documents).await?;
    log::debug!("Task reply finished ({} chars, failed: {})", outcome.reply.chars().count(), outcome.failed);

    Ok(())
}
