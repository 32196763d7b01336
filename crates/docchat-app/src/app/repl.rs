use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use docchat_stream::ChatStreamer;
use docchat_types::ChatMessage;
use crate::app::{stream_turn_to_stdout, AppConfig};
use crate::history::parse_document_list;

/// Run interactive REPL mode
pub async fn run_repl_mode(app_config: AppConfig, initial: Option<String>) -> Result<()> {
    let streamer = ChatStreamer::new(app_config.backend);
    let mut messages = app_config.history;
    let mut documents = app_config.documents;

    println!("{}", "📚 DocChat".bright_cyan().bold());
    if streamer.config().is_configured() {
        println!("{}", format!("Backend: {}", streamer.config().endpoint()).bright_black());
    } else {
        println!("{}", "No backend configured - replies are simulated".bright_yellow());
    }
    println!("{}", "Commands: /docs [a,b,...], /clear, /quit\n".bright_black());

    if let Some(message) = initial {
        send_turn(&streamer, &mut messages, &documents, message).await?;
    }

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if line == "exit" || line == "quit" || line == "/quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                if line == "/clear" {
                    messages.clear();
                    println!("{}", "Conversation cleared".bright_black());
                    continue;
                }

                if line == "/docs" {
                    if documents.is_empty() {
                        println!("{}", "No documents selected".bright_black());
                    } else {
                        println!("{} {}", "📄".bright_green(), documents.join(", "));
                    }
                    continue;
                }

                if let Some(arg) = line.strip_prefix("/docs ") {
                    documents = parse_document_list(arg);
                    println!("{} {} document(s) selected", "📄".bright_green(), documents.len());
                    continue;
                }

                send_turn(&streamer, &mut messages, &documents, line.to_string()).await?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}

/// Send one user turn; only successful replies join the conversation
async fn send_turn(
    streamer: &ChatStreamer,
    messages: &mut Vec<ChatMessage>,
    documents: &[String],
    text: String,
) -> Result<()> {
    messages.push(ChatMessage::user(text));

    print!("{} ", "Assistant:".bright_blue().bold());
    let outcome = stream_turn_to_stdout(streamer, messages, documents).await?;
    println!();

    if !outcome.failed && !outcome.reply.is_empty() {
        messages.push(ChatMessage::assistant(outcome.reply));
    }

    Ok(())
}
