use colored::Colorize;

use docchat_types::CompletionRequest;
use crate::safe_truncate;

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, request: &CompletionRequest, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    // Parse URL to show host and port
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        println!("{}: {}", "URL".bright_yellow(), url);
        println!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
        println!("{}: {}", "Port".bright_yellow(), parsed_url.port_or_known_default()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "unknown".to_string()));
    } else {
        println!("{}: {}", "URL".bright_yellow(), url);
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!("  Accept: text/event-stream");

    println!("\n{}", "Request Body:".bright_yellow());
    println!(
        "{}",
        format!(
            "{} message(s), {} document(s)",
            request.messages().len(),
            request.document_ids().len()
        )
        .bright_black()
    );
    match serde_json::to_string_pretty(request) {
        Ok(json) => {
            // Truncate very long requests for readability
            if json.chars().count() > 5000 {
                println!("{}", safe_truncate(&json, 5000));
                println!("\n{}", format!("... (truncated, total {} bytes)", json.len()).bright_black());
            } else {
                println!("{}", json);
            }
        }
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Render a failed backend reply; `body` is whatever the error body read produced
pub fn format_backend_error(endpoint: &str, status: &reqwest::StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown");
    let mut out = format!("Backend {} answered {} {}\n", endpoint, status.as_u16(), reason);

    if body.trim().is_empty() {
        out.push_str("(empty error body)");
    } else if body == reason {
        out.push_str("(error body unreadable, showing reason phrase)");
    } else {
        // JSON error bodies are easier to read pretty-printed
        let rendered = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json_val| serde_json::to_string_pretty(&json_val).ok())
            .unwrap_or_else(|| body.to_string());
        out.push_str(&safe_truncate(&rendered, 2000));
    }
    out
}

/// Log a non-success backend reply (console output)
pub fn log_backend_error(endpoint: &str, status: &reqwest::StatusCode, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "📥 BACKEND ERROR".bright_red().bold());
    println!("{}", format_backend_error(endpoint, status, body).red());
    println!();
}

/// Render one received line with how it was classified (`delta`, `skip`, `done`)
/// and the text it contributed to the reply, if any
pub fn format_stream_line(line_num: usize, line: &str, kind: &str, emitted: Option<&str>) -> String {
    let shown = if line.chars().count() > 120 {
        format!("{} ({} bytes)", safe_truncate(line, 120), line.len())
    } else {
        line.to_string()
    };

    match emitted {
        Some(text) if text != line => format!("#{} [{}] {} => {:?}", line_num, kind, shown, text),
        _ => format!("#{} [{}] {}", line_num, kind, shown),
    }
}

/// Log one received stream line (console output)
pub fn log_stream_line(line_num: usize, line: &str, kind: &str, emitted: Option<&str>, verbose: bool) {
    if !verbose {
        return;
    }

    let rendered = format_stream_line(line_num, line, kind, emitted);
    match kind {
        "done" => println!("{}", rendered.bright_green()),
        "skip" => println!("{}", rendered.bright_black()),
        _ => println!("{}", rendered.bright_cyan()),
    }
}
