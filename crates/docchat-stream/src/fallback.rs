use std::time::Duration;

use async_stream::stream;
use futures::Stream;

use docchat_types::{last_user_message, ChatMessage};

/// Local stand-in for the backend, used while no backend URL is configured.
///
/// Output depends only on the latest user message and the number of selected
/// documents, so identical inputs always produce identical text.
#[derive(Debug, Clone)]
pub struct FallbackSimulator {
    delay: Duration,
}

impl FallbackSimulator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Build the simulated reply
    pub fn compose_reply(messages: &[ChatMessage], document_count: usize) -> String {
        let question = last_user_message(messages).unwrap_or("");
        let mut reply = format!(
            "I understand you're asking: \"{}\". \
             This is a simulated response since the backend API URL is not configured. \
             Please set BACKEND_API_URL or NEXT_PUBLIC_BACKEND_API_URL environment variable.",
            question
        );
        if document_count > 0 {
            reply.push_str(&format!(
                "\n\nI can see you've selected {} document(s).",
                document_count
            ));
        }
        reply
    }

    /// Split on single spaces; every token after the first carries its leading space
    pub fn tokens(reply: &str) -> Vec<String> {
        reply
            .split(' ')
            .enumerate()
            .map(|(index, word)| {
                if index == 0 {
                    word.to_string()
                } else {
                    format!(" {}", word)
                }
            })
            .collect()
    }

    /// Paced token stream; never fails
    pub fn stream(&self, messages: &[ChatMessage], document_count: usize) -> impl Stream<Item = String> + Send + 'static {
        let tokens = Self::tokens(&Self::compose_reply(messages, document_count));
        let delay = self.delay;

        stream! {
            for token in tokens {
                tokio::time::sleep(delay).await;
                yield token;
            }
        }
    }
}
