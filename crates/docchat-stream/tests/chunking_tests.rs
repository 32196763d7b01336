mod fixtures;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use docchat_stream::{BackendConfig, ChatStreamer};
use docchat_types::ChatMessage;
use fixtures::{bodies, ScriptedTransport};

async fn reply_for(transport: ScriptedTransport) -> String {
    let config = BackendConfig::new("http://rag.internal:9000");
    ChatStreamer::with_transport(config, Arc::new(transport))
        .chat_completion(&[ChatMessage::user("question")], &[])
        .collect_text()
        .await
}

#[tokio::test]
async fn test_output_independent_of_chunk_size() {
    let body = bodies::MIXED.as_bytes();
    let whole = reply_for(ScriptedTransport::new(vec![body.to_vec()])).await;
    assert_eq!(whole, "Grüße, wörld ✓ 日本語opaque 🚀plain linetail");

    for size in 1..=body.len() {
        let chunked = reply_for(ScriptedTransport::chunked(body, size)).await;
        assert_eq!(chunked, whole, "chunk size {}", size);
    }
}

#[tokio::test]
async fn test_sentinel_respected_at_every_split() {
    let body = bodies::SENTINEL_STOP.as_bytes();
    for size in 1..=body.len() {
        let reply = reply_for(ScriptedTransport::chunked(body, size)).await;
        assert_eq!(reply, "hello", "chunk size {}", size);
    }
}

#[tokio::test]
async fn test_split_inside_data_prefix() {
    let chunks = vec![b"da".to_vec(), b"ta".to_vec(), b": ".to_vec(), b"split\n".to_vec()];
    assert_eq!(reply_for(ScriptedTransport::new(chunks)).await, "split");
}

#[tokio::test]
async fn test_empty_chunks_are_harmless() {
    let chunks = vec![
        Vec::new(),
        b"data: a".to_vec(),
        Vec::new(),
        b"\n".to_vec(),
        Vec::new(),
    ];
    assert_eq!(reply_for(ScriptedTransport::new(chunks)).await, "a");
}

#[tokio::test]
async fn test_one_open_per_call() {
    let transport = ScriptedTransport::new(vec![b"data: x\n".to_vec()]);
    let opened = transport.open_count();
    let streamer = ChatStreamer::with_transport(
        BackendConfig::new("http://rag.internal:9000"),
        Arc::new(transport),
    );

    for _ in 0..3 {
        let reply = streamer
            .chat_completion(&[ChatMessage::user("q")], &[])
            .collect_text()
            .await;
        assert_eq!(reply, "x");
    }
    assert_eq!(opened.load(Ordering::SeqCst), 3);
}
