use std::io::Cursor;
use std::sync::Mutex;

use anyhow::Result;
use readnext::llm::{LlmProvider, LlmRequest, LlmResponse, UsageMetadata};
use readnext::run_pipeline;

/// Stub provider returning a canned completion and recording the requests it
/// receives.
struct StubProvider {
    completion: String,
    requests: Mutex<Vec<LlmRequest>>,
}

impl StubProvider {
    fn new(completion: &str) -> Self {
        Self {
            completion: completion.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for StubProvider {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(LlmResponse {
            content: self.completion.clone(),
            usage: UsageMetadata::default(),
            model: "stub".to_string(),
        })
    }
}

struct FailingProvider;

#[async_trait::async_trait]
impl LlmProvider for FailingProvider {
    async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse> {
        anyhow::bail!("connection refused")
    }
}

#[tokio::test]
async fn end_to_end_pipeline() {
    let provider = StubProvider::new("A\n\nB\n\nC");
    let mut input = Cursor::new(b"Intro to gRPC: covers unary/streaming RPCs\ndone\n".to_vec());
    let mut output = Vec::new();

    let state = run_pipeline(&provider, &mut input, &mut output)
        .await
        .unwrap();

    assert_eq!(
        state.read_articles,
        vec!["Intro to gRPC: covers unary/streaming RPCs"]
    );
    assert_eq!(state.recommendations, vec!["A", "B", "C"]);

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("推薦 1\nA\n"));
    assert!(printed.contains("推薦 2\nB\n"));
    assert!(printed.contains("推薦 3\nC\n"));

    // Exactly one request, embedding the collected history
    let requests = provider.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .prompt
        .contains("Intro to gRPC: covers unary/streaming RPCs"));
    assert!(requests[0].system.is_some());
}

#[tokio::test]
async fn provider_failure_propagates_without_partial_state() {
    let mut input = Cursor::new(b"some article\ndone\n".to_vec());
    let mut output = Vec::new();

    let result = run_pipeline(&FailingProvider, &mut input, &mut output).await;

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("LLM generation failed"));

    // Nothing was displayed past the collection prompts
    let printed = String::from_utf8(output).unwrap();
    assert!(!printed.contains("おすすめの技術記事"));
}

#[test]
fn missing_credential_is_detected_before_any_network_call() {
    std::env::remove_var(readnext::config::API_KEY_ENV);
    assert!(readnext::config::api_key_from_env().is_none());

    std::env::set_var(readnext::config::API_KEY_ENV, "");
    assert!(readnext::config::api_key_from_env().is_none());

    // The gate prints the user-facing message and yields no key, so the
    // caller exits before constructing a provider.
    let mut out = Vec::new();
    let key = readnext::config::require_api_key(&mut out).unwrap();
    assert!(key.is_none());
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("エラー: OPENAI_API_KEYが設定されていません。"));
    assert!(printed.contains(".env"));

    std::env::set_var(readnext::config::API_KEY_ENV, "sk-test");
    let mut out = Vec::new();
    let key = readnext::config::require_api_key(&mut out).unwrap();
    assert_eq!(key.as_deref(), Some("sk-test"));
    assert!(out.is_empty());
    std::env::remove_var(readnext::config::API_KEY_ENV);
}
