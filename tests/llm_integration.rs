//! Integration tests for the Anthropic client.
//!
//! These tests make real API calls.
//! Run with: ANTHROPIC_API_KEY=your_key cargo test --test llm_integration -- --ignored

use prompt_forge::llm::{AnthropicClient, CompletionRequest, LlmProvider, Message};
use prompt_forge::synth::strip_code_fence;

fn get_test_api_key() -> String {
    std::env::var("ANTHROPIC_API_KEY")
        .expect("ANTHROPIC_API_KEY environment variable must be set for integration tests")
}

fn create_test_client() -> AnthropicClient {
    AnthropicClient::new(get_test_api_key())
}

#[tokio::test]
#[ignore] // Run with: cargo test --test llm_integration -- --ignored
async fn test_simple_completion() {
    let client = create_test_client();

    let request = CompletionRequest::new(
        "claude-3-5-haiku-20241022",
        10,
        vec![Message::user("What is 2 + 2? Reply with just the number.")],
    );

    let response = client.complete(request).await;
    assert!(response.is_ok(), "Completion failed: {:?}", response.err());

    let response = response.expect("Should have response");
    let content = response.first_text().expect("Should have content");
    assert!(
        content.contains('4'),
        "Response should contain '4', got: {}",
        content
    );

    // Verify usage was tracked
    assert!(response.usage.output_tokens > 0, "Should have token usage");
}

#[tokio::test]
#[ignore]
async fn test_json_only_system_prompt() {
    let client = create_test_client();

    let request = CompletionRequest::new(
        "claude-3-5-haiku-20241022",
        100,
        vec![Message::user("Give me the number four as {\"value\": N}.")],
    )
    .with_system("Respond ONLY with valid JSON, no markdown, no explanation.");

    let response = client
        .complete(request)
        .await
        .expect("Completion should succeed");
    let content = response.first_text().expect("Should have content");

    let cleaned = strip_code_fence(content);
    let parsed: serde_json::Value =
        serde_json::from_str(&cleaned).expect("Response should be parseable JSON");
    assert_eq!(parsed["value"], 4);
}
