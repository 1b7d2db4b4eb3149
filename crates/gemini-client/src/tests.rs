/// Response-shape tests with representative `generateContent` payloads, plus
/// request/response exchanges against a local mock server.
#[cfg(test)]
mod unit {
    use crate::types::{ErrorEnvelope, FinishReason, GenerateRequest, GenerateResponse};
    use crate::GeminiError;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).expect("failed to parse response")
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GenerateRequest::from_prompt("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn first_text_of_first_candidate() {
        let resp = parse(
            r####"{
                "candidates": [
                    {"content": {"parts": [{"text": "### Plan"}, {"text": "ignored"}]},
                     "finishReason": "STOP"},
                    {"content": {"parts": [{"text": "second candidate"}]}}
                ],
                "usageMetadata": {"promptTokenCount": 10}
            }"####,
        );
        assert_eq!(resp.first_text().unwrap(), "### Plan");
        assert_eq!(resp.candidates[0].finish_reason, Some(FinishReason::Stop));
    }

    #[test]
    fn safety_block_without_content() {
        let resp = parse(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#);
        assert!(matches!(resp.first_text(), Err(GeminiError::SafetyBlocked)));
    }

    #[test]
    fn no_candidates_is_invalid() {
        let resp = parse(r#"{"promptFeedback": {"blockReason": "OTHER"}}"#);
        assert!(matches!(resp.first_text(), Err(GeminiError::InvalidResponse)));
    }

    #[test]
    fn content_without_text_is_invalid() {
        let resp = parse(r#"{"candidates": [{"content": {"parts": []}}]}"#);
        assert!(matches!(resp.first_text(), Err(GeminiError::InvalidResponse)));
    }

    #[test]
    fn unknown_finish_reason_parses() {
        let resp = parse(r#"{"candidates": [{"finishReason": "SOMETHING_NEW"}]}"#);
        assert_eq!(resp.candidates[0].finish_reason, Some(FinishReason::Unknown));
        assert!(matches!(resp.first_text(), Err(GeminiError::InvalidResponse)));
    }

    #[test]
    fn error_message_from_envelope() {
        let body = r#"{"error": {"message": "API key not valid", "code": 400}}"#;
        assert_eq!(ErrorEnvelope::message_for(body, 400), "API key not valid");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(
            ErrorEnvelope::message_for("<html>bad gateway</html>", 502),
            "HTTP error! status: 502"
        );
    }
}

#[cfg(test)]
mod exchange {
    use crate::{ClientConfig, GeminiClient, GeminiError};

    fn client(base_url: String) -> GeminiClient {
        let mut cfg = ClientConfig::new("test-key");
        cfg.base_url = base_url;
        GeminiClient::new(cfg).unwrap()
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(matches!(
            GeminiClient::new(ClientConfig::new("  ")),
            Err(GeminiError::MissingApiKey)
        ));
    }

    #[test]
    fn endpoint_joins_model() {
        let c = client("https://example.test/v1beta/".to_string());
        assert_eq!(
            c.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn generate_returns_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"contents": [{"parts": [{"text": "plan please"}]}]}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "* Serve wide."}]}}]}"#)
            .create_async()
            .await;

        let text = client(server.url()).generate("plan please").await.unwrap();
        assert_eq!(text, "* Serve wide.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn generate_surfaces_api_error_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(403)
            .with_body(r#"{"error": {"message": "Permission denied", "code": 403}}"#)
            .create_async()
            .await;

        let err = client(server.url()).generate("x").await.unwrap_err();
        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Permission denied");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_malformed_body_is_invalid() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client(server.url()).generate("x").await.unwrap_err();
        assert!(matches!(err, GeminiError::InvalidResponse));
    }
}
