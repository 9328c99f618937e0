use crate::transcript::Transcript;
use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// A completed interview handed to the scoring service.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    interview_id: String,
    user_id: String,
    transcript: Transcript,
    /// Set when updating an existing feedback record instead of creating one.
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback_id: Option<String>,
}

impl FeedbackRequest {
    pub fn new(
        interview_id: &str,
        user_id: &str,
        transcript: Transcript,
        feedback_id: Option<String>,
    ) -> Self {
        Self {
            interview_id: interview_id.to_string(),
            user_id: user_id.to_string(),
            transcript,
            feedback_id,
        }
    }

    pub fn interview_id(&self) -> &str {
        &self.interview_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn feedback_id(&self) -> Option<&str> {
        self.feedback_id.as_deref()
    }
}

/// Outcome of a feedback submission. `feedback_id` identifies the persisted
/// record when the submission succeeded.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    success: bool,
    #[serde(default)]
    feedback_id: Option<String>,
}

impl FeedbackResult {
    pub fn new(success: bool, feedback_id: Option<String>) -> Self {
        Self {
            success,
            feedback_id,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn feedback_id(&self) -> Option<&str> {
        self.feedback_id.as_deref()
    }
}

// The `FeedbackGateway` trait defines the contract for any service that can
// turn an interview transcript into a persisted, scored feedback record. The
// session logic depends on this abstraction rather than on a concrete client,
// and unit tests use `mockall`'s `MockFeedbackGateway` to simulate scorer
// responses without network calls.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait FeedbackGateway: Send + Sync {
    /// Submits a transcript for scoring. At most one submission is in flight
    /// per session.
    async fn submit(&self, request: FeedbackRequest) -> Result<FeedbackResult>;
}

/// HTTP client for the hosted scoring service.
pub struct FeedbackClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FeedbackClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl FeedbackGateway for FeedbackClient {
    async fn submit(&self, request: FeedbackRequest) -> Result<FeedbackResult> {
        let result = self
            .client
            .post(format!("{}/feedback", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<FeedbackResult>()
            .await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Utterance;
    use interview_types::MessageRole;

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let mut transcript = Transcript::new();
        transcript.append(Utterance::new(MessageRole::User, "Hi"));
        let request = FeedbackRequest::new("interview_1", "user_1", transcript, None);

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["interviewId"], "interview_1");
        assert_eq!(json["userId"], "user_1");
        assert_eq!(json["transcript"][0]["role"], "user");
        assert!(json.get("feedbackId").is_none());
    }

    #[test]
    fn result_tolerates_missing_feedback_id() {
        let result: FeedbackResult =
            serde_json::from_str(r#"{"success": false}"#).expect("deserialize");
        assert!(!result.success());
        assert!(result.feedback_id().is_none());
    }

    // This is an integration test that makes a live call to the scoring
    // service. It is ignored by default so `cargo test` runs without
    // credentials. To run it, use `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn submit_against_live_service() {
        dotenvy::dotenv_override().ok();
        let base_url = std::env::var("FEEDBACK_API_URL").expect("FEEDBACK_API_URL not set");
        let api_key = std::env::var("FEEDBACK_API_KEY").expect("FEEDBACK_API_KEY not set");
        let client = FeedbackClient::new(&base_url, &api_key);

        let mut transcript = Transcript::new();
        transcript.append(Utterance::new(
            MessageRole::Assistant,
            "Tell me about yourself.",
        ));
        transcript.append(Utterance::new(
            MessageRole::User,
            "I have five years of backend experience.",
        ));

        let result = client
            .submit(FeedbackRequest::new(
                "smoke_test_interview",
                "smoke_test_user",
                transcript,
                None,
            ))
            .await
            .expect("submission should reach the service");
        assert!(result.success());
    }
}
