use serde::{
    Deserialize,
    Serialize,
};

use super::{
    ensure_success,
    ApiClient,
};
use crate::core::{
    PrepSession,
    PrepwiseError,
    Question,
};

#[derive(Serialize)]
struct NotePayload<'a> {
    note: &'a str,
}

#[derive(Serialize)]
struct ExplanationRequest<'a> {
    question: &'a str,
}

#[derive(Deserialize)]
struct ExplanationResponse {
    #[serde(default)]
    #[allow(dead_code)]
    title: Option<String>,
    explanation: String,
}

#[derive(Deserialize)]
struct SessionEnvelope {
    session: PrepSession,
}

impl ApiClient {
    /// Persist a personal note on one question. Success is HTTP-level
    /// success; callers get no finer classification of failures.
    pub async fn save_note(&self, question_id: &str, note: &str) -> Result<(), PrepwiseError> {
        let resp = self
            .authed(self.post(&format!("/api/questions/{}/note", question_id)))?
            .json(&NotePayload { note })
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    /// Flip the pin marker server-side and return the updated question.
    pub async fn toggle_pin(&self, question_id: &str) -> Result<Question, PrepwiseError> {
        let resp =
            self.authed(self.post(&format!("/api/questions/{}/pin", question_id)))?.send().await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    pub async fn my_sessions(&self) -> Result<Vec<PrepSession>, PrepwiseError> {
        let resp = self.authed(self.get("/api/sessions/my-sessions"))?.send().await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    pub async fn session(&self, session_id: &str) -> Result<PrepSession, PrepwiseError> {
        let resp =
            self.authed(self.get(&format!("/api/sessions/{}", session_id)))?.send().await?;
        let envelope: SessionEnvelope = ensure_success(resp).await?.json().await?;
        Ok(envelope.session)
    }

    /// Ask the AI service for a longer answer to one question.
    pub async fn generate_explanation(&self, question: &str) -> Result<String, PrepwiseError> {
        let resp = self
            .authed(self.post("/api/ai/generate-explanation"))?
            .json(&ExplanationRequest { question })
            .send()
            .await?;
        let body: ExplanationResponse = ensure_success(resp).await?.json().await?;
        Ok(body.explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_payload_is_a_single_note_field() {
        let payload = NotePayload { note: "Practice recursion" };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "note": "Practice recursion" }));
    }

    #[test]
    fn explanation_response_tolerates_missing_title() {
        let body: ExplanationResponse =
            serde_json::from_str(r#"{ "explanation": "Closures capture their environment." }"#)
                .unwrap();
        assert_eq!(body.explanation, "Closures capture their environment.");
    }
}
