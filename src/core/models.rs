use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// One generated interview question with the user's annotations.
///
/// The backend owns this data; the client only requests mutations (pin
/// toggle, note save, elaboration) and re-renders from the updated copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub question: String,
    /// May be empty until an elaboration has been fetched.
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// A saved interview-prep session: role, focus topics and its question set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepSession {
    #[serde(rename = "_id")]
    pub id: String,
    pub role: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub topics_to_focus: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PrepSession {
    pub fn format_last_updated(&self) -> String {
        match self.updated_at {
            Some(ts) => ts.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string(),
            None => "Unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Login/signup response: the profile plus a bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_deserializes_backend_shape() {
        let json = r#"{
            "_id": "665f1a",
            "question": "What is ownership in Rust?",
            "answer": "",
            "isPinned": true,
            "note": "Review later"
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, "665f1a");
        assert!(q.answer.is_empty());
        assert!(q.is_pinned);
        assert_eq!(q.note.as_deref(), Some("Review later"));
    }

    #[test]
    fn question_defaults_apply_when_fields_missing() {
        let json = r#"{ "_id": "a1", "question": "Explain closures" }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.answer.is_empty());
        assert!(!q.is_pinned);
        assert!(q.note.is_none());
    }

    #[test]
    fn auth_response_flattens_user() {
        let json = r#"{
            "_id": "u1",
            "name": "Jordan",
            "email": "jordan@example.com",
            "token": "abc123"
        }"#;

        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.token, "abc123");
        assert_eq!(auth.user.name, "Jordan");
        assert!(auth.user.profile_image_url.is_none());
    }

    #[test]
    fn session_tolerates_missing_question_list() {
        let json = r#"{ "_id": "s1", "role": "Backend Engineer" }"#;

        let s: PrepSession = serde_json::from_str(json).unwrap();
        assert!(s.questions.is_empty());
        assert_eq!(s.format_last_updated(), "Unknown");
    }
}
