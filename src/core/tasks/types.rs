use crate::core::{
    AuthResponse,
    PrepSession,
    Question,
    User,
};

/// Outcome of one background task, delivered to the app over the task
/// manager's channel and applied on the UI thread.
#[derive(Debug, Clone)]
pub enum TaskResult {
    LoggedIn(Result<AuthResponse, String>),
    SignedUp(Result<AuthResponse, String>),
    ProfileLoaded(Result<User, String>),

    SessionsLoaded(Result<Vec<PrepSession>, String>),
    SessionOpened(Result<PrepSession, String>),

    PinToggled { question_id: String, result: Result<Question, String> },
    Elaboration { question_id: String, result: Result<String, String> },
}
