pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::PrepwiseError;
pub use models::{AuthResponse, PrepSession, Question, User};
