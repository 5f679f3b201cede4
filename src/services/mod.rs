// Service exports
pub mod gemini;
pub mod postgres;

pub use gemini::{GeminiClient, GeminiError};
pub use postgres::{PostgresClient, PostgresError};
