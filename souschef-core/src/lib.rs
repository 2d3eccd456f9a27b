pub mod chat;
pub mod config;
pub mod http;
pub mod models;
pub mod openai;
pub mod prompt;

// Re-export commonly used types
pub use chat::get_agent_response;
pub use config::{Config, DEFAULT_MODEL};
pub use models::{Message, Role};
pub use prompt::SYSTEM_PROMPT;
