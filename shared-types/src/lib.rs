// Shared models for the FAQ server, the Rust client and the browser UI

pub mod envelope;
pub mod faq;
pub mod typescript_gen;

pub use envelope::{ApiResponse, ServerStatus};
pub use faq::{FaqInput, FaqRecord};
pub use typescript_gen::{generate_api_types, generate_typescript_definitions};
