// System handlers (health, shared state)
pub mod main_handlers;
pub use main_handlers::AppState;

// FAQ CRUD handlers
pub mod faq_handlers;
