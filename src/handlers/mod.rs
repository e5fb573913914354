// Main handlers (system/health handlers)
pub mod main_handlers;
pub use main_handlers::AppState;

// Exchange handlers (submit question, history)
pub mod exchange_handlers;
