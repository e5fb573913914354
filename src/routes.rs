//! Centralized route configuration for the assistant API.
//!
//! Shared between the server binary and the test harness so both run the
//! same routing setup.

use crate::handlers::{exchange_handlers, main_handlers};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ask", web::post().to(exchange_handlers::ask_question))
        .route("/history", web::get().to(exchange_handlers::get_history))
        .route("/health", web::get().to(main_handlers::health_check));
}
