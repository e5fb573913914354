use actix_cors::Cors;

/// Cross-origin policy for the API: every origin, method and header is
/// allowed. `Cors` is not `Clone`; each app instance builds its own.
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}
