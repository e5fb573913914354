//! Common test utilities: one isolated application instance per test, with
//! its own temporary database.

use actix_web::{test, web, App};
use std::sync::Arc;
use std::time::SystemTime;
use tempfile::TempDir;

use assistant_api::database::Database;
use assistant_api::handlers::AppState;
use assistant_api::routes::configure_routes;

pub struct TestApp<S> {
    // Not every test binary reads the database directly.
    #[allow(dead_code)]
    pub db: Arc<Database>,
    pub app: S,
    // Held so the database directory outlives the test.
    _temp_dir: TempDir,
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let temp_dir = tempfile::tempdir()?;
    let db = Arc::new(Database::new(&temp_dir.path().join("assistant-test.db"))?);

    let app_state = web::Data::new(AppState {
        database: Arc::clone(&db),
        start_time: SystemTime::now(),
    });

    let app = test::init_service(
        App::new()
            .app_data(app_state)
            .configure(configure_routes),
    )
    .await;

    Ok(TestApp {
        db,
        app,
        _temp_dir: temp_dir,
    })
}
