use actix_web::{middleware::Logger, web, App, HttpServer};
use assistant_api::config::AppConfig;
use assistant_api::database::Database;
use assistant_api::error::AppResult;
use assistant_api::handlers::AppState;
use assistant_api::middleware::permissive_cors;
use assistant_api::routes;
use clap::{Arg, Command};
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;

#[actix_web::main]
async fn main() -> AppResult<()> {
    // Parse command line arguments
    let matches = Command::new("assistant-api")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Question-logging API daemon")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file")
                .value_name("FILE"),
        )
        .get_matches();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting assistant-api daemon");

    // Load configuration
    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            let config = AppConfig::load_from_file(Path::new(path))?;
            tracing::info!("Loaded configuration from {path}");
            config
        }
        None => AppConfig::load()?,
    };

    // Initialize database
    let database = Arc::new(Database::new(&config.database.path)?);
    tracing::info!("Database initialized at {:?}", config.database.path);

    let app_state = web::Data::new(AppState {
        database,
        start_time: SystemTime::now(),
    });

    // Start HTTP server
    let server_addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting HTTP server on {server_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(permissive_cors())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
