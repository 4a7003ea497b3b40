//! Mercato Server — product catalog and authentication API.
//!
//! Entry point that wires all crates together. `serve` (the default)
//! runs the HTTP server; `seed-users` resets the users collection.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use mercato_api::state::AppState;
use mercato_auth::jwt::decoder::JwtDecoder;
use mercato_auth::jwt::encoder::JwtEncoder;
use mercato_auth::password::hasher::PasswordHasher;
use mercato_core::config::AppConfig;
use mercato_core::error::AppError;
use mercato_database::DatabaseHandle;
use mercato_database::repositories::{
    MongoProductRepository, MongoUserRepository, UserRepository,
};
use mercato_entity::user::CreateUser;
use mercato_service::auth::service::AuthService;
use mercato_service::product::service::ProductService;
use mercato_storage::CloudinaryUploader;

#[derive(Parser)]
#[command(name = "mercato-server", version, about = "Mercato product catalog server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Reset the users collection and insert the seed users.
    SeedUsers,
}

#[tokio::main]
async fn main() {
    let env = std::env::var("MERCATO_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    let cli = Cli::parse();
    let result = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => run(config).await,
        Command::SeedUsers => seed_users(config).await,
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Mercato v{}", env!("CARGO_PKG_VERSION"));

    // ── Store connection + indexes ───────────────────────────────
    let db = DatabaseHandle::connect(&config.database).await?;
    mercato_database::indexes::ensure_indexes(&db).await?;

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(MongoUserRepository::new(&db));
    let product_repo = Arc::new(MongoProductRepository::new(&db));

    // ── Auth primitives ──────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Image host ───────────────────────────────────────────────
    let uploader = Arc::new(CloudinaryUploader::new(config.uploader.clone()));

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
    ));
    let product_service = Arc::new(ProductService::new(
        product_repo.clone(),
        uploader,
        config.uploader.folder.clone(),
    ));

    // ── HTTP server ──────────────────────────────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        jwt_decoder,
        auth_service,
        product_service,
    };
    let app = mercato_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Mercato server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Mercato server shut down gracefully");
    Ok(())
}

/// Reset the users collection and insert the two seed users.
async fn seed_users(config: AppConfig) -> Result<(), AppError> {
    let db = DatabaseHandle::connect(&config.database).await?;
    mercato_database::indexes::ensure_indexes(&db).await?;

    let users = MongoUserRepository::new(&db);
    let hasher = PasswordHasher::new();

    let removed = users.clear().await?;
    tracing::info!(removed, "cleared users collection");

    let seeds = [
        ("John", "Doe", "user1@gmail.com"),
        ("John", "Doe", "user2@gmail.com"),
    ];
    for (first_name, last_name, email) in seeds {
        users
            .insert(CreateUser {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                password: hasher.hash_password("password")?,
            })
            .await?;
    }

    tracing::info!("Users seeding completed");
    db.close().await;
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
