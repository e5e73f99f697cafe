use axum::Router;
use sea_orm::Database;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use website::{
    config::AppConfig,
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher, schema::create_user_table,
        user_repository::SeaOrmUserRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

const DEFAULT_LOG_FILTER: &str = "website=info,sea_orm=warn";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db = Database::connect(config.connect_options()).await?;
    info!("Connected to database");
    create_user_table(&db).await?;

    let user_repository = SeaOrmUserRepository::new(db);
    let password_hasher = Argon2PasswordHasher::new();
    let register_user_usecase = RegisterUserUsecase::new(user_repository, password_hasher);

    let app = Router::new().nest("/user", create_user_router(register_user_usecase));

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
