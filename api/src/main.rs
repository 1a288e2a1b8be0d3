use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};

use signet_core::services::auth::{AuthService, AuthServiceConfig};
use signet_core::services::password::PasswordService;
use signet_core::services::token::{TokenService, TokenServiceConfig};
use signet_core::services::user::UserService;
use signet_infra::storage::AvatarStorage;
use signet_infra::{create_pool, MySqlTokenRepository, MySqlUserRepository, SmtpMailer};
use signet_shared::config::AppConfig;

use signet_api::app::create_app;
use signet_api::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default");
    }

    info!("Starting Signet API server");

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));

    let token_service = Arc::new(TokenService::new(
        MySqlTokenRepository::new(pool.clone()),
        TokenServiceConfig {
            jwt_secret: config.auth.jwt.secret.clone(),
            access_token_expiry_days: config.auth.jwt.access_token_expiry_days,
            refresh_token_expiry_days: config.auth.jwt.refresh_token_expiry_days,
            verification_token_expiry_minutes: config.auth.jwt.verification_token_expiry_minutes,
            ..TokenServiceConfig::default()
        },
    ));

    let mailer = Arc::new(
        SmtpMailer::new(&config.email)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    let avatar_storage = Arc::new(
        AvatarStorage::new(&config.storage)
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
        Arc::clone(&mailer),
        PasswordService::default(),
        AuthServiceConfig::new(config.auth.public_base_url.clone()),
    ));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        avatar_storage,
        Arc::clone(&auth_service),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        user_service,
    });

    let bind_address = config.server.bind_address();
    let jwt_secret = config.auth.jwt.secret.clone();
    info!(%bind_address, "server binding");

    let mut server = HttpServer::new(move || create_app(app_state.clone(), jwt_secret.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
