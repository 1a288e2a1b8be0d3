//! Application factory.
//!
//! Builds the actix-web App with all routes, middleware and shared state.
//! The factory is generic over the core service traits so tests can wire
//! mock implementations behind the same routing table.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use signet_core::repositories::{TokenRepository, UserRepository};
use signet_core::services::email::MailerTrait;
use signet_core::services::storage::AvatarStorageTrait;

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::users::{
    block_token::block_token, list::list_users, login::login, password, profile,
    refresh::refresh, register::register, resend_email::resend_email, verify::verify, AppState,
};

/// Create and configure the application with all routes
pub fn create_app<U, T, M, V>(
    app_state: web::Data<AppState<U, T, M, V>>,
    jwt_secret: String,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailerTrait + 'static,
    V: AvatarStorageTrait + 'static,
{
    let auth = || JwtAuth::with_secret(jwt_secret.clone());

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(create_cors())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1/users")
                .route(
                    "",
                    web::get().to(list_users::<U, T, M, V>).wrap(auth()),
                )
                .route("/register", web::post().to(register::<U, T, M, V>))
                .route(
                    "/register/verify/{token}",
                    web::get().to(verify::<U, T, M, V>),
                )
                .route("/resend_email", web::post().to(resend_email::<U, T, M, V>))
                .route(
                    "/profile/{id}",
                    web::get().to(profile::get_profile::<U, T, M, V>),
                )
                .route(
                    "/profile/{id}",
                    web::patch()
                        .to(profile::update_profile::<U, T, M, V>)
                        .wrap(auth()),
                )
                .route(
                    "/profile/{id}",
                    web::delete()
                        .to(profile::delete_account::<U, T, M, V>)
                        .wrap(auth()),
                )
                .route(
                    "/profile/{id}/avatar",
                    web::put()
                        .to(profile::upload_avatar::<U, T, M, V>)
                        .wrap(auth()),
                )
                .service(
                    web::scope("/token")
                        .route("", web::post().to(login::<U, T, M, V>))
                        .route("/refresh", web::post().to(refresh::<U, T, M, V>))
                        .route("/block", web::post().to(block_token::<U, T, M, V>)),
                )
                .service(
                    web::scope("/password")
                        .route(
                            "/change",
                            web::put()
                                .to(password::change_password::<U, T, M, V>)
                                .wrap(auth()),
                        )
                        .route(
                            "/set/{token}",
                            web::post().to(password::set_password::<U, T, M, V>),
                        )
                        .route(
                            "/reset",
                            web::post().to(password::reset_password::<U, T, M, V>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "signet-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
