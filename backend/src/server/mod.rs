//! Server construction and dependency wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use chirp_backend::doc::ApiDoc;
use chirp_backend::domain::{FollowService, PostService, UserDirectoryService};
use chirp_backend::inbound::http::followers::{follow_user, list_followers, unfollow_user};
use chirp_backend::inbound::http::health::{HealthState, live, ready};
use chirp_backend::inbound::http::posts::{create_post, list_posts};
use chirp_backend::inbound::http::state::HttpState;
use chirp_backend::inbound::http::users::{create_user, list_users};
use chirp_backend::outbound::persistence::{
    DbPool, DieselFollowerRepository, DieselPostRepository, DieselUserRepository, MIGRATIONS,
    PoolConfig,
};

/// Wire the Diesel adapters behind the domain services.
fn build_http_state(pool: &DbPool) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let posts = Arc::new(DieselPostRepository::new(pool.clone()));
    let followers = Arc::new(DieselFollowerRepository::new(pool.clone()));

    HttpState::new(
        Arc::new(UserDirectoryService::new(users.clone())),
        Arc::new(FollowService::new(users.clone(), followers.clone())),
        Arc::new(PostService::new(users, posts, followers)),
    )
}

fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .service(create_user)
        .service(list_users)
        .service(create_post)
        .service(list_posts)
        .service(follow_user)
        .service(list_followers)
        .service(unfollow_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Apply pending migrations over a short-lived synchronous connection.
fn apply_migrations(database_url: &str) -> std::io::Result<()> {
    use diesel::Connection;
    use diesel_migrations::MigrationHarness;

    let mut conn = diesel::pg::PgConnection::establish(database_url)
        .map_err(|err| std::io::Error::other(format!("database connection failed: {err}")))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| std::io::Error::other(format!("migration failed: {err}")))?;

    if !applied.is_empty() {
        info!(count = applied.len(), "applied pending migrations");
    }

    Ok(())
}

/// Apply migrations, build the dependency graph, and run the HTTP server
/// until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    apply_migrations(config.database_url())?;

    let pool = DbPool::new(PoolConfig::new(config.database_url()))
        .await
        .map_err(std::io::Error::other)?;

    let http_state = web::Data::new(build_http_state(&pool));
    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(http_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr(), "listening");
    server.run().await
}
