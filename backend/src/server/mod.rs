//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use atelier::Trace;
#[cfg(debug_assertions)]
use atelier::doc::ApiDoc;
use atelier::inbound::http::configure_api;
use atelier::inbound::http::health::{HealthState, live, ready};
use atelier::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    payload_limit: usize,
}

fn build_app(
    deps: AppDependencies,
    session: SessionMiddleware<CookieSessionStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        payload_limit,
    } = deps;

    let api = web::scope("/api/v1")
        .wrap(session)
        .app_data(web::PayloadConfig::new(payload_limit))
        .configure(configure_api);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server and mark it ready.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when the object store cannot be opened or
/// the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config)?);
    let ServerConfig {
        session,
        bind_addr,
        max_upload_bytes,
        ..
    } = config;

    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
        payload_limit: max_upload_bytes,
    };
    let server = HttpServer::new(move || build_app(deps.clone(), session.middleware()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
