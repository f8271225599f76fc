//! Shared harness for HTTP integration tests.
//!
//! Builds the full `/api/v1` surface over the in-memory store and a
//! temporary filesystem object store. Sign-in is external to the service,
//! so the harness registers its own `/test-login/{user_id}` route.

#![allow(
    dead_code,
    reason = "each integration test crate uses a different subset of helpers"
)]

use std::sync::Arc;

use actix_http::Request;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, test, web};
use atelier::Trace;
use atelier::domain::{Error, UserId};
use atelier::inbound::http::configure_api;
use atelier::inbound::http::session::SessionContext;
use atelier::inbound::http::session_config::SESSION_COOKIE_NAME;
use atelier::inbound::http::state::{Adapters, HttpState};
use atelier::outbound::memory::InMemoryStore;
use atelier::outbound::storage::FilesystemStorage;
use mockable::DefaultClock;
use serde_json::Value;
use tempfile::TempDir;
use url::Url;

pub const MEDIA_BASE: &str = "https://media.example/";

/// Handler state plus the directory backing its object store.
pub struct Harness {
    pub media: TempDir,
    pub state: HttpState,
}

pub fn harness() -> Harness {
    let media = tempfile::tempdir().expect("media tempdir");
    let storage = FilesystemStorage::open(
        media.path(),
        Url::parse(MEDIA_BASE).expect("media base url"),
    )
    .expect("open object storage");
    let store = Arc::new(InMemoryStore::new());
    let state = HttpState::from_adapters(
        Adapters {
            brands: Arc::clone(&store),
            mannequins: Arc::clone(&store),
            links: Arc::clone(&store),
            assets: store,
            storage: Arc::new(storage),
        },
        Arc::new(DefaultClock),
    );
    Harness { media, state }
}

async fn test_login(
    session: SessionContext,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let user_id =
        UserId::new(path.into_inner()).map_err(|e| Error::invalid_request(e.to_string()))?;
    session.persist_user(&user_id)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .build();
    App::new()
        .app_data(web::Data::new(state))
        .wrap(session)
        .wrap(Trace)
        .route("/test-login/{user_id}", web::post().to(test_login))
        .service(web::scope("/api/v1").configure(configure_api))
}

/// Sign `user` in and return the session cookie.
pub async fn login<S, B>(app: &S, user: &UserId) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!("/test-login/{user}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.into_owned())
        .expect("session cookie")
}

/// Outcome of one request: status, cookies set and JSON body (`Null` when
/// the body is empty).
pub struct Reply {
    pub status: StatusCode,
    pub cookies: Vec<Cookie<'static>>,
    pub body: Value,
}

impl Reply {
    pub fn cookie(&self, name: &str) -> Option<&Cookie<'static>> {
        self.cookies.iter().find(|cookie| cookie.name() == name)
    }
}

pub async fn send<S, B>(app: &S, request: test::TestRequest, cookies: &[Cookie<'static>]) -> Reply
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = cookies
        .iter()
        .cloned()
        .fold(request, |req, cookie| req.cookie(cookie));
    let res = test::call_service(app, request.to_request()).await;
    let status = res.status();
    let set_cookies = res
        .response()
        .cookies()
        .map(|cookie| cookie.into_owned())
        .collect();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    Reply {
        status,
        cookies: set_cookies,
        body,
    }
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("id field").to_owned()
}
