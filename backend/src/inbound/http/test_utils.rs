//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};

use super::session::SessionContext;
use super::session_config::SESSION_COOKIE_NAME;
use super::state::HttpState;
use crate::domain::ports::{
    MockAssociationsCommand, MockBrandAssetsCommand, MockBrandAssetsQuery, MockBrandsCommand,
    MockBrandsQuery, MockMannequinsCommand, MockMannequinsQuery, MockMediaUpload,
};
use crate::domain::{Error, UserId};

/// Session middleware with a fresh key and the `Secure` flag off.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .build()
}

/// Register `POST /test-login/{user_id}`, which signs the given user in.
pub fn login_route(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/test-login/{user_id}",
        web::post().to(
            |session: SessionContext, path: web::Path<String>| async move {
                let user_id =
                    UserId::new(path.into_inner()).map_err(|e| Error::invalid_request(e.to_string()))?;
                session.persist_user(&user_id)?;
                Ok::<_, Error>(HttpResponse::NoContent().finish())
            },
        ),
    );
}

/// Sign `user_id` in through [`login_route`] and return the session cookie.
pub async fn session_cookie_for<S, B>(app: &S, user_id: &UserId) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!("/test-login/{user_id}"))
            .to_request(),
    )
    .await;
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.into_owned())
        .expect("login sets the session cookie")
}

/// Unconfigured mocks for every driving port. Any call without an
/// expectation panics, so tests only set up what they exercise.
#[derive(Default)]
pub struct MockPorts {
    pub brands: MockBrandsQuery,
    pub brands_command: MockBrandsCommand,
    pub mannequins: MockMannequinsQuery,
    pub mannequins_command: MockMannequinsCommand,
    pub associations: MockAssociationsCommand,
    pub assets: MockBrandAssetsQuery,
    pub assets_command: MockBrandAssetsCommand,
    pub uploads: MockMediaUpload,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            brands: Arc::new(self.brands),
            brands_command: Arc::new(self.brands_command),
            mannequins: Arc::new(self.mannequins),
            mannequins_command: Arc::new(self.mannequins_command),
            associations: Arc::new(self.associations),
            assets: Arc::new(self.assets),
            assets_command: Arc::new(self.assets_command),
            uploads: Arc::new(self.uploads),
        }
    }
}

/// Full API under `/api/v1` plus the test login route.
pub fn test_app(
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
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .configure(login_route)
        .service(web::scope("/api/v1").configure(super::configure_api))
}
