use crate::{
    AppState,
    config::SessionConfig,
    db::{
        models::{CurrentDriver, Driver},
        repositories::DriverRepo,
    },
    error::AppError,
    routes::with_conn,
};
use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, Request, StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Cookie, HeaderMapExt};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "sessionid";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid, // driver id
    pub username: String,
    pub exp: u64,
    pub iat: u64,
    pub jti: String,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub session_expiration: Duration,
    pub login_url: String,
}

impl From<&SessionConfig> for AuthConfig {
    fn from(session: &SessionConfig) -> Self {
        Self {
            jwt_secret: session.jwt_secret.clone(),
            session_expiration: Duration::from_secs(session.expires_in),
            login_url: session.login_url.clone(),
        }
    }
}

/// Issues and verifies signed session tokens.
#[derive(Clone, Debug)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn login_url(&self) -> &str {
        &self.config.login_url
    }

    pub fn expires_in(&self) -> u64 {
        self.config.session_expiration.as_secs()
    }

    pub fn generate_session_token(
        &self,
        driver: &Driver,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp().max(0) as u64;

        let claims = Claims {
            sub: driver.id,
            username: driver.username.clone(),
            exp: now + self.expires_in(),
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    pub fn session_cookie(&self, token: &str) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            SESSION_COOKIE,
            token,
            self.expires_in()
        )
    }

    pub fn clear_session_cookie(&self) -> String {
        format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
    }
}

/// Session token from `Authorization: Bearer` or, failing that, the session cookie.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string);

    bearer.or_else(|| {
        headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
            .filter(|token| !token.is_empty())
    })
}

/// Everything but unreserved characters and `/` is escaped in `next`.
const NEXT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// `<login_url>?next=<next>` with `next` percent-encoded, `/` kept as is.
pub fn login_redirect_url(login_url: &str, next: &str) -> String {
    format!(
        "{}?next={}",
        login_url,
        utf8_percent_encode(next, NEXT_ENCODE_SET)
    )
}

/// Only same-site absolute paths are accepted as post-login targets.
pub fn is_safe_next(next: &str) -> bool {
    next.starts_with('/') && !next.starts_with("//") && !next.contains('\\')
}

pub fn redirect_to_login(login_url: &str, uri: &Uri) -> Response {
    let next = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let location = login_redirect_url(login_url, next);

    match HeaderValue::from_str(&location) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(_) => AppError::internal("Invalid login redirect").into_response(),
    }
}

/// Gate for every page except login: anonymous requests are redirected to
/// the login page with `next` pointing back at the requested URL.
pub async fn login_required(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next<axum::body::Body>,
) -> Response {
    let login_url = state.auth_service.login_url().to_string();

    let Some(token) = extract_token(request.headers()) else {
        return redirect_to_login(&login_url, request.uri());
    };

    let claims = match state.auth_service.verify_token(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session token");
            return redirect_to_login(&login_url, request.uri());
        }
    };

    let driver_id = claims.sub;
    let lookup = with_conn(&state, move |conn| {
        Ok(DriverRepo::find_active_by_id(conn, driver_id)?)
    })
    .await;

    let driver = match lookup {
        Ok(Some(driver)) => driver,
        Ok(None) => {
            tracing::warn!(driver_id = %driver_id, "Session for unknown or inactive driver");
            return redirect_to_login(&login_url, request.uri());
        }
        Err(e) => return e.into_response(),
    };

    request
        .extensions_mut()
        .insert(CurrentDriver::from(&driver));

    next.run(request).await
}
