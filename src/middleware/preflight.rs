use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Short-circuit cross-origin preflight requests.
///
/// Runs outside routing and auth: any OPTIONS request gets 200 with an empty
/// body, independent of path or auth state, and never reaches the store. The
/// CORS layer wrapping this middleware attaches the allow headers.
pub async fn preflight_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}
