use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::config;
use crate::error::ApiError;

/// Authenticated caller identity, asserted by the external auth layer.
///
/// Token verification happens upstream; by the time a request reaches this
/// service the verified subject id has been injected into request metadata
/// under the configured header. Extraction fails closed: no subject, no
/// store access, 401.
#[derive(Clone, Debug)]
pub struct AuthSubject {
    pub id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthSubject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = config::config().auth.subject_header.as_str();

        let subject = parts
            .headers
            .get(header)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::unauthorized("Missing authenticated subject"))?;

        Ok(AuthSubject {
            id: subject.to_string(),
        })
    }
}
