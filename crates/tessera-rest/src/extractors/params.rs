//! Request parameter extractor.
//!
//! Binds flat string parameters the way HTML forms and `curl -d` send them:
//! query-string pairs first, then the pairs of an
//! `application/x-www-form-urlencoded` body. A name given more than once
//! binds to its values joined with commas. Missing parameters are rejected
//! with 400 before the handler runs.

use crate::responses::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::{value::MapDeserializer, DeserializeOwned};
use tessera_core::TesseraError;

/// Parameters bound from the query string and a form body.
///
/// # Example
///
/// ```ignore
/// async fn add_user(RequestParams(draft): RequestParams<NewUser>) -> &'static str {
///     // draft.name and draft.email are present, possibly empty
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestParams<T>(pub T);

impl<T> std::ops::Deref for RequestParams<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError(TesseraError::validation(message))
}

fn decode_pairs(input: &[u8]) -> Result<Vec<(String, String)>, AppError> {
    serde_urlencoded::from_bytes(input)
        .map_err(|e| invalid(format!("Failed to decode request parameters: {e}")))
}

/// Folds repeated names into one comma-joined value, keeping first-seen order.
fn join_repeated(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match merged.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, joined)) => {
                joined.push(',');
                joined.push_str(&value);
            }
            None => merged.push((key, value)),
        }
    }
    merged
}

#[async_trait]
impl<T, S> FromRequest<S> for RequestParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut pairs = match req.uri().query() {
            Some(query) => decode_pairs(query.as_bytes())?,
            None => Vec::new(),
        };

        if is_form(&req) {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| invalid(rejection.body_text()))?;
            pairs.extend(decode_pairs(&body)?);
        }

        let deserializer =
            MapDeserializer::<_, serde::de::value::Error>::new(join_repeated(pairs).into_iter());
        T::deserialize(deserializer)
            .map(Self)
            .map_err(|e| invalid(format!("Failed to deserialize request parameters: {e}")))
    }
}
