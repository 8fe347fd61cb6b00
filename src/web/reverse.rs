//! `POST /user`: echo the submitted name back, reversed

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

/// Body of `POST /user`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EchoRequest {
    /// Missing field reads as empty
    #[serde(default)]
    pub first_name: String,
}

/// Reverse `input` by Unicode scalar value.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Accepts the request body as either a urlencoded form or JSON.
#[derive(Debug)]
pub struct EchoForm(pub EchoRequest);

#[async_trait]
impl<S> FromRequest<S> for EchoForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(body) = Json::<EchoRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(body))
        } else {
            let Form(body) = Form::<EchoRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(body))
        }
    }
}

pub async fn reverse_name(EchoForm(request): EchoForm) -> String {
    tracing::info!(first_name = %request.first_name, "received name");
    reverse(&request.first_name)
}
