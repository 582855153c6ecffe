use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::api_error::{ApiError, ErrorBody};
use shared::constants::INIT_DATA_HEADER;
use crate::config::get_api_base_url;
use crate::telegram;

fn url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match telegram::init_data() {
        Some(init_data) => builder.header(INIT_DATA_HEADER, &init_data),
        None => builder,
    }
}

async fn read<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let err = ApiError::from_status(status, &ErrorBody::parse(&text));
        log::error!("{} -> {}: {}", path, status, err);
        return Err(err);
    }

    // 204s and empty mutation bodies
    let body = if text.trim().is_empty() { "{}" } else { text.as_str() };
    serde_json::from_str(body).map_err(|e| {
        log::error!("{}: unexpected response shape: {}", path, e);
        ApiError::Decode(e.to_string())
    })
}

async fn send<T: DeserializeOwned>(path: &str, builder: RequestBuilder) -> Result<T, ApiError> {
    let response = authorized(builder)
        .send()
        .await
        .map_err(|e| {
            log::error!("{}: {}", path, e);
            ApiError::Network(e.to_string())
        })?;
    read(path, response).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorized(builder)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request.send().await.map_err(|e| {
        log::error!("{}: {}", path, e);
        ApiError::Network(e.to_string())
    })?;
    read(path, response).await
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(path, Request::get(&url(path))).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send_json(path, Request::post(&url(path)), body).await
}

/// POST without a body (pause, resume, claim, approve...).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(path, Request::post(&url(path))).await
}

pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(path, Request::delete(&url(path))).await
}
