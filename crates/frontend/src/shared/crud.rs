//! Generic REST client for every aggregate.
//!
//! One HTTP call per operation. Mutations toast on success; every failure is
//! logged, toasted and returned to the caller. Nothing is retried.

use crate::shared::api_utils::{api_url, collection_path};
use crate::shared::notify::Notifier;
use crate::system::auth::storage;
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::validation::validate_form;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("sesión no iniciada o expirada")]
    Unauthenticated,
    #[error("datos inválidos: {0}")]
    Validation(String),
    #[error("sin conexión con el servidor: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("respuesta inesperada: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(verb: Verb, url: &str) -> RequestBuilder {
    match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
        Verb::Delete => Request::delete(url),
    }
}

fn auth_header() -> Result<String, ApiError> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::Unauthenticated)
}

/// Pulls a human readable message out of an error body.
///
/// Accepts `{"message": ..}` / `{"error": ..}` JSON or plain text.
fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "detail"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
    }
    Some(body.chars().take(200).collect())
}

fn status_error(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthenticated;
    }
    let message = server_message(body).unwrap_or_else(|| match status {
        403 => "permiso insuficiente".to_string(),
        404 => "no encontrado".to_string(),
        409 => "conflicto con datos existentes".to_string(),
        _ => "error del servidor".to_string(),
    });
    ApiError::Status { status, message }
}

async fn execute<B: Serialize>(
    verb: Verb,
    path: &str,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let auth = auth_header()?;
    let request = builder(verb, &api_url(path)).header("Authorization", &auth);
    let sent = match body {
        Some(body) => request
            .json(body)
            .map_err(|e| ApiError::Decode(format!("no se pudo serializar: {}", e)))?
            .send()
            .await,
        None => request.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(status_error(status, &text))
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    response
        .json::<R>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Authenticated `GET` returning JSON.
pub async fn fetch_json<R: DeserializeOwned>(path: &str) -> Result<R, ApiError> {
    let response = execute::<()>(Verb::Get, path, None).await?;
    decode(response).await
}

/// Authenticated request with a JSON body and JSON reply.
pub async fn send_json<B: Serialize, R: DeserializeOwned>(
    verb: Verb,
    path: &str,
    body: &B,
) -> Result<R, ApiError> {
    let response = execute(verb, path, Some(body)).await?;
    decode(response).await
}

/// Authenticated request whose reply body is ignored.
pub async fn send_empty(verb: Verb, path: &str) -> Result<(), ApiError> {
    execute::<()>(verb, path, None).await.map(|_| ())
}

/// Authenticated `POST` with a JSON body, reply ignored.
pub async fn send_empty_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    execute(Verb::Post, path, Some(body)).await.map(|_| ())
}

/// Logs and toasts a failure, toasts `success` if given.
pub fn report<R>(
    notifier: Notifier,
    action: &str,
    result: Result<R, ApiError>,
    success: Option<String>,
) -> Result<R, ApiError> {
    match &result {
        Ok(_) => {
            if let Some(message) = success {
                notifier.success(message);
            }
        }
        Err(e) => {
            log::error!("{}: {}", action, e);
            notifier.error(format!("{}: {}", action, e));
        }
    }
    result
}

fn check_form<F: Validate>(form: &F) -> Result<(), ApiError> {
    validate_form(form).map_err(ApiError::Validation)
}

pub async fn list<T: AggregateRoot>(notifier: Notifier) -> Result<Vec<T>, ApiError> {
    let path = collection_path(T::collection_name(), &[]);
    let result = fetch_json::<Vec<T>>(&path).await;
    report(notifier, &format!("Cargar {}", T::list_name()), result, None)
}

pub async fn get_by_id<T: AggregateRoot>(id: EntityId, notifier: Notifier) -> Result<T, ApiError> {
    let path = collection_path(T::collection_name(), &[&id.to_string()]);
    let result = fetch_json::<T>(&path).await;
    report(notifier, &format!("Cargar {} #{}", T::element_name(), id), result, None)
}

pub async fn create<T: AggregateRoot>(form: &T::Form, notifier: Notifier) -> Result<T, ApiError> {
    let action = format!("Crear {}", T::element_name());
    let result = match check_form(form) {
        Ok(()) => {
            let path = collection_path(T::collection_name(), &[]);
            send_json::<_, T>(Verb::Post, &path, form).await
        }
        Err(e) => Err(e),
    };
    report(notifier, &action, result, Some(format!("{} · creado", T::element_name())))
}

pub async fn update<T: AggregateRoot>(
    id: EntityId,
    form: &T::Form,
    notifier: Notifier,
) -> Result<T, ApiError> {
    let action = format!("Guardar {} #{}", T::element_name(), id);
    let result = match check_form(form) {
        Ok(()) => {
            let path = collection_path(T::collection_name(), &[&id.to_string()]);
            send_json::<_, T>(Verb::Put, &path, form).await
        }
        Err(e) => Err(e),
    };
    report(notifier, &action, result, Some(format!("{} · guardado", T::element_name())))
}

pub async fn soft_delete<T: AggregateRoot>(id: EntityId, notifier: Notifier) -> Result<(), ApiError> {
    let path = collection_path(T::collection_name(), &["soft", &id.to_string()]);
    let result = send_empty(Verb::Delete, &path).await;
    report(
        notifier,
        &format!("Eliminar {} #{}", T::element_name(), id),
        result,
        Some(format!("{} · eliminado", T::element_name())),
    )
}

pub async fn hard_delete<T: AggregateRoot>(id: EntityId, notifier: Notifier) -> Result<(), ApiError> {
    let path = collection_path(T::collection_name(), &["hard", &id.to_string()]);
    let result = send_empty(Verb::Delete, &path).await;
    report(
        notifier,
        &format!("Eliminar definitivamente {} #{}", T::element_name(), id),
        result,
        Some(format!("{} · eliminado definitivamente", T::element_name())),
    )
}

pub async fn recover<T: AggregateRoot>(id: EntityId, notifier: Notifier) -> Result<(), ApiError> {
    let path = collection_path(T::collection_name(), &["recover", &id.to_string()]);
    let result = send_empty(Verb::Put, &path).await;
    report(
        notifier,
        &format!("Recuperar {} #{}", T::element_name(), id),
        result,
        Some(format!("{} · recuperado", T::element_name())),
    )
}

pub async fn bulk_create<T: AggregateRoot>(
    forms: &[T::Form],
    notifier: Notifier,
) -> Result<Vec<T>, ApiError> {
    let action = format!("Crear {}", T::list_name());
    let checked = forms.iter().enumerate().try_for_each(|(i, form)| {
        validate_form(form).map_err(|e| ApiError::Validation(format!("renglón {}: {}", i + 1, e)))
    });
    let result = match checked {
        Ok(()) => {
            let path = collection_path(T::collection_name(), &["bulk"]);
            send_json::<_, Vec<T>>(Verb::Post, &path, &forms).await
        }
        Err(e) => Err(e),
    };
    let success = format!("{} · {} creados", T::list_name(), forms.len());
    report(notifier, &action, result, Some(success))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        assert_eq!(
            server_message(r#"{"message":"código duplicado"}"#).as_deref(),
            Some("código duplicado")
        );
        assert_eq!(server_message(r#"{"error":"bad"}"#).as_deref(), Some("bad"));
        assert_eq!(server_message("  plain text ").as_deref(), Some("plain text"));
        assert_eq!(server_message("   "), None);
    }

    #[test]
    fn test_status_error() {
        assert_eq!(status_error(401, "whatever"), ApiError::Unauthenticated);
        assert_eq!(
            status_error(404, ""),
            ApiError::Status { status: 404, message: "no encontrado".into() }
        );
        assert_eq!(
            status_error(500, r#"{"message":"db down"}"#).to_string(),
            "HTTP 500: db down"
        );
    }
}
