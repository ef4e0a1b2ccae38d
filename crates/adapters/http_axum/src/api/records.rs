//! JSON REST handlers shared by every record kind.
//!
//! Request bodies are taken as raw bytes and decoded with
//! [`catalog_domain::record::decode`], and path or body rejections are
//! caught as values. A malformed request therefore surfaces as the same 500
//! response as any other failure instead of an extractor rejection.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use catalog_app::ports::RecordRepository;
use catalog_app::services::record_service::RecordService;
use catalog_domain::error::{CatalogError, PayloadError};
use catalog_domain::record::{Record, decode};
use serde::de::DeserializeOwned;

use crate::error::{Action, ApiError, MessageBody};

type Service<R, Repo> = Arc<RecordService<R, Repo>>;
type KeyPath = Result<Path<String>, PathRejection>;
type RawBody = Result<Bytes, BytesRejection>;

/// Build the routes of one collection.
///
/// `base` serves list/create and `{base}/{id}` serves get/update/delete.
/// `alias`, when set, serves list/create as well.
pub fn routes<R, Repo>(base: &str, alias: Option<&str>, service: Service<R, Repo>) -> Router
where
    R: Record,
    Repo: RecordRepository<R> + Send + Sync + 'static,
{
    let collection = get(list::<R, Repo>).post(create::<R, Repo>);
    let item = get(fetch::<R, Repo>)
        .put(update::<R, Repo>)
        .delete(delete::<R, Repo>);

    let mut router = Router::new()
        .route(base, collection.clone())
        .route(&format!("{base}/{{id}}"), item);
    if let Some(alias) = alias {
        router = router.route(alias, collection);
    }
    router.with_state(service)
}

/// Possible responses from the list endpoint.
pub enum ListResponse<R> {
    Ok(Json<Vec<R>>),
}

impl<R: Record> IntoResponse for ListResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse<R> {
    /// The record wrapped in its envelope, e.g. `{"carrera": {...}}`.
    Ok(Json<BTreeMap<&'static str, R>>),
}

impl<R: Record> IntoResponse for GetResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the write endpoints.
pub enum WriteResponse {
    Created(&'static str),
    Updated(&'static str),
    Deleted(&'static str),
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(noun) => {
                (StatusCode::CREATED, MessageBody::new(format!("{noun} created"))).into_response()
            }
            Self::Updated(noun) => MessageBody::new(format!("{noun} updated")).into_response(),
            Self::Deleted(noun) => MessageBody::new(format!("{noun} deleted")).into_response(),
        }
    }
}

/// `GET /<collection>`
pub async fn list<R, Repo>(
    State(service): State<Service<R, Repo>>,
) -> Result<ListResponse<R>, ApiError>
where
    R: Record,
    Repo: RecordRepository<R> + Send + Sync + 'static,
{
    let records = service
        .list_records()
        .await
        .map_err(ApiError::on::<R>(Action::List))?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `GET /<collection>/{id}`
pub async fn fetch<R, Repo>(
    State(service): State<Service<R, Repo>>,
    path: KeyPath,
) -> Result<GetResponse<R>, ApiError>
where
    R: Record,
    Repo: RecordRepository<R> + Send + Sync + 'static,
{
    let key = record_key::<R>(path).map_err(ApiError::on::<R>(Action::Get))?;
    let record = service
        .get_record(key)
        .await
        .map_err(ApiError::on::<R>(Action::Get))?;
    Ok(GetResponse::Ok(Json(BTreeMap::from([(R::ENVELOPE, record)]))))
}

/// `POST /<collection>`
pub async fn create<R, Repo>(
    State(service): State<Service<R, Repo>>,
    headers: HeaderMap,
    body: RawBody,
) -> Result<WriteResponse, ApiError>
where
    R: Record,
    Repo: RecordRepository<R> + Send + Sync + 'static,
{
    let record: R = json_body(&headers, body).map_err(ApiError::on::<R>(Action::Create))?;
    service
        .create_record(record)
        .await
        .map_err(ApiError::on::<R>(Action::Create))?;
    Ok(WriteResponse::Created(R::NOUN))
}

/// `PUT /<collection>/{id}`
///
/// The key in the path wins; a `Clave` field in the body is ignored.
/// A missing key is reported before the body is looked at.
pub async fn update<R, Repo>(
    State(service): State<Service<R, Repo>>,
    path: KeyPath,
    headers: HeaderMap,
    body: RawBody,
) -> Result<WriteResponse, ApiError>
where
    R: Record,
    Repo: RecordRepository<R> + Send + Sync + 'static,
{
    let key = record_key::<R>(path).map_err(ApiError::on::<R>(Action::Update))?;
    let record = service
        .get_record(key)
        .await
        .map_err(ApiError::on::<R>(Action::Update))?;

    let changes: R::Changes =
        json_body(&headers, body).map_err(ApiError::on::<R>(Action::Update))?;
    service
        .apply_changes(record, changes)
        .await
        .map_err(ApiError::on::<R>(Action::Update))?;
    Ok(WriteResponse::Updated(R::NOUN))
}

/// `DELETE /<collection>/{id}`
pub async fn delete<R, Repo>(
    State(service): State<Service<R, Repo>>,
    path: KeyPath,
) -> Result<WriteResponse, ApiError>
where
    R: Record,
    Repo: RecordRepository<R> + Send + Sync + 'static,
{
    let key = record_key::<R>(path).map_err(ApiError::on::<R>(Action::Delete))?;
    service
        .delete_record(key)
        .await
        .map_err(ApiError::on::<R>(Action::Delete))?;
    Ok(WriteResponse::Deleted(R::NOUN))
}

fn record_key<R: Record>(path: KeyPath) -> Result<R::Key, CatalogError> {
    let Path(id) = path.map_err(|err| CatalogError::InvalidKey(err.body_text()))?;
    Ok(R::Key::from(id))
}

/// Decode a body declared as JSON (`application/json` or `application/*+json`).
fn json_body<T: DeserializeOwned>(headers: &HeaderMap, body: RawBody) -> Result<T, CatalogError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    if !content_type.is_some_and(is_json) {
        return Err(PayloadError::ContentType(content_type.map(str::to_owned)).into());
    }

    let body = body.map_err(|err| PayloadError::Unreadable(err.body_text()))?;
    Ok(decode(&body)?)
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };
    kind.eq_ignore_ascii_case("application")
        && (subtype.eq_ignore_ascii_case("json")
            || subtype.to_ascii_lowercase().ends_with("+json"))
}
