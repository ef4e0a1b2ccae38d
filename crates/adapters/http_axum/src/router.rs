//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use catalog_app::ports::RecordRepository;
use catalog_domain::career::Career;
use catalog_domain::special_subject::SpecialSubject;
use catalog_domain::specialty::Specialty;
use catalog_domain::subject::Subject;

use crate::error::MessageBody;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the record collections with the liveness probes.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<CR, SR, SUR, SSR>(state: AppState<CR, SR, SUR, SSR>) -> Router
where
    CR: RecordRepository<Career> + Send + Sync + 'static,
    SR: RecordRepository<Specialty> + Send + Sync + 'static,
    SUR: RecordRepository<Subject> + Send + Sync + 'static,
    SSR: RecordRepository<SpecialSubject> + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/test", get(test_route))
        .merge(crate::api::routes(state))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn test_route() -> axum::Json<MessageBody> {
    MessageBody::new("test route")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use catalog_app::services::record_service::RecordService;
    use catalog_domain::error::{CatalogError, NotFoundError};
    use catalog_domain::record::Record;
    use tower::ServiceExt;

    /// Repository that holds nothing and accepts every insert.
    struct EmptyRepo;

    impl<R: Record> RecordRepository<R> for EmptyRepo {
        async fn create(&self, record: R) -> Result<R, CatalogError> {
            Ok(record)
        }
        async fn get_by_key(&self, _key: R::Key) -> Result<Option<R>, CatalogError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<R>, CatalogError> {
            Ok(vec![])
        }
        async fn update(&self, record: R) -> Result<R, CatalogError> {
            Err(NotFoundError {
                entity: R::NOUN,
                id: record.key().to_string(),
            }
            .into())
        }
        async fn delete(&self, key: R::Key) -> Result<(), CatalogError> {
            Err(NotFoundError {
                entity: R::NOUN,
                id: key.to_string(),
            }
            .into())
        }
    }

    fn app() -> Router {
        build(AppState::new(
            RecordService::new(EmptyRepo),
            RecordService::new(EmptyRepo),
            RecordService::new(EmptyRepo),
            RecordService::new(EmptyRepo),
        ))
    }

    async fn send(method: &str, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        dispatch(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn dispatch(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_acknowledge_test_route() {
        let (status, body) = send("GET", "/test", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"message": "test route"}));
    }

    #[tokio::test]
    async fn should_list_on_singular_and_plural_paths() {
        for uri in ["/carrera", "/carreras", "/especialidades", "/materias", "/matesp"] {
            let (status, body) = send("GET", uri, "").await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, serde_json::json!([]), "{uri}");
        }
    }

    #[tokio::test]
    async fn should_return_not_found_message_for_missing_key() {
        let (status, body) = send("GET", "/carrera/UNKNOWN", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"message": "carrera not found"}));

        let (status, body) = send("GET", "/matesp/UNKNOWN", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"message": "materia not found"}));
    }

    #[tokio::test]
    async fn should_return_created_for_valid_body() {
        let (status, body) = send(
            "POST",
            "/carrera",
            r#"{"Clave":"LIC01","Nombre":"Systems","Estructura Genetica":"3"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, serde_json::json!({"message": "carrera created"}));
    }

    #[tokio::test]
    async fn should_return_internal_error_for_malformed_body() {
        let (status, body) = send("POST", "/especialidad", "{oops").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({"message": "error creating especialidad"})
        );
    }

    #[tokio::test]
    async fn should_return_internal_error_for_non_numeric_field() {
        let (status, _) = send(
            "POST",
            "/materia",
            r#"{"Clave":"MAT1","Materia":"Calc","Creditos":"x","Semestre":1,"Carrera":"LIC01"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn should_prefer_not_found_over_bad_body_when_updating() {
        let (status, body) = send("PUT", "/materia/NOPE", "not json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"message": "materia not found"}));
    }

    #[tokio::test]
    async fn should_return_internal_error_for_non_json_content_type() {
        let (status, body) = dispatch(
            Request::builder()
                .method("POST")
                .uri("/carrera")
                .header("content-type", "text/plain")
                .body(Body::from(
                    r#"{"Clave":"LIC01","Nombre":"Systems","Estructura Genetica":3}"#,
                ))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"message": "error creating carrera"}));
    }

    #[tokio::test]
    async fn should_return_internal_error_without_content_type() {
        let (status, body) = dispatch(
            Request::builder()
                .method("POST")
                .uri("/materias")
                .body(Body::from(
                    r#"{"Clave":"MAT1","Materia":"Calc","Creditos":8,"Semestre":1,"Carrera":"LIC01"}"#,
                ))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"message": "error creating materia"}));
    }

    #[tokio::test]
    async fn should_accept_json_content_type_with_charset() {
        let (status, _) = dispatch(
            Request::builder()
                .method("POST")
                .uri("/carrera")
                .header("content-type", "application/json; charset=utf-8")
                .body(Body::from(
                    r#"{"Clave":"LIC01","Nombre":"Systems","Estructura Genetica":3}"#,
                ))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn should_return_internal_error_for_non_utf8_key() {
        for (method, message) in [
            ("GET", "error getting carrera"),
            ("PUT", "error updating carrera"),
            ("DELETE", "error deleting carrera"),
        ] {
            let (status, body) = send(method, "/carrera/%FF", "{}").await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method}");
            assert_eq!(body, serde_json::json!({"message": message}), "{method}");
        }
    }

    #[tokio::test]
    async fn should_return_internal_error_for_oversized_body() {
        let padding = "x".repeat(3 * 1024 * 1024);
        let payload = format!(
            r#"{{"Clave":"LIC01","Nombre":"{padding}","Estructura Genetica":3}}"#
        );
        let (status, body) = send("POST", "/carrera", &payload).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"message": "error creating carrera"}));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_key() {
        let (status, body) = send("DELETE", "/especialidad/NOPE", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({"message": "especialidad not found"})
        );
    }
}
