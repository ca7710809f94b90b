//! The Contact Resource Handler: routes, handlers and error responses.
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | /contacts | 200, array of Contact | 500 |
//! | GET | /contacts/:id | 200, Contact | 404, 500 |
//! | POST | /contacts | 201, Contact | 400, 500 |
//! | PUT | /contacts/:id | 200, Contact | 400, 500 |
//! | DELETE | /contacts/:id | 204 | 404, 500 |
//!
//! Every error body is `{"message": "<text>"}`. A body that cannot be read,
//! including one over the configured size limit, is a 400.

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorResponse, INTERNAL_ERROR_MESSAGE};

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tracing::{debug, error};

use crate::clients::ContactClient;
use crate::contact_actor::ContactError;

/// Shared handler state.
pub struct AppState {
    /// Handle to the contact store.
    pub contacts: ContactClient,
    /// Return the underlying error text on 500 instead of a generic message.
    pub expose_internal_errors: bool,
}

impl AppState {
    pub fn new(contacts: ContactClient, expose_internal_errors: bool) -> Self {
        Self {
            contacts,
            expose_internal_errors,
        }
    }

    /// Maps a store error onto the response the handlers send.
    pub fn store_error(&self, err: ContactError) -> ApiError {
        match err {
            ContactError::NotFound(id) => {
                debug!(%id, "Contact not found");
                ApiError::NotFound
            }
            other => self.store_failure(other),
        }
    }

    /// Maps any store error, not-found included, onto a 500.
    pub fn store_failure(&self, err: ContactError) -> ApiError {
        error!(error = %err, "Contact store failure");
        if self.expose_internal_errors {
            ApiError::Internal(err.to_string())
        } else {
            ApiError::Internal(INTERNAL_ERROR_MESSAGE.to_string())
        }
    }
}

/// Builds the contact routes over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/:id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::Contact;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_router(mock: &MockClient<Contact>, expose_internal_errors: bool) -> Router {
        let contacts = ContactClient::new(mock.client());
        router(Arc::new(AppState::new(contacts, expose_internal_errors)))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn john() -> Contact {
        Contact::new("1", "John Doe", "", "")
    }

    fn jane() -> Contact {
        Contact::new("2", "Jane Doe", "", "")
    }

    #[tokio::test]
    async fn test_list_contacts() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_list().return_ok(vec![john(), jane()]);

        let (status, body) = send(test_router(&mock, false), Method::GET, "/contacts", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::to_value(vec![john(), jane()]).unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_contacts_store_failure_is_opaque() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let (status, body) = send(test_router(&mock, false), Method::GET, "/contacts", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": INTERNAL_ERROR_MESSAGE }));
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_failure_text_can_be_exposed() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_get("1".to_string())
            .return_err(FrameworkError::ActorDropped);

        let (status, body) = send(test_router(&mock, true), Method::GET, "/contacts/1", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "message": "Actor communication error: Actor dropped response channel" })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_contact() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_get("1".to_string()).return_ok(Some(john()));

        let (status, body) = send(test_router(&mock, false), Method::GET, "/contacts/1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::to_value(john()).unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_contact_not_found() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_get("3".to_string()).return_ok(None);

        let (status, body) = send(test_router(&mock, false), Method::GET, "/contacts/3", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Contact not found" }));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_contact() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_create().return_ok(john());

        let (status, body) = send(
            test_router(&mock, false),
            Method::POST,
            "/contacts",
            Some(r#"{"name": "John Doe"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, serde_json::to_value(john()).unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_contact_bad_body_never_reaches_store() {
        for bad in ["{not json", r#"{"name": 5}"#, "", r#""John""#] {
            let mock = MockClient::<Contact>::new();

            let (status, body) =
                send(test_router(&mock, false), Method::POST, "/contacts", Some(bad)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body {bad:?}");
            assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
            mock.verify();
        }
    }

    #[tokio::test]
    async fn test_create_contact_store_failure() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("1".to_string()));

        let (status, body) = send(
            test_router(&mock, true),
            Method::POST,
            "/contacts",
            Some(r#"{"id": "1", "name": "John Doe"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Contact already exists: 1" }));
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let mut mock = MockClient::<Contact>::new();
        // the mock asserts the id it receives
        mock.expect_update("1".to_string())
            .return_ok(Contact::new("1", "Johnny", "", ""));

        let (status, body) = send(
            test_router(&mock, false),
            Method::PUT,
            "/contacts/1",
            Some(r#"{"id": "99", "name": "Johnny"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "1");
        assert_eq!(body["name"], "Johnny");
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_bad_body() {
        let mock = MockClient::<Contact>::new();

        let (status, _) = send(
            test_router(&mock, false),
            Method::PUT,
            "/contacts/1",
            Some(r#"{"email": ["a"]}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_unknown_contact_is_a_store_failure() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_update("7".to_string())
            .return_err(FrameworkError::NotFound("7".to_string()));

        let (status, body) = send(
            test_router(&mock, false),
            Method::PUT,
            "/contacts/7",
            Some(r#"{"name": "Nobody"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": INTERNAL_ERROR_MESSAGE }));
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_store_failure_is_opaque() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_update("1".to_string())
            .return_err(FrameworkError::ActorClosed);

        let (status, body) = send(
            test_router(&mock, false),
            Method::PUT,
            "/contacts/1",
            Some(r#"{"name": "Johnny"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": INTERNAL_ERROR_MESSAGE }));
        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_contact() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_delete("1".to_string()).return_ok(());

        let (status, body) = send(test_router(&mock, false), Method::DELETE, "/contacts/1", None).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_contact_not_found() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_delete("3".to_string())
            .return_err(FrameworkError::NotFound("3".to_string()));

        let (status, body) = send(test_router(&mock, false), Method::DELETE, "/contacts/3", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Contact not found" }));
        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_store_failure_is_opaque() {
        let mut mock = MockClient::<Contact>::new();
        mock.expect_delete("1".to_string())
            .return_err(FrameworkError::ActorClosed);

        let (status, body) = send(test_router(&mock, false), Method::DELETE, "/contacts/1", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": INTERNAL_ERROR_MESSAGE }));
        mock.verify();
    }

    #[tokio::test]
    async fn test_oversized_body_is_a_bad_request() {
        let oversized = format!(r#"{{"name": "{}"}}"#, "x".repeat(3 * 1024 * 1024));

        for (method, uri) in [(Method::POST, "/contacts"), (Method::PUT, "/contacts/1")] {
            let mock = MockClient::<Contact>::new();

            let (status, body) =
                send(test_router(&mock, false), method, uri, Some(oversized.as_str())).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["message"]
                .as_str()
                .is_some_and(|m| m.contains("length limit exceeded")));
            mock.verify();
        }
    }

    #[tokio::test]
    async fn test_health() {
        let mock = MockClient::<Contact>::new();
        let response = test_router(&mock, false)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
