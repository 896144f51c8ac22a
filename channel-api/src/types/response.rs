use aide::OperationOutput;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

/// JSON response body indented with two spaces
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T> IntoResponse for PrettyJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let content_type = [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )];

        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (content_type, body).into_response(),
            Err(err) => {
                tracing::error!("Failed to serialize response body: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    content_type,
                    r#"{"error":"Failed to serialize response."}"#,
                )
                    .into_response()
            }
        }
    }
}

impl<T> OperationOutput for PrettyJson<T>
where
    T: JsonSchema,
{
    type Inner = T;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<T>::operation_response(ctx, operation)
    }
}
