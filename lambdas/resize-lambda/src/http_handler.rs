use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use std::sync::Arc;
use thumbkit_shared::{pipeline, AppState, ResizeError, StorageError};

/// Resize Lambda handler: one `key` query parameter in, a 301 redirect to
/// the freshly published derived object out, or an empty-bodied error
/// status.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    if event.method() != Method::GET {
        return empty_response(StatusCode::METHOD_NOT_ALLOWED);
    }

    // An absent key parameter parses the same as an empty key: InvalidKey
    let params = event.query_string_parameters();
    let key = params.first("key").unwrap_or_default();
    tracing::info!(key = %key, "resize request");

    match pipeline::resize(state.store.as_ref(), &state.config, key).await {
        Ok(result) => Ok(Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header("location", result.redirect_location)
            .body(Body::Empty)
            .map_err(Box::new)?),
        Err(err) => {
            // Error responses carry no diagnostic body, so the key and the
            // underlying cause are logged here before responding
            let status = status_for(&err);
            if status.is_client_error() {
                tracing::warn!(key = %key, error = %err, "resize request rejected");
            } else {
                tracing::error!(key = %key, error = %err, "resize request failed");
            }
            empty_response(status)
        }
    }
}

/// The single place pipeline errors map to HTTP statuses.
fn status_for(err: &ResizeError) -> StatusCode {
    match err {
        ResizeError::InvalidKey | ResizeError::ResolutionNotAllowed { .. } => {
            StatusCode::FORBIDDEN
        }
        ResizeError::SourceNotFound { .. } | ResizeError::Storage(StorageError::NotFound { .. }) => {
            StatusCode::NOT_FOUND
        }
        ResizeError::DecodeError(_) | ResizeError::TransformError(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ResizeError::PublishError(_) | ResizeError::Storage(_) => StatusCode::BAD_GATEWAY,
    }
}

fn empty_response(status: StatusCode) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .body(Body::Empty)
        .map_err(Box::new)?)
}
