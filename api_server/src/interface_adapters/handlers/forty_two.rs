use crate::interface_adapters::handlers::TOKEN_HEADER;
use crate::interface_adapters::protocol::FortyTwoResponse;
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;

// Token-gated read: 42 for a valid `token` header, 43 otherwise.
#[tracing::instrument(name = "forty_two", skip_all)]
pub async fn forty_two(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<FortyTwoResponse> {
    // A header that is not visible ASCII counts as no token.
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let value = {
        let broker = state.broker.lock().await;
        broker.constant_for(token)
    };
    tracing::debug!(has_token = token.is_some(), value, "constant served");

    Json(FortyTwoResponse { value })
}
