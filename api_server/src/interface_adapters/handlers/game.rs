use crate::domain::BrokerError;
use crate::interface_adapters::handlers::error_response;
use crate::interface_adapters::protocol::{
    ErrorResponse, GameSessionResponse, TokenRequest, ValidateTokenResponse,
};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

// Issue a session token, joining the waiting room or opening a new one.
#[tracing::instrument(name = "create_game_session", skip_all)]
pub async fn create_game_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GameSessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let grant = {
        let mut broker = state.broker.lock().await;
        broker.create_session()
    }
    .map_err(|err| map_broker_error(err, BrokerErrorContext::CreateSession))?;

    tracing::info!(
        room_id = %grant.room_id,
        player_number = grant.player_number,
        status = ?grant.status,
        "game session issued"
    );

    Ok(Json(GameSessionResponse {
        token: grant.token,
        room_id: grant.room_id,
        player_number: grant.player_number,
        status: grant.status.into(),
    }))
}

// Resolve a session token to its room and seat.
#[tracing::instrument(name = "validate_token", skip_all)]
pub async fn validate_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<ValidateTokenResponse>, (StatusCode, Json<ErrorResponse>)> {
    let view = {
        let broker = state.broker.lock().await;
        broker.validate_token(&payload.token)
    }
    .map_err(|err| map_broker_error(err, BrokerErrorContext::ValidateToken))?;

    Ok(Json(ValidateTokenResponse {
        valid: true,
        room_id: view.room_id,
        player_number: view.player_number,
        status: view.status.into(),
    }))
}

// Maps domain errors to HTTP responses by endpoint context.
enum BrokerErrorContext {
    CreateSession,
    ValidateToken,
}

fn map_broker_error(
    err: BrokerError,
    context: BrokerErrorContext,
) -> (StatusCode, Json<ErrorResponse>) {
    match context {
        BrokerErrorContext::CreateSession => {
            tracing::error!(error = ?err, "failed to issue game session");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to issue session",
            )
        }
        BrokerErrorContext::ValidateToken => match err {
            BrokerError::InvalidToken => {
                tracing::debug!("token rejected");
                error_response(StatusCode::UNAUTHORIZED, "invalid token")
            }
            BrokerError::RoomFull | BrokerError::IdentifierSpaceExhausted => {
                tracing::error!(error = ?err, "unexpected broker error during validation");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "broker error")
            }
        },
    }
}
