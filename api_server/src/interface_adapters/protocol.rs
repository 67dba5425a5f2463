use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Response payload for the hello endpoint.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
}

// Request payload for the example resource endpoint.
#[derive(Debug, Deserialize)]
pub struct ExampleRequest {
    pub name: String,
    pub email: Option<String>,
    pub preferences: Option<HashMap<String, String>>,
}

// Response payload for the example resource endpoint.
#[derive(Debug, Serialize)]
pub struct ExampleResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub items: Option<Vec<String>>,
}

// Response payload for the forty-two endpoint.
#[derive(Debug, Serialize)]
pub struct FortyTwoResponse {
    pub value: i64,
}

// Room status as seen on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameRoomStatus {
    Waiting,
    Full,
}

// Response payload after issuing a game session token.
#[derive(Debug, Serialize)]
pub struct GameSessionResponse {
    pub token: String,
    pub room_id: String,
    pub player_number: u8,
    pub status: GameRoomStatus,
}

// Request payload for token validation.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

// Response payload for a token that validated.
#[derive(Debug, Serialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,
    pub room_id: String,
    pub player_number: u8,
    pub status: GameRoomStatus,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
