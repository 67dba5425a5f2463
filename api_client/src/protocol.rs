use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExampleRequest {
    pub name: String,
    pub email: Option<String>,
    pub preferences: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExampleResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FortyTwoResponse {
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameRoomStatus {
    Waiting,
    Full,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameSessionResponse {
    pub token: String,
    pub room_id: String,
    pub player_number: u8,
    pub status: GameRoomStatus,
}

// Session details returned for a token the server accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenValidation {
    pub valid: bool,
    pub room_id: String,
    pub player_number: u8,
    pub status: GameRoomStatus,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub message: String,
}
