//! Typed client for the pairing API.
//!
//! Mirrors the browser wrapper: the token from the most recent
//! [`ApiClient::create_game_session`] call is remembered and sent as a
//! `token` header on every later request.

mod client;
mod error;
mod protocol;

pub use client::ApiClient;
pub use error::ApiClientError;
pub use protocol::{
    ExampleRequest, ExampleResponse, FortyTwoResponse, GameRoomStatus, GameSessionResponse,
    HelloResponse, TokenValidation,
};
