use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{Clock, RoomStatus, TokenGenerator};
use crate::interface_adapters::protocol::GameRoomStatus;
use crate::use_cases::SessionBroker;

// Shared application state for the HTTP handlers.
pub struct AppState {
    // Single owner of the room and token tables; pairing runs under this lock.
    pub broker: Arc<Mutex<SessionBroker>>,
}

impl AppState {
    pub fn new(broker: SessionBroker) -> Self {
        Self {
            broker: Arc::new(Mutex::new(broker)),
        }
    }
}

// System clock adapter used by the example use case.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

// Random v4 UUIDs for tokens, room ids and resource ids.
#[derive(Clone)]
pub struct UuidTokens;

impl TokenGenerator for UuidTokens {
    fn next_token(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl From<RoomStatus> for GameRoomStatus {
    fn from(status: RoomStatus) -> Self {
        match status {
            RoomStatus::Waiting => GameRoomStatus::Waiting,
            RoomStatus::Full => GameRoomStatus::Full,
        }
    }
}
