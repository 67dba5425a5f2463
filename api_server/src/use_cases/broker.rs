// Session broker: pairs callers into two-player rooms and owns the token table.

use crate::domain::{BrokerError, Room, RoomStatus, Session, TokenGenerator};
use std::collections::HashMap;

/// Value returned to callers holding a valid session token.
pub const PRIVILEGED_VALUE: i64 = 42;
/// Value returned to callers without a valid session token.
pub const SENTINEL_VALUE: i64 = 43;

// Upper bound on identifier draws before giving up on a collision streak.
const MAX_ID_DRAWS: usize = 8;

/// Result of a successful session creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGrant {
    pub token: String,
    pub room_id: String,
    pub player_number: u8,
    pub status: RoomStatus,
}

/// Session details resolved from a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub room_id: String,
    pub player_number: u8,
    pub status: RoomStatus,
}

/// In-memory broker for rooms and session tokens.
///
/// The broker is not internally synchronized. Callers share it behind a
/// single mutex so that find-waiting-or-create and seat assignment happen in
/// one critical section.
pub struct SessionBroker {
    ids: Box<dyn TokenGenerator>,
    rooms: HashMap<String, Room>,
    sessions: HashMap<String, Session>,
    // At most one room is waiting for a second player at any time.
    waiting_room: Option<String>,
}

impl SessionBroker {
    pub fn new(ids: impl TokenGenerator + 'static) -> Self {
        Self {
            ids: Box::new(ids),
            rooms: HashMap::new(),
            sessions: HashMap::new(),
            waiting_room: None,
        }
    }

    /// Joins the waiting room as player 2, or opens a new room as player 1.
    pub fn create_session(&mut self) -> Result<SessionGrant, BrokerError> {
        // Tokens are never removed, so this also rules out reissuing a token.
        let token = draw_unused(self.ids.as_ref(), |id| self.sessions.contains_key(id))?;

        if let Some(room) = self
            .waiting_room
            .take()
            .and_then(|room_id| self.rooms.get_mut(&room_id))
        {
            let player_number = room.seat(token.clone())?;
            let room_id = room.room_id.clone();
            let status = room.status();

            self.sessions.insert(
                token.clone(),
                Session {
                    room_id: room_id.clone(),
                    player_number,
                },
            );

            return Ok(SessionGrant {
                token,
                room_id,
                player_number,
                status,
            });
        }

        let room_id = draw_unused(self.ids.as_ref(), |id| self.rooms.contains_key(id))?;
        let room = Room::open(room_id.clone(), token.clone());
        let status = room.status();

        self.rooms.insert(room_id.clone(), room);
        self.sessions.insert(
            token.clone(),
            Session {
                room_id: room_id.clone(),
                player_number: 1,
            },
        );
        self.waiting_room = Some(room_id.clone());

        Ok(SessionGrant {
            token,
            room_id,
            player_number: 1,
            status,
        })
    }

    /// Resolves a token to its room and seat. Tokens are matched exactly.
    pub fn validate_token(&self, token: &str) -> Result<SessionView, BrokerError> {
        let session = self.sessions.get(token).ok_or(BrokerError::InvalidToken)?;
        let room = self
            .rooms
            .get(&session.room_id)
            .ok_or(BrokerError::InvalidToken)?;

        Ok(SessionView {
            room_id: session.room_id.clone(),
            player_number: session.player_number,
            status: room.status(),
        })
    }

    /// Returns the privileged value for a valid token and the sentinel otherwise.
    pub fn constant_for(&self, token: Option<&str>) -> i64 {
        match token.map(|token| self.validate_token(token)) {
            Some(Ok(_)) => PRIVILEGED_VALUE,
            _ => SENTINEL_VALUE,
        }
    }

    #[cfg(test)]
    pub(crate) fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    #[cfg(test)]
    pub(crate) fn room_count(&self) -> usize {
        self.rooms.len()
    }

    #[cfg(test)]
    pub(crate) fn waiting_room_id(&self) -> Option<&str> {
        self.waiting_room.as_deref()
    }
}

fn draw_unused(
    ids: &dyn TokenGenerator,
    taken: impl Fn(&str) -> bool,
) -> Result<String, BrokerError> {
    for _ in 0..MAX_ID_DRAWS {
        let id = ids.next_token();
        if !taken(&id) {
            return Ok(id);
        }
    }
    Err(BrokerError::IdentifierSpaceExhausted)
}
