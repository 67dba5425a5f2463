use crate::domain::errors::BrokerError;

/// Number of players a room holds once paired.
pub const ROOM_CAPACITY: usize = 2;

/// Pairing status of a room. `Full` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Waiting,
    Full,
}

// One seat in a room, bound to the token issued for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSlot {
    pub player_number: u8,
    pub token: String,
}

// Token table record: the room and seat a token points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub room_id: String,
    pub player_number: u8,
}

/// A two-player pairing unit.
#[derive(Debug, Clone)]
pub struct Room {
    pub room_id: String,
    slots: Vec<PlayerSlot>,
}

impl Room {
    /// Opens a room with its first player seated as player 1.
    pub fn open(room_id: String, first_token: String) -> Self {
        let mut slots = Vec::with_capacity(ROOM_CAPACITY);
        slots.push(PlayerSlot {
            player_number: 1,
            token: first_token,
        });
        Self { room_id, slots }
    }

    /// Seats the next player and returns the assigned player number.
    pub fn seat(&mut self, token: String) -> Result<u8, BrokerError> {
        if self.slots.len() >= ROOM_CAPACITY {
            return Err(BrokerError::RoomFull);
        }

        // Player numbers are 1-based and follow seating order.
        let player_number = self.slots.len() as u8 + 1;
        self.slots.push(PlayerSlot {
            player_number,
            token,
        });
        Ok(player_number)
    }

    pub fn status(&self) -> RoomStatus {
        if self.slots.len() == ROOM_CAPACITY {
            RoomStatus::Full
        } else {
            RoomStatus::Waiting
        }
    }

    pub fn slots(&self) -> &[PlayerSlot] {
        &self.slots
    }
}
