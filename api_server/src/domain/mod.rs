pub mod errors;
pub mod ports;
pub mod room;

// Re-export the domain boundary types and ports.
pub use errors::{BrokerError, ExampleError};
pub use ports::{Clock, TokenGenerator};
pub use room::{PlayerSlot, ROOM_CAPACITY, Room, RoomStatus, Session};
