// Interface adapters: wire protocol, HTTP handlers and port implementations.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
