// Domain-level errors for session brokering.
#[derive(Debug, PartialEq, Eq)]
pub enum BrokerError {
    InvalidToken,
    RoomFull,
    IdentifierSpaceExhausted,
}

// Domain-level errors for the example resource workflow.
#[derive(Debug, PartialEq, Eq)]
pub enum ExampleError {
    ClockOutOfRange,
}
