// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}

// Port for drawing fresh opaque identifiers (tokens, room ids, resource ids).
// Uniqueness is checked by the caller; generators only need to be unpredictable.
pub trait TokenGenerator: Send + Sync {
    fn next_token(&self) -> String;
}
