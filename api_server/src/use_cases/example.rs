use chrono::{DateTime, SecondsFormat};

use crate::domain::{Clock, ExampleError, TokenGenerator};
use crate::interface_adapters::protocol::ExampleRequest;

// Resource returned by the example use case.
pub struct CreatedExample {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub items: Vec<String>,
}

// Example resource creation with injected dependencies. Nothing is stored.
pub struct CreateExampleUseCase<C, G> {
    pub clock: C,
    pub ids: G,
}

impl<C, G> CreateExampleUseCase<C, G>
where
    C: Clock,
    G: TokenGenerator,
{
    pub fn execute(&self, payload: ExampleRequest) -> Result<CreatedExample, ExampleError> {
        let created_at = format_timestamp(self.clock.now_epoch_seconds())?;

        Ok(CreatedExample {
            id: self.ids.next_token(),
            name: payload.name,
            created_at,
            items: Vec::new(),
        })
    }
}

// RFC 3339, second precision, `Z` suffix.
fn format_timestamp(epoch_seconds: u64) -> Result<String, ExampleError> {
    let seconds = i64::try_from(epoch_seconds).map_err(|_| ExampleError::ClockOutOfRange)?;
    let timestamp = DateTime::from_timestamp(seconds, 0).ok_or(ExampleError::ClockOutOfRange)?;
    Ok(timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
}
