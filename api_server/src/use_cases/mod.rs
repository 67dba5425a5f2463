// Use cases: session brokering and the example resource workflow.

pub mod broker;
pub mod example;

#[cfg(test)]
pub(crate) mod test_support;

pub use broker::{PRIVILEGED_VALUE, SENTINEL_VALUE, SessionBroker, SessionGrant, SessionView};
pub use example::{CreateExampleUseCase, CreatedExample};
