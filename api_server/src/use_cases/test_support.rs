use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Clock, TokenGenerator};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0
    }
}

// Deterministic identifier source: scripted values first, then a counter.
pub(crate) struct SequenceTokens {
    scripted: Mutex<VecDeque<String>>,
    counter: AtomicUsize,
}

impl SequenceTokens {
    pub(crate) fn new() -> Self {
        Self::scripted(Vec::<String>::new())
    }

    pub(crate) fn scripted<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scripted: Mutex::new(values.into_iter().map(Into::into).collect()),
            counter: AtomicUsize::new(0),
        }
    }
}

impl TokenGenerator for SequenceTokens {
    fn next_token(&self) -> String {
        let mut scripted = self.scripted.lock().expect("scripted mutex poisoned");
        if let Some(value) = scripted.pop_front() {
            return value;
        }
        format!("id-{}", self.counter.fetch_add(1, Ordering::Relaxed))
    }
}
