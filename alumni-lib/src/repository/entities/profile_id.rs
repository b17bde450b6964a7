use std::sync::atomic::{AtomicI64, Ordering};

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Millisecond timestamp of the most recently issued id.
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Opaque identifier of a [`Profile`](super::Profile), fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Issue a new timestamp-based id.
    ///
    /// Ids are the creation time in milliseconds. Two calls in the same millisecond still get
    /// distinct ids: the counter is bumped past the last issued value.
    pub fn generate() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let mut last = LAST_ISSUED.load(Ordering::Relaxed);

        loop {
            let next = now.max(last.saturating_add(1));
            match LAST_ISSUED.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return Self(next.to_string()),
                Err(actual) => last = actual,
            }
        }
    }

    /// Keep later [`generate`](Self::generate) calls ahead of this id, so ids loaded from
    /// storage are never issued again. Ids that aren't timestamps are ignored.
    pub fn reserve(&self) {
        if let Ok(value) = self.0.parse::<i64>() {
            LAST_ISSUED.fetch_max(value, Ordering::Relaxed);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
