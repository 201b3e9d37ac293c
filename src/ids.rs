//! Identifier generation for lists and items.
//!
//! Identifiers stay timestamp-shaped (milliseconds since the Unix epoch) so
//! they sort and read like the ids already present in stored snapshots, but
//! the generator never hands out the same value twice: when two ids are
//! requested within one clock tick, or the clock steps backwards, the next id
//! is `last + 1`.

use std::time::{SystemTime, UNIX_EPOCH};

fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Strictly increasing id source.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose next id is guaranteed to exceed `floor`.
    #[must_use]
    pub fn seeded(floor: i64) -> Self {
        Self { last: floor }
    }

    /// Raise the floor; never lowers it.
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    pub fn next_id(&mut self) -> i64 {
        self.next_at(now_ms())
    }

    fn next_at(&mut self, now: i64) -> i64 {
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
#[path = "ids_test.rs"]
mod tests;
