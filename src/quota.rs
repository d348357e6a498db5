use crate::models::UsageRecord;
use crate::storage::{StorageError, UsageStore};
use chrono::Local;
use tracing::warn;

pub const DEFAULT_DAILY_LIMIT: u32 = 10;
pub const USAGE_KEY: &str = "episodeUsage";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuotaError {
    #[error("今日の生成回数上限（{limit}回）に達しました。明日また試してください。")]
    Exhausted { limit: u32 },
}

/// Client-side daily counter. The day boundary is only checked in [`QuotaTracker::load`].
#[derive(Debug, Clone)]
pub struct QuotaTracker {
    record: UsageRecord,
    limit: u32,
}

impl QuotaTracker {
    /// Adopts the stored count if it belongs to `today`, otherwise resets to zero
    /// and overwrites the stored record.
    pub fn load<S: UsageStore + ?Sized>(
        store: &mut S,
        today: &str,
        limit: u32,
    ) -> Result<Self, StorageError> {
        let stored = match store.read(USAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<UsageRecord>(&raw) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("discarding unreadable usage record: {err}");
                    None
                }
            },
            None => None,
        };

        let record = match stored {
            Some(record) if record.date == today => record,
            _ => {
                let record = UsageRecord::fresh(today);
                write_record(store, &record)?;
                record
            }
        };

        Ok(Self { record, limit })
    }

    pub fn count(&self) -> u32 {
        self.record.count
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn date(&self) -> &str {
        &self.record.date
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.record.count)
    }

    pub fn is_exhausted(&self) -> bool {
        self.record.count >= self.limit
    }

    pub fn check(&self) -> Result<(), QuotaError> {
        if self.is_exhausted() {
            return Err(QuotaError::Exhausted { limit: self.limit });
        }
        Ok(())
    }

    pub fn record_success<S: UsageStore + ?Sized>(
        &mut self,
        store: &mut S,
        today: &str,
    ) -> Result<(), StorageError> {
        let next = UsageRecord {
            date: today.to_string(),
            count: self.record.count.saturating_add(1),
        };
        write_record(store, &next)?;
        self.record = next;
        Ok(())
    }
}

fn write_record<S: UsageStore + ?Sized>(store: &mut S, record: &UsageRecord) -> Result<(), StorageError> {
    let payload = serde_json::to_string(record)?;
    store.write(USAGE_KEY, &payload)
}

pub fn today_string() -> String {
    Local::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn stored(store: &MemoryStore) -> UsageRecord {
        let raw = store.read(USAGE_KEY).unwrap().expect("missing record");
        serde_json::from_str(&raw).unwrap()
    }

    fn seeded(date: &str, count: u32) -> MemoryStore {
        let mut store = MemoryStore::default();
        let raw = serde_json::to_string(&UsageRecord {
            date: date.to_string(),
            count,
        })
        .unwrap();
        store.write(USAGE_KEY, &raw).unwrap();
        store
    }

    #[test]
    fn fresh_store_starts_at_zero_and_persists() {
        let mut store = MemoryStore::default();
        let tracker = QuotaTracker::load(&mut store, "2026-10-16", 10).unwrap();
        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.date(), "2026-10-16");
        assert_eq!(tracker.remaining(), 10);
        assert_eq!(stored(&store), UsageRecord::fresh("2026-10-16"));
    }

    #[test]
    fn stale_record_resets_before_any_check() {
        let mut store = seeded("2026-10-15", 10);
        let tracker = QuotaTracker::load(&mut store, "2026-10-16", 10).unwrap();
        assert_eq!(tracker.count(), 0);
        assert!(tracker.check().is_ok());
        assert_eq!(stored(&store), UsageRecord::fresh("2026-10-16"));
    }

    #[test]
    fn same_day_record_is_adopted() {
        let mut store = seeded("2026-10-16", 4);
        let tracker = QuotaTracker::load(&mut store, "2026-10-16", 10).unwrap();
        assert_eq!(tracker.count(), 4);
        assert_eq!(tracker.remaining(), 6);
    }

    #[test]
    fn reload_without_generating_writes_nothing() {
        let mut store = seeded("2026-10-16", 7);
        let writes = store.writes();
        for _ in 0..3 {
            QuotaTracker::load(&mut store, "2026-10-16", 10).unwrap();
        }
        assert_eq!(store.writes(), writes);
        assert_eq!(stored(&store).count, 7);
    }

    #[test]
    fn unreadable_record_is_replaced() {
        let mut store = MemoryStore::default();
        store.write(USAGE_KEY, "{not json").unwrap();
        let tracker = QuotaTracker::load(&mut store, "2026-10-16", 10).unwrap();
        assert_eq!(tracker.count(), 0);
        assert_eq!(stored(&store), UsageRecord::fresh("2026-10-16"));
    }

    #[test]
    fn success_below_limit_advances_by_one() {
        for start in 0..10 {
            let mut store = seeded("2026-10-16", start);
            let mut tracker = QuotaTracker::load(&mut store, "2026-10-16", 10).unwrap();
            assert!(tracker.check().is_ok());
            tracker.record_success(&mut store, "2026-10-16").unwrap();
            assert_eq!(tracker.count(), start + 1);
            assert_eq!(stored(&store).count, start + 1);
        }
    }

    #[test]
    fn at_or_over_limit_is_refused_without_mutation() {
        for start in [10, 11, 25] {
            let mut store = seeded("2026-10-16", start);
            let tracker = QuotaTracker::load(&mut store, "2026-10-16", 10).unwrap();
            let writes = store.writes();
            assert_eq!(tracker.check(), Err(QuotaError::Exhausted { limit: 10 }));
            assert_eq!(tracker.remaining(), 0);
            assert_eq!(store.writes(), writes);
            assert_eq!(stored(&store).count, start);
        }
    }

    #[test]
    fn exhausted_message_names_the_limit() {
        let message = QuotaError::Exhausted { limit: 10 }.to_string();
        assert!(message.contains("10回"));
    }
}
