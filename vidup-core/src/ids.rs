use std::sync::atomic::{AtomicU64, Ordering};

/// Largest caller-chosen id the allocator moves past
pub const MAX_OBSERVED_ID: u64 = i64::MAX as u64;

/// Hands out video ids.
///
/// Every call to [`IdAllocator::next`] returns a value strictly greater than
/// any value returned before, from any thread. The counter starts at 1, so
/// the first id is 2.
///
/// Ids chosen by callers are only tracked up to [`MAX_OBSERVED_ID`], which
/// leaves the counter room to never wrap.
#[derive(Debug)]
pub struct IdAllocator {
    current: AtomicU64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// The first call to `next` returns `start + 1`
    pub fn starting_at(start: u64) -> Self {
        Self {
            current: AtomicU64::new(start),
        }
    }

    pub fn next(&self) -> u64 {
        self.current.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Record an id chosen outside the allocator so it is never handed out later.
    ///
    /// Returns `false` and leaves the counter alone when `id` is above
    /// [`MAX_OBSERVED_ID`].
    pub fn observe(&self, id: u64) -> bool {
        if id > MAX_OBSERVED_ID {
            return false;
        }
        self.current.fetch_max(id, Ordering::Relaxed);
        true
    }

    /// Last value handed out or observed
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn first_id_is_two() {
        let ids = IdAllocator::new();
        assert_eq!(ids.next(), 2);
        assert_eq!(ids.next(), 3);
    }

    #[test]
    fn observed_ids_are_skipped() {
        let ids = IdAllocator::new();
        assert!(ids.observe(10));
        assert_eq!(ids.next(), 11);

        assert!(ids.observe(4));
        assert_eq!(ids.current(), 11);
        assert_eq!(ids.next(), 12);
    }

    #[test]
    fn ids_past_the_observed_range_leave_the_counter_alone() {
        let ids = IdAllocator::new();

        assert!(!ids.observe(u64::MAX));
        assert_eq!(ids.next(), 2);

        assert!(ids.observe(MAX_OBSERVED_ID));
        assert_eq!(ids.next(), MAX_OBSERVED_ID + 1);
    }

    #[test]
    fn concurrent_callers_never_share_an_id() {
        let ids = Arc::new(IdAllocator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..1000).map(|_| ids.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            let batch = handle.join().unwrap();
            assert!(batch.windows(2).all(|w| w[0] < w[1]));
            for id in batch {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 8000);
        assert!(seen.iter().all(|id| *id >= 2));
    }
}
