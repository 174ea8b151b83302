use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "request in flight" flag.
///
/// Clones share the flag. At most one [`InFlight`] ticket exists at a time;
/// the flag clears when that ticket is dropped, whether the submission
/// finished, failed or was cancelled.
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the flag, or `None` if a submission is already pending.
    pub fn try_acquire(&self) -> Option<InFlight> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight {
                flag: Arc::clone(&self.in_flight),
            })
    }

    pub fn is_active(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Ticket held for the duration of one submission.
#[derive(Debug)]
pub struct InFlight {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
