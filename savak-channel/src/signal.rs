use crossbeam_utils::Backoff;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, Thread};

/// A counting wakeup token private to one select call.
///
/// Every channel operation that could unblock the call posts the token with
/// [`notify`](Signal::notify); the call consumes one permit per
/// [`wait`](Signal::wait) and re-probes its entries. A single post may stand
/// for a transient condition another thread already consumed, which is why
/// waiting and probing loop.
///
/// Only the thread that created the signal may wait on it.
pub struct Signal {
    permits: AtomicUsize,
    owner: Thread,
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal {
    /// Creates a signal owned by the current thread, with no permits.
    pub fn new() -> Self {
        Self {
            permits: AtomicUsize::new(0),
            owner: thread::current(),
        }
    }

    /// Blocks until a permit is available, then consumes it.
    ///
    /// Spins briefly before parking the thread.
    pub fn wait(&self) {
        let backoff = Backoff::new();
        loop {
            let permits = self.permits.load(Ordering::Acquire);
            if permits > 0 {
                if self
                    .permits
                    .compare_exchange(permits, permits - 1, Ordering::AcqRel, Ordering::Acquire)
                    .is_ok()
                {
                    return;
                }
                continue;
            }

            if backoff.is_completed() {
                // An unpark racing with the permit check leaves the park
                // token set; park then returns immediately.
                thread::park();
            } else {
                backoff.snooze();
            }
        }
    }

    /// Adds a permit and wakes the owning thread.
    ///
    /// Takes no lock, so it is safe to call from any signaling path.
    pub fn notify(&self) {
        self.permits.fetch_add(1, Ordering::Release);
        self.owner.unpark();
    }
}
