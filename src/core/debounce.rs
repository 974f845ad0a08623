/// Result of asking a [`Debouncer`] whether its quiet period is over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DebouncePoll {
    /// Nothing pending.
    Idle,
    /// The quiet period has passed; the pending action should run now.
    Due,
    /// Still inside the quiet period; poll again after this many ms.
    Wait(f64),
}

/// Deadline bookkeeping for a trailing-edge debounce.
///
/// Every `trigger` pushes the deadline out to `now + delay`. `poll` reports
/// `Due` once, at or after the latest deadline, and otherwise the time left so
/// the host can re-arm its timer. Host timers and the clock they are compared
/// against need not agree: a coarse clock only costs another wait.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay_ms: f64,
    deadline_ms: Option<f64>,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            deadline_ms: None,
        }
    }

    /// Record an event at `now_ms`. Returns how long the host should wait.
    pub fn trigger(&mut self, now_ms: f64) -> f64 {
        self.deadline_ms = Some(now_ms + self.delay_ms);
        self.delay_ms
    }

    pub fn poll(&mut self, now_ms: f64) -> DebouncePoll {
        match self.deadline_ms {
            None => DebouncePoll::Idle,
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                DebouncePoll::Due
            }
            Some(deadline) => DebouncePoll::Wait(deadline - now_ms),
        }
    }
}
