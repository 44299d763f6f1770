//! Drop clock - gravity timing driven by host timestamps
//!
//! The host calls in with its own millisecond clock every frame. The clock
//! decides whether a gravity step is due, using the fast-drop period while a
//! drop is engaged.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropClock {
    gravity_ms: u64,
    fast_drop_ms: u64,
    fast: bool,
    /// `None` until the first tick, which is always due
    last_tick_ms: Option<u64>,
}

impl DropClock {
    pub fn new(gravity_ms: u64, fast_drop_ms: u64) -> Self {
        Self {
            gravity_ms,
            fast_drop_ms,
            fast: false,
            last_tick_ms: None,
        }
    }

    /// Current step period
    pub fn period(&self) -> u64 {
        if self.fast {
            self.fast_drop_ms
        } else {
            self.gravity_ms
        }
    }

    pub fn is_fast(&self) -> bool {
        self.fast
    }

    pub fn set_fast(&mut self, fast: bool) {
        self.fast = fast;
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_tick_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.period(),
            None => true,
        }
    }

    /// Record a step at `now_ms`
    pub fn mark(&mut self, now_ms: u64) {
        self.last_tick_ms = Some(now_ms);
    }

    /// Mark and return true if a step is due
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        self.mark(now_ms);
        true
    }
}
