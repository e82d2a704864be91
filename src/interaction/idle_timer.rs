use serde::{Deserialize, Serialize};

/// Cancellable one-shot deadline on the engine clock (milliseconds).
///
/// Re-arming replaces the previous deadline; a fired timer disarms itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IdleTimer {
    deadline_ms: Option<f64>,
}

impl IdleTimer {
    pub fn arm(&mut self, now_ms: f64, delay_ms: f64) {
        self.deadline_ms = Some(now_ms + delay_ms.max(0.0));
    }

    /// Disarms the timer. Returns `true` when a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    #[must_use]
    pub fn is_armed(self) -> bool {
        self.deadline_ms.is_some()
    }

    #[must_use]
    pub fn deadline_ms(self) -> Option<f64> {
        self.deadline_ms
    }

    /// Fires at most once per arm.
    pub fn fire_if_due(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
