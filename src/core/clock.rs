use instant::Instant;

/// Monotonic effect clock shared by the click handler and the frame loop so
/// that tweens started on click are sampled on the same timeline.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::start_now()
    }
}

impl Clock {
    pub fn start_now() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since the clock was started.
    #[inline]
    pub fn now_sec(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}
