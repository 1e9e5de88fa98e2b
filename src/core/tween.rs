// Explicit scalar tweening. Values are sampled against a caller-supplied clock
// (seconds) so nothing here keeps timers of its own.

/// Easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    /// Constant rate.
    Linear,
    /// Quadratic ease-out: fast start, soft landing.
    #[default]
    PowerOut,
}

impl Ease {
    #[inline]
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::Linear => p,
            Ease::PowerOut => 1.0 - (1.0 - p) * (1.0 - p),
        }
    }
}

/// Value between `from` and `to` after `elapsed` seconds of a `duration`
/// second animation. Non-positive durations land on `to` immediately.
#[inline]
pub fn interpolate(from: f32, to: f32, elapsed: f32, duration: f32, ease: Ease) -> f32 {
    let p = if duration > 0.0 {
        (elapsed / duration).clamp(0.0, 1.0)
    } else {
        1.0
    };
    from + (to - from) * ease.apply(p)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_sec: f32,
    pub duration_sec: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_sec: f32, duration_sec: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_sec,
            duration_sec,
            ease,
        }
    }

    /// Times before `start_sec` sample as `from`.
    #[inline]
    pub fn value_at(&self, now_sec: f32) -> f32 {
        interpolate(
            self.from,
            self.to,
            now_sec - self.start_sec,
            self.duration_sec,
            self.ease,
        )
    }

    #[inline]
    pub fn is_finished(&self, now_sec: f32) -> bool {
        now_sec - self.start_sec >= self.duration_sec
    }
}

/// A scalar that is either at rest or driven by a single tween.
///
/// Starting a new tween replaces the one in flight, so the most recent
/// animation always wins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Animated {
    rest: f32,
    tween: Option<Tween>,
}

impl Animated {
    pub fn at_rest(value: f32) -> Self {
        Self {
            rest: value,
            tween: None,
        }
    }

    pub fn value_at(&self, now_sec: f32) -> f32 {
        match &self.tween {
            Some(t) => t.value_at(now_sec),
            None => self.rest,
        }
    }

    /// Animate from an explicit start value.
    pub fn start(&mut self, tween: Tween) {
        self.rest = tween.to;
        self.tween = Some(tween);
    }

    /// Animate from wherever the value currently is at `now_sec`.
    pub fn retarget(&mut self, to: f32, now_sec: f32, duration_sec: f32, ease: Ease) {
        let from = self.value_at(now_sec);
        self.start(Tween::new(from, to, now_sec, duration_sec, ease));
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Drop a finished tween so later samples read the resting value directly.
    pub fn settle(&mut self, now_sec: f32) {
        if matches!(self.tween, Some(t) if t.is_finished(now_sec)) {
            self.tween = None;
        }
    }
}
