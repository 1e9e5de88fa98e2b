use super::constants::CLICK_TEXEL_BYTES;
use super::params::{ParamsError, RippleParams};
use super::tween::{Animated, Ease, Tween};
use glam::Vec2;
use rand::prelude::*;

/// State of one ripple slot.
///
/// `coordinate` is in normalized screen space with the origin at the bottom
/// left. `radius` and `click_distance` are animated in \[0, 1\].
#[derive(Clone, Debug, Default)]
pub struct ClickRecord {
    pub coordinate: Vec2,
    pub radius: Animated,
    pub click_distance: Animated,
}

/// Snapshot of a record at a given time, ready for packing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickSample {
    pub coordinate: Vec2,
    pub click_distance: f32,
    pub radius: f32,
}

impl ClickRecord {
    pub fn sample(&self, now_sec: f32) -> ClickSample {
        ClickSample {
            coordinate: self.coordinate,
            click_distance: self.click_distance.value_at(now_sec),
            radius: self.radius.value_at(now_sec),
        }
    }
}

/// Fixed-size ring of the most recent clicks, overwritten oldest first.
pub struct ClickRing {
    params: RippleParams,
    records: Vec<ClickRecord>,
    active: usize,
    clicks_total: u64,
    rng: StdRng,
}

/// Convert page pixel coordinates to normalized space, flipping y so that
/// the bottom edge is 0. Degenerate viewports map to the centre.
#[inline]
pub fn normalize_pointer(page_x: f32, page_y: f32, view_w: f32, view_h: f32) -> Vec2 {
    if view_w > 0.0 && view_h > 0.0 {
        Vec2::new(page_x / view_w, 1.0 - page_y / view_h)
    } else {
        Vec2::splat(0.5)
    }
}

/// Scale a \[0, 1\] scalar to a byte, truncating. Out-of-range input saturates.
#[inline]
pub fn unit_to_byte(v: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    (v * 255.0) as u8
}

impl ClickRing {
    pub fn new(params: RippleParams, seed: u64) -> Result<Self, ParamsError> {
        params.validate()?;
        let records = vec![ClickRecord::default(); params.capacity];
        Ok(Self {
            params,
            records,
            active: 0,
            clicks_total: 0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Parameters validated at construction. Read-only so the texture size
    /// stays fixed for the ring's lifetime.
    pub fn params(&self) -> &RippleParams {
        &self.params
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Slot the next click will overwrite.
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn clicks_total(&self) -> u64 {
        self.clicks_total
    }

    pub fn records(&self) -> &[ClickRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&ClickRecord> {
        self.records.get(index)
    }

    /// Store a click at the active slot and start its animations.
    ///
    /// The slot after it starts fading its radius out, replacing whatever was
    /// animating there, so that it is already shrinking by the time it gets
    /// reused.
    pub fn record_click(&mut self, coordinate: Vec2, now_sec: f32) {
        let n = self.records.len();
        let p = &self.params;
        let (distance_sec, rise_sec, decay_sec) =
            (p.distance_duration_sec, p.radius_rise_sec, p.radius_decay_sec);

        let rec = &mut self.records[self.active];
        rec.coordinate = coordinate;
        rec.click_distance
            .start(Tween::new(0.0, 1.0, now_sec, distance_sec, Ease::PowerOut));
        rec.radius
            .start(Tween::new(0.0, 1.0, now_sec, rise_sec, Ease::Linear));

        let next = (self.active + 1) % n;
        self.records[next]
            .radius
            .retarget(0.0, now_sec, decay_sec, Ease::PowerOut);

        self.active = next;
        self.clicks_total += 1;
    }

    /// Record a click given in page pixels, applying the configured
    /// horizontal jitter.
    pub fn record_pointer_click(
        &mut self,
        page_x: f32,
        page_y: f32,
        view_w: f32,
        view_h: f32,
        now_sec: f32,
    ) -> Vec2 {
        let mut uv = normalize_pointer(page_x, page_y, view_w, view_h);
        if self.params.jitter_x > 0.0 {
            uv.x += self.params.jitter_x * self.rng.gen::<f32>();
        }
        self.record_click(uv, now_sec);
        uv
    }

    /// Drop finished tweens. Sampling gives the same values either way.
    pub fn settle(&mut self, now_sec: f32) {
        for rec in &mut self.records {
            rec.radius.settle(now_sec);
            rec.click_distance.settle(now_sec);
        }
    }

    pub fn samples(&self, now_sec: f32) -> impl Iterator<Item = ClickSample> + '_ {
        self.records.iter().map(move |r| r.sample(now_sec))
    }

    /// Pack every record as `(x, y, click_distance, radius)` bytes into `out`.
    ///
    /// `out` must hold the full texture; texels past the ring's capacity are
    /// zeroed.
    pub fn encode_into(&self, now_sec: f32, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.params.texture_bytes());
        out.fill(0);
        let texels = out.chunks_exact_mut(CLICK_TEXEL_BYTES);
        for (texel, s) in texels.zip(self.samples(now_sec)) {
            texel[0] = unit_to_byte(s.coordinate.x);
            texel[1] = unit_to_byte(s.coordinate.y);
            texel[2] = unit_to_byte(s.click_distance);
            texel[3] = unit_to_byte(s.radius);
        }
    }

    pub fn encode(&self, now_sec: f32) -> Vec<u8> {
        let mut out = vec![0u8; self.params.texture_bytes()];
        self.encode_into(now_sec, &mut out);
        out
    }
}
