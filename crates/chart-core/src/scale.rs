// File: crates/chart-core/src/scale.rs
// Summary: Value (linear) and category (band) scale transforms.

/// Linear map from a value domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`), which is how Y axes are
/// built: the bottom pixel first, the top pixel second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Y scale for a plot spanning `top..bottom` in screen space.
    pub fn vertical(min: f64, max: f64, top: f64, bottom: f64) -> Self {
        Self::new((min, max), (bottom, top))
    }

    pub fn span(&self) -> f64 {
        self.domain.1 - self.domain.0
    }

    /// Normalized position of `v` in the domain. A zero-width domain puts
    /// every value on the midpoint, so a flat series draws a mid-line.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        let span = self.span();
        if span.abs() < f64::EPSILON {
            0.5
        } else {
            (v - self.domain.0) / span
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.range.0 + self.fraction(v) * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let extent = self.range.1 - self.range.0;
        if extent.abs() < f64::EPSILON {
            return self.domain.0;
        }
        self.domain.0 + (px - self.range.0) / extent * self.span()
    }
}

/// Evenly spaced index positions across `[start, end]`, first and last index
/// on the edges. With a single item it sits at `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl IndexScale {
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        Self { start, end, count }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return self.start;
        }
        self.start + (index as f64 / (self.count - 1) as f64) * (self.end - self.start)
    }

    /// Closest index to a pixel position, or `None` when there are no items.
    pub fn nearest(&self, px: f64) -> Option<usize> {
        match self.count {
            0 => None,
            1 => Some(0),
            n => {
                let step = (self.end - self.start) / (n - 1) as f64;
                if step.abs() < f64::EPSILON {
                    return Some(0);
                }
                let i = ((px - self.start) / step).round();
                Some(i.clamp(0.0, (n - 1) as f64) as usize)
            }
        }
    }
}

/// Category slots: `count` equal slots across `[start, end]`, each holding a
/// band narrowed by `padding` (fraction of the slot left empty, split evenly
/// on both sides).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    pub padding: f64,
}

impl BandScale {
    pub fn new(start: f64, end: f64, count: usize, padding: f64) -> Self {
        Self { start, end, count, padding: padding.clamp(0.0, 0.95) }
    }

    pub fn slot_width(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.end - self.start).max(0.0) / self.count as f64
    }

    pub fn band_width(&self) -> f64 {
        self.slot_width() * (1.0 - self.padding)
    }

    /// Left edge of band `index`.
    pub fn band_start(&self, index: usize) -> f64 {
        let slot = self.slot_width();
        self.start + index as f64 * slot + slot * self.padding * 0.5
    }

    pub fn band_center(&self, index: usize) -> f64 {
        self.band_start(index) + self.band_width() * 0.5
    }

    /// Slot containing `px`, if any.
    pub fn slot_at(&self, px: f64) -> Option<usize> {
        let slot = self.slot_width();
        if slot <= 0.0 || px < self.start || px >= self.end {
            return None;
        }
        let i = ((px - self.start) / slot) as usize;
        (i < self.count).then_some(i)
    }
}
