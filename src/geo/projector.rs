use super::viewport::Viewport;

/// Affine map from the current viewport to a `width` x `height` drawing area.
/// Screen `y` grows downward, so north is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoProjector {
    x_domain: [f64; 2],
    y_domain: [f64; 2],
    width: f64,
    height: f64,
}

impl GeoProjector {
    #[must_use]
    pub fn new(viewport: &Viewport, width: u32, height: u32) -> Self {
        Self {
            x_domain: viewport.x_domain(),
            y_domain: viewport.y_domain(),
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Returns `(x, y)` in pixels.
    #[must_use]
    pub fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (
            linear_scale(lon, self.x_domain, [0.0, self.width]),
            linear_scale(lat, self.y_domain, [self.height, 0.0]),
        )
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

/// Linear interpolation of `value` from `domain` onto `range`. An empty
/// domain maps everything to the start of the range.
pub(crate) fn linear_scale(value: f64, domain: [f64; 2], range: [f64; 2]) -> f64 {
    let [d0, d1] = domain;
    let [r0, r1] = range;
    let span = d1 - d0;
    if span.abs() < f64::EPSILON {
        return r0;
    }
    r0 + (value - d0) / span * (r1 - r0)
}
