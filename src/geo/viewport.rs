use crate::race::Position;

use super::bounds::BoundingBox;

/// Allowed zoom scale range, `(min, max)`.
pub const ZOOM_EXTENT: (f64, f64) = (0.1, 100.0);

/// Visible window of the chart.
///
/// `x_domain` spans longitude and `y_domain` latitude. At zoom 1 the domains
/// equal the fitted bounds; a zoom scale `k` shows `1/k` of that extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    bounds: BoundingBox,
    x_domain: [f64; 2],
    y_domain: [f64; 2],
    zoom_scale: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            x_domain: [bounds.min_lon, bounds.max_lon],
            y_domain: [bounds.min_lat, bounds.max_lat],
            zoom_scale: 1.0,
        }
    }

    #[must_use]
    pub fn with_zoom(bounds: BoundingBox, zoom_scale: f64) -> Self {
        let mut viewport = Self::new(bounds);
        viewport.zoom_to(zoom_scale);
        viewport
    }

    #[must_use]
    pub const fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    #[must_use]
    pub const fn x_domain(&self) -> [f64; 2] {
        self.x_domain
    }

    #[must_use]
    pub const fn y_domain(&self) -> [f64; 2] {
        self.y_domain
    }

    #[must_use]
    pub const fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    /// Inclusive visibility test.
    #[must_use]
    pub fn contains(&self, position: &Position) -> bool {
        let [min_lon, max_lon] = self.x_domain;
        let [min_lat, max_lat] = self.y_domain;
        (min_lon..=max_lon).contains(&position.lon) && (min_lat..=max_lat).contains(&position.lat)
    }

    /// Multiplies the zoom scale by `factor` around the window centre.
    /// Returns whether the window changed.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        self.zoom_to(self.zoom_scale * factor)
    }

    /// Sets the zoom scale, clamped to [`ZOOM_EXTENT`], keeping the window
    /// centre. Returns whether the window changed.
    pub fn zoom_to(&mut self, zoom_scale: f64) -> bool {
        if !zoom_scale.is_finite() {
            return false;
        }
        let target = zoom_scale.clamp(ZOOM_EXTENT.0, ZOOM_EXTENT.1);
        if target.total_cmp(&self.zoom_scale).is_eq() {
            return false;
        }
        let ratio = self.zoom_scale / target;
        self.x_domain = rescale(self.x_domain, ratio);
        self.y_domain = rescale(self.y_domain, ratio);
        self.zoom_scale = target;
        true
    }

    /// Shifts the window by a fraction of its current span. Positive `dx`
    /// moves east, positive `dy` moves north.
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        self.x_domain = shift(self.x_domain, dx);
        self.y_domain = shift(self.y_domain, dy);
        true
    }

    /// Restores the fitted window at zoom 1.
    pub fn reset(&mut self) -> bool {
        let fitted = Self::new(self.bounds);
        let changed = *self != fitted;
        *self = fitted;
        changed
    }
}

fn rescale(domain: [f64; 2], ratio: f64) -> [f64; 2] {
    let [low, high] = domain;
    let center = (low + high) / 2.0;
    let half = (high - low) / 2.0 * ratio;
    [center - half, center + half]
}

fn shift(domain: [f64; 2], fraction: f64) -> [f64; 2] {
    let [low, high] = domain;
    let offset = (high - low) * fraction;
    [low + offset, high + offset]
}
