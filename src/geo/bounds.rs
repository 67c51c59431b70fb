use serde::Serialize;

use crate::error::{Axis, GeoError};
use crate::race::{Mark, Position};

/// Geographic extent of the chart, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Fits a box around every position and course mark, then widens the
    /// narrower axis around the raw midpoint so that
    /// `lon_span / lat_span == aspect_ratio`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidAspectRatio`] for a non-finite or
    /// non-positive ratio, [`GeoError::Empty`] when there is nothing to fit and
    /// [`GeoError::Degenerate`] when either axis has zero extent.
    pub fn fit<'data, P, W>(
        positions: P,
        waypoints: W,
        aspect_ratio: f64,
    ) -> Result<Self, GeoError>
    where
        P: IntoIterator<Item = &'data Position>,
        W: IntoIterator<Item = &'data Mark>,
    {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(GeoError::InvalidAspectRatio {
                value: aspect_ratio,
            });
        }

        let raw = positions
            .into_iter()
            .map(|position| (position.lat, position.lon))
            .chain(waypoints.into_iter().map(|mark| (mark.lat, mark.lon)))
            .filter(|(lat, lon)| lat.is_finite() && lon.is_finite())
            .fold(None, |extent: Option<Self>, (lat, lon)| {
                Some(extent.map_or_else(|| Self::point(lat, lon), |known| known.include(lat, lon)))
            })
            .ok_or(GeoError::Empty)?;

        let delta_lat = raw.lat_span();
        let delta_lon = raw.lon_span();
        if delta_lat <= 0.0 {
            return Err(GeoError::Degenerate {
                axis: Axis::Latitude,
            });
        }
        if delta_lon <= 0.0 {
            return Err(GeoError::Degenerate {
                axis: Axis::Longitude,
            });
        }

        let mid_lat = raw.min_lat + delta_lat / 2.0;
        let mid_lon = raw.min_lon + delta_lon / 2.0;
        let (half_lat, half_lon) = if delta_lon / delta_lat > aspect_ratio {
            (delta_lon / aspect_ratio / 2.0, delta_lon / 2.0)
        } else {
            (delta_lat / 2.0, delta_lat * aspect_ratio / 2.0)
        };

        Ok(Self {
            min_lat: mid_lat - half_lat,
            max_lat: mid_lat + half_lat,
            min_lon: mid_lon - half_lon,
            max_lon: mid_lon + half_lon,
        })
    }

    #[must_use]
    pub const fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[must_use]
    pub const fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    const fn point(lat: f64, lon: f64) -> Self {
        Self {
            min_lat: lat,
            max_lat: lat,
            min_lon: lon,
            max_lon: lon,
        }
    }

    const fn include(self, lat: f64, lon: f64) -> Self {
        Self {
            min_lat: self.min_lat.min(lat),
            max_lat: self.max_lat.max(lat),
            min_lon: self.min_lon.min(lon),
            max_lon: self.max_lon.max(lon),
        }
    }
}
