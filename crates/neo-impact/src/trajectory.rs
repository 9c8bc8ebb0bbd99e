//! Synthetic orbital path generation for visualization
//!
//! Paths use a simplified eccentric-orbit radius `r = a·(1 + e·cos θ)` in the
//! orbital plane, then tilt the plane about the x-axis by the inclination.
//! This is a rendering approximation, not a conic section.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A point in scene-scale units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Angle of the point in the x/z plane
    pub fn azimuth(&self) -> f64 {
        self.z.atan2(self.x)
    }
}

/// Trajectory samples are plain points
pub type TrajectoryPoint = Point3;

/// Rotate an orbital-plane point `(x', z')` about the x-axis
fn tilt(x_orbital: f64, z_orbital: f64, inclination_rad: f64) -> Point3 {
    Point3 {
        x: x_orbital,
        y: z_orbital * inclination_rad.sin(),
        z: z_orbital * inclination_rad.cos(),
    }
}

/// Position on a circular orbit of `orbit_radius` at `angle_deg`, tilted by
/// `inclination_deg`
pub fn place_on_orbit(orbit_radius: f64, angle_deg: f64, inclination_deg: f64) -> Point3 {
    let angle = angle_deg.to_radians();
    tilt(
        orbit_radius * angle.cos(),
        orbit_radius * angle.sin(),
        inclination_deg.to_radians(),
    )
}

/// Generate `num_points` samples covering `orbit_fraction` of a revolution,
/// starting at the azimuth of `position`.
///
/// The first sample generally does not coincide with `position` (the radius
/// is eccentric and the plane tilted); callers that render both must move the
/// object onto sample 0.
pub fn generate(
    position: &Point3,
    orbit_radius: f64,
    inclination_deg: f64,
    eccentricity: f64,
    num_points: usize,
    orbit_fraction: f64,
) -> Vec<TrajectoryPoint> {
    if num_points == 0 {
        return Vec::new();
    }

    let inclination_rad = inclination_deg.to_radians();
    let current_angle = position.azimuth();
    let angle_step = TAU * orbit_fraction / num_points as f64;

    (0..num_points)
        .map(|i| {
            let angle = current_angle + i as f64 * angle_step;
            let distance = orbit_radius * (1.0 + eccentricity * angle.cos());
            tilt(distance * angle.cos(), distance * angle.sin(), inclination_rad)
        })
        .collect()
}
