use crate::quat::Quat;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    /// Flat contribution, independent of geometry.
    Ambient { intensity: f64 },
    Point { intensity: f64, position: Quat },
    /// Infinitely distant source. `direction` points from the surface
    /// toward the light.
    Directional { intensity: f64, direction: Quat },
}

impl Light {
    #[inline]
    pub fn intensity(&self) -> f64 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }

    /// Unnormalized direction from `point` toward the light, or `None`
    /// for ambient light.
    pub fn direction_from(&self, point: Quat) -> Option<Quat> {
        match *self {
            Light::Ambient { .. } => None,
            Light::Point { position, .. } => Some(position - point),
            Light::Directional { direction, .. } => Some(direction),
        }
    }
}
