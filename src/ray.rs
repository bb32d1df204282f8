use crate::quat::Quat;

/// `origin + t * direction`. The direction is not required to be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Quat,
    pub direction: Quat,
}

impl Ray {
    #[inline]
    pub fn new(origin: Quat, direction: Quat) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn at(self, t: f64) -> Quat {
        self.origin + self.direction * t
    }
}
