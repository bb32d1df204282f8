use crate::quat::Quat;
use crate::ray::Ray;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Quat,
    /// Orientation, expected to be a unit rotation.
    pub direction: Quat,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Near clip. Roots below this are ignored.
    pub t_min: f64,
    /// Far clip. Roots above this are ignored.
    pub t_max: f64,
    /// Distance from the eye to the image plane.
    pub distance: f64,
    /// Field of view in degrees.
    pub fov: f64,
}

impl Camera {
    /// Camera at `position` with identity orientation, unit focal
    /// distance and a `[0.1, 100000]` clip range.
    pub fn new(position: Quat, canvas_width: u32, canvas_height: u32, fov: f64) -> Self {
        Self {
            position,
            direction: Quat::IDENTITY,
            canvas_width,
            canvas_height,
            t_min: 0.1,
            t_max: 100_000.0,
            distance: 1.0,
            fov,
        }
    }

    /// Point on the image plane, in camera-local space, for pixel `(x, y)`.
    pub fn translate_coords(&self, x: f64, y: f64) -> Quat {
        let w = self.canvas_width as f64;
        let h = self.canvas_height as f64;

        let viewport_width = self.fov.to_radians().tan();
        let viewport_height = viewport_width * (w / h);

        let vx = (x - w / 2.0) * (viewport_width / w);
        let vy = (y - h / 2.0) * (viewport_height / h);

        Quat::vector(vx, vy, self.distance)
    }

    /// Composes `delta` on the right of the current orientation.
    pub fn rotate(&mut self, delta: Quat) {
        self.direction = (self.direction * delta).normalize();
    }

    /// Primary ray for pixel `(x, y)`.
    ///
    /// The ray starts on the oriented image plane, not at the eye, and
    /// points away from the eye through that plane point.
    pub fn ray_at(&self, x: u32, y: u32) -> Ray {
        let origin = self.direction * self.translate_coords(x as f64, y as f64);
        let direction = (origin - self.position).normalize();
        Ray::new(origin, direction)
    }
}
