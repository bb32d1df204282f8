//! Scene graph plus the intersection, shading and recursive trace routines.

use crate::camera::Camera;
use crate::light::Light;
use crate::material::{blend, col, scale_colour, Colour, Material};
use crate::quat::{reflect, Quat};
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Closest intersection along a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub t: f64,
    pub object: Sphere,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub objects: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub background: Colour,
}

impl Scene {
    pub fn new(camera: Camera, objects: Vec<Sphere>, lights: Vec<Light>, background: Colour) -> Self {
        Self {
            camera,
            objects,
            lights,
            background,
        }
    }

    /// Three coloured balls resting on a large yellow ground sphere, lit by
    /// ambient, point and directional light.
    pub fn demo(canvas_width: u32, canvas_height: u32) -> Self {
        let camera = Camera::new(Quat::vector(0.0, 0.0, 0.3), canvas_width, canvas_height, 45.0);

        let objects = vec![
            Sphere::new(
                Quat::vector(0.0, -1.0, 3.0),
                1.0,
                Material::new(col(65_535, 0, 0), 0.5, Some(625.0)),
            ),
            Sphere::new(
                Quat::vector(-2.0, 1.0, 3.0),
                1.0,
                Material::new(col(0, 0, 65_535), 0.7, Some(200.0)),
            ),
            Sphere::new(
                Quat::vector(2.0, 1.0, 3.0),
                1.0,
                Material::new(col(0, 65_535, 0), 0.2, Some(845.0)),
            ),
            Sphere::new(
                Quat::vector(0.0, -5001.0, 0.0),
                5000.0,
                Material::new(col(65_535, 65_535, 0), 0.6, Some(100.0)),
            ),
        ];

        let lights = vec![
            Light::Ambient { intensity: 0.3 },
            Light::Point {
                intensity: 0.2,
                position: Quat::vector(2.0, 1.0, 0.0),
            },
            Light::Directional {
                intensity: 0.5,
                direction: Quat::vector(1.0, 4.0, 4.0),
            },
        ];

        Self::new(camera, objects, lights, col(0, 0, 0))
    }

    /// Smallest root within the camera's `[t_min, t_max]` over both roots of
    /// every object.
    pub fn nearest_hit(&self, r: Ray) -> Option<Hit> {
        let (t_min, t_max) = (self.camera.t_min, self.camera.t_max);
        let mut closest_t = t_max + 1.0;
        let mut best = None;

        for object in &self.objects {
            let (t0, t1) = object.intersect(r);
            for t in [t0, t1] {
                if t_min <= t && t <= t_max && t < closest_t {
                    closest_t = t;
                    best = Some(Hit { t, object: *object });
                }
            }
        }

        best
    }

    /// Scalar light intensity at `point`. Unclamped.
    ///
    /// `view` points from the surface back toward the viewer. Any object
    /// between the point and a light blocks that light completely.
    pub fn shade(&self, point: Quat, normal: Quat, view: Quat, specular: Option<f64>) -> f64 {
        let mut intensity = 0.0;

        for light in &self.lights {
            let Some(direction) = light.direction_from(point) else {
                intensity += light.intensity();
                continue;
            };

            if self.nearest_hit(Ray::new(point, direction)).is_some() {
                continue;
            }

            let nd = normal.dot(direction);
            if nd > 0.0 {
                intensity += light.intensity() * nd / (normal.length() * direction.length());
            }

            if let Some(exponent) = specular {
                let r = reflect(direction, normal);
                let rv = r.dot(view);
                if rv > 0.0 {
                    intensity += light.intensity() * (rv / (r.length() * view.length())).powf(exponent);
                }
            }
        }

        intensity
    }

    /// Colour seen along `r`, following at most `depth` mirror bounces.
    pub fn ray_trace(&self, r: Ray, depth: i32) -> Colour {
        let Some(hit) = self.nearest_hit(r) else {
            return self.background;
        };

        let point = r.at(hit.t);
        let normal = hit.object.normal_at(point);
        let view = r.direction.conjugate();
        let material = hit.object.material;

        let local = scale_colour(material.colour, self.shade(point, normal, view, material.specular));

        if depth <= 0 || material.reflectivity <= 0.0 {
            return local;
        }

        let reflected = self.ray_trace(Ray::new(point, reflect(view, normal)), depth - 1);
        blend(local, reflected, material.reflectivity)
    }

    /// Traced colour of canvas pixel `(x, y)`.
    #[inline]
    pub fn trace_pixel(&self, x: u32, y: u32, depth: i32) -> Colour {
        self.ray_trace(self.camera.ray_at(x, y), depth)
    }
}
