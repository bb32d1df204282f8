use crate::material::Material;
use crate::quat::Quat;
use crate::ray::Ray;

/// Returned by [`Sphere::intersect`] when the ray has no real root.
pub const NO_ROOTS: (f64, f64) = (-1.0, -1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Quat,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Quat, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Both roots of `|origin + t*dir - center|^2 = r^2`, larger first.
    ///
    /// A discriminant `<= 0` is a miss, so a tangent ray reports
    /// [`NO_ROOTS`]. The sentinel is only meaningful together with a
    /// positive near clip: callers filter roots against their own range.
    pub fn intersect(&self, r: Ray) -> (f64, f64) {
        let oc = r.origin - self.center;
        let a = r.direction.dot(r.direction);
        let b = 2.0 * oc.dot(r.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return NO_ROOTS;
        }
        let sqrt_d = discriminant.sqrt();
        let h = 2.0 * a;
        ((-b + sqrt_d) / h, (-b - sqrt_d) / h)
    }

    /// Outward unit normal. Undefined at the center itself.
    #[inline]
    pub fn normal_at(&self, point: Quat) -> Quat {
        (point - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::col;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_sphere(center: Quat) -> Sphere {
        Sphere::new(center, 1.0, Material::matte(col(65_535, 0, 0)))
    }

    fn random_vector(rng: &mut StdRng, span: f64) -> Quat {
        Quat::vector(
            rng.gen_range(-span..span),
            rng.gen_range(-span..span),
            rng.gen_range(-span..span),
        )
    }

    #[test]
    fn head_on_hit() {
        let s = unit_sphere(Quat::vector(0.0, 0.0, 5.0));
        let r = Ray::new(Quat::ZERO, Quat::vector(0.0, 0.0, 1.0));
        assert_eq!(s.intersect(r), (6.0, 4.0));
    }

    #[test]
    fn unnormalized_direction_scales_roots() {
        let s = unit_sphere(Quat::vector(0.0, 0.0, 5.0));
        let r = Ray::new(Quat::ZERO, Quat::vector(0.0, 0.0, 2.0));
        assert_eq!(s.intersect(r), (3.0, 2.0));
        assert_eq!(r.at(2.0), Quat::vector(0.0, 0.0, 4.0));
    }

    #[test]
    fn tangent_ray_is_a_miss() {
        let s = unit_sphere(Quat::vector(0.0, -1.0, 3.0));
        let r = Ray::new(Quat::vector(0.0, 0.0, 1.0), Quat::vector(0.0, 0.0, 1.0));
        assert_eq!(s.intersect(r), NO_ROOTS);
    }

    #[test]
    fn clear_miss() {
        let s = unit_sphere(Quat::vector(0.0, 5.0, 3.0));
        let r = Ray::new(Quat::ZERO, Quat::vector(0.0, 0.0, 1.0));
        assert_eq!(s.intersect(r), NO_ROOTS);
    }

    #[test]
    fn roots_satisfy_the_quadratic() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2_000 {
            let s = Sphere::new(
                random_vector(&mut rng, 10.0),
                rng.gen_range(0.1..4.0),
                Material::matte(col(0, 0, 0)),
            );
            let r = Ray::new(random_vector(&mut rng, 10.0), random_vector(&mut rng, 3.0));

            let oc = r.origin - s.center;
            let a = r.direction.dot(r.direction);
            let b = 2.0 * oc.dot(r.direction);
            let c = oc.dot(oc) - s.radius * s.radius;
            let discriminant = b * b - 4.0 * a * c;

            let roots = s.intersect(r);
            if discriminant <= 0.0 {
                assert_eq!(roots, NO_ROOTS);
                continue;
            }
            for t in [roots.0, roots.1] {
                let p = r.at(t);
                let residual = (p - s.center).length() - s.radius;
                assert!(residual.abs() < 1e-6, "residual {residual} for t={t}");
            }
            assert!(roots.0 >= roots.1);
        }
    }

    #[test]
    fn normals_are_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let s = Sphere::new(
                random_vector(&mut rng, 10.0),
                rng.gen_range(0.1..4.0),
                Material::matte(col(0, 0, 0)),
            );
            let p = random_vector(&mut rng, 20.0);
            if p == s.center {
                continue;
            }
            assert!((s.normal_at(p).length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn normal_points_away_from_center() {
        let s = unit_sphere(Quat::vector(1.0, 1.0, 1.0));
        assert_eq!(s.normal_at(Quat::vector(1.0, 3.0, 1.0)), Quat::vector(0.0, 1.0, 0.0));
    }
}
