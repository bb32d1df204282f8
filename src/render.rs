//! Frame loop: parallel rasterisation of one frame at a time, followed by a
//! single-threaded camera advance and persistence of the finished frame.

use std::ffi::OsString;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::{ImageBuffer, Rgba};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressState, ProgressStyle};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::RenderSettings;
use crate::error::RenderError;
use crate::quat::Quat;
use crate::scene::Scene;

pub type FrameBuffer = ImageBuffer<Rgba<u16>, Vec<u16>>;

pub struct Renderer {
    scene: Scene,
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(scene: Scene, settings: RenderSettings) -> Self {
        Self { scene, settings }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }

    /// Renders `frame_count` frames, writing each to
    /// `<output_base>-<index>.png` and moving the camera between frames.
    pub fn render(
        &mut self,
        output_base: impl AsRef<Path>,
        frame_count: usize,
        depth: i32,
    ) -> Result<(), RenderError> {
        self.validate()?;
        let output_base = output_base.as_ref();

        let total = Instant::now();
        info!("running with {} cores", self.settings.worker_count());

        for index in 0..frame_count {
            let start = Instant::now();
            let frame = self.render_frame(depth)?;
            info!("done rendering frame {} in {:.2?}", index, start.elapsed());

            self.advance_camera();
            save_frame(&frame, &frame_path(output_base, index))?;
        }

        info!("took {:.2?} to render {} frames", total.elapsed(), frame_count);
        Ok(())
    }

    /// Traces one ray per pixel on a worker pool that lives for this frame
    /// only. Returns once every pixel has been written.
    pub fn render_frame(&self, depth: i32) -> Result<FrameBuffer, RenderError> {
        let camera = &self.scene.camera;
        let mut frame = FrameBuffer::new(camera.canvas_width, camera.canvas_height);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.settings.worker_count())
            .thread_name(|i| format!("pixel-worker-{i}"))
            .build()?;

        let pb = self.progress_bar(u64::from(camera.canvas_width) * u64::from(camera.canvas_height));
        let scene = &self.scene;

        // Each work item owns a distinct `&mut` pixel, so no locking is needed.
        pool.install(|| {
            frame
                .enumerate_pixels_mut()
                .par_bridge()
                .progress_with(pb.clone())
                .for_each(|(x, y, pixel)| {
                    *pixel = scene.trace_pixel(x, y, depth);
                });
        });
        pb.finish_and_clear();

        Ok(frame)
    }

    /// Moves the camera along its elliptical path and pitches it slightly.
    /// Only called between frames.
    pub fn advance_camera(&mut self) {
        let camera = &mut self.scene.camera;
        let x = camera.position.x();

        let z = elliptical_path(x);
        if z.is_nan() {
            warn!("camera at x={x} is off the elliptical path");
        }
        camera.position = camera.position.with_z(z).with_x(x + self.settings.path_step);
        camera.rotate(Quat::from_euler(self.settings.pitch_step, 0.0, 0.0));

        debug!("camera advanced to {:?}", camera.position);
    }

    fn validate(&self) -> Result<(), RenderError> {
        let c = &self.scene.camera;
        if c.canvas_width == 0 || c.canvas_height == 0 {
            return Err(RenderError::InvalidSettings(format!(
                "canvas must be non-empty, got {}x{}",
                c.canvas_width, c.canvas_height
            )));
        }
        if !(c.distance > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "focal distance must be positive, got {}",
                c.distance
            )));
        }
        if !(c.t_min < c.t_max) {
            return Err(RenderError::InvalidSettings(format!(
                "clip range is empty: [{}, {}]",
                c.t_min, c.t_max
            )));
        }
        if !(c.fov > 0.0 && c.fov < 180.0) {
            return Err(RenderError::InvalidSettings(format!(
                "field of view must be within (0, 180) degrees, got {}",
                c.fov
            )));
        }
        Ok(())
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.settings.show_progress {
            return ProgressBar::hidden();
        }
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })
        .progress_chars("#>-");
        ProgressBar::new(len).with_style(style)
    }
}

/// Camera z as a function of x: `±sqrt(9 - 10x²) / sqrt(10)`, signed like
/// `x`. NaN once `|x| > sqrt(0.9)`.
pub fn elliptical_path(x: f64) -> f64 {
    let z = (9.0 - 10.0 * x * x).sqrt() / 10f64.sqrt();
    if x >= 0.0 {
        z
    } else {
        -z
    }
}

/// `<base>-<index>.png`
pub fn frame_path(base: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(format!("-{index}.png"));
    PathBuf::from(name)
}

pub fn save_frame(frame: &FrameBuffer, path: &Path) -> Result<(), RenderError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| RenderError::OutputDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    frame.save(path).map_err(|source| RenderError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::light::Light;
    use crate::material::{col, Material};
    use crate::sphere::Sphere;

    fn quiet(threads: usize) -> RenderSettings {
        RenderSettings {
            threads: Some(threads),
            show_progress: false,
            ..RenderSettings::default()
        }
    }

    fn small_scene() -> Scene {
        let mut scene = Scene::demo(24, 16);
        scene.lights.push(Light::Ambient { intensity: 0.1 });
        scene
    }

    #[test]
    fn parallel_frame_matches_serial_trace() {
        let renderer = Renderer::new(small_scene(), quiet(4));
        let frame = renderer.render_frame(3).expect("frame");
        assert_eq!(frame.dimensions(), (24, 16));

        let scene = renderer.scene();
        for (x, y, pixel) in frame.enumerate_pixels() {
            assert_eq!(*pixel, scene.trace_pixel(x, y, 3), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn worker_count_does_not_change_output() {
        let one = Renderer::new(small_scene(), quiet(1)).render_frame(2).expect("frame");
        let many = Renderer::new(small_scene(), quiet(8)).render_frame(2).expect("frame");
        assert_eq!(one, many);
    }

    #[test]
    fn elliptical_path_values() {
        assert!((elliptical_path(0.0) - 3.0 / 10f64.sqrt()).abs() < 1e-12);
        assert!((elliptical_path(0.5) - (6.5f64).sqrt() / 10f64.sqrt()).abs() < 1e-12);
        assert!((elliptical_path(-0.5) + (6.5f64).sqrt() / 10f64.sqrt()).abs() < 1e-12);
        assert!(elliptical_path(1.0).is_nan());
    }

    #[test]
    fn advance_moves_and_pitches_camera() {
        let mut renderer = Renderer::new(small_scene(), quiet(1));
        let before = renderer.scene().camera;

        renderer.advance_camera();
        let after = renderer.scene().camera;

        assert!((after.position.x() - 0.1).abs() < 1e-12);
        assert!((after.position.z() - elliptical_path(0.0)).abs() < 1e-12);
        assert_eq!(after.position.y(), before.position.y());
        let expected = (before.direction * Quat::from_euler(0.00001, 0.0, 0.0)).normalize();
        assert!((after.direction - expected).length() < 1e-12);
        assert_eq!(after.canvas_width, before.canvas_width);
        assert_eq!(after.fov, before.fov);
    }

    #[test]
    fn frame_path_appends_index() {
        assert_eq!(frame_path(Path::new("balls/balls"), 0), PathBuf::from("balls/balls-0.png"));
        assert_eq!(frame_path(Path::new("out"), 12), PathBuf::from("out-12.png"));
    }

    #[test]
    fn rejects_degenerate_camera() {
        let mut scene = Scene::new(
            Camera::new(Quat::ZERO, 0, 10, 45.0),
            vec![Sphere::new(Quat::vector(0.0, 0.0, 3.0), 1.0, Material::matte(col(1, 1, 1)))],
            vec![],
            col(0, 0, 0),
        );
        let err = Renderer::new(scene.clone(), quiet(1)).render("unused", 1, 1).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSettings(_)));

        scene.camera.canvas_width = 10;
        scene.camera.t_min = 5.0;
        scene.camera.t_max = 1.0;
        let err = Renderer::new(scene, quiet(1)).render("unused", 1, 1).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSettings(_)));
    }

    #[test]
    fn zero_frames_is_a_no_op() {
        let mut renderer = Renderer::new(small_scene(), quiet(1));
        let before = renderer.scene().camera;
        renderer.render("never-written", 0, 1).expect("render");
        assert_eq!(renderer.scene().camera, before);
    }
}
