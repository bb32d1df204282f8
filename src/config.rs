/// Knobs for the frame loop. Scene content lives in [`crate::scene::Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Camera x advance per frame along the elliptical path.
    pub path_step: f64,
    /// Pitch, in radians, applied to the camera after every frame.
    pub pitch_step: f64,
    /// Worker count per frame. `None` uses every logical CPU.
    pub threads: Option<usize>,
    pub show_progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            path_step: 0.1,
            pitch_step: 0.00001,
            threads: None,
            show_progress: true,
        }
    }
}

impl RenderSettings {
    pub fn worker_count(&self) -> usize {
        self.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus::get)
    }
}
