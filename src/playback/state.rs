/// Playback phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not animating; no frame handler is registered.
    #[default]
    Idle,
    /// Animating; exactly one frame handler is registered.
    Running,
}

/// Published playback state, owned and mutated by the engine only.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlaybackState {
    /// Current phase.
    pub phase: Phase,
    /// First year of the range (inclusive).
    pub anchor_year: i32,
    /// Last year of the range (inclusive). Always `>= anchor_year`.
    pub target_year: i32,
    /// Year being shown; always within `[anchor_year, target_year]`.
    pub current_year: i32,
    /// Timestamp at which the current year step began; `None` while idle.
    pub frame_anchor_ms: Option<f64>,
    /// Duration of one year step in milliseconds.
    pub step_interval_ms: f64,
    /// Progress through the range in `[0, 1]`.
    pub progress: f64,
}

impl PlaybackState {
    pub(crate) fn idle(anchor_year: i32, target_year: i32, step_interval_ms: f64) -> Self {
        Self {
            phase: Phase::Idle,
            anchor_year,
            target_year,
            current_year: anchor_year,
            frame_anchor_ms: None,
            step_interval_ms,
            progress: 0.0,
        }
    }

    /// Whether the phase is [`Phase::Running`].
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}
