/// Timing-related info about the beatmap, defines the beat length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimingPoint {
    pub time: f64,
    pub beat_len: f64,
}

impl TimingPoint {
    pub const DEFAULT_BEAT_LEN: f64 = 60_000.0 / 60.0;

    pub const fn new(time: f64, beat_len: f64) -> Self {
        Self { time, beat_len }
    }

    /// Beats per minute of this timing point.
    pub fn bpm(&self) -> f64 {
        60_000.0 / self.beat_len
    }
}

impl Default for TimingPoint {
    fn default() -> Self {
        Self::new(0.0, Self::DEFAULT_BEAT_LEN)
    }
}

/// Difficulty-related info about the beatmap, defines the scroll speed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DifficultyPoint {
    pub time: f64,
    pub slider_velocity: f64,
}

impl DifficultyPoint {
    pub const DEFAULT_SLIDER_VELOCITY: f64 = 1.0;

    pub fn new(time: f64, slider_velocity: f64) -> Self {
        Self {
            time,
            slider_velocity: slider_velocity.clamp(0.1, 10.0),
        }
    }
}

impl Default for DifficultyPoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            slider_velocity: Self::DEFAULT_SLIDER_VELOCITY,
        }
    }
}

/// The timing point active at the given time.
///
/// Times before the first timing point fall back to the first one.
pub fn timing_point_at(points: &[TimingPoint], time: f64) -> Option<&TimingPoint> {
    let i = points
        .binary_search_by(|probe| probe.time.total_cmp(&time))
        .unwrap_or_else(|i| i.saturating_sub(1));

    points.get(i)
}

/// The difficulty point active at the given time.
///
/// Times before the first difficulty point have no difficulty point.
pub fn difficulty_point_at(points: &[DifficultyPoint], time: f64) -> Option<&DifficultyPoint> {
    points
        .binary_search_by(|probe| probe.time.total_cmp(&time))
        .map_or_else(|i| i.checked_sub(1), Some)
        .map(|i| &points[i])
}
