use rosu_map::section::{general::GameMode, hit_objects::HitObjectKind};

use crate::model::{
    control_point::{difficulty_point_at, timing_point_at, DifficultyPoint, TimingPoint},
    mode::ConvertError,
    note::{HitSoundType, HitType, Note, NoteKind},
};

/// All beatmap data that is relevant for difficulty calculation.
///
/// Notes are expected to be sorted by their start time.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    pub notes: Vec<Note>,
    pub od: f32,
    pub slider_multiplier: f64,
    pub timing_points: Vec<TimingPoint>,
    pub difficulty_points: Vec<DifficultyPoint>,
}

impl Beatmap {
    pub const DEFAULT_OD: f32 = 5.0;
    pub const DEFAULT_SLIDER_MULTIPLIER: f64 = 1.4;

    /// Create a beatmap from notes with default attributes and no control
    /// points.
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            od: Self::DEFAULT_OD,
            slider_multiplier: Self::DEFAULT_SLIDER_MULTIPLIER,
            timing_points: Vec::new(),
            difficulty_points: Vec::new(),
        }
    }

    /// Create a beatmap that only consists of hits.
    pub fn from_hits<I>(hits: I) -> Self
    where
        I: IntoIterator<Item = (f64, HitType)>,
    {
        let notes = hits
            .into_iter()
            .map(|(start_time, hit_type)| Note::hit(start_time, hit_type))
            .collect();

        Self::new(notes)
    }

    /// Specify the overall difficulty.
    #[must_use]
    pub fn od(mut self, od: f32) -> Self {
        self.od = od;

        self
    }

    /// Add a timing point, keeping them sorted.
    #[must_use]
    pub fn timing_point(mut self, point: TimingPoint) -> Self {
        let idx = self
            .timing_points
            .partition_point(|probe| probe.time <= point.time);
        self.timing_points.insert(idx, point);

        self
    }

    /// Add a difficulty point, keeping them sorted.
    #[must_use]
    pub fn difficulty_point(mut self, point: DifficultyPoint) -> Self {
        let idx = self
            .difficulty_points
            .partition_point(|probe| probe.time <= point.time);
        self.difficulty_points.insert(idx, point);

        self
    }

    /// The timing point that is active at the given time.
    pub fn timing_point_at(&self, time: f64) -> Option<&TimingPoint> {
        timing_point_at(&self.timing_points, time)
    }

    /// The difficulty point that is active at the given time.
    pub fn difficulty_point_at(&self, time: f64) -> Option<&DifficultyPoint> {
        difficulty_point_at(&self.difficulty_points, time)
    }

    /// The amount of hits i.e. the max combo.
    pub fn n_hits(&self) -> usize {
        self.notes.iter().filter(|note| note.is_hit()).count()
    }
}

impl TryFrom<&rosu_map::Beatmap> for Beatmap {
    type Error = ConvertError;

    fn try_from(map: &rosu_map::Beatmap) -> Result<Self, Self::Error> {
        if map.mode != GameMode::Taiko {
            #[cfg(feature = "tracing")]
            tracing::debug!(mode = ?map.mode, "Cannot convert beatmap");

            return Err(ConvertError::Convert { from: map.mode });
        }

        let notes = map
            .hit_objects
            .iter()
            .map(|h| {
                let kind = match h.kind {
                    HitObjectKind::Circle(_) => {
                        NoteKind::Hit(HitSoundType::from(h.samples.as_slice()).into())
                    }
                    HitObjectKind::Slider(_) => NoteKind::DrumRoll,
                    _ => NoteKind::Swell,
                };

                Note::new(h.start_time, kind)
            })
            .collect();

        let timing_points = map
            .control_points
            .timing_points
            .iter()
            .map(|point| TimingPoint::new(point.time, point.beat_len))
            .collect();

        let difficulty_points = map
            .control_points
            .difficulty_points
            .iter()
            .map(|point| DifficultyPoint::new(point.time, point.slider_velocity))
            .collect();

        Ok(Self {
            notes,
            od: map.overall_difficulty,
            slider_multiplier: map.slider_multiplier,
            timing_points,
            difficulty_points,
        })
    }
}

impl TryFrom<rosu_map::Beatmap> for Beatmap {
    type Error = ConvertError;

    fn try_from(map: rosu_map::Beatmap) -> Result<Self, Self::Error> {
        Self::try_from(&map)
    }
}
