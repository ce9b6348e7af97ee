use std::ops::{Index, Range};

use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject, IDifficultyObjects},
    model::{
        beatmap::Beatmap,
        control_point::{DifficultyPoint, TimingPoint},
        note::HitType,
    },
    taiko::difficulty::pattern::HasInterval,
};

/// A single hit after applying the clock rate.
#[derive(Clone, Debug, PartialEq)]
pub struct TaikoDifficultyObject {
    pub idx: usize,
    pub start_time: f64,
    /// Time since the previous hit; `0.0` for the first hit.
    pub delta_time: f64,
    pub hit_type: HitType,
    pub effective_bpm: f64,
    /// Whether the hit type differs from the previous hit's. Always `false`
    /// for the first hit.
    pub is_color_change: bool,
    /// Index among all hits of the same [`HitType`].
    pub mono_idx: usize,
    /// Index within the current streak of equally colored hits.
    pub mono_streak_idx: usize,
}

impl IDifficultyObject for TaikoDifficultyObject {
    type DifficultyObjects = TaikoDifficultyObjects;

    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for TaikoDifficultyObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

impl HasInterval for TaikoDifficultyObject {
    fn interval(&self) -> f64 {
        if self.idx == 0 {
            f64::NAN
        } else {
            self.delta_time
        }
    }

    fn objects(&self) -> Range<usize> {
        self.idx..self.idx + 1
    }
}

/// All [`TaikoDifficultyObject`]s of a beatmap alongside lookup tables for
/// each color.
#[derive(Clone, Debug, Default)]
pub struct TaikoDifficultyObjects {
    objects: Vec<TaikoDifficultyObject>,
    centers: Vec<usize>,
    rims: Vec<usize>,
    color_changes: Vec<usize>,
}

impl TaikoDifficultyObjects {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
            centers: Vec::new(),
            rims: Vec::new(),
            color_changes: Vec::new(),
        }
    }

    /// Turns the first `take` hits of the map into difficulty objects.
    ///
    /// Drum rolls and swells are skipped.
    pub fn new(map: &Beatmap, global_slider_velocity: f64, take: usize, clock_rate: f64) -> Self {
        let hits = map
            .notes
            .iter()
            .filter_map(|note| note.hit_type().map(|hit_type| (note.start_time, hit_type)))
            .take(take);

        let mut this = Self::with_capacity(map.notes.len().min(take));

        for (map_time, hit_type) in hits {
            let effective_bpm =
                Self::effective_bpm(map, map_time, global_slider_velocity) * clock_rate;

            this.push(map_time / clock_rate, hit_type, effective_bpm);
        }

        this
    }

    fn effective_bpm(map: &Beatmap, time: f64, global_slider_velocity: f64) -> f64 {
        let beat_len = map
            .timing_point_at(time)
            .map_or(TimingPoint::DEFAULT_BEAT_LEN, |point| point.beat_len);

        let slider_velocity = map.difficulty_point_at(time).map_or(
            DifficultyPoint::DEFAULT_SLIDER_VELOCITY,
            |point| point.slider_velocity,
        );

        60_000.0 / beat_len * global_slider_velocity * slider_velocity
    }

    fn push(&mut self, start_time: f64, hit_type: HitType, effective_bpm: f64) {
        let idx = self.objects.len();

        let (delta_time, is_color_change, mono_streak_idx) = match self.objects.last() {
            Some(prev) if prev.hit_type == hit_type => {
                (start_time - prev.start_time, false, prev.mono_streak_idx + 1)
            }
            Some(prev) => (start_time - prev.start_time, true, 0),
            None => (0.0, false, 0),
        };

        let monos = match hit_type {
            HitType::Center => &mut self.centers,
            HitType::Rim => &mut self.rims,
        };

        let mono_idx = monos.len();
        monos.push(idx);

        if is_color_change {
            self.color_changes.push(idx);
        }

        self.objects.push(TaikoDifficultyObject {
            idx,
            start_time,
            delta_time,
            hit_type,
            effective_bpm,
            is_color_change,
            mono_idx,
            mono_streak_idx,
        });
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaikoDifficultyObject> {
        self.objects.iter()
    }

    pub fn as_slice(&self) -> &[TaikoDifficultyObject] {
        &self.objects
    }

    /// Indices of all hits with the given [`HitType`].
    pub fn monos(&self, hit_type: HitType) -> &[usize] {
        match hit_type {
            HitType::Center => &self.centers,
            HitType::Rim => &self.rims,
        }
    }

    /// Indices of all hits that start a new streak of equally colored hits.
    pub fn color_changes(&self) -> &[usize] {
        &self.color_changes
    }

    /// The hit of the same color `backwards_idx + 1` hits ago.
    pub fn previous_mono(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        curr.mono_idx
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| self.monos(curr.hit_type).get(idx))
            .map(|&idx| &self.objects[idx])
    }

    /// The last hit before the current streak of equally colored hits.
    pub fn previous_color_change(
        &self,
        curr: &TaikoDifficultyObject,
    ) -> Option<&TaikoDifficultyObject> {
        (curr.idx - curr.mono_streak_idx)
            .checked_sub(1)
            .and_then(|idx| self.objects.get(idx))
    }

    /// The first hit after the current streak of equally colored hits.
    pub fn next_color_change(&self, curr: &TaikoDifficultyObject) -> Option<&TaikoDifficultyObject> {
        let i = self.color_changes.partition_point(|&idx| idx <= curr.idx);

        self.color_changes
            .get(i)
            .map(|&idx| &self.objects[idx])
    }
}

impl IDifficultyObjects for TaikoDifficultyObjects {
    type DifficultyObject = TaikoDifficultyObject;

    fn get(&self, idx: usize) -> Option<&Self::DifficultyObject> {
        self.objects.get(idx)
    }
}

impl Index<usize> for TaikoDifficultyObjects {
    type Output = TaikoDifficultyObject;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.objects[idx]
    }
}

impl<'a> IntoIterator for &'a TaikoDifficultyObjects {
    type Item = &'a TaikoDifficultyObject;
    type IntoIter = std::slice::Iter<'a, TaikoDifficultyObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
