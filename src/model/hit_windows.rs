use crate::model::mods::GameMods;

/// Overall difficulty to hit window mapping in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    /// Hit window for a great hit.
    pub great: f64,
    /// Hit window for an ok hit.
    pub ok: f64,
}

impl HitWindows {
    const GREAT: DifficultyRange = DifficultyRange::new(50.0, 35.0, 20.0);
    const OK: DifficultyRange = DifficultyRange::new(120.0, 80.0, 50.0);

    /// Hit windows for an overall difficulty that already considers mods.
    ///
    /// The windows are scaled by the clock rate.
    pub fn new(od: f64, clock_rate: f64) -> Self {
        Self {
            great: Self::GREAT.value(od) / clock_rate,
            ok: Self::OK.value(od) / clock_rate,
        }
    }

    /// Hit windows for an overall difficulty that does not yet consider
    /// mods.
    pub fn with_mods(od: f64, mods: &GameMods, clock_rate: f64) -> Self {
        Self::new(mods.apply_od(od), clock_rate)
    }
}

#[derive(Copy, Clone)]
struct DifficultyRange {
    min: f64,
    mid: f64,
    max: f64,
}

impl DifficultyRange {
    const fn new(min: f64, mid: f64, max: f64) -> Self {
        Self { min, mid, max }
    }

    fn value(self, difficulty: f64) -> f64 {
        let Self { min, mid, max } = self;

        if difficulty > 5.0 {
            mid + (max - mid) * (difficulty - 5.0) / 5.0
        } else if difficulty < 5.0 {
            mid - (mid - min) * (5.0 - difficulty) / 5.0
        } else {
            mid
        }
    }
}
