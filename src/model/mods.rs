use std::fmt::{Debug, Formatter, Result as FmtResult};

use rosu_mods::GameModsLegacy;

/// Mods that affect the calculation.
///
/// Only clock rate and overall difficulty adjusting mods are taken into
/// account.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct GameMods(GameModsLegacy);

impl GameMods {
    pub(crate) const DEFAULT: Self = Self(GameModsLegacy::NoMod);

    /// The underlying legacy mods.
    pub const fn legacy(self) -> GameModsLegacy {
        self.0
    }

    /// The clock rate based on the mods.
    pub fn clock_rate(&self) -> f64 {
        if self.dt() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }

    /// Overall difficulty after applying [`HardRock`] or [`Easy`].
    ///
    /// [`HardRock`]: GameModsLegacy::HardRock
    /// [`Easy`]: GameModsLegacy::Easy
    pub fn apply_od(&self, od: f64) -> f64 {
        if self.hr() {
            (od * 1.4).min(10.0)
        } else if self.ez() {
            od * 0.5
        } else {
            od
        }
    }

    pub fn hr(&self) -> bool {
        self.0.contains(GameModsLegacy::HardRock)
    }

    pub fn ez(&self) -> bool {
        self.0.contains(GameModsLegacy::Easy)
    }

    pub fn dt(&self) -> bool {
        self.0.contains(GameModsLegacy::DoubleTime) || self.0.contains(GameModsLegacy::Nightcore)
    }

    pub fn ht(&self) -> bool {
        self.0.contains(GameModsLegacy::HalfTime)
    }
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl Default for GameMods {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self(mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nightcore_speeds_up() {
        let mods = GameMods::from(GameModsLegacy::Nightcore);

        assert!(mods.dt());
        assert!((mods.clock_rate() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn od_adjustments() {
        let hr = GameMods::from(GameModsLegacy::HardRock);
        let ez = GameMods::from(GameModsLegacy::Easy);

        assert!((hr.apply_od(5.0) - 7.0).abs() < 1e-9);
        assert!((hr.apply_od(9.0) - 10.0).abs() < 1e-9);
        assert!((ez.apply_od(8.0) - 4.0).abs() < 1e-9);
        assert!((GameMods::default().apply_od(8.0) - 8.0).abs() < 1e-9);
    }
}
