use crate::model::mods::GameMods;

/// The result of a difficulty calculation on an osu!taiko map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaikoDifficultyAttributes {
    /// The final star rating.
    pub stars: f64,
    /// The difficulty of hitting notes off their rhythmically expected
    /// timings.
    pub pattern: f64,
    /// The difficulty of switching between intervals of consecutive
    /// patterns.
    pub rhythm: f64,
    /// The difficulty of keeping up with dense streams of notes.
    pub stamina: f64,
    /// The combined rating of all skills before rescaling.
    pub peak: f64,
    /// The perceived hit window for a great hit inclusive of rate-adjusting
    /// mods (DT/HT/etc).
    pub great_hit_window: f64,
    /// The perceived hit window for an ok hit inclusive of rate-adjusting
    /// mods (DT/HT/etc).
    pub ok_hit_window: f64,
    /// The maximum combo.
    pub max_combo: u32,
    /// The amount of hits that have been processed.
    pub n_objects: usize,
    /// The mods that the attributes were calculated with.
    pub mods: GameMods,
}

impl TaikoDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }
}
