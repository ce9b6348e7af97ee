use crate::{
    any::{difficulty::skills::StrainSkill, DifficultyError},
    model::beatmap::Beatmap,
    taiko::difficulty::DifficultyValues,
    Difficulty,
};

/// The result of calculating the strains on an osu!taiko map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaikoStrains {
    /// Strain peaks of the pattern skill.
    pub pattern: Vec<f64>,
    /// Strain peaks of the rhythm skill.
    pub rhythm: Vec<f64>,
    /// Strain peaks of the stamina skill.
    pub stamina: Vec<f64>,
}

impl TaikoStrains {
    /// Time between two strains in ms.
    pub const SECTION_LEN: f64 = 400.0;
}

pub(crate) fn strains(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<TaikoStrains, DifficultyError> {
    let Some(skills) = DifficultyValues::calculate(difficulty, map)?.skills else {
        return Ok(TaikoStrains::default());
    };

    Ok(TaikoStrains {
        pattern: skills.pattern.into_current_strain_peaks(),
        rhythm: skills.rhythm.into_current_strain_peaks(),
        stamina: skills.stamina.into_current_strain_peaks(),
    })
}
