use crate::{taiko::difficulty::config::TaikoDifficultyConfig, util::difficulty::norm};

/// The weighted peaks of all skills within one section.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TaikoStrain {
    pub pattern: f64,
    pub rhythm: f64,
    pub stamina: f64,
    pub combined: f64,
}

impl TaikoStrain {
    pub fn new(pattern: f64, rhythm: f64, stamina: f64, config: &TaikoDifficultyConfig) -> Self {
        let pattern = pattern * config.pattern_multiplier;
        let rhythm = rhythm * config.rhythm_multiplier;
        let stamina = stamina * config.stamina_multiplier;

        Self {
            pattern,
            rhythm,
            stamina,
            combined: norm(config.peak_norm, [pattern, rhythm, stamina]),
        }
    }
}

/// Weighted sums of all section peaks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PeakRatings {
    pub combined: f64,
    pub pattern: f64,
    pub rhythm: f64,
    pub stamina: f64,
}

/// Combines the peaks of each section and sums them up from hardest to
/// easiest section.
///
/// Component ratings are weighted in the order of the combined peaks.
pub fn combine_peaks(
    pattern_peaks: &[f64],
    rhythm_peaks: &[f64],
    stamina_peaks: &[f64],
    config: &TaikoDifficultyConfig,
) -> PeakRatings {
    let mut peaks: Vec<TaikoStrain> = pattern_peaks
        .iter()
        .zip(rhythm_peaks)
        .zip(stamina_peaks)
        .map(|((&pattern, &rhythm), &stamina)| TaikoStrain::new(pattern, rhythm, stamina, config))
        // * Sections with 0 strain are excluded to avoid worst-case time complexity of the following sort (e.g. /b/2351871).
        // * These sections will not contribute to the difficulty.
        .filter(|peak| peak.combined > 0.0)
        .collect();

    peaks.sort_by(|a, b| b.combined.total_cmp(&a.combined));

    let mut ratings = PeakRatings::default();
    let mut weight = 1.0;

    for strain in peaks {
        ratings.combined += strain.combined * weight;
        ratings.pattern += strain.pattern * weight;
        ratings.rhythm += strain.rhythm * weight;
        ratings.stamina += strain.stamina * weight;
        weight *= config.decay_weight;
    }

    ratings
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn unweighted() -> TaikoDifficultyConfig {
        TaikoDifficultyConfig {
            pattern_multiplier: 1.0,
            rhythm_multiplier: 1.0,
            stamina_multiplier: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn single_skill_sum() {
        let ratings = combine_peaks(&[1.0, 10.0, 5.0], &[0.0; 3], &[0.0; 3], &unweighted());

        assert!((ratings.combined - 15.31).abs() < 1e-12, "{}", ratings.combined);
        assert!((ratings.pattern - 15.31).abs() < 1e-12);
        assert!(ratings.rhythm.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_sections_are_skipped() {
        let ratings = combine_peaks(
            &[0.0, 10.0, 0.0, 5.0],
            &[0.0; 4],
            &[0.0; 4],
            &unweighted(),
        );

        assert!((ratings.combined - 14.5).abs() < 1e-12, "{}", ratings.combined);
    }

    #[test]
    fn components_follow_combined_order() {
        // The second section is harder in total but easier in pattern
        let ratings = combine_peaks(&[2.0, 1.0], &[0.0, 5.0], &[0.0, 0.0], &unweighted());

        assert!((ratings.pattern - (1.0 + 0.9 * 2.0)).abs() < 1e-12);
        assert!((ratings.rhythm - 5.0).abs() < 1e-12);
    }

    #[test]
    fn uses_shortest_peak_list() {
        let ratings = combine_peaks(&[1.0, 2.0, 3.0], &[1.0], &[1.0, 1.0], &unweighted());
        let expected = norm(1.5, [1.0, 1.0, 1.0]);

        assert!((ratings.combined - expected).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn combined_dominates_components(
            peaks in prop::collection::vec((0.0..100.0_f64, 0.0..100.0_f64, 0.0..100.0_f64), 0..32),
        ) {
            let pattern: Vec<_> = peaks.iter().map(|p| p.0).collect();
            let rhythm: Vec<_> = peaks.iter().map(|p| p.1).collect();
            let stamina: Vec<_> = peaks.iter().map(|p| p.2).collect();

            let ratings = combine_peaks(&pattern, &rhythm, &stamina, &TaikoDifficultyConfig::default());

            prop_assert!(ratings.combined >= 0.0);
            prop_assert!(ratings.combined + 1e-9 >= ratings.pattern);
            prop_assert!(ratings.combined + 1e-9 >= ratings.rhythm);
            prop_assert!(ratings.combined + 1e-9 >= ratings.stamina);
        }
    }
}
