use crate::{
    any::difficulty::object::IDifficultyObject,
    taiko::difficulty::object::{TaikoDifficultyObject, TaikoDifficultyObjects},
};

/// Rates how fast each finger has to hit.
pub struct StaminaEvaluator;

impl StaminaEvaluator {
    const BASE_STRAIN: f64 = 0.5;

    /// Color changes closer than this force alternating between two fingers.
    const COLOR_CHANGE_REACH: f64 = 300.0;

    pub fn evaluate_diff_of(curr: &TaikoDifficultyObject, objects: &TaikoDifficultyObjects) -> f64 {
        let Some(two_back) = curr.previous(1, objects) else {
            return Self::BASE_STRAIN;
        };

        let fingers = if Self::near_color_change(curr, objects) {
            2
        } else {
            8
        };

        // * The current finger last hit the same color `fingers` notes ago
        let Some(same_finger) = objects.previous_mono(curr, fingers - 1) else {
            return Self::BASE_STRAIN;
        };

        let bonus = speed_bonus(curr.start_time - same_finger.start_time)
            + 0.5 * speed_bonus(curr.start_time - two_back.start_time);

        Self::BASE_STRAIN + bonus
    }

    fn near_color_change(curr: &TaikoDifficultyObject, objects: &TaikoDifficultyObjects) -> bool {
        let since = objects
            .previous_color_change(curr)
            .map(|change| curr.start_time - change.start_time);

        let until = objects
            .next_color_change(curr)
            .map(|change| change.start_time - curr.start_time);

        [since, until]
            .into_iter()
            .flatten()
            .any(|gap| gap < Self::COLOR_CHANGE_REACH)
    }
}

fn speed_bonus(interval: f64) -> f64 {
    // * Interval is capped at a very small value to prevent infinite values.
    20.0 / interval.max(1.0)
}

#[cfg(test)]
mod tests {
    use crate::model::{beatmap::Beatmap, note::HitType};

    use super::*;

    fn evaluate(hits: impl IntoIterator<Item = (f64, HitType)>) -> Vec<f64> {
        let map = Beatmap::from_hits(hits);
        let objects = TaikoDifficultyObjects::new(&map, 1.0, usize::MAX, 1.0);

        objects
            .iter()
            .map(|h| StaminaEvaluator::evaluate_diff_of(h, &objects))
            .collect()
    }

    #[test]
    fn first_hit_has_base_strain() {
        assert_eq!(evaluate([(0.0, HitType::Center)]), [0.5]);
    }

    #[test]
    fn alternating_hits_use_two_fingers() {
        let values = evaluate((0..6).map(|i| {
            let hit_type = if i % 2 == 0 { HitType::Center } else { HitType::Rim };

            (f64::from(i) * 100.0, hit_type)
        }));

        // Hit 4 looks back to hit 0 with its own color and to hit 2
        let expected = 0.5 + 20.0 / 400.0 + 0.5 * 20.0 / 200.0;
        assert!((values[4] - expected).abs() < 1e-12, "{}", values[4]);
        assert!((values[3] - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn fingers_depend_on_nearby_color_changes() {
        let mut hits: Vec<_> = (0..16)
            .map(|i| (f64::from(i) * 100.0, HitType::Center))
            .collect();
        hits.push((1600.0, HitType::Rim));

        let values = evaluate(hits);

        // Far from any color change so eight fingers share the stream
        assert!((values[7] - 0.5).abs() < f64::EPSILON);
        let spread = 0.5 + 20.0 / 800.0 + 0.5 * 20.0 / 200.0;
        assert!((values[8] - spread).abs() < 1e-12, "{}", values[8]);

        // The rim 200ms later forces alternating hands
        let alternating = 0.5 + 20.0 / 200.0 + 0.5 * 20.0 / 200.0;
        assert!((values[14] - alternating).abs() < 1e-12, "{}", values[14]);
    }

    #[test]
    fn faster_streams_are_more_exhausting() {
        let slow = evaluate((0..16).map(|i| (f64::from(i) * 200.0, HitType::Center)));
        let fast = evaluate((0..16).map(|i| (f64::from(i) * 100.0, HitType::Center)));

        assert!(fast[15] > slow[15]);
    }
}
