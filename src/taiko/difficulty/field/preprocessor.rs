use crate::{
    model::note::HitType,
    taiko::difficulty::{
        config::ImpulseTrainConfig,
        field::{amplitude::AmplitudeField, PatternFields},
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
};

/// Precomputed harmonic impulse train.
///
/// Offsets are in units of the emitting interval so that a single table
/// serves every interval.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpulseTable {
    impulses: Box<[(f64, f64)]>,
}

impl ImpulseTable {
    pub fn new(config: &ImpulseTrainConfig) -> Self {
        let mut table = AmplitudeField::new();

        for harmonic in 0..config.harmonics {
            // * Each harmonic subdivides the interval further
            let harmonic_interval = 0.5_f64.powi(harmonic as i32);
            let harmonic_amplitude = config.harmonic_decay_base.powi(harmonic as i32);

            for cycle in 0..config.cycles * (harmonic + 1) {
                let offset = harmonic_interval * f64::from(cycle);
                let amplitude = harmonic_amplitude * config.cycle_decay_base.powf(offset)
                    / f64::from(config.cycles);

                table.add_impulse(offset, amplitude);
            }
        }

        Self {
            impulses: table.into_nodes().into_boxed_slice(),
        }
    }

    /// Adds the impulse train for a note at `time` that followed its
    /// predecessor after `interval`.
    pub fn emit(&self, field: &mut AmplitudeField, time: f64, interval: f64) {
        for &(offset, amplitude) in self.impulses.iter() {
            field.add_impulse(time + offset * interval, amplitude);
        }
    }

    pub fn impulses(&self) -> &[(f64, f64)] {
        &self.impulses
    }
}

/// Fills the [`PatternFields`] of a map.
#[derive(Clone, Debug)]
pub struct PatternFieldPreprocessor {
    table: ImpulseTable,
}

impl PatternFieldPreprocessor {
    pub const fn new(table: ImpulseTable) -> Self {
        Self { table }
    }

    pub fn process(&self, objects: &TaikoDifficultyObjects) -> PatternFields {
        let mut fields = PatternFields::default();

        for h in objects.iter().filter(|h| h.idx > 0 && h.delta_time > 0.0) {
            self.table.emit(&mut fields.rhythm, h.start_time, h.delta_time);
        }

        self.emit_pairs(&mut fields.center, objects.monos(HitType::Center), objects);
        self.emit_pairs(&mut fields.rim, objects.monos(HitType::Rim), objects);
        self.emit_pairs(&mut fields.color_change, objects.color_changes(), objects);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rhythm = fields.rhythm.len(),
            center = fields.center.len(),
            rim = fields.rim.len(),
            color_change = fields.color_change.len(),
            "Filled pattern fields",
        );

        fields
    }

    /// Emits for every consecutive pair of the given objects.
    fn emit_pairs(
        &self,
        field: &mut AmplitudeField,
        indices: &[usize],
        objects: &TaikoDifficultyObjects,
    ) {
        for pair in indices.windows(2) {
            let prev: &TaikoDifficultyObject = &objects[pair[0]];
            let curr: &TaikoDifficultyObject = &objects[pair[1]];
            let interval = curr.start_time - prev.start_time;

            if interval > 0.0 {
                self.table.emit(field, curr.start_time, interval);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::beatmap::Beatmap;

    use super::*;

    fn table() -> ImpulseTable {
        ImpulseTable::new(&ImpulseTrainConfig::default())
    }

    #[test]
    fn table_starts_with_merged_origin() {
        let table = table();
        let (offset, amplitude) = table.impulses()[0];

        // * Every harmonic contributes its first cycle at offset zero
        let expected = (0..4).map(|h| 0.5_f64.powi(h) / 6.0).sum::<f64>();

        assert!(offset.abs() < f64::EPSILON);
        assert!((amplitude - expected).abs() < 1e-12);
    }

    #[test]
    fn table_is_sorted_and_unique() {
        let table = table();

        assert!(table
            .impulses()
            .windows(2)
            .all(|pair| pair[0].0 < pair[1].0));

        // * The first subdivision reaches the furthest
        let last = table.impulses().last().map(|(offset, _)| *offset);
        assert_eq!(last, Some(5.5));
    }

    #[test]
    fn decay_along_base_harmonic() {
        let config = ImpulseTrainConfig {
            harmonics: 1,
            ..ImpulseTrainConfig::default()
        };
        let table = ImpulseTable::new(&config);

        let amplitudes: Vec<_> = table.impulses().iter().map(|(_, a)| *a * 6.0).collect();

        assert_eq!(amplitudes.len(), 6);
        assert!(amplitudes
            .iter()
            .enumerate()
            .all(|(i, a)| (a - 0.5_f64.powi(i as i32)).abs() < 1e-12));
    }

    #[test]
    fn emitting_scales_offsets() {
        let config = ImpulseTrainConfig {
            harmonics: 1,
            cycles: 2,
            ..ImpulseTrainConfig::default()
        };

        let mut field = AmplitudeField::new();
        ImpulseTable::new(&config).emit(&mut field, 1000.0, 250.0);

        assert_eq!(field.nodes(), [(1000.0, 0.5), (1250.0, 0.25)]);
    }

    #[test]
    fn fields_of_alternating_hits() {
        let map = Beatmap::from_hits(
            [HitType::Center, HitType::Rim, HitType::Center, HitType::Rim]
                .into_iter()
                .enumerate()
                .map(|(i, hit_type)| (i as f64 * 100.0, hit_type)),
        );
        let objects = TaikoDifficultyObjects::new(&map, 1.0, usize::MAX, 1.0);

        let fields = PatternFieldPreprocessor::new(table()).process(&objects);

        // * The rhythm field expects the next hit 100ms later
        assert!(fields.rhythm.amplitude_at(400.0, 1.0) > 0.0);
        // * Same colors repeat every 200ms
        assert!(fields.center.amplitude_at(400.0, 1.0) > 0.0);
        assert!(fields.center.amplitude_at(300.0, 1.0) > 0.0, "half-interval harmonic");
        assert!(fields.rim.amplitude_at(500.0, 1.0) > 0.0);
        assert!(fields.color_change.amplitude_at(400.0, 1.0) > 0.0);
    }

    #[test]
    fn first_hit_is_no_color_change() {
        let map = Beatmap::from_hits(
            [HitType::Center, HitType::Center, HitType::Center, HitType::Rim]
                .into_iter()
                .enumerate()
                .map(|(i, hit_type)| (i as f64 * 100.0, hit_type)),
        );
        let objects = TaikoDifficultyObjects::new(&map, 1.0, usize::MAX, 1.0);

        let fields = PatternFieldPreprocessor::new(table()).process(&objects);

        assert_eq!(objects.color_changes(), [3]);
        assert!(fields.color_change.is_empty());
        assert!(!fields.rhythm.is_empty());
    }

    #[test]
    fn no_fields_without_intervals() {
        let map = Beatmap::from_hits([(0.0, HitType::Center)]);
        let objects = TaikoDifficultyObjects::new(&map, 1.0, usize::MAX, 1.0);

        let fields = PatternFieldPreprocessor::new(table()).process(&objects);

        assert!(fields.rhythm.is_empty());
        assert!(fields.center.is_empty());
        assert!(fields.rim.is_empty());
        assert!(fields.color_change.is_empty());
    }
}
