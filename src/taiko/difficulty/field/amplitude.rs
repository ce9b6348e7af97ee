/// Sparse time-keyed density of accumulated amplitudes.
///
/// Keys are unique and sorted; adding an impulse at an existing time adds to
/// the stored amplitude.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AmplitudeField {
    nodes: Vec<(f64, f64)>,
}

impl AmplitudeField {
    /// Query windows span this many standard deviations to each side.
    const WINDOW_DEVIATIONS: f64 = 3.0;

    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn add_impulse(&mut self, time: f64, amplitude: f64) {
        match self
            .nodes
            .binary_search_by(|(probe, _)| probe.total_cmp(&time))
        {
            Ok(idx) => self.nodes[idx].1 += amplitude,
            Err(idx) => self.nodes.insert(idx, (time, amplitude)),
        }
    }

    /// Sum of all amplitudes weighted by a gaussian around `time`.
    ///
    /// Nodes further than three standard deviations away are ignored. A
    /// non-positive deviation only considers a node exactly at `time`.
    pub fn amplitude_at(&self, time: f64, std_dev: f64) -> f64 {
        if std_dev.is_nan() || std_dev <= 0.0 {
            return self
                .nodes
                .binary_search_by(|(probe, _)| probe.total_cmp(&time))
                .map_or(0.0, |idx| self.nodes[idx].1);
        }

        let window = Self::WINDOW_DEVIATIONS * std_dev;
        let start = self.nodes.partition_point(|(probe, _)| *probe < time - window);

        self.nodes[start..]
            .iter()
            .take_while(|(probe, _)| *probe <= time + window)
            .map(|(probe, amplitude)| amplitude * gaussian(time - probe, std_dev))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[(f64, f64)] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<(f64, f64)> {
        self.nodes
    }
}

/// Unnormalized gaussian; `1.0` at `x = 0`.
pub fn gaussian(x: f64, std_dev: f64) -> f64 {
    f64::exp(-(x / std_dev).powi(2) / 2.0)
}
