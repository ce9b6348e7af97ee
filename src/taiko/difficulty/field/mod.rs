use self::amplitude::AmplitudeField;

pub mod amplitude;
pub mod preprocessor;

/// The four alignment fields of a map.
#[derive(Clone, Debug, Default)]
pub struct PatternFields {
    /// Expectations based on the intervals between all consecutive hits.
    pub rhythm: AmplitudeField,
    /// Expectations based on the intervals between consecutive center hits.
    pub center: AmplitudeField,
    /// Expectations based on the intervals between consecutive rim hits.
    pub rim: AmplitudeField,
    /// Expectations based on the intervals between consecutive color changes.
    pub color_change: AmplitudeField,
}
