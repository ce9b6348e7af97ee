use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

pub use rosu_map::section::general::GameMode;

/// Error type when a [`rosu_map::Beatmap`] cannot be turned into a
/// [`Beatmap`].
///
/// [`Beatmap`]: crate::model::beatmap::Beatmap
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// Only osu!taiko beatmaps are supported; converts are not.
    Convert { from: GameMode },
}

impl StdError for ConvertError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        None
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Convert { from } => {
                write!(f, "cannot convert from {from:?} to {:?}", GameMode::Taiko)
            }
        }
    }
}
