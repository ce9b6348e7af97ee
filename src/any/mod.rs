pub use self::difficulty::{Difficulty, DifficultyError, ModsDependent};

#[macro_use]
pub(crate) mod difficulty;
