//! Library to calculate difficulty attributes for osu!taiko beatmaps based on
//! the rhythmic patterns of their notes.
//!
//! ## Description
//!
//! A map's notes are turned into a sequence of difficulty objects which are
//! then analysed in two independent ways:
//!
//! - Rhythm alignment fields: every note emits a decaying train of harmonic
//!   impulses at the times where the next notes are *expected*. Notes that land
//!   far off those expectations are considered hard to read.
//! - A pattern hierarchy: notes are grouped into evenly spaced groups, groups of
//!   such groups, single-colored streaks, and repetitions thereof. Changes
//!   between the intervals of consecutive groups are rated.
//!
//! Both, together with a stamina skill, are folded into strain peaks which are
//! combined into a final star rating.
//!
//! ## Usage
//!
//! ```
//! use taiko_pattern::{Beatmap, Difficulty, model::note::HitType};
//!
//! let notes = (0..64).map(|i| {
//!     let hit_type = if i % 3 == 0 { HitType::Rim } else { HitType::Center };
//!
//!     (f64::from(i) * 150.0, hit_type)
//! });
//!
//! let map = Beatmap::from_hits(notes).od(7.0);
//!
//! let attrs = Difficulty::new()
//!     .clock_rate(1.5)
//!     .calculate(&map)
//!     .unwrap();
//!
//! assert!(attrs.stars > 0.0);
//! assert_eq!(attrs.max_combo, 64);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features enabled |
//! | `tracing` | Any error encountered during beatmap decoding as well as the intermediate results of a calculation will be logged through `tracing::debug`. If this feature is not enabled, nothing will be logged. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic, missing_debug_implementations)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[macro_use]
mod any;

/// Types for the osu!taiko pattern difficulty calculation.
pub mod taiko;

/// Types used in and around this crate.
pub mod model;

mod util;

#[doc(inline)]
pub use self::{
    any::{Difficulty, DifficultyError, ModsDependent},
    model::{beatmap::Beatmap, mods::GameMods},
    taiko::{TaikoDifficultyAttributes, TaikoStrains},
};
