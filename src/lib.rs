//! Library to calculate performance attributes for finished osu!standard
//! plays.
//!
//! ## Description
//!
//! `replay-pp` turns a play's final hitresults, combo, and active mods
//! together with a beatmap's pre-computed difficulty attributes into a
//! performance point value and its per-skill breakdown (aim, speed,
//! accuracy, flashlight).
//!
//! Difficulty attributes are consumed as opaque inputs; computing them from
//! a beatmap's hitobjects is a separate analysis pass and not part of this
//! crate.
//!
//! ## Usage
//!
//! ```
//! use replay_pp::osu::{OsuDifficultyAttributes, OsuPerformance};
//!
//! // Attributes as produced by a difficulty calculation pass.
//! let attrs = OsuDifficultyAttributes {
//!     aim: 2.98,
//!     speed: 2.41,
//!     ar: 9.3,
//!     od: 8.8,
//!     n_circles: 307,
//!     n_sliders: 293,
//!     n_spinners: 1,
//!     max_combo: 909,
//!     ..Default::default()
//! };
//!
//! let perf = OsuPerformance::new(attrs)
//!     .mods(8) // HD
//!     .combo(789)
//!     .misses(2)
//!     .calculate();
//!
//! println!("pp: {}", perf.pp());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `serde` | (De)serialization of attribute and score state types | [`serde`]
//! | `tracing` | Each calculation emits a trace event with the resolved score state | [`tracing`]
//!
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::model::mods::GameMods;

/// Types shared by all calculations.
pub mod model;

/// Types for osu!standard calculations.
pub mod osu;
