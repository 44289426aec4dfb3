mod attributes;
mod score_state;

pub mod performance;

pub use self::{
    attributes::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    performance::OsuPerformance,
    score_state::OsuScoreState,
};
