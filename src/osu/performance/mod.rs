use crate::model::mods::GameMods;

use self::calculator::OsuPerformanceCalculator;

use super::{
    attributes::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    score_state::OsuScoreState,
};

mod calculator;
mod curve;

pub use self::curve::{difficulty_to_performance, DifficultyToPerformance};

/// Performance calculator on osu!standard plays.
///
/// Constructed from previously calculated difficulty attributes
/// ([`OsuDifficultyAttributes`] or [`OsuPerformanceAttributes`]). Make sure
/// they have been calculated for the same map and mods as the score.
/// Otherwise, the final attributes will be incorrect.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct OsuPerformance {
    pub(crate) attrs: OsuDifficultyAttributes,
    pub(crate) mods: GameMods,
    pub(crate) acc: Option<f64>,
    pub(crate) combo: Option<u32>,
    pub(crate) slider_end_hits: Option<u32>,
    pub(crate) slider_breaks: Option<u32>,
    pub(crate) n300: Option<u32>,
    pub(crate) n100: Option<u32>,
    pub(crate) n50: Option<u32>,
    pub(crate) misses: Option<u32>,
    pub(crate) lazer: Option<bool>,
    pub(crate) curve: DifficultyToPerformance,
}

impl OsuPerformance {
    /// Create a new performance calculator for osu! plays.
    pub fn new(attrs: impl Into<Self>) -> Self {
        attrs.into()
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.mods = mods.into();

        self
    }

    /// Specify the max combo of the play.
    ///
    /// Defaults to the map's maximum combo i.e. a full combo.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Whether the score originates from osu!lazer or osu!stable.
    ///
    /// Defaults to stable.
    ///
    /// This decides the slider accuracy convention: lazer scores count
    /// slider heads towards accuracy whereas stable scores do not, unless
    /// the `Classic` mod overrides it.
    pub const fn lazer(mut self, lazer: bool) -> Self {
        self.lazer = Some(lazer);

        self
    }

    /// Specify the amount of hit slider ends.
    ///
    /// Only relevant for osu!lazer scores. Defaults to all slider ends hit.
    pub const fn n_slider_ends(mut self, n_slider_ends: u32) -> Self {
        self.slider_end_hits = Some(n_slider_ends);

        self
    }

    /// Specify the amount of slider breaks.
    ///
    /// Only relevant for osu!lazer scores.
    pub const fn n_slider_breaks(mut self, n_slider_breaks: u32) -> Self {
        self.slider_breaks = Some(n_slider_breaks);

        self
    }

    /// Specify the amount of 300s of a play.
    ///
    /// Defaults to everything that is not a 100, 50, or miss.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 100s of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of 50s of a play.
    pub const fn n50(mut self, n50: u32) -> Self {
        self.n50 = Some(n50);

        self
    }

    /// Specify the amount of misses of a play.
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = Some(n_misses);

        self
    }

    /// Specify the accuracy of a play between `0.0` and `100.0`.
    ///
    /// If unspecified, the accuracy is derived from the hitresults.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc.clamp(0.0, 100.0) / 100.0);

        self
    }

    /// Override the difficulty to performance curve.
    ///
    /// Defaults to [`difficulty_to_performance`].
    pub const fn curve(mut self, curve: DifficultyToPerformance) -> Self {
        self.curve = curve;

        self
    }

    /// Provide parameters through an [`OsuScoreState`].
    #[allow(clippy::needless_pass_by_value)]
    pub const fn state(mut self, state: OsuScoreState) -> Self {
        let OsuScoreState {
            max_combo,
            slider_end_hits,
            slider_breaks,
            n300,
            n100,
            n50,
            misses,
        } = state;

        self.combo = Some(max_combo);
        self.slider_end_hits = Some(slider_end_hits);
        self.slider_breaks = Some(slider_breaks);
        self.n300 = Some(n300);
        self.n100 = Some(n100);
        self.n50 = Some(n50);
        self.misses = Some(misses);

        self
    }

    /// Create the [`OsuScoreState`] that will be used for performance
    /// calculation.
    ///
    /// Unspecified fields are filled in from the difficulty attributes: the
    /// combo defaults to a full combo, 300s to everything that is not
    /// otherwise accounted for, and slider ends to all of them being hit.
    pub fn generate_state(&self) -> OsuScoreState {
        let misses = self.misses.unwrap_or(0);
        let n100 = self.n100.unwrap_or(0);
        let n50 = self.n50.unwrap_or(0);

        let n300 = self
            .n300
            .unwrap_or_else(|| self.attrs.n_objects().saturating_sub(n100 + n50 + misses));

        let lazer = self.lazer.unwrap_or(false);

        // Stable neither tracks slider ends nor slider breaks.
        let (slider_end_hits, slider_breaks) = if lazer {
            let slider_end_hits = self
                .slider_end_hits
                .map_or(self.attrs.n_sliders, |n| n.min(self.attrs.n_sliders));

            (slider_end_hits, self.slider_breaks.unwrap_or(0))
        } else {
            (0, 0)
        };

        let max_combo = self.combo.unwrap_or_else(|| self.attrs.max_combo.max(1));

        OsuScoreState {
            max_combo,
            slider_end_hits,
            slider_breaks,
            n300,
            n100,
            n50,
            misses,
        }
    }

    /// Calculate all performance related values.
    pub fn calculate(self) -> OsuPerformanceAttributes {
        let state = self.generate_state();

        let mut attrs = self.attrs;
        attrs.max_combo = attrs.max_combo.max(1);

        let lazer = self.lazer.unwrap_or(false);
        let using_classic_slider_acc = self.mods.no_slider_head_acc(lazer);

        let effective_miss_count =
            calculate_effective_misses(&attrs, &state, using_classic_slider_acc);

        let max_slider_ends = if lazer { attrs.n_sliders } else { 0 };

        let acc = self
            .acc
            .unwrap_or_else(|| state.accuracy(max_slider_ends));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            effective_miss_count,
            using_classic_slider_acc,
            acc,
            "resolved score state"
        );

        OsuPerformanceCalculator::new(
            attrs,
            &self.mods,
            acc,
            state,
            effective_miss_count,
            using_classic_slider_acc,
            self.curve,
        )
        .calculate()
    }
}

impl From<OsuDifficultyAttributes> for OsuPerformance {
    fn from(attrs: OsuDifficultyAttributes) -> Self {
        Self {
            attrs,
            mods: GameMods::DEFAULT,
            acc: None,
            combo: None,
            slider_end_hits: None,
            slider_breaks: None,
            n300: None,
            n100: None,
            n50: None,
            misses: None,
            lazer: None,
            curve: difficulty_to_performance,
        }
    }
}

impl From<OsuPerformanceAttributes> for OsuPerformance {
    fn from(attrs: OsuPerformanceAttributes) -> Self {
        attrs.difficulty.into()
    }
}

fn calculate_effective_misses(
    attrs: &OsuDifficultyAttributes,
    state: &OsuScoreState,
    using_classic_slider_acc: bool,
) -> f64 {
    // * Guess the number of misses + slider breaks from combo
    let mut combo_based_miss_count = 0.0;

    if attrs.n_sliders > 0 {
        if using_classic_slider_acc {
            // * Consider that full combo is maximum combo minus dropped slider tails since
            // * they don't contribute to combo but also don't break it.
            // * In classic scores we can't know the amount of dropped sliders so we
            // * estimate to 10% of all sliders on the map.
            let full_combo_threshold =
                f64::from(attrs.max_combo) - 0.1 * f64::from(attrs.n_sliders);

            if f64::from(state.max_combo) < full_combo_threshold {
                combo_based_miss_count =
                    full_combo_threshold / f64::from(state.max_combo).max(1.0);
            }

            // * Clamp miss count to maximum amount of possible breaks
            combo_based_miss_count =
                combo_based_miss_count.min(f64::from(total_imperfect_hits(state)));
        } else {
            let full_combo_threshold =
                f64::from(attrs.max_combo) - f64::from(n_slider_ends_dropped(attrs, state));

            if f64::from(state.max_combo) < full_combo_threshold {
                combo_based_miss_count =
                    full_combo_threshold / f64::from(state.max_combo).max(1.0);
            }

            // * Combine regular misses with tick misses since tick misses break combo as well
            combo_based_miss_count =
                combo_based_miss_count.min(f64::from(state.slider_breaks + state.misses));
        }
    }

    combo_based_miss_count.max(f64::from(state.misses))
}

const fn n_slider_ends_dropped(attrs: &OsuDifficultyAttributes, state: &OsuScoreState) -> u32 {
    attrs.n_sliders.saturating_sub(state.slider_end_hits)
}

const fn total_imperfect_hits(state: &OsuScoreState) -> u32 {
    state.n100 + state.n50 + state.misses
}
