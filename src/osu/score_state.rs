/// Aggregation for a score's final state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct OsuScoreState {
    /// Maximum combo that the score reached. **Not** the maximum possible
    /// combo of the map.
    pub max_combo: u32,
    /// Amount of successfully hit slider ends.
    ///
    /// Only tracked by osu!lazer.
    pub slider_end_hits: u32,
    /// Amount of combo breaks caused by missed slider ticks or reverses.
    ///
    /// Only tracked by osu!lazer.
    pub slider_breaks: u32,
    /// Amount of 300s.
    pub n300: u32,
    /// Amount of 100s.
    pub n100: u32,
    /// Amount of 50s.
    pub n50: u32,
    /// Amount of misses.
    pub misses: u32,
}

impl OsuScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            slider_end_hits: 0,
            slider_breaks: 0,
            n300: 0,
            n100: 0,
            n50: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up.
    pub const fn total_hits(&self) -> u32 {
        self.n300 + self.n100 + self.n50 + self.misses
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    ///
    /// `max_slider_ends` is only relevant when slider ends count towards
    /// accuracy i.e. for osu!lazer scores. Otherwise, it may be `0`.
    pub fn accuracy(&self, max_slider_ends: u32) -> f64 {
        if self.total_hits() + self.slider_end_hits == 0 {
            return 0.0;
        }

        debug_assert!(
            self.slider_end_hits <= max_slider_ends,
            "`self.slider_end_hits` must not be greater than `max_slider_ends`"
        );

        let numerator =
            300 * self.n300 + 100 * self.n100 + 50 * self.n50 + 150 * self.slider_end_hits;

        let denominator = 300 * self.n300
            + 300 * self.n100
            + 300 * self.n50
            + 300 * self.misses
            + 150 * max_slider_ends;

        f64::from(numerator) / f64::from(denominator)
    }
}

impl Default for OsuScoreState {
    fn default() -> Self {
        Self::new()
    }
}
