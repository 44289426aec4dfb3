use crate::{
    model::mods::GameMods,
    osu::{OsuDifficultyAttributes, OsuPerformanceAttributes, OsuScoreState},
};

use super::curve::DifficultyToPerformance;

// * This is being adjusted to keep the final pp value scaled around what it used to be when changing things.
pub const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.09;

pub(super) struct OsuPerformanceCalculator<'mods> {
    attrs: OsuDifficultyAttributes,
    mods: &'mods GameMods,
    acc: f64,
    state: OsuScoreState,
    effective_miss_count: f64,
    using_classic_slider_acc: bool,
    curve: DifficultyToPerformance,
}

impl<'a> OsuPerformanceCalculator<'a> {
    pub const fn new(
        attrs: OsuDifficultyAttributes,
        mods: &'a GameMods,
        acc: f64,
        state: OsuScoreState,
        effective_miss_count: f64,
        using_classic_slider_acc: bool,
        curve: DifficultyToPerformance,
    ) -> Self {
        Self {
            attrs,
            mods,
            acc,
            state,
            effective_miss_count,
            using_classic_slider_acc,
            curve,
        }
    }
}

impl OsuPerformanceCalculator<'_> {
    pub fn calculate(self) -> OsuPerformanceAttributes {
        let total_hits = self.state.total_hits();

        if total_hits == 0 {
            return OsuPerformanceAttributes {
                difficulty: self.attrs,
                ..Default::default()
            };
        }

        let total_hits = f64::from(total_hits);

        let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

        // SO penalty
        if self.mods.so() && total_hits > 0.0 {
            multiplier *= 1.0 - (f64::from(self.attrs.n_spinners) / total_hits).powf(0.85);
        }

        let mut aim_value = self.compute_aim_value(total_hits);
        let speed_value = self.compute_speed_value(total_hits);
        let acc_value = self.compute_accuracy_value();
        let flashlight_value = self.compute_flashlight_value();

        let mut acc_depression = 1.0;

        let streams_nerf = ((self.attrs.aim / self.attrs.speed) * 100.0).round() / 100.0;

        if streams_nerf < 1.09 {
            let acc_factor = (1.0 - self.acc).abs();
            acc_depression = (0.86 - acc_factor).max(0.5);

            if acc_depression > 0.0 {
                aim_value *= acc_depression;
            }
        }

        let pp = (aim_value.powf(1.185)
            + speed_value.powf(0.83 * acc_depression)
            + acc_value.powf(1.14))
        .powf(1.0 / 1.1)
            * multiplier;

        OsuPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_acc: acc_value,
            pp_aim: aim_value,
            pp_flashlight: flashlight_value,
            pp_speed: speed_value,
            effective_miss_count: self.effective_miss_count,
        }
    }

    fn compute_aim_value(&self, total_hits: f64) -> f64 {
        let mut aim_value = (self.curve)(self.attrs.aim);

        // * Longer maps are worth more
        let len_bonus = 0.88
            + 0.4 * (total_hits / 2000.0).min(1.0)
            + f64::from(u8::from(total_hits > 2000.0)) * (total_hits / 2000.0).log10() * 0.5;

        aim_value *= len_bonus;

        // * Penalize misses by assessing # of misses relative to the total # of objects.
        // * Default a 3% reduction for any # of misses.
        if self.effective_miss_count > 0.0 {
            aim_value *= Self::calculate_miss_penalty(self.effective_miss_count, total_hits);
        }

        let ar_factor = if self.attrs.ar > 10.33 {
            0.3 * (self.attrs.ar - 10.33)
        } else if self.attrs.ar < 8.0 {
            0.025 * (8.0 - self.attrs.ar)
        } else {
            0.0
        };

        aim_value *= 1.0 + ar_factor * len_bonus;

        // * We want to give more reward for lower AR when it comes to aim and HD.
        // * This nerfs high AR and buffs lower AR.
        if self.mods.hd() {
            aim_value *= 1.0 + 0.05 * (11.0 - self.attrs.ar);
        }

        // FL bonus
        if self.mods.fl() {
            aim_value *= 1.0 + (0.3 * (total_hits / 200.0)).min(1.0);

            if total_hits > 200.0 {
                aim_value += 0.25 * ((total_hits - 200.0) / 300.0).min(1.0);
            }

            if total_hits > 500.0 {
                aim_value += (total_hits - 500.0) / 1600.0;
            }
        }

        aim_value *= 0.3 + self.acc / 2.0;
        // * It is important to also consider accuracy difficulty when doing that
        aim_value *= 0.98 + self.attrs.od * self.attrs.od / 2500.0;

        aim_value
    }

    fn compute_speed_value(&self, total_hits: f64) -> f64 {
        if self.mods.rx() {
            return 0.0;
        }

        let mut speed_value = (self.curve)(self.attrs.speed);

        // * Longer maps are worth more
        let len_bonus = 0.88
            + 0.4 * (total_hits / 2000.0).min(1.0)
            + f64::from(u8::from(total_hits > 2000.0)) * (total_hits / 2000.0).log10() * 0.5;

        speed_value *= len_bonus;

        // * Penalize misses by assessing # of misses relative to the total # of objects.
        // * Default a 3% reduction for any # of misses.
        if self.effective_miss_count > 0.0 {
            speed_value *= Self::calculate_miss_penalty(self.effective_miss_count, total_hits);
        }

        let ar_factor = if self.attrs.ar > 10.33 {
            0.3 * (self.attrs.ar - 10.33)
        } else if self.attrs.ar < 8.0 {
            0.025 * (8.0 - self.attrs.ar)
        } else {
            0.0
        };

        speed_value *= 1.0 + ar_factor * len_bonus;

        if self.mods.hd() {
            speed_value *= 1.0 + 0.05 * (11.0 - self.attrs.ar);
        }

        // * Scale the speed value with accuracy and OD
        speed_value *= (0.93 + self.attrs.od * self.attrs.od / 750.0)
            * self.acc.powf(14.5 - self.attrs.od.max(8.0) / 2.0);

        // Many 50s on fast content point at mashing.
        if f64::from(self.state.n50) > total_hits / 500.0 {
            speed_value *= f64::from(self.state.n50) - total_hits / 500.0;
        }

        speed_value
    }

    fn compute_accuracy_value(&self) -> f64 {
        // * This percentage only considers HitCircles of any value - in this part
        // * of the calculation we focus on hitting the timing hit window
        let mut amount_hit_objects_with_acc = self.attrs.n_circles;

        if !self.using_classic_slider_acc {
            amount_hit_objects_with_acc += self.attrs.n_sliders;
        }

        let mut better_acc_percentage = if amount_hit_objects_with_acc > 0 {
            f64::from(
                (self.state.n300 as i32
                    - (self.state.total_hits() as i32 - amount_hit_objects_with_acc as i32))
                    * 6
                    + self.state.n100 as i32 * 2
                    + self.state.n50 as i32,
            ) / f64::from(amount_hit_objects_with_acc * 6)
        } else {
            0.0
        };

        // * It is possible to reach a negative accuracy with this formula.
        // * Cap it at zero - zero points.
        if better_acc_percentage < 0.0 {
            better_acc_percentage = 0.0;
        }

        // * Lots of arbitrary values from testing.
        // * Considering to use derivation from perfect accuracy in a probabilistic
        // * manner - assume normal distribution.
        let mut acc_value =
            1.52163_f64.powf(self.attrs.od) * better_acc_percentage.powf(24.0) * 2.83;

        // * Bonus for many hitcircles - it's harder to keep good accuracy up for longer
        acc_value *= (f64::from(amount_hit_objects_with_acc) / 1000.0)
            .powf(0.3)
            .min(1.15);

        if self.mods.hd() {
            acc_value *= 1.08;
        }

        if self.mods.fl() {
            acc_value *= 1.02;
        }

        acc_value
    }

    // Reserved extension point; flashlight is not assessed separately yet.
    const fn compute_flashlight_value(&self) -> f64 {
        0.0
    }

    fn calculate_miss_penalty(miss_count: f64, total_hits: f64) -> f64 {
        0.97 * (1.0 - (miss_count / total_hits).powf(0.5).powf(1.0 + miss_count / 1.5))
    }
}
