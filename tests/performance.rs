use approx::assert_relative_eq;
use replay_pp::osu::{OsuDifficultyAttributes, OsuPerformance};

const HD: u32 = 8;
const RX: u32 = 128;
const FL: u32 = 1024;
const SO: u32 = 4096;

fn symmetric_attrs() -> OsuDifficultyAttributes {
    OsuDifficultyAttributes {
        aim: 5.0,
        speed: 5.0,
        flashlight: 0.0,
        ar: 9.0,
        od: 8.0,
        n_circles: 100,
        n_sliders: 0,
        n_spinners: 0,
        max_combo: 100,
    }
}

fn slider_attrs() -> OsuDifficultyAttributes {
    OsuDifficultyAttributes {
        n_circles: 100,
        n_sliders: 50,
        max_combo: 200,
        ..symmetric_attrs()
    }
}

#[test]
fn perfect_play() {
    let perf = OsuPerformance::new(symmetric_attrs()).calculate();

    assert_eq!(perf.effective_miss_count, 0.0);

    for value in [
        perf.pp,
        perf.pp_aim,
        perf.pp_speed,
        perf.pp_acc,
        perf.pp_flashlight,
    ] {
        assert!(value.is_finite());
        assert!(value >= 0.0);
    }

    // Flashlight is not assessed separately.
    assert_eq!(perf.pp_flashlight, 0.0);

    // 100 perfect circles at OD 8: the better accuracy percentage is 1 so
    // only the OD base, the global factor, and the length scaling remain.
    let expected = 1.52163_f64.powf(8.0) * 2.83 * 0.1_f64.powf(0.3);
    assert_relative_eq!(perf.pp_acc, expected, max_relative = 1e-12);
}

#[test]
fn misses_lower_aim_and_speed() {
    let perfect = OsuPerformance::new(symmetric_attrs()).calculate();

    let with_misses = OsuPerformance::new(symmetric_attrs())
        .n300(95)
        .misses(5)
        .calculate();

    assert_eq!(with_misses.effective_miss_count, 5.0);
    assert!(with_misses.pp_aim < perfect.pp_aim);
    assert!(with_misses.pp_speed < perfect.pp_speed);
    assert!(with_misses.pp < perfect.pp);
}

#[test]
fn combo_shortfall_counts_as_misses() {
    // Classic accounting: the full combo threshold assumes 10% of slider
    // tails were dropped without breaking combo.
    let perf = OsuPerformance::new(slider_attrs())
        .combo(180)
        .n300(145)
        .n100(5)
        .calculate();

    assert_relative_eq!(
        perf.effective_miss_count,
        195.0 / 180.0,
        max_relative = 1e-12
    );
}

#[test]
fn lazer_accounting_uses_dropped_ends_and_breaks() {
    let perf = OsuPerformance::new(slider_attrs())
        .lazer(true)
        .combo(150)
        .n_slider_ends(40)
        .n_slider_breaks(2)
        .calculate();

    // threshold = 200 combo - 10 dropped slider ends
    assert_relative_eq!(
        perf.effective_miss_count,
        190.0 / 150.0,
        max_relative = 1e-12
    );
}

#[test]
fn relax_zeroes_speed() {
    let attrs = OsuDifficultyAttributes {
        speed: 8.0,
        ..symmetric_attrs()
    };

    let perf = OsuPerformance::new(attrs).mods(RX).calculate();

    assert_eq!(perf.pp_speed, 0.0);
    assert!(perf.pp.is_finite());
    assert!(perf.pp > 0.0);
}

#[test]
fn empty_play_is_worth_nothing() {
    let perf = OsuPerformance::new(OsuDifficultyAttributes::default()).calculate();

    assert_eq!(perf.pp, 0.0);
    assert_eq!(perf.pp_aim, 0.0);
    assert_eq!(perf.pp_speed, 0.0);
    assert_eq!(perf.pp_acc, 0.0);
    assert_eq!(perf.pp_flashlight, 0.0);
    assert_eq!(perf.effective_miss_count, 0.0);
}

#[test]
fn accuracy_value_increases_with_accuracy() {
    let clean = OsuPerformance::new(symmetric_attrs()).calculate();

    let sloppy = OsuPerformance::new(symmetric_attrs())
        .n300(90)
        .n100(10)
        .calculate();

    assert!(sloppy.pp_acc < clean.pp_acc);
}

#[test]
fn identical_inputs_yield_identical_results() {
    let calc = OsuPerformance::new(slider_attrs())
        .mods(HD)
        .combo(180)
        .n300(140)
        .n100(8)
        .n50(1)
        .misses(1);

    assert_eq!(calc.clone().calculate(), calc.calculate());
}

#[test]
fn hidden_scales_aim_and_accuracy() {
    let nomod = OsuPerformance::new(symmetric_attrs()).calculate();
    let hidden = OsuPerformance::new(symmetric_attrs()).mods(HD).calculate();

    // 1 + 0.05 * (11 - AR) at AR 9
    assert_relative_eq!(hidden.pp_aim / nomod.pp_aim, 1.1, max_relative = 1e-12);
    assert_relative_eq!(hidden.pp_acc / nomod.pp_acc, 1.08, max_relative = 1e-12);
}

#[test]
fn speed_dominant_maps_depress_aim() {
    // aim / speed rounds to 1.0 which is below the 1.09 cutoff.
    let nerfed = OsuPerformance::new(symmetric_attrs()).calculate();

    let aim_dominant = OsuDifficultyAttributes {
        speed: 4.0,
        ..symmetric_attrs()
    };

    let untouched = OsuPerformance::new(aim_dominant).calculate();

    // On an accuracy 1.0 play the depression factor is exactly 0.86; the
    // speed difficulty itself does not enter the aim value.
    assert_relative_eq!(
        nerfed.pp_aim / untouched.pp_aim,
        0.86,
        max_relative = 1e-12
    );
}

#[test]
fn many_fifties_scale_the_speed_value() {
    // Pin the accuracy so only the raw 50 count differs between the plays.
    let few = OsuPerformance::new(symmetric_attrs())
        .accuracy(95.0)
        .calculate();

    let many = OsuPerformance::new(symmetric_attrs())
        .accuracy(95.0)
        .n300(97)
        .n50(3)
        .calculate();

    // 100 objects put the threshold at 0.2, so the factor is 3 - 0.2.
    assert_relative_eq!(many.pp_speed / few.pp_speed, 2.8, max_relative = 1e-12);
    // The 50 count does not enter the aim value.
    assert_relative_eq!(many.pp_aim, few.pp_aim, max_relative = 1e-12);
}

#[test]
fn flashlight_bonuses_apply_on_long_maps() {
    // Aim dominant so the aim value is not depressed on top of the bonus.
    let attrs = OsuDifficultyAttributes {
        speed: 4.0,
        n_circles: 600,
        max_combo: 600,
        ..symmetric_attrs()
    };

    let nomod = OsuPerformance::new(attrs.clone()).calculate();
    let with_fl = OsuPerformance::new(attrs).mods(FL).calculate();

    // The additive ramps are applied before the accuracy and OD scaling.
    let tail = (0.3 + 1.0 / 2.0) * (0.98 + 8.0 * 8.0 / 2500.0);
    let base = nomod.pp_aim / tail;

    // 600 hits cap the multiplicative bonus at 1 + 0.9 and fire both
    // additive ramps.
    let expected = (base * 1.9 + 0.25 + 100.0 / 1600.0) * tail;

    assert_relative_eq!(with_fl.pp_aim, expected, max_relative = 1e-12);
    assert_relative_eq!(with_fl.pp_acc / nomod.pp_acc, 1.02, max_relative = 1e-12);
}

#[test]
fn long_plays_gain_logarithmic_length_bonus() {
    let at_cap = OsuPerformance::new(OsuDifficultyAttributes {
        n_circles: 2000,
        max_combo: 2000,
        ..symmetric_attrs()
    })
    .calculate();

    let past_cap = OsuPerformance::new(OsuDifficultyAttributes {
        n_circles: 2500,
        max_combo: 2500,
        ..symmetric_attrs()
    })
    .calculate();

    // The linear part is saturated at 1.28; only the logarithmic term grows.
    let expected = (1.28 + 1.25_f64.log10() * 0.5) / 1.28;

    assert_relative_eq!(past_cap.pp_aim / at_cap.pp_aim, expected, max_relative = 1e-12);
    assert_relative_eq!(
        past_cap.pp_speed / at_cap.pp_speed,
        expected,
        max_relative = 1e-12
    );
}

#[test]
fn spun_out_penalizes_spinner_heavy_maps() {
    let attrs = OsuDifficultyAttributes {
        n_circles: 99,
        n_spinners: 1,
        ..symmetric_attrs()
    };

    let nomod = OsuPerformance::new(attrs.clone()).calculate();
    let spun_out = OsuPerformance::new(attrs).mods(SO).calculate();

    assert_relative_eq!(
        spun_out.pp / nomod.pp,
        1.0 - 0.01_f64.powf(0.85),
        max_relative = 1e-12
    );
}

#[test]
fn custom_curve_is_used() {
    let zeroed = OsuPerformance::new(symmetric_attrs())
        .curve(|_| 0.0)
        .calculate();

    assert_eq!(zeroed.pp_aim, 0.0);
    assert_eq!(zeroed.pp_speed, 0.0);
    // Accuracy does not go through the curve.
    assert!(zeroed.pp_acc > 0.0);
}
