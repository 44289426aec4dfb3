/// A difficulty to performance curve.
///
/// The function must be monotonically increasing and return a non-negative
/// value; its exact shape is owned by whoever produced the difficulty
/// attributes.
pub type DifficultyToPerformance = fn(f64) -> f64;

/// The standard difficulty to performance curve.
///
/// Used by [`OsuPerformance`] unless a different curve is specified through
/// [`OsuPerformance::curve`].
///
/// [`OsuPerformance`]: super::OsuPerformance
/// [`OsuPerformance::curve`]: super::OsuPerformance::curve
pub fn difficulty_to_performance(difficulty: f64) -> f64 {
    f64::powf(5.0 * f64::max(1.0, difficulty / 0.0675) - 4.0, 3.0) / 100_000.0
}
