/// Share of `target` reached by `value`, in percent, capped at 100.
/// A non-positive target yields 0.
pub fn progress_percent(value: f64, target: f64) -> f64 {
    if target <= 0.0 || !target.is_finite() {
        return 0.0;
    }
    (value / target * 100.0).clamp(0.0, 100.0)
}
