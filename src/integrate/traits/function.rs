/// A real-valued function of one real variable.
///
/// Integrators assume the function is pure: the same input always yields the
/// same output, independent of evaluation order. Any `Fn(f64) -> f64` closure
/// qualifies.
///
/// ```
/// use quadr::integrate::UnivariateFunction;
///
/// struct Cubic;
///
/// impl UnivariateFunction for Cubic {
///     fn value(&self, x: f64) -> f64 {
///         x * x * x
///     }
/// }
///
/// assert_eq!(Cubic.value(2.0), 8.0);
/// assert_eq!((|x: f64| x + 1.0).value(2.0), 3.0);
/// ```
pub trait UnivariateFunction {
    /// Evaluate the function at `x`.
    fn value(&self, x: f64) -> f64;
}

impl<F> UnivariateFunction for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
