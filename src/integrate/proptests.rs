//! Property-based tests for the integrators.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::integrate::{
        IntegrateError, RombergIntegrator, SimpsonIntegrator, UnivariateIntegrator,
    };

    // Strategy for cubic coefficients
    fn cubic() -> impl Strategy<Value = [f64; 4]> {
        [-10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64]
    }

    // Strategy for a non-degenerate interval
    fn interval() -> impl Strategy<Value = (f64, f64)> {
        (-5.0..5.0f64, 0.1..5.0f64).prop_map(|(a, width)| (a, a + width))
    }

    fn horner(c: &[f64; 4], x: f64) -> f64 {
        ((c[3] * x + c[2]) * x + c[1]) * x + c[0]
    }

    fn antiderivative(c: &[f64; 4], x: f64) -> f64 {
        (((c[3] / 4.0 * x + c[2] / 3.0) * x + c[1] / 2.0) * x + c[0]) * x
    }

    proptest! {
        #[test]
        fn romberg_cubic_exact(c in cubic(), (a, b) in interval()) {
            let f = |x: f64| horner(&c, x);
            let exact = antiderivative(&c, b) - antiderivative(&c, a);
            let result = RombergIntegrator::default().integrate(1000, &f, a, b).unwrap();
            prop_assert!((result - exact).abs() <= 1e-9 * (1.0 + exact.abs()));
        }

        #[test]
        fn simpson_cubic_exact(c in cubic(), (a, b) in interval()) {
            let f = |x: f64| horner(&c, x);
            let exact = antiderivative(&c, b) - antiderivative(&c, a);
            let result = SimpsonIntegrator::default().integrate(1000, &f, a, b).unwrap();
            prop_assert!((result - exact).abs() <= 1e-9 * (1.0 + exact.abs()));
        }

        #[test]
        fn romberg_bit_identical(k in 0.5..8.0f64, (a, b) in interval()) {
            let integrator = RombergIntegrator::default();
            let f = |x: f64| (k * x).sin() * (-x * x).exp();
            let first = integrator.integrate(100_000, &f, a, b);
            let second = integrator.integrate(100_000, &f, a, b);
            match (first, second) {
                (Ok(x), Ok(y)) => prop_assert_eq!(x.to_bits(), y.to_bits()),
                (x, y) => prop_assert_eq!(x, y),
            }
        }

        #[test]
        fn romberg_never_exceeds_budget(k in 0.5..40.0f64, max_evaluations in 0usize..300) {
            let integrator = RombergIntegrator::default();
            let f = |x: f64| (k * x).cos();
            match integrator.integrate_with_report(max_evaluations, &f, 0.0, 1.0) {
                Ok(result) => prop_assert!(result.neval <= max_evaluations),
                Err(err) => prop_assert!(
                    matches!(
                        err,
                        IntegrateError::TooManyEvaluations { .. }
                            | IntegrateError::MaxIterationsExceeded { .. }
                    ),
                    "unexpected error {:?}",
                    err
                ),
            }
        }

        #[test]
        fn policy_bounds_validated(min in 0usize..40, max in 0usize..40) {
            let result = RombergIntegrator::with_iterations(min, max);
            if min == 0 || max <= min {
                prop_assert!(
                    matches!(result, Err(IntegrateError::InvalidIterationBound { .. })),
                    "expected InvalidIterationBound error"
                );
            } else if max > 32 {
                prop_assert!(
                    matches!(result, Err(IntegrateError::IterationCeilingExceeded { .. })),
                    "expected IterationCeilingExceeded error"
                );
            } else {
                prop_assert!(result.is_ok());
            }
        }
    }
}
