//! Step-size schedules for the comparison sweep.

use pricer_models::analytical::AnalyticalError;

/// Increment of the reference linear sweep.
pub const REFERENCE_INCREMENT: f64 = 1e-5;

/// Number of steps in the reference linear sweep.
pub const REFERENCE_COUNT: usize = 499;

/// The sequence of finite-difference steps to evaluate, in increasing order.
///
/// # Examples
/// ```
/// use pricer_risk::comparison::StepSweep;
///
/// let sweep = StepSweep::Linear { increment: 0.1, count: 3 };
/// let steps = sweep.steps();
/// assert_eq!(steps.len(), 3);
/// assert!((steps[2] - 0.3).abs() < 1e-15);
///
/// let log = StepSweep::Logarithmic { min: 1e-8, max: 1e-2, count: 4 };
/// assert!((log.steps()[1] - 1e-6).abs() < 1e-20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepSweep {
    /// h = i·increment for i = 1..=count.
    Linear {
        /// Spacing between steps, also the first step
        increment: f64,
        /// Number of steps
        count: usize,
    },
    /// Geometric spacing from `min` to `max` inclusive.
    Logarithmic {
        /// Smallest step
        min: f64,
        /// Largest step
        max: f64,
        /// Number of steps
        count: usize,
    },
}

impl StepSweep {
    /// The reference sweep: h = i·1e-5, i = 1..=499.
    pub const fn reference() -> Self {
        StepSweep::Linear {
            increment: REFERENCE_INCREMENT,
            count: REFERENCE_COUNT,
        }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        match *self {
            StepSweep::Linear { count, .. } | StepSweep::Logarithmic { count, .. } => count,
        }
    }

    /// Whether the sweep has no steps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that the sweep yields finite, positive, increasing steps.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStep` if a linear increment is not finite
    ///   and positive
    /// - `AnalyticalError::InvalidStepRange` unless `0 < min < max` for a
    ///   geometric sweep of two or more steps (`0 < min` for a single step)
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        match *self {
            StepSweep::Linear { increment, .. } => {
                if !increment.is_finite() || increment <= 0.0 {
                    return Err(AnalyticalError::InvalidStep { step: increment });
                }
            }
            StepSweep::Logarithmic { min, max, count } => {
                let ordered = if count > 1 { min < max } else { min <= max };
                if !min.is_finite() || !max.is_finite() || min <= 0.0 || !ordered {
                    return Err(AnalyticalError::InvalidStepRange { min, max });
                }
            }
        }
        Ok(())
    }

    /// Materialises the steps.
    ///
    /// Linear steps are computed as `i as f64 * increment` rather than by
    /// accumulation, so step `i` does not depend on rounding of earlier ones.
    pub fn steps(&self) -> Vec<f64> {
        match *self {
            StepSweep::Linear { increment, count } => {
                (1..=count).map(|i| i as f64 * increment).collect()
            }
            StepSweep::Logarithmic { min, max, count } => match count {
                0 => Vec::new(),
                1 => vec![min],
                _ => {
                    let log_ratio = (max / min).ln() / (count - 1) as f64;
                    (0..count)
                        .map(|i| {
                            if i == count - 1 {
                                max
                            } else {
                                min * (log_ratio * i as f64).exp()
                            }
                        })
                        .collect()
                }
            },
        }
    }
}

impl Default for StepSweep {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_sweep() {
        let steps = StepSweep::reference().steps();
        assert_eq!(steps.len(), 499);
        assert_eq!(steps[0], 1e-5);
        assert_relative_eq!(steps[498], 499.0 * 1e-5, max_relative = 1e-15);
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_logarithmic_endpoints_and_order() {
        let sweep = StepSweep::Logarithmic {
            min: 1e-9,
            max: 1e-1,
            count: 33,
        };
        let steps = sweep.steps();
        assert_eq!(steps.len(), 33);
        assert_relative_eq!(steps[0], 1e-9, max_relative = 1e-15);
        assert_eq!(steps[32], 1e-1);
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_validate_rejects_bad_log_bounds() {
        let reversed = StepSweep::Logarithmic {
            min: 1e-2,
            max: 1e-6,
            count: 3,
        };
        assert!(matches!(
            reversed.validate(),
            Err(AnalyticalError::InvalidStepRange { .. })
        ));

        let bad_bounds = [
            (0.0, 1e-2),
            (-1e-6, 1e-2),
            (1e-3, 1e-3),
            (f64::NAN, 1e-2),
            (1e-6, f64::INFINITY),
        ];
        for (min, max) in bad_bounds {
            let sweep = StepSweep::Logarithmic { min, max, count: 5 };
            assert!(sweep.validate().is_err(), "accepted [{}, {}]", min, max);
        }

        assert!(StepSweep::Logarithmic {
            min: 1e-9,
            max: 1e-1,
            count: 41
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_validate_linear_increment() {
        assert!(StepSweep::reference().validate().is_ok());
        assert_eq!(
            StepSweep::Linear {
                increment: -1e-5,
                count: 10
            }
            .validate(),
            Err(AnalyticalError::InvalidStep { step: -1e-5 })
        );
    }

    #[test]
    fn test_degenerate_counts() {
        let empty = StepSweep::Linear {
            increment: 1e-3,
            count: 0,
        };
        assert!(empty.is_empty());
        assert!(empty.steps().is_empty());

        let single = StepSweep::Logarithmic {
            min: 1e-4,
            max: 1e-2,
            count: 1,
        };
        assert_eq!(single.steps(), vec![1e-4]);
    }
}
