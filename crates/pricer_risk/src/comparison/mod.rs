//! Finite-difference vs dual-number comparison sweep.
//!
//! For every step h of a [`StepSweep`], the harness estimates Delta, Vega and
//! Rho by central differences and records the absolute errors of both the
//! finite-difference and the dual-number estimates against the closed forms.
//!
//! The closed-form and dual Greeks do not depend on h and are computed once
//! per run. A domain fault at one h invalidates only that record.

mod record;
mod sweep;

pub use record::{ComparisonRecord, COLUMN_COUNT};
pub use sweep::{StepSweep, REFERENCE_COUNT, REFERENCE_INCREMENT};

use pricer_models::analytical::{closed_form_greeks, AnalyticalError};
use pricer_models::market::MarketParams;
use pricer_models::sensitivity::{central_difference_greeks, dual_greeks, Greek, Greeks};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Minimum sweep length before the parallel mode fans out.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Runs the comparison for one set of market parameters.
///
/// Holds no state between runs; `run` is a pure function of the parameters
/// and the sweep.
///
/// # Examples
/// ```
/// use pricer_risk::comparison::{ComparisonHarness, StepSweep};
/// use pricer_models::market::MarketParams;
///
/// let harness = ComparisonHarness::new(MarketParams::reference());
/// let report = harness
///     .run(&StepSweep::Linear { increment: 1e-3, count: 5 })
///     .unwrap();
///
/// assert_eq!(report.records().len(), 5);
/// assert_eq!(report.invalid_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonHarness {
    params: MarketParams,
    parallel: bool,
}

impl ComparisonHarness {
    /// Creates a sequential harness.
    pub fn new(params: MarketParams) -> Self {
        Self {
            params,
            parallel: false,
        }
    }

    /// Enables or disables evaluation of steps on the rayon pool.
    ///
    /// Records come back in sweep order either way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the market parameters.
    pub fn params(&self) -> &MarketParams {
        &self.params
    }

    /// Whether the parallel mode is on.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Runs the sweep.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStep` if any step is not finite and positive
    /// - `AnalyticalError::InvalidStepRange` if a geometric sweep's bounds are
    ///   not `0 < min < max`
    /// - `AnalyticalError::Domain` if the reference Greeks cannot be computed
    ///
    /// Domain faults at an individual step do not fail the run; that record is
    /// marked invalid.
    pub fn run(&self, sweep: &StepSweep) -> Result<ComparisonReport, AnalyticalError> {
        sweep.validate()?;
        let steps = sweep.steps();
        if let Some(&step) = steps.iter().find(|h| !h.is_finite() || **h <= 0.0) {
            return Err(AnalyticalError::InvalidStep { step });
        }

        let analytical = closed_form_greeks(&self.params)?;
        let dual = dual_greeks(&self.params)?;

        let parallel = self.parallel && steps.len() >= PARALLEL_THRESHOLD;
        debug!(
            steps = steps.len(),
            parallel,
            "running comparison sweep"
        );

        let records = if parallel {
            steps
                .par_iter()
                .map(|&h| self.record_at(h, &analytical, &dual))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            steps
                .iter()
                .map(|&h| self.record_at(h, &analytical, &dual))
                .collect::<Result<Vec<_>, _>>()?
        };

        let report = ComparisonReport {
            records,
            analytical,
            dual,
        };
        debug!(invalid = report.invalid_count(), "comparison sweep finished");

        Ok(report)
    }

    fn record_at(
        &self,
        step: f64,
        analytical: &Greeks,
        dual: &Greeks,
    ) -> Result<ComparisonRecord, AnalyticalError> {
        match central_difference_greeks(&self.params, step) {
            Ok(fd) => Ok(ComparisonRecord::new(step, &fd, dual, analytical)),
            Err(AnalyticalError::Domain(err)) => {
                warn!(step, error = %err, "domain fault, record marked invalid");
                Ok(ComparisonRecord::invalid(step))
            }
            Err(err) => Err(err),
        }
    }
}

/// Result of one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    records: Vec<ComparisonRecord>,
    analytical: Greeks,
    dual: Greeks,
}

impl ComparisonReport {
    /// Records in increasing-h order.
    pub fn records(&self) -> &[ComparisonRecord] {
        &self.records
    }

    /// Number of records marked invalid.
    pub fn invalid_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_valid()).count()
    }

    /// Closed-form reference Greeks.
    pub fn analytical(&self) -> &Greeks {
        &self.analytical
    }

    /// Dual-number Greeks.
    pub fn dual(&self) -> &Greeks {
        &self.dual
    }

    /// Valid record with the smallest finite-difference error for `greek`.
    pub fn min_fd_error(&self, greek: Greek) -> Option<&ComparisonRecord> {
        self.records
            .iter()
            .filter(|r| r.is_valid())
            .min_by(|a, b| a.fd_error(greek).total_cmp(&b.fd_error(greek)))
    }
}
