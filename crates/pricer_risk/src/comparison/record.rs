//! One row of the comparison table.

use pricer_models::sensitivity::{Greek, Greeks};

/// Absolute errors of both estimators at one finite-difference step.
///
/// Column order when exported: h, FD Delta, AD Delta, FD Vega, AD Vega,
/// FD Rho, AD Rho.
///
/// A record whose finite differences hit a numerical domain fault is kept in
/// sweep order with all six error columns NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRecord {
    step: f64,
    fd_error: Greeks,
    ad_error: Greeks,
}

/// Number of exported columns.
pub const COLUMN_COUNT: usize = 7;

impl ComparisonRecord {
    /// Creates a record from the estimates and their references.
    pub fn new(step: f64, fd: &Greeks, ad: &Greeks, analytical: &Greeks) -> Self {
        let abs_err = |estimate: &Greeks| Greeks {
            delta: (estimate.delta - analytical.delta).abs(),
            vega: (estimate.vega - analytical.vega).abs(),
            rho: (estimate.rho - analytical.rho).abs(),
        };

        Self {
            step,
            fd_error: abs_err(fd),
            ad_error: abs_err(ad),
        }
    }

    /// Creates a record marked invalid.
    pub fn invalid(step: f64) -> Self {
        let nan = Greeks {
            delta: f64::NAN,
            vega: f64::NAN,
            rho: f64::NAN,
        };
        Self {
            step,
            fd_error: nan,
            ad_error: nan,
        }
    }

    /// The finite-difference step h.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// |FD estimate - analytical| for one Greek.
    #[inline]
    pub fn fd_error(&self, greek: Greek) -> f64 {
        self.fd_error.get(greek)
    }

    /// |AD estimate - analytical| for one Greek.
    #[inline]
    pub fn ad_error(&self, greek: Greek) -> f64 {
        self.ad_error.get(greek)
    }

    /// False when the record carries NaN errors.
    pub fn is_valid(&self) -> bool {
        Greek::ALL
            .iter()
            .all(|&g| !self.fd_error(g).is_nan() && !self.ad_error(g).is_nan())
    }

    /// The exported row.
    pub fn columns(&self) -> [f64; COLUMN_COUNT] {
        [
            self.step,
            self.fd_error.delta,
            self.ad_error.delta,
            self.fd_error.vega,
            self.ad_error.vega,
            self.fd_error.rho,
            self.ad_error.rho,
        ]
    }

    /// Column indices of a Greek's (FD, AD) errors in [`ComparisonRecord::columns`].
    pub fn column_indices(greek: Greek) -> (usize, usize) {
        match greek {
            Greek::Delta => (1, 2),
            Greek::Vega => (3, 4),
            Greek::Rho => (5, 6),
        }
    }
}
