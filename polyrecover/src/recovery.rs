//! Recovery of the constant term of one problem instance.
use num_bigint::BigInt;
use slog::{debug, info, warn, Logger};

use crate::{
    common::logger::get_logger,
    config::{Config, Method},
    document::Document,
    errors::Error,
    linalg,
    poly::{lagrange, PointSet, Polynomial},
};

/// The outcome of a recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovery {
    /// The constant term of the polynomial.
    pub constant: BigInt,
    /// The full polynomial, if the method recovers it.
    pub polynomial: Option<Polynomial>,
    /// The x-coordinates of surplus points that do not lie on the
    /// recovered polynomial.
    pub outliers: Vec<BigInt>,
}

/// A constructor of the constant term from sample points.
pub struct Recoverer {
    logger: Logger,
    config: Config,
}

impl Recoverer {
    /// Creates a new recoverer.
    pub fn new(config: Config) -> Self {
        Self {
            logger: get_logger("recovery"),
            config,
        }
    }

    /// Recovers the constant term of the given problem instance.
    pub fn recover(&self, document: &Document) -> Result<Recovery, Error> {
        let set = document.points()?;
        self.recover_points(&set, document.threshold())
    }

    /// Recovers the constant term of the polynomial of degree at most k-1
    /// through the first k points of the set.
    pub fn recover_points(&self, set: &PointSet, k: usize) -> Result<Recovery, Error> {
        let points = set.first_k(k)?;
        info!(self.logger, "Recovering constant term";
            "method" => %self.config.method,
            "n" => set.len(),
            "k" => k,
        );

        let (constant, polynomial) = match self.config.method {
            Method::Elimination => {
                let p = linalg::solve(points)?;
                (p.constant_term().clone(), Some(p))
            }
            Method::Lagrange => {
                let c = lagrange::evaluate_at_zero(points, self.config.division)?;
                (c, None)
            }
            Method::CrossCheck => {
                let p = linalg::solve(points)?;
                let c = lagrange::evaluate_at_zero(points, self.config.division)?;
                if &c != p.constant_term() {
                    return Err(Error::CrossCheckMismatch {
                        elimination: p.constant_term().clone(),
                        lagrange: c,
                    });
                }
                (c, Some(p))
            }
        };

        let outliers = match &polynomial {
            Some(p) if self.config.verify_remaining => self.find_outliers(p, set, k),
            _ => Vec::new(),
        };

        Ok(Recovery {
            constant,
            polynomial,
            outliers,
        })
    }

    /// Returns the x-coordinates of the points after the first k that do
    /// not lie on the polynomial.
    fn find_outliers(&self, p: &Polynomial, set: &PointSet, k: usize) -> Vec<BigInt> {
        let remaining = set.remaining(k);
        let outliers: Vec<_> = remaining
            .iter()
            .filter(|point| !p.contains(point))
            .map(|point| point.x().clone())
            .collect();

        if outliers.is_empty() {
            debug!(self.logger, "Surplus points verified"; "count" => remaining.len());
        } else {
            warn!(self.logger, "Surplus points do not lie on the recovered polynomial";
                "count" => outliers.len(),
                "xs" => ?outliers,
            );
        }

        outliers
    }
}
