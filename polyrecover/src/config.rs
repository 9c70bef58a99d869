//! Recovery configuration.
use std::{fmt, str::FromStr};

use crate::{errors::Error, poly::lagrange::DivisionPolicy};

/// Method used to recover the constant term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Method {
    /// Fraction-free Gaussian elimination on the Vandermonde system.
    #[default]
    Elimination,
    /// Lagrange interpolation at zero.
    Lagrange,
    /// Both methods, failing if they disagree.
    CrossCheck,
}

impl Method {
    /// Names accepted by `from_str`.
    pub const NAMES: &'static [&'static str] = &["elimination", "lagrange", "cross-check"];
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "elimination" => Ok(Method::Elimination),
            "lagrange" => Ok(Method::Lagrange),
            "cross-check" => Ok(Method::CrossCheck),
            _ => Err(Error::Malformed(format!("unknown method {:?}", s))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Elimination => "elimination",
            Method::Lagrange => "lagrange",
            Method::CrossCheck => "cross-check",
        };
        f.write_str(name)
    }
}

impl DivisionPolicy {
    /// Names accepted by `from_str`.
    pub const NAMES: &'static [&'static str] = &["common-denominator", "per-term"];
}

impl FromStr for DivisionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common-denominator" => Ok(DivisionPolicy::CommonDenominator),
            "per-term" => Ok(DivisionPolicy::PerTerm),
            _ => Err(Error::Malformed(format!("unknown division policy {:?}", s))),
        }
    }
}

impl fmt::Display for DivisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DivisionPolicy::CommonDenominator => "common-denominator",
            DivisionPolicy::PerTerm => "per-term",
        };
        f.write_str(name)
    }
}

/// Recovery configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Recovery method.
    pub method: Method,
    /// Division policy of the Lagrange method.
    pub division: DivisionPolicy,
    /// Whether points beyond the first k are checked against the
    /// recovered polynomial. Only methods that recover the full polynomial
    /// can verify.
    pub verify_remaining: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: Method::default(),
            division: DivisionPolicy::default(),
            verify_remaining: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::poly::lagrange::DivisionPolicy;

    use super::{Config, Method};

    #[test]
    fn test_method() {
        for name in Method::NAMES {
            let method: Method = name.parse().unwrap();
            assert_eq!(&method.to_string(), name);
        }
        assert!("gauss".parse::<Method>().is_err());
    }

    #[test]
    fn test_division_policy() {
        for name in DivisionPolicy::NAMES {
            let policy: DivisionPolicy = name.parse().unwrap();
            assert_eq!(&policy.to_string(), name);
        }
        assert_eq!(
            "per-term".parse::<DivisionPolicy>().unwrap(),
            DivisionPolicy::PerTerm
        );
        assert!("none".parse::<DivisionPolicy>().is_err());
    }

    #[test]
    fn test_default() {
        let cfg = Config::default();
        assert_eq!(cfg.method, Method::Elimination);
        assert_eq!(cfg.division, DivisionPolicy::CommonDenominator);
        assert!(cfg.verify_remaining);
    }
}
