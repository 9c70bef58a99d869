//! Input documents.
//!
//! A document describes one problem instance:
//!
//! ```text
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Every key other than `keys` is the decimal x-coordinate of a point whose
//! y-coordinate is `value` written in `base`.
use std::{collections::BTreeMap, fs::File, io::Read, path::Path, str::FromStr};

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use slog::{debug, warn};

use crate::{
    common::logger::get_logger,
    decode::{decode, parse_base},
    errors::Error,
    poly::{Point, PointSet},
};

/// Point counts of a problem instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    /// The number of supplied points.
    pub n: usize,
    /// The number of points required, one more than the degree.
    pub k: usize,
}

/// A y-coordinate in positional notation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedValue {
    /// The base, as a decimal string.
    pub base: String,
    /// The digits.
    pub value: String,
}

/// A problem instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub keys: Keys,
    /// Encoded y-coordinates keyed by the decimal x-coordinate.
    #[serde(flatten)]
    pub points: BTreeMap<String, EncodedValue>,
}

impl Document {
    /// Reads a document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Returns the number of points required.
    pub fn threshold(&self) -> usize {
        self.keys.k
    }

    /// Decodes all points.
    ///
    /// Failures name the key of the offending point.
    pub fn points(&self) -> Result<PointSet, Error> {
        let logger = get_logger("document");

        if self.keys.n != self.points.len() {
            warn!(logger, "Point count does not match the document's keys";
                "n" => self.keys.n,
                "supplied" => self.points.len(),
            );
        }

        let mut points = Vec::with_capacity(self.points.len());
        for (key, encoded) in &self.points {
            let point = decode_point(key, encoded).map_err(|err| Error::Point {
                key: key.clone(),
                source: Box::new(err),
            })?;
            points.push(point);
        }

        let set = PointSet::new(points)?;
        debug!(logger, "Points decoded"; "n" => set.len(), "k" => self.keys.k);

        Ok(set)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

fn decode_point(key: &str, encoded: &EncodedValue) -> Result<Point, Error> {
    let x: BigInt = key.trim().parse().map_err(|_| Error::InvalidX {
        key: key.to_owned(),
    })?;
    let base = parse_base(&encoded.base)?;
    let y = decode(&encoded.value, base)?;

    Ok(Point::new(x, y))
}
