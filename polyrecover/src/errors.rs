use num_bigint::BigInt;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cross-check mismatch: elimination gave {elimination}, lagrange gave {lagrange}")]
    CrossCheckMismatch {
        elimination: BigInt,
        lagrange: BigInt,
    },
    #[error("duplicate x-coordinate {x}")]
    DuplicateX { x: BigInt },
    #[error("empty value")]
    EmptyValue,
    #[error("not enough points: {required} required, {available} available")]
    InsufficientPoints { required: usize, available: usize },
    #[error("invalid base {base}, expected a value between 2 and 36")]
    InvalidBase { base: BigInt },
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
    #[error("invalid threshold, at least one point is required")]
    InvalidThreshold,
    #[error("invalid x-coordinate {key:?}")]
    InvalidX { key: String },
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    #[error("malformed document: {0}")]
    Malformed(String),
    #[error("non-exact division in back-substitution at row {row}")]
    NonExactDivision { row: usize },
    #[error("lagrange term {index} is not an integer")]
    NonIntegerTerm { index: usize },
    #[error("lagrange interpolation at zero is not an integer")]
    NonIntegerResult,
    #[error("point {key:?}")]
    Point {
        key: String,
        #[source]
        source: Box<Error>,
    },
    #[error("singular matrix at column {column}")]
    SingularMatrix { column: usize },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err.to_string())
    }
}
