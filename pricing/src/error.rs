use std::{error::Error, fmt, io, path::PathBuf};

use rand_distr::uniform::Error as UniformError;

/// The pricing module's result type.
pub type Result<T> = std::result::Result<T, PricingErr>;

/// Failures raised while provisioning the model or computing an estimate.
#[derive(Debug)]
pub enum PricingErr {
    Io(io::Error),
    /// The artifact exists but could not be (de)serialized.
    Artifact {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The record handed to the model doesn't match what it was trained on.
    FeatureMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },
    Distribution(String),
    /// The least squares solve produced no finite solution.
    Singular,
    InvalidConfig(String),
}

impl fmt::Display for PricingErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingErr::Io(e) => write!(f, "io error: {e}"),
            PricingErr::Artifact { path, source } => {
                write!(f, "malformed model artifact '{}': {source}", path.display())
            }
            PricingErr::FeatureMismatch { expected, got } => write!(
                f,
                "feature mismatch: model expects [{}], got [{}]",
                expected.join(", "),
                got.join(", ")
            ),
            PricingErr::Distribution(msg) => write!(f, "invalid sampling distribution: {msg}"),
            PricingErr::Singular => write!(f, "least squares system has no finite solution"),
            PricingErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for PricingErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PricingErr::Io(e) => Some(e),
            PricingErr::Artifact { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for PricingErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<UniformError> for PricingErr {
    fn from(value: UniformError) -> Self {
        Self::Distribution(value.to_string())
    }
}
