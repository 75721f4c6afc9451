pub mod artifact;
pub mod config;
pub mod currency;
pub mod dataset;
pub mod error;
pub mod features;
pub mod form;
pub mod model;
mod ols;
pub mod predictor;
pub mod provision;

pub use config::ProvisionConfig;
pub use currency::{CurrencyFormat, format_rupiah};
pub use error::{PricingErr, Result};
pub use features::{Feature, FeatureRecord};
pub use form::FormState;
pub use model::LinearModel;
pub use predictor::{Estimate, Predictor};
pub use provision::{Origin, Provisioned, Provisioner};
