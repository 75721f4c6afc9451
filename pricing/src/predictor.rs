use log::debug;

use crate::{
    currency::CurrencyFormat,
    error::Result,
    features::FeatureRecord,
    model::LinearModel,
};

/// A price estimate as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub price: f64,
    pub formatted: String,
}

/// Runs the loaded model on a record and renders the result as currency.
#[derive(Debug, Clone)]
pub struct Predictor {
    model: LinearModel,
    format: CurrencyFormat,
}

impl Predictor {
    /// Creates a predictor that formats in Rupiah.
    pub fn new(model: LinearModel) -> Self {
        Self::with_format(model, CurrencyFormat::RUPIAH)
    }

    pub fn with_format(model: LinearModel, format: CurrencyFormat) -> Self {
        Self { model, format }
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// Predicts and formats the price of `record`.
    ///
    /// # Errors
    /// Returns an error if the model wasn't trained on the record's features.
    pub fn estimate(&self, record: &FeatureRecord) -> Result<Estimate> {
        let price = self.model.predict(record)?;
        let formatted = self.format.format(price);
        debug!("estimated {formatted} for {record:?}");

        Ok(Estimate { price, formatted })
    }
}
