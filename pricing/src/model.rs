use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::{
    dataset::Dataset,
    error::{PricingErr, Result},
    features::{FeatureRecord, feature_names},
    ols,
};

/// A fitted linear regression over the property features.
///
/// The column names it was trained with travel with it, so a record laid out
/// differently is refused rather than mispredicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Creates a model from already known parameters.
    pub fn new(feature_names: Vec<String>, coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            feature_names,
            coefficients,
            intercept,
        }
    }

    /// Fits the model by ordinary least squares on `dataset`.
    ///
    /// # Errors
    /// Returns an error if the least squares system can't be solved.
    pub fn fit(dataset: &Dataset) -> Result<Self> {
        let ols::Fit {
            coefficients,
            intercept,
        } = ols::fit(dataset.x(), dataset.y())?;

        log::debug!(
            "fitted linear model on {} rows: intercept={intercept}",
            dataset.len()
        );

        Ok(Self::new(feature_names(), coefficients.to_vec(), intercept))
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Predicts the price of a single record.
    ///
    /// # Errors
    /// Returns [`PricingErr::FeatureMismatch`] if the model wasn't trained on
    /// the record's columns in the same order.
    pub fn predict(&self, record: &FeatureRecord) -> Result<f64> {
        let names = feature_names();
        if names != self.feature_names {
            return Err(PricingErr::FeatureMismatch {
                expected: self.feature_names.clone(),
                got: names,
            });
        }

        self.predict_row(record.to_row().view())
    }

    /// Predicts from a raw row laid out in training order.
    ///
    /// # Errors
    /// Returns [`PricingErr::FeatureMismatch`] if the row length differs from
    /// the number of coefficients.
    pub fn predict_row(&self, row: ArrayView1<f64>) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(PricingErr::FeatureMismatch {
                expected: self.feature_names.clone(),
                got: (0..row.len()).map(|i| format!("#{i}")).collect(),
            });
        }

        let coefficients = ArrayView1::from(self.coefficients.as_slice());
        Ok(row.dot(&coefficients) + self.intercept)
    }
}
