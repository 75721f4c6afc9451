use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    error::Result,
    features::{Feature, NUM_FEATURES},
};

const FLOOR_CHOICES: [f64; 3] = [1.0, 1.5, 2.0];

/// Half-open range of synthetic prices, in Rupiah.
pub const PRICE_RANGE: (i64, i64) = (100_000_000, 3_000_000_000);

/// An in-memory training set: one row per sample, columns in [`Feature::ALL`] order.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Creates a new dataset from owned buffers.
    ///
    /// # Panics
    /// If the number of rows in `x` differs from the length of `y`.
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Self {
        assert_eq!(x.nrows(), y.len(), "x and y must have the same number of rows");
        Self { x, y }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    #[inline]
    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    #[inline]
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }
}

/// Synthesizes `rows` random property listings.
///
/// Every feature is drawn from its own bounded distribution. The price is drawn
/// independently of the features, so a model fitted on this data carries no
/// real pricing signal.
///
/// # Errors
/// Returns an error if any of the sampling ranges is invalid.
pub fn generate<R: Rng>(rng: &mut R, rows: usize) -> Result<Dataset> {
    let bathrooms = Uniform::new(1., 4.)?;
    let price = Uniform::new(PRICE_RANGE.0, PRICE_RANGE.1)?;

    let mut x = Array2::zeros((rows, NUM_FEATURES));
    let mut y = Array1::zeros(rows);

    for (mut row, target) in x.outer_iter_mut().zip(y.iter_mut()) {
        row[Feature::Bedrooms.index()] = rng.random_range(1..6) as f64;
        row[Feature::Bathrooms.index()] = bathrooms.sample(rng);
        row[Feature::SqftLiving.index()] = rng.random_range(500..4000) as f64;
        row[Feature::SqftLot.index()] = rng.random_range(1000..10000) as f64;
        row[Feature::Floors.index()] = FLOOR_CHOICES[rng.random_range(0..FLOOR_CHOICES.len())];
        row[Feature::Waterfront.index()] = rng.random_range(0..2) as f64;
        row[Feature::View.index()] = rng.random_range(0..5) as f64;
        row[Feature::Grade.index()] = rng.random_range(1..14) as f64;
        row[Feature::YrBuilt.index()] = rng.random_range(1950..2020) as f64;
        *target = price.sample(rng) as f64;
    }

    Ok(Dataset::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn generates_requested_rows() {
        let mut rng = StdRng::seed_from_u64(7);
        let ds = generate(&mut rng, 100).unwrap();
        assert_eq!(ds.len(), 100);
        assert_eq!(ds.x().dim(), (100, NUM_FEATURES));
    }

    #[test]
    fn samples_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let ds = generate(&mut rng, 500).unwrap();

        let col = |f: Feature| ds.x().column(f.index()).to_vec();
        let within = |v: &[f64], lo: f64, hi: f64| v.iter().all(|&x| x >= lo && x < hi);

        assert!(within(&col(Feature::Bedrooms), 1., 6.));
        assert!(within(&col(Feature::Bathrooms), 1., 4.));
        assert!(within(&col(Feature::SqftLiving), 500., 4000.));
        assert!(within(&col(Feature::SqftLot), 1000., 10000.));
        assert!(within(&col(Feature::View), 0., 5.));
        assert!(within(&col(Feature::Grade), 1., 14.));
        assert!(within(&col(Feature::YrBuilt), 1950., 2020.));
        assert!(col(Feature::Floors).iter().all(|f| FLOOR_CHOICES.contains(f)));
        assert!(col(Feature::Waterfront).iter().all(|&w| w == 0. || w == 1.));
        assert!(
            ds.y()
                .iter()
                .all(|&p| p >= PRICE_RANGE.0 as f64 && p < PRICE_RANGE.1 as f64)
        );
    }

    #[test]
    fn same_seed_same_data() {
        let a = generate(&mut StdRng::seed_from_u64(3), 20).unwrap();
        let b = generate(&mut StdRng::seed_from_u64(3), 20).unwrap();
        assert_eq!(a.x(), b.x());
        assert_eq!(a.y(), b.y());
    }

    #[test]
    #[should_panic]
    fn mismatched_rows_panic() {
        Dataset::new(Array2::zeros((2, NUM_FEATURES)), Array1::zeros(3));
    }
}
