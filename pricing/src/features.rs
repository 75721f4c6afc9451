use ndarray::Array1;

/// Number of features a record carries.
pub const NUM_FEATURES: usize = 9;

/// The property attributes fed to the model, in training order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Bedrooms,
    Bathrooms,
    SqftLiving,
    SqftLot,
    Floors,
    Waterfront,
    View,
    Grade,
    YrBuilt,
}

impl Feature {
    /// Every feature in the order the model consumes them.
    pub const ALL: [Feature; NUM_FEATURES] = [
        Feature::Bedrooms,
        Feature::Bathrooms,
        Feature::SqftLiving,
        Feature::SqftLot,
        Feature::Floors,
        Feature::Waterfront,
        Feature::View,
        Feature::Grade,
        Feature::YrBuilt,
    ];

    /// Returns the column name used in the model artifact.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Bedrooms => "bedrooms",
            Feature::Bathrooms => "bathrooms",
            Feature::SqftLiving => "sqft_living",
            Feature::SqftLot => "sqft_lot",
            Feature::Floors => "floors",
            Feature::Waterfront => "waterfront",
            Feature::View => "view",
            Feature::Grade => "grade",
            Feature::YrBuilt => "yr_built",
        }
    }

    /// Position of the feature inside a record row.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Column names in model order.
pub fn feature_names() -> Vec<String> {
    Feature::ALL.iter().map(|f| f.name().to_string()).collect()
}

/// A single row of model input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft_living: u32,
    pub sqft_lot: u32,
    pub floors: f64,
    pub waterfront: bool,
    pub view: u32,
    pub grade: u32,
    pub yr_built: u32,
}

impl FeatureRecord {
    /// Returns the value of `feature` as the model sees it.
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Bedrooms => self.bedrooms as f64,
            Feature::Bathrooms => self.bathrooms,
            Feature::SqftLiving => self.sqft_living as f64,
            Feature::SqftLot => self.sqft_lot as f64,
            Feature::Floors => self.floors,
            Feature::Waterfront => u8::from(self.waterfront) as f64,
            Feature::View => self.view as f64,
            Feature::Grade => self.grade as f64,
            Feature::YrBuilt => self.yr_built as f64,
        }
    }

    /// Builds a record from a row laid out in [`Feature::ALL`] order.
    ///
    /// Integer features are rounded; `waterfront` is set for any non-zero value.
    pub fn from_row(row: &[f64; NUM_FEATURES]) -> Self {
        let int = |f: Feature| row[f.index()].round().max(0.) as u32;

        Self {
            bedrooms: int(Feature::Bedrooms),
            bathrooms: row[Feature::Bathrooms.index()],
            sqft_living: int(Feature::SqftLiving),
            sqft_lot: int(Feature::SqftLot),
            floors: row[Feature::Floors.index()],
            waterfront: row[Feature::Waterfront.index()] != 0.,
            view: int(Feature::View),
            grade: int(Feature::Grade),
            yr_built: int(Feature::YrBuilt),
        }
    }

    /// Returns the record as a model input row.
    pub fn to_row(&self) -> Array1<f64> {
        Feature::ALL.iter().map(|&f| self.get(f)).collect()
    }
}
