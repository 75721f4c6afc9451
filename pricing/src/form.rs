//! Form model behind the input screen.
//!
//! Holds one value per feature, each bound to a control with its own range,
//! default and step. Values are clamped on every write, so the record handed
//! to the predictor never leaves the declared bounds.

use crate::{
    error::Result,
    features::{Feature, FeatureRecord, NUM_FEATURES},
    predictor::{Estimate, Predictor},
};

/// Kind of input control a field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    NumberInput,
    Slider,
    /// Two option select, `0` is "Tidak" and `1` is "Ya".
    YesNo,
}

/// Declared bounds and presentation of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub feature: Feature,
    pub label: &'static str,
    pub control: Control,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    pub integer: bool,
}

impl FieldSpec {
    /// Brings `value` inside `[min, max]`, rounding integer fields.
    ///
    /// Returns `None` for non-finite values.
    pub fn clamp(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }

        let value = if self.integer { value.round() } else { value };
        Some(value.clamp(self.min, self.max))
    }

    /// Renders `value` the way the control shows it.
    pub fn display(&self, value: f64) -> String {
        match self.control {
            Control::YesNo if value != 0. => "Ya".to_string(),
            Control::YesNo => "Tidak".to_string(),
            _ if self.integer => format!("{value:.0}"),
            _ => format!("{value:.2}"),
        }
    }
}

const fn number(
    feature: Feature,
    label: &'static str,
    min: f64,
    max: f64,
    default: f64,
    step: f64,
    integer: bool,
) -> FieldSpec {
    FieldSpec {
        feature,
        label,
        control: Control::NumberInput,
        min,
        max,
        default,
        step,
        integer,
    }
}

const fn slider(
    feature: Feature,
    label: &'static str,
    min: f64,
    max: f64,
    default: f64,
) -> FieldSpec {
    FieldSpec {
        feature,
        label,
        control: Control::Slider,
        min,
        max,
        default,
        step: 1.,
        integer: true,
    }
}

/// Field specs, indexed like [`Feature::ALL`].
pub const FIELDS: [FieldSpec; NUM_FEATURES] = [
    number(Feature::Bedrooms, "Jumlah Kamar Tidur", 0., 10., 3., 1., true),
    number(Feature::Bathrooms, "Jumlah Kamar Mandi", 0., 10., 2., 0.5, false),
    number(Feature::SqftLiving, "Luas Bangunan (sqft)", 300., 10_000., 1_500., 1., true),
    number(Feature::SqftLot, "Luas Tanah (sqft)", 500., 20_000., 5_000., 1., true),
    number(Feature::Floors, "Jumlah Lantai", 1., 3.5, 1., 0.5, false),
    FieldSpec {
        feature: Feature::Waterfront,
        label: "Pemandangan Laut",
        control: Control::YesNo,
        min: 0.,
        max: 1.,
        default: 0.,
        step: 1.,
        integer: true,
    },
    slider(Feature::View, "Pemandangan (0 = Buruk, 4 = Sangat Bagus)", 0., 4., 0.),
    slider(Feature::Grade, "Grade Bangunan (1-13)", 1., 13., 7.),
    number(Feature::YrBuilt, "Tahun Dibangun", 1900., 2025., 2000., 1., true),
];

/// Order in which fields are laid out and visited: the first column, the
/// second column, then the construction year below both.
pub const FORM_ORDER: [Feature; NUM_FEATURES] = [
    Feature::Bedrooms,
    Feature::Bathrooms,
    Feature::SqftLiving,
    Feature::Floors,
    Feature::SqftLot,
    Feature::Waterfront,
    Feature::View,
    Feature::Grade,
    Feature::YrBuilt,
];

/// Returns the field description for `feature`.
pub fn spec(feature: Feature) -> &'static FieldSpec {
    &FIELDS[feature.index()]
}

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Feature),
    PredictButton,
}

/// Live state of the input form.
#[derive(Debug, Clone)]
pub struct FormState {
    values: [f64; NUM_FEATURES],
    /// Position in [`FORM_ORDER`]; one past the end is the predict button.
    cursor: usize,
    edit: Option<String>,
    estimate: Option<Estimate>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Creates a form with every field at its default value.
    pub fn new() -> Self {
        Self {
            values: FIELDS.map(|f| f.default),
            cursor: 0,
            edit: None,
            estimate: None,
        }
    }

    pub fn focus(&self) -> Focus {
        FORM_ORDER
            .get(self.cursor)
            .map_or(Focus::PredictButton, |&f| Focus::Field(f))
    }

    /// Moves focus forward, committing any pending edit first.
    pub fn focus_next(&mut self) {
        self.commit();
        self.cursor = (self.cursor + 1) % (NUM_FEATURES + 1);
    }

    /// Moves focus backward, committing any pending edit first.
    pub fn focus_prev(&mut self) {
        self.commit();
        self.cursor = (self.cursor + NUM_FEATURES) % (NUM_FEATURES + 1);
    }

    pub fn value(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    /// Writes `value` into `feature`, clamped to its bounds.
    ///
    /// Returns `false` if the value was rejected (non-finite). A change in
    /// value discards the estimate currently shown.
    pub fn set(&mut self, feature: Feature, value: f64) -> bool {
        let Some(value) = spec(feature).clamp(value) else {
            return false;
        };

        let slot = &mut self.values[feature.index()];
        if *slot != value {
            *slot = value;
            self.estimate = None;
        }
        true
    }

    /// Steps the focused field up. Yes/No selects toggle.
    pub fn increment(&mut self) {
        self.step_by(1.);
    }

    /// Steps the focused field down. Yes/No selects toggle.
    pub fn decrement(&mut self) {
        self.step_by(-1.);
    }

    fn step_by(&mut self, direction: f64) {
        let Focus::Field(feature) = self.focus() else {
            return;
        };

        self.commit();
        let spec = spec(feature);
        let current = self.value(feature);
        let next = match spec.control {
            Control::YesNo => 1. - current,
            _ => current + direction * spec.step,
        };
        self.set(feature, next);
    }

    /// Feeds a typed character into the focused number input.
    ///
    /// Only digits are accepted, plus a single `.` on fractional fields.
    /// Returns whether the character was taken.
    pub fn input_char(&mut self, c: char) -> bool {
        let Focus::Field(feature) = self.focus() else {
            return false;
        };

        let spec = spec(feature);
        if spec.control != Control::NumberInput {
            return false;
        }

        let buf = self.edit.get_or_insert_with(String::new);
        let accepted = c.is_ascii_digit() || (c == '.' && !spec.integer && !buf.contains('.'));
        if accepted {
            buf.push(c);
        } else if buf.is_empty() {
            self.edit = None;
        }
        accepted
    }

    pub fn backspace(&mut self) {
        if let Some(buf) = self.edit.as_mut() {
            buf.pop();
        }
    }

    /// Text being typed into the focused field, if any.
    pub fn editing(&self) -> Option<&str> {
        self.edit.as_deref()
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Applies the pending edit to the focused field.
    ///
    /// Returns `false` if there was nothing to apply or the text didn't parse,
    /// in which case the previous value is kept.
    pub fn commit(&mut self) -> bool {
        let Some(buf) = self.edit.take() else {
            return false;
        };
        let Focus::Field(feature) = self.focus() else {
            return false;
        };

        match buf.parse::<f64>() {
            Ok(value) => self.set(feature, value),
            Err(_) => false,
        }
    }

    /// The record the current values describe.
    pub fn record(&self) -> FeatureRecord {
        FeatureRecord::from_row(&self.values)
    }

    /// Runs the predictor on the current values and keeps the result for display.
    ///
    /// # Errors
    /// Returns an error if the predictor rejects the record.
    pub fn submit(&mut self, predictor: &Predictor) -> Result<&Estimate> {
        self.commit();
        let estimate = predictor.estimate(&self.record())?;
        Ok(&*self.estimate.insert(estimate))
    }

    /// The estimate from the last submit, cleared whenever a value changes.
    pub fn estimate(&self) -> Option<&Estimate> {
        self.estimate.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus_on(form: &mut FormState, feature: Feature) {
        while form.focus() != Focus::Field(feature) {
            form.focus_next();
        }
    }

    #[test]
    fn starts_at_defaults() {
        let form = FormState::new();
        let record = form.record();
        assert_eq!(
            record,
            FeatureRecord {
                bedrooms: 3,
                bathrooms: 2.0,
                sqft_living: 1500,
                sqft_lot: 5000,
                floors: 1.0,
                waterfront: false,
                view: 0,
                grade: 7,
                yr_built: 2000,
            }
        );
        assert_eq!(form.focus(), Focus::Field(Feature::Bedrooms));
    }

    #[test]
    fn fields_follow_feature_order() {
        for (spec, feature) in FIELDS.iter().zip(Feature::ALL) {
            assert_eq!(spec.feature, feature);
            assert!(spec.min <= spec.default && spec.default <= spec.max);
        }
    }

    #[test]
    fn set_clamps_to_bounds() {
        let mut form = FormState::new();
        for spec in FIELDS {
            assert!(form.set(spec.feature, spec.max + 1_000.));
            assert_eq!(form.value(spec.feature), spec.max);
            assert!(form.set(spec.feature, spec.min - 1_000.));
            assert_eq!(form.value(spec.feature), spec.min);
        }
    }

    #[test]
    fn set_rejects_non_finite() {
        let mut form = FormState::new();
        assert!(!form.set(Feature::SqftLot, f64::NAN));
        assert!(!form.set(Feature::SqftLot, f64::INFINITY));
        assert_eq!(form.value(Feature::SqftLot), 5_000.);
    }

    #[test]
    fn integer_fields_round() {
        let mut form = FormState::new();
        form.set(Feature::Bedrooms, 4.6);
        assert_eq!(form.value(Feature::Bedrooms), 5.);
        form.set(Feature::Bathrooms, 2.3);
        assert_eq!(form.value(Feature::Bathrooms), 2.3);
    }

    #[test]
    fn stepping_uses_field_step_and_stops_at_bounds() {
        let mut form = FormState::new();
        focus_on(&mut form, Feature::Floors);

        form.increment();
        assert_eq!(form.value(Feature::Floors), 1.5);

        for _ in 0..10 {
            form.increment();
        }
        assert_eq!(form.value(Feature::Floors), 3.5);

        for _ in 0..10 {
            form.decrement();
        }
        assert_eq!(form.value(Feature::Floors), 1.);
    }

    #[test]
    fn yes_no_toggles() {
        let mut form = FormState::new();
        focus_on(&mut form, Feature::Waterfront);

        form.increment();
        assert!(form.record().waterfront);
        form.increment();
        assert!(!form.record().waterfront);
        form.decrement();
        assert!(form.record().waterfront);
    }

    #[test]
    fn focus_wraps_through_button() {
        let mut form = FormState::new();
        form.focus_prev();
        assert_eq!(form.focus(), Focus::PredictButton);
        form.focus_next();
        assert_eq!(form.focus(), Focus::Field(FORM_ORDER[0]));

        for _ in 0..NUM_FEATURES {
            form.focus_next();
        }
        assert_eq!(form.focus(), Focus::PredictButton);
    }

    #[test]
    fn typed_value_is_clamped_on_commit() {
        let mut form = FormState::new();
        focus_on(&mut form, Feature::YrBuilt);

        for c in "3000".chars() {
            assert!(form.input_char(c));
        }
        assert_eq!(form.editing(), Some("3000"));
        assert!(form.commit());
        assert_eq!(form.value(Feature::YrBuilt), 2025.);
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn typing_rejects_non_numeric() {
        let mut form = FormState::new();
        focus_on(&mut form, Feature::Bedrooms);

        assert!(!form.input_char('x'));
        assert!(!form.input_char('.'));
        assert_eq!(form.editing(), None);

        focus_on(&mut form, Feature::Bathrooms);
        assert!(form.input_char('1'));
        assert!(form.input_char('.'));
        assert!(!form.input_char('.'));
        assert!(form.input_char('5'));
        form.focus_next();
        assert_eq!(form.value(Feature::Bathrooms), 1.5);
    }

    #[test]
    fn unparsable_edit_keeps_previous_value() {
        let mut form = FormState::new();
        focus_on(&mut form, Feature::Bathrooms);

        form.input_char('.');
        assert!(!form.commit());
        assert_eq!(form.value(Feature::Bathrooms), 2.);
    }

    #[test]
    fn sliders_ignore_typing() {
        let mut form = FormState::new();
        focus_on(&mut form, Feature::Grade);
        assert!(!form.input_char('9'));
        assert_eq!(form.value(Feature::Grade), 7.);
    }

    #[test]
    fn cancel_discards_edit() {
        let mut form = FormState::new();
        form.input_char('8');
        form.backspace();
        form.input_char('9');
        form.cancel_edit();
        assert_eq!(form.value(Feature::Bedrooms), 3.);
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn display_matches_control() {
        assert_eq!(spec(Feature::Waterfront).display(1.), "Ya");
        assert_eq!(spec(Feature::Waterfront).display(0.), "Tidak");
        assert_eq!(spec(Feature::Bathrooms).display(2.), "2.00");
        assert_eq!(spec(Feature::SqftLot).display(5_000.), "5000");
    }
}
