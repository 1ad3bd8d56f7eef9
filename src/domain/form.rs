use std::fmt;

use thiserror::Error;

use super::product::{
    AlternativesResult, Category, DeliveryMethod, Packaging, ProductInput, ScoreResult,
    DEFAULT_DELIVERY_SPEED,
};

/// Editable fields of the product form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Category,
    OriginCountry,
    WeightKg,
    Packaging,
    DeliveryMethod,
    DeliveryDistanceKm,
    DeliverySpeed,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Category => "Category",
            FormField::OriginCountry => "Origin Country",
            FormField::WeightKg => "Weight (kg)",
            FormField::Packaging => "Packaging",
            FormField::DeliveryMethod => "Delivery Method",
            FormField::DeliveryDistanceKm => "Delivery Distance (km)",
            FormField::DeliverySpeed => "Delivery Speed",
        }
    }
}

/// A numeric input that keeps whatever the user typed when it does not parse.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericInput {
    Number(f64),
    Raw(String),
}

impl NumericInput {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => NumericInput::Number(value),
            _ => NumericInput::Raw(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            NumericInput::Number(value) => Some(*value),
            NumericInput::Raw(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, NumericInput::Raw(raw) if raw.trim().is_empty())
    }

    /// Text was entered but it is not a number.
    pub fn is_invalid(&self) -> bool {
        matches!(self, NumericInput::Raw(raw) if !raw.trim().is_empty())
    }
}

impl Default for NumericInput {
    fn default() -> Self {
        NumericInput::Raw(String::new())
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Number(value) => write!(f, "{value}"),
            NumericInput::Raw(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),
    #[error("{} must be a number", .0.label())]
    NotANumber(FormField),
    #[error("{} cannot be negative", .0.label())]
    Negative(FormField),
    #[error("unknown {}: {value}", .field.label())]
    UnknownOption { field: FormField, value: String },
    #[error("Catalog product id must be a positive whole number")]
    InvalidProductId,
}

/// Field values exactly as the form currently holds them.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    pub category: Option<Category>,
    pub origin_country: String,
    pub weight_kg: NumericInput,
    pub packaging: Option<Packaging>,
    pub delivery_method: Option<DeliveryMethod>,
    pub delivery_distance_km: NumericInput,
    pub delivery_speed: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            category: None,
            origin_country: String::new(),
            weight_kg: NumericInput::default(),
            packaging: None,
            delivery_method: None,
            delivery_distance_km: NumericInput::default(),
            delivery_speed: DEFAULT_DELIVERY_SPEED.to_string(),
        }
    }
}

impl ProductForm {
    /// Applies a raw value coming from an input or select element.
    ///
    /// Select fields accept the empty placeholder (clears the field) or one of
    /// the option names; anything else is rejected and the field is left as-is.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), FormError> {
        match field {
            FormField::Category => {
                self.category = parse_option(field, raw, &Category::ALL, Category::name)?
            }
            FormField::OriginCountry => self.origin_country = raw.to_string(),
            FormField::WeightKg => self.weight_kg = NumericInput::parse(raw),
            FormField::Packaging => {
                self.packaging = parse_option(field, raw, &Packaging::ALL, Packaging::name)?
            }
            FormField::DeliveryMethod => {
                self.delivery_method =
                    parse_option(field, raw, &DeliveryMethod::ALL, DeliveryMethod::name)?
            }
            FormField::DeliveryDistanceKm => self.delivery_distance_km = NumericInput::parse(raw),
            FormField::DeliverySpeed => self.delivery_speed = raw.to_string(),
        }
        Ok(())
    }

    /// Current text for an input element bound to `field`.
    pub fn value_of(&self, field: FormField) -> String {
        match field {
            FormField::Category => self.category.map(|c| c.name()).unwrap_or_default().to_string(),
            FormField::OriginCountry => self.origin_country.clone(),
            FormField::WeightKg => self.weight_kg.to_string(),
            FormField::Packaging => self.packaging.map(|p| p.name()).unwrap_or_default().to_string(),
            FormField::DeliveryMethod => self
                .delivery_method
                .map(|d| d.name())
                .unwrap_or_default()
                .to_string(),
            FormField::DeliveryDistanceKm => self.delivery_distance_km.to_string(),
            FormField::DeliverySpeed => self.delivery_speed.clone(),
        }
    }

    /// Validates the form and builds the request body.
    pub fn to_input(&self) -> Result<ProductInput, FormError> {
        let category = self.category.ok_or(FormError::Missing(FormField::Category))?;
        let origin_country = self.origin_country.trim();
        if origin_country.is_empty() {
            return Err(FormError::Missing(FormField::OriginCountry));
        }
        let weight_kg = non_negative(FormField::WeightKg, &self.weight_kg)?;
        let packaging = self.packaging.ok_or(FormError::Missing(FormField::Packaging))?;
        let delivery_method = self
            .delivery_method
            .ok_or(FormError::Missing(FormField::DeliveryMethod))?;
        let delivery_distance_km =
            non_negative(FormField::DeliveryDistanceKm, &self.delivery_distance_km)?;
        let delivery_speed = match self.delivery_speed.trim() {
            "" => DEFAULT_DELIVERY_SPEED.to_string(),
            speed => speed.to_string(),
        };

        Ok(ProductInput {
            category,
            origin_country: origin_country.to_string(),
            weight_kg,
            packaging,
            delivery_method,
            delivery_distance_km,
            delivery_speed,
        })
    }
}

fn parse_option<T: Copy>(
    field: FormField,
    raw: &str,
    options: &[T],
    name: fn(&T) -> &'static str,
) -> Result<Option<T>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    options
        .iter()
        .find(|option| name(option) == raw)
        .copied()
        .map(Some)
        .ok_or_else(|| FormError::UnknownOption {
            field,
            value: raw.to_string(),
        })
}

fn non_negative(field: FormField, input: &NumericInput) -> Result<f64, FormError> {
    if input.is_blank() {
        return Err(FormError::Missing(field));
    }
    let value = input.as_number().ok_or(FormError::NotANumber(field))?;
    if value < 0.0 {
        return Err(FormError::Negative(field));
    }
    Ok(value)
}

/// Parses the catalog lookup box into a product id.
pub fn parse_product_id(raw: &str) -> Result<i64, FormError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(FormError::InvalidProductId),
    }
}

/// Lifecycle of one submission as the result panels see it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub loading: bool,
    pub error: Option<String>,
    pub score: Option<ScoreResult>,
    pub alternatives: Option<AlternativesResult>,
}

impl SubmissionState {
    /// Starts a submission. Returns `false` when one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        self.score = None;
        self.alternatives = None;
        true
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        let mut form = ProductForm::default();
        form.set_field(FormField::Category, "Electronics").unwrap();
        form.set_field(FormField::OriginCountry, "China").unwrap();
        form.set_field(FormField::WeightKg, "2.5").unwrap();
        form.set_field(FormField::Packaging, "Cardboard").unwrap();
        form.set_field(FormField::DeliveryMethod, "Air").unwrap();
        form.set_field(FormField::DeliveryDistanceKm, "500").unwrap();
        form
    }

    #[test]
    fn new_form_starts_empty_with_standard_speed() {
        let form = ProductForm::default();
        assert!(form.category.is_none());
        assert!(form.weight_kg.is_blank());
        assert_eq!(form.delivery_speed, "Standard");
    }

    #[test]
    fn numeric_fields_coerce_when_parseable() {
        let form = filled_form();
        assert_eq!(form.weight_kg, NumericInput::Number(2.5));
        assert_eq!(form.delivery_distance_km, NumericInput::Number(500.0));
    }

    #[test]
    fn non_numeric_weight_keeps_raw_text() {
        let mut form = filled_form();
        form.set_field(FormField::WeightKg, "heavy").unwrap();
        assert_eq!(form.weight_kg, NumericInput::Raw("heavy".to_string()));
        assert_eq!(form.value_of(FormField::WeightKg), "heavy");
        assert_eq!(form.to_input(), Err(FormError::NotANumber(FormField::WeightKg)));
    }

    #[test]
    fn only_entered_text_that_fails_to_parse_is_invalid() {
        assert!(NumericInput::parse("heavy").is_invalid());
        assert!(!NumericInput::parse("   ").is_invalid());
        assert!(!NumericInput::parse("0").is_invalid());
        assert!(!NumericInput::default().is_invalid());
    }

    #[test]
    fn zero_is_a_number_not_raw_text() {
        let mut form = filled_form();
        form.set_field(FormField::WeightKg, "0").unwrap();
        assert_eq!(form.weight_kg, NumericInput::Number(0.0));
        assert!(form.to_input().is_ok());
    }

    #[test]
    fn valid_form_builds_expected_input() {
        let input = filled_form().to_input().unwrap();
        assert_eq!(input.category, Category::Electronics);
        assert_eq!(input.origin_country, "China");
        assert_eq!(input.weight_kg, 2.5);
        assert_eq!(input.packaging, Packaging::Cardboard);
        assert_eq!(input.delivery_method, DeliveryMethod::Air);
        assert_eq!(input.delivery_distance_km, 500.0);
        assert_eq!(input.delivery_speed, "Standard");
    }

    #[test]
    fn missing_and_negative_fields_are_rejected() {
        let mut form = filled_form();
        form.set_field(FormField::Packaging, "").unwrap();
        assert_eq!(form.to_input(), Err(FormError::Missing(FormField::Packaging)));

        let mut form = filled_form();
        form.set_field(FormField::OriginCountry, "   ").unwrap();
        assert_eq!(form.to_input(), Err(FormError::Missing(FormField::OriginCountry)));

        let mut form = filled_form();
        form.set_field(FormField::DeliveryDistanceKm, "-3").unwrap();
        assert_eq!(
            form.to_input(),
            Err(FormError::Negative(FormField::DeliveryDistanceKm))
        );
    }

    #[test]
    fn unknown_select_value_leaves_field_untouched() {
        let mut form = filled_form();
        let err = form.set_field(FormField::DeliveryMethod, "Rail").unwrap_err();
        assert_eq!(err.to_string(), "unknown Delivery Method: Rail");
        assert_eq!(form.delivery_method, Some(DeliveryMethod::Air));
    }

    #[test]
    fn blank_speed_falls_back_to_standard() {
        let mut form = filled_form();
        form.set_field(FormField::DeliverySpeed, "").unwrap();
        assert_eq!(form.to_input().unwrap().delivery_speed, "Standard");
    }

    #[test]
    fn product_id_must_be_positive() {
        assert_eq!(parse_product_id(" 1001 "), Ok(1001));
        assert_eq!(parse_product_id("0"), Err(FormError::InvalidProductId));
        assert_eq!(parse_product_id("abc"), Err(FormError::InvalidProductId));
    }

    #[test]
    fn begin_clears_previous_outcome_and_rejects_reentry() {
        let mut state = SubmissionState {
            error: Some("boom".to_string()),
            score: Some(ScoreResult { carbon_score: 1.0 }),
            ..Default::default()
        };
        assert!(state.begin());
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.score.is_none());
        assert!(!state.begin());
        state.finish();
        assert!(!state.loading);
    }
}
