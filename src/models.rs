// Data structures shared by the store, the catalog loader and the HTTP layer

use serde::{Deserialize, Deserializer, Serialize};

// One listed car, as served to the storefront
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")] // Match JavaScript frontend keys
pub struct Vehicle {
    pub id: u64,
    pub make: String,
    pub model: String,
    pub year: u32,
    pub price: f64,
    pub mileage: u32, // Odometer reading
    pub fuel_type: String,
    pub body_type: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    pub is_new: bool,
    pub transmission: String,
    pub engine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horsepower: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<f64>, // 0-60 seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive: Option<String>,
    pub exterior_color: String,
    pub interior_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_economy: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    pub description: String,
    // Only present for records that came from the backend feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
}

/// Active search/filter selection.
///
/// Every field is optional and an absent field matches everything. Partial
/// updates are applied with [`FilterCriteria::merge`].
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub make: Option<String>,
    pub model: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_year: Option<u32>,
    pub max_year: Option<u32>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub search_term: Option<String>,
}

impl FilterCriteria {
    /// Field-wise override: every field present in `partial` replaces ours
    /// (an explicit `null` clears it), the rest are left alone.
    pub fn merge(&mut self, partial: impl Into<FilterPatch>) {
        let FilterPatch {
            make,
            model,
            min_price,
            max_price,
            min_year,
            max_year,
            body_type,
            fuel_type,
            search_term,
        } = partial.into();

        apply(&mut self.make, make);
        apply(&mut self.model, model);
        apply(&mut self.min_price, min_price);
        apply(&mut self.max_price, max_price);
        apply(&mut self.min_year, min_year);
        apply(&mut self.max_year, max_year);
        apply(&mut self.body_type, body_type);
        apply(&mut self.fuel_type, fuel_type);
        apply(&mut self.search_term, search_term);
    }
}

fn apply<T>(field: &mut Option<T>, update: Option<Option<T>>) {
    if let Some(value) = update {
        *field = value;
    }
}

/// Partial update of [`FilterCriteria`] as sent by the filter form.
///
/// Outer `None`: key absent, keep the current value. `Some(None)`: key sent
/// as `null`, clear it. `Some(Some(v))`: set it.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    #[serde(default, deserialize_with = "present")]
    pub make: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub model: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub min_price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub max_price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub min_year: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present")]
    pub max_year: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present")]
    pub body_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub fuel_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub search_term: Option<Option<String>>,
}

// Only called when the key is in the payload, so `null` becomes Some(None)
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// A full criteria value sets its populated fields and leaves the rest alone
impl From<FilterCriteria> for FilterPatch {
    fn from(criteria: FilterCriteria) -> Self {
        Self {
            make: criteria.make.map(Some),
            model: criteria.model.map(Some),
            min_price: criteria.min_price.map(Some),
            max_price: criteria.max_price.map(Some),
            min_year: criteria.min_year.map(Some),
            max_year: criteria.max_year.map(Some),
            body_type: criteria.body_type.map(Some),
            fuel_type: criteria.fuel_type.map(Some),
            search_term: criteria.search_term.map(Some),
        }
    }
}

// Ordering applied to the filtered view
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Listing, // Source order
    PriceAsc,
    PriceDesc,
    YearDesc,
    MileageAsc,
}

// --- Backend feed records ---

// A car as returned by the marketplace backend (Spanish field names on the wire).
// Chassis/engine serials are also sent but not used by the catalog.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendCar {
    pub placa: String,
    pub year: i64,
    pub kilometraje: i64,
    pub precio: String, // Decimal string, e.g. "84700.00"
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(rename = "colorExterior", default)]
    pub color_exterior: String,
    #[serde(default)]
    pub imagen: String,
    #[serde(rename = "isNew", default)]
    pub is_new: i64, // 1 = new
    pub marca: String,
    pub modelo: String,
    #[serde(default)]
    pub imagenes: Vec<BackendImage>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendImage {
    pub url_imagen: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overrides_only_fields_present_in_partial() {
        let mut criteria = FilterCriteria {
            make: Some("BMW".to_string()),
            min_price: Some(10_000.0),
            ..Default::default()
        };

        criteria.merge(FilterCriteria {
            min_price: Some(50_000.0),
            body_type: Some("SUV".to_string()),
            ..Default::default()
        });

        assert_eq!(criteria.make.as_deref(), Some("BMW"));
        assert_eq!(criteria.min_price, Some(50_000.0));
        assert_eq!(criteria.body_type.as_deref(), Some("SUV"));
        assert_eq!(criteria.max_price, None);
    }

    #[test]
    fn merging_disjoint_fields_in_sequence_equals_merging_at_once() {
        let mut sequential = FilterCriteria::default();
        sequential.merge(FilterCriteria { min_price: Some(50_000.0), ..Default::default() });
        sequential.merge(FilterCriteria { max_price: Some(90_000.0), ..Default::default() });

        let mut combined = FilterCriteria::default();
        combined.merge(FilterCriteria {
            min_price: Some(50_000.0),
            max_price: Some(90_000.0),
            ..Default::default()
        });

        assert_eq!(sequential, combined);
    }

    #[test]
    fn criteria_deserialize_from_camel_case_partial() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"minPrice": 50000, "bodyType": "SUV"}"#).unwrap();
        assert_eq!(criteria.min_price, Some(50_000.0));
        assert_eq!(criteria.body_type.as_deref(), Some("SUV"));
        assert!(criteria.make.is_none());
    }

    #[test]
    fn patch_distinguishes_absent_null_and_value() {
        let patch: FilterPatch =
            serde_json::from_str(r#"{"maxPrice": null, "minYear": 2020}"#).unwrap();
        assert_eq!(patch.max_price, Some(None));
        assert_eq!(patch.min_year, Some(Some(2020)));
        assert_eq!(patch.make, None);

        let mut criteria = FilterCriteria {
            make: Some("BMW".to_string()),
            max_price: Some(40_000.0),
            ..Default::default()
        };
        criteria.merge(patch);
        assert_eq!(criteria.max_price, None);
        assert_eq!(criteria.min_year, Some(2020));
        assert_eq!(criteria.make.as_deref(), Some("BMW"));
    }

    #[test]
    fn sort_order_uses_kebab_case_names() {
        let order: SortOrder = serde_json::from_str(r#""price-desc""#).unwrap();
        assert_eq!(order, SortOrder::PriceDesc);
        assert_eq!(SortOrder::default(), SortOrder::Listing);
    }
}
