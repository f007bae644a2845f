use crate::domain::a005_product_model::aggregate::ProductModel;
use crate::domain::a007_unit::aggregate::Unit;
use crate::domain::a008_formula::aggregate::Formula;
use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Producto: a model made with a formula, counted in a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub code: String,
    pub model_id: EntityId,
    pub formula_id: EntityId,
    pub unit_id: EntityId,
    /// Вес одной единицы, кг
    pub weight_kg: f64,
    #[serde(default)]
    pub model: Option<ProductModel>,
    #[serde(default)]
    pub formula: Option<Formula>,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Product {
    pub fn unit_abbreviation(&self) -> &str {
        self.unit.as_ref().map(|u| u.abbreviation.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(length(min = 1, max = 120, message = "entre 1 y 120 caracteres"), custom = "not_blank")]
    pub name: String,
    #[validate(length(min = 1, max = 30, message = "entre 1 y 30 caracteres"), custom = "not_blank")]
    pub code: String,
    #[validate(range(min = 1, message = "seleccione un modelo"))]
    pub model_id: i64,
    #[validate(range(min = 1, message = "seleccione una fórmula"))]
    pub formula_id: i64,
    #[validate(range(min = 1, message = "seleccione una unidad"))]
    pub unit_id: i64,
    #[validate(range(min = 0.0, max = 100000.0, message = "peso fuera de rango"))]
    pub weight_kg: f64,
}

impl AggregateRoot for Product {
    type Form = ProductForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    fn to_form(&self) -> Self::Form {
        ProductForm {
            name: self.name.clone(),
            code: self.code.clone(),
            model_id: self.model_id,
            formula_id: self.formula_id,
            unit_id: self.unit_id,
            weight_kg: self.weight_kg,
        }
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }

    fn screen() -> Screen {
        Screen::Products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;

    #[test]
    fn unselected_references_are_reported() {
        let form = ProductForm {
            name: "Tarima 120x100".into(),
            code: "TAR-120".into(),
            weight_kg: 18.5,
            ..Default::default()
        };
        let msg = validate_form(&form).unwrap_err();
        assert_eq!(
            msg,
            "formula_id: seleccione una fórmula; model_id: seleccione un modelo; unit_id: seleccione una unidad"
        );
    }

    #[test]
    fn complete_product_passes() {
        let form = ProductForm {
            name: "Tarima 120x100".into(),
            code: "TAR-120".into(),
            model_id: 1,
            formula_id: 2,
            unit_id: 0,
            weight_kg: 18.5,
        };
        assert_eq!(validate_form(&form).unwrap_err(), "unit_id: seleccione una unidad");
        assert!(validate_form(&ProductForm { unit_id: 3, ..form }).is_ok());
    }
}
