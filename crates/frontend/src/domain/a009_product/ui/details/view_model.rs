use crate::shared::components::entity_select::{id_or_zero, non_zero};
use crate::shared::details::{decimal_text, parse_decimal, FormBinding};
use contracts::domain::a009_product::aggregate::{Product, ProductForm};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductFields {
    pub name: RwSignal<String>,
    pub code: RwSignal<String>,
    pub model_id: RwSignal<Option<EntityId>>,
    pub formula_id: RwSignal<Option<EntityId>>,
    pub unit_id: RwSignal<Option<EntityId>>,
    /// Текст поля, parsed on save
    pub weight_kg: RwSignal<String>,
}

impl FormBinding for ProductFields {
    type Entity = Product;

    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            code: RwSignal::new(String::new()),
            model_id: RwSignal::new(None),
            formula_id: RwSignal::new(None),
            unit_id: RwSignal::new(None),
            weight_kg: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, form: &ProductForm) {
        self.name.set(form.name.clone());
        self.code.set(form.code.clone());
        self.model_id.set(non_zero(form.model_id));
        self.formula_id.set(non_zero(form.formula_id));
        self.unit_id.set(non_zero(form.unit_id));
        self.weight_kg.set(decimal_text(form.weight_kg));
    }

    fn read(&self) -> Result<ProductForm, String> {
        Ok(ProductForm {
            name: self.name.get_untracked(),
            code: self.code.get_untracked().trim().to_uppercase(),
            model_id: id_or_zero(self.model_id.get_untracked()),
            formula_id: id_or_zero(self.formula_id.get_untracked()),
            unit_id: id_or_zero(self.unit_id.get_untracked()),
            weight_kg: parse_decimal("weight_kg", &self.weight_kg.get_untracked())?,
        })
    }
}
