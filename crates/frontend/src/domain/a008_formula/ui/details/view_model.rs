use crate::shared::components::entity_select::{id_or_zero, non_zero};
use crate::shared::details::FormBinding;
use contracts::domain::a008_formula::aggregate::{Formula, FormulaForm};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FormulaFields {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub color_id: RwSignal<Option<EntityId>>,
}

impl FormBinding for FormulaFields {
    type Entity = Formula;

    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            color_id: RwSignal::new(None),
        }
    }

    fn fill(&self, form: &FormulaForm) {
        self.name.set(form.name.clone());
        self.description.set(form.description.clone());
        self.color_id.set(non_zero(form.color_id));
    }

    fn read(&self) -> Result<FormulaForm, String> {
        Ok(FormulaForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            color_id: id_or_zero(self.color_id.get_untracked()),
        })
    }
}
