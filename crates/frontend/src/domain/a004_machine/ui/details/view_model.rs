use crate::shared::components::entity_select::{id_or_zero, non_zero};
use crate::shared::details::FormBinding;
use contracts::domain::a004_machine::aggregate::{Machine, MachineForm};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MachineFields {
    pub name: RwSignal<String>,
    pub code: RwSignal<String>,
    pub sector_process_id: RwSignal<Option<EntityId>>,
}

impl FormBinding for MachineFields {
    type Entity = Machine;

    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            code: RwSignal::new(String::new()),
            sector_process_id: RwSignal::new(None),
        }
    }

    fn fill(&self, form: &MachineForm) {
        self.name.set(form.name.clone());
        self.code.set(form.code.clone());
        self.sector_process_id.set(non_zero(form.sector_process_id));
    }

    fn read(&self) -> Result<MachineForm, String> {
        Ok(MachineForm {
            name: self.name.get_untracked(),
            // codes are upper case on the plant floor
            code: self.code.get_untracked().trim().to_uppercase(),
            sector_process_id: id_or_zero(self.sector_process_id.get_untracked()),
        })
    }
}
