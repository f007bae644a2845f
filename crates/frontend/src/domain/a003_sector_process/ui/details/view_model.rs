use crate::shared::components::entity_select::{id_or_zero, non_zero};
use crate::shared::details::FormBinding;
use contracts::domain::a003_sector_process::aggregate::{SectorProcess, SectorProcessForm};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SectorProcessFields {
    pub sector_id: RwSignal<Option<EntityId>>,
    pub process_id: RwSignal<Option<EntityId>>,
}

impl FormBinding for SectorProcessFields {
    type Entity = SectorProcess;

    fn new() -> Self {
        Self {
            sector_id: RwSignal::new(None),
            process_id: RwSignal::new(None),
        }
    }

    fn fill(&self, form: &SectorProcessForm) {
        self.sector_id.set(non_zero(form.sector_id));
        self.process_id.set(non_zero(form.process_id));
    }

    fn read(&self) -> Result<SectorProcessForm, String> {
        Ok(SectorProcessForm {
            sector_id: id_or_zero(self.sector_id.get_untracked()),
            process_id: id_or_zero(self.process_id.get_untracked()),
        })
    }
}
