use crate::shared::details::FormBinding;
use contracts::domain::a001_sector::aggregate::{Sector, SectorForm};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SectorFields {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl FormBinding for SectorFields {
    type Entity = Sector;

    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, form: &SectorForm) {
        self.name.set(form.name.clone());
        self.description.set(form.description.clone());
    }

    fn read(&self) -> Result<SectorForm, String> {
        Ok(SectorForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
        })
    }
}
