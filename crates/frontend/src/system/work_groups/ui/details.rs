use crate::shared::details::{DetailsDialog, DetailsViewModel, FormBinding};
use contracts::domain::common::EntityId;
use contracts::system::work_groups::{WorkGroup, WorkGroupForm};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
pub struct WorkGroupFields {
    name: RwSignal<String>,
    description: RwSignal<String>,
}

impl FormBinding for WorkGroupFields {
    type Entity = WorkGroup;

    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, form: &WorkGroupForm) {
        self.name.set(form.name.clone());
        self.description.set(form.description.clone());
    }

    fn read(&self) -> Result<WorkGroupForm, String> {
        Ok(WorkGroupForm {
            name: self.name.get_untracked().trim().to_string(),
            description: self.description.get_untracked(),
        })
    }
}

#[component]
pub fn WorkGroupDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<WorkGroupFields>::new(id);
    vm.load();
    let f = vm.fields;

    view! {
        <DetailsDialog
            title=Signal::derive(move || vm.title())
            error=vm.error
            loading=vm.loading
            saving=vm.saving
            on_save=Callback::new(move |_| vm.save(on_saved))
            on_cancel=on_cancel
        >
            <div class="form__group">
                <label class="form__label">"Nombre" <span class="form__required">"*"</span></label>
                <Input value=f.name placeholder="Turno A" />
            </div>
            <div class="form__group">
                <label class="form__label">"Descripción"</label>
                <Textarea value=f.description />
            </div>
        </DetailsDialog>
    }
}
