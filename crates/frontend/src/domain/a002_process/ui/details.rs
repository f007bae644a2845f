use crate::shared::details::{DetailsDialog, DetailsViewModel, FormBinding};
use contracts::domain::a002_process::aggregate::{Process, ProcessForm};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
pub struct ProcessFields {
    name: RwSignal<String>,
    description: RwSignal<String>,
}

impl FormBinding for ProcessFields {
    type Entity = Process;

    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, form: &ProcessForm) {
        self.name.set(form.name.clone());
        self.description.set(form.description.clone());
    }

    fn read(&self) -> Result<ProcessForm, String> {
        Ok(ProcessForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
        })
    }
}

#[component]
pub fn ProcessDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<ProcessFields>::new(id);
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
                <Input value=f.name placeholder="Peletizado" />
            </div>
            <div class="form__group">
                <label class="form__label">"Descripción"</label>
                <Textarea value=f.description />
            </div>
        </DetailsDialog>
    }
}
