use crate::shared::details::{DetailsDialog, DetailsViewModel, FormBinding};
use contracts::domain::a007_unit::aggregate::{Unit, UnitForm};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
pub struct UnitFields {
    name: RwSignal<String>,
    abbreviation: RwSignal<String>,
}

impl FormBinding for UnitFields {
    type Entity = Unit;

    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            abbreviation: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, form: &UnitForm) {
        self.name.set(form.name.clone());
        self.abbreviation.set(form.abbreviation.clone());
    }

    fn read(&self) -> Result<UnitForm, String> {
        Ok(UnitForm {
            name: self.name.get_untracked(),
            abbreviation: self.abbreviation.get_untracked().trim().to_string(),
        })
    }
}

#[component]
pub fn UnitDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<UnitFields>::new(id);
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
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Nombre" <span class="form__required">"*"</span></label>
                    <Input value=f.name placeholder="Kilogramo" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Abreviatura" <span class="form__required">"*"</span></label>
                    <Input value=f.abbreviation placeholder="kg" />
                </div>
            </div>
        </DetailsDialog>
    }
}
