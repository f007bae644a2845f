use super::view_model::SectorFields;
use crate::shared::details::{DetailsDialog, DetailsViewModel};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SectorDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<SectorFields>::new(id);
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
                <Input value=f.name placeholder="Inyección" />
            </div>
            <div class="form__group">
                <label class="form__label">"Descripción"</label>
                <Textarea value=f.description placeholder="Área de la planta" />
            </div>
        </DetailsDialog>
    }
}
