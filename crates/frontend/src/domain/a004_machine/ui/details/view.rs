use super::view_model::MachineFields;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::details::{DetailsDialog, DetailsViewModel};
use contracts::domain::a003_sector_process::aggregate::SectorProcess;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MachineDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<MachineFields>::new(id);
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
                    <label class="form__label">"Código" <span class="form__required">"*"</span></label>
                    <Input value=f.code placeholder="INY-01" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Nombre" <span class="form__required">"*"</span></label>
                    <Input value=f.name placeholder="Inyectora Engel 150t" />
                </div>
            </div>
            <div class="form__group">
                <label class="form__label">"Sector / Proceso" <span class="form__required">"*"</span></label>
                <EntitySelect<SectorProcess> value=f.sector_process_id />
            </div>
        </DetailsDialog>
    }
}
