use super::view_model::SectorProcessFields;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::details::{DetailsDialog, DetailsViewModel};
use contracts::domain::a001_sector::aggregate::Sector;
use contracts::domain::a002_process::aggregate::Process;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
pub fn SectorProcessDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<SectorProcessFields>::new(id);
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
                <label class="form__label">"Sector" <span class="form__required">"*"</span></label>
                <EntitySelect<Sector> value=f.sector_id />
            </div>
            <div class="form__group">
                <label class="form__label">"Proceso" <span class="form__required">"*"</span></label>
                <EntitySelect<Process> value=f.process_id />
            </div>
        </DetailsDialog>
    }
}
