use super::view_model::FormulaFields;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::details::{DetailsDialog, DetailsViewModel};
use contracts::domain::a006_color::aggregate::Color;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn FormulaDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<FormulaFields>::new(id);
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
                <Input value=f.name placeholder="PEAD reciclado 70/30" />
            </div>
            <div class="form__group">
                <label class="form__label">"Color" <span class="form__required">"*"</span></label>
                <EntitySelect<Color> value=f.color_id />
            </div>
            <div class="form__group">
                <label class="form__label">"Composición"</label>
                <Textarea value=f.description placeholder="70% virgen, 30% molido..." />
            </div>
        </DetailsDialog>
    }
}
