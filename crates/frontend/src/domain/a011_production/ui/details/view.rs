use super::view_model::ProductionFields;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::details::{DetailsDialog, DetailsViewModel};
use contracts::domain::a004_machine::aggregate::Machine;
use contracts::domain::a010_production_order::aggregate::OrderDetail;
use contracts::domain::a011_production::aggregate::Quality;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

/// `<select>` over [`Quality::ALL`] bound to the quality code.
#[component]
pub fn QualitySelect(value: RwSignal<String>) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            {Quality::ALL.iter().map(|q| {
                let code = q.code();
                view! {
                    <option value=code selected=move || value.get() == code>{q.label()}</option>
                }
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn ProductionDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<ProductionFields>::new(id);
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
                    <label class="form__label">"Lote" <span class="form__required">"*"</span></label>
                    <Input value=f.lot_code placeholder="L240603-001" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Calidad"</label>
                    <QualitySelect value=f.quality />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Máquina" <span class="form__required">"*"</span></label>
                    <EntitySelect<Machine> value=f.machine_id />
                </div>
                <div class="form__group">
                    <label class="form__label">"Renglón de orden"</label>
                    <EntitySelect<OrderDetail> value=f.order_detail_id placeholder="— sin orden —" />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Inicio" <span class="form__required">"*"</span></label>
                    <input
                        type="datetime-local"
                        class="form__input"
                        prop:value=move || f.started_at.get()
                        on:change=move |ev| f.started_at.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Fin" <span class="form__required">"*"</span></label>
                    <input
                        type="datetime-local"
                        class="form__input"
                        prop:value=move || f.finished_at.get()
                        on:change=move |ev| f.finished_at.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Peso, kg"</label>
                    <Input value=f.weight_kg placeholder="opcional" />
                </div>
            </div>
            <div class="form__group">
                <label class="form__label">"Descripción"</label>
                <Textarea value=f.description />
            </div>
        </DetailsDialog>
    }
}
