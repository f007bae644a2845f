use super::view_model::ProductFields;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::details::{DetailsDialog, DetailsViewModel};
use contracts::domain::a005_product_model::aggregate::ProductModel;
use contracts::domain::a007_unit::aggregate::Unit;
use contracts::domain::a008_formula::aggregate::Formula;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<ProductFields>::new(id);
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
                    <Input value=f.code placeholder="CUB-19-AZ" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Nombre" <span class="form__required">"*"</span></label>
                    <Input value=f.name placeholder="Cubeta 19 L azul" />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Modelo" <span class="form__required">"*"</span></label>
                    <EntitySelect<ProductModel> value=f.model_id />
                </div>
                <div class="form__group">
                    <label class="form__label">"Fórmula" <span class="form__required">"*"</span></label>
                    <EntitySelect<Formula> value=f.formula_id />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Unidad" <span class="form__required">"*"</span></label>
                    <EntitySelect<Unit> value=f.unit_id />
                </div>
                <div class="form__group">
                    <label class="form__label">"Peso unitario, kg"</label>
                    <Input value=f.weight_kg placeholder="0.850" />
                </div>
            </div>
        </DetailsDialog>
    }
}
