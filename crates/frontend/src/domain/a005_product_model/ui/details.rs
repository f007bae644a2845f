use crate::shared::components::entity_select::{id_or_zero, non_zero, EntitySelect};
use crate::shared::details::{DetailsDialog, DetailsViewModel, FormBinding};
use contracts::domain::a003_sector_process::aggregate::SectorProcess;
use contracts::domain::a005_product_model::aggregate::{ProductModel, ProductModelForm};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
pub struct ProductModelFields {
    name: RwSignal<String>,
    description: RwSignal<String>,
    sector_process_id: RwSignal<Option<EntityId>>,
}

impl FormBinding for ProductModelFields {
    type Entity = ProductModel;

    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            sector_process_id: RwSignal::new(None),
        }
    }

    fn fill(&self, form: &ProductModelForm) {
        self.name.set(form.name.clone());
        self.description.set(form.description.clone());
        self.sector_process_id.set(non_zero(form.sector_process_id));
    }

    fn read(&self) -> Result<ProductModelForm, String> {
        Ok(ProductModelForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            sector_process_id: id_or_zero(self.sector_process_id.get_untracked()),
        })
    }
}

#[component]
pub fn ProductModelDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<ProductModelFields>::new(id);
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
                <Input value=f.name placeholder="Cubeta 19 L" />
            </div>
            <div class="form__group">
                <label class="form__label">"Sector / Proceso" <span class="form__required">"*"</span></label>
                <EntitySelect<SectorProcess> value=f.sector_process_id />
            </div>
            <div class="form__group">
                <label class="form__label">"Descripción"</label>
                <Textarea value=f.description />
            </div>
        </DetailsDialog>
    }
}
