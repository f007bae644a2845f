use super::view_model::UserFields;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::details::{DetailsDialog, DetailsViewModel};
use contracts::domain::common::EntityId;
use contracts::system::work_groups::WorkGroup;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UserDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<UserFields>::new(id);
    vm.load();
    let f = vm.fields;
    let is_new = !vm.is_edit_mode();
    let password_hint = if is_new { "mínimo 6 caracteres" } else { "vacío = sin cambios" };

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
                    <label class="form__label">"Usuario" <span class="form__required">"*"</span></label>
                    <Input value=f.username placeholder="operador1" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Nombre completo" <span class="form__required">"*"</span></label>
                    <Input value=f.full_name />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Correo"</label>
                    <Input value=f.email input_type=InputType::Email />
                </div>
                <div class="form__group">
                    <label class="form__label">"Grupo de trabajo"</label>
                    <EntitySelect<WorkGroup> value=f.work_group_id placeholder="— sin grupo —" />
                </div>
            </div>
            <div class="form__group">
                <label class="form__label">
                    "Contraseña"
                    {is_new.then(|| view! { <span class="form__required">"*"</span> })}
                </label>
                <Input
                    value=f.password
                    input_type=InputType::Password
                    placeholder=password_hint
                />
            </div>
            <div class="form__row">
                <Switch checked=f.is_admin label="Administrador" />
                <Switch checked=f.is_active label="Activo" />
            </div>
        </DetailsDialog>
    }
}
