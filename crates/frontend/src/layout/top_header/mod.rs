//! Top bar: sidebar toggle, brand, active sector, user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::{do_logout, set_active_sector, use_auth};
use contracts::domain::a001_sector::aggregate::Sector;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let modal_stack = expect_context::<ModalStackService>();
    let (auth_state, set_auth_state) = use_auth();

    let sector = RwSignal::new(auth_state.with_untracked(|s| s.access.active_sector));
    Effect::new(move |_| {
        let chosen = sector.get();
        if auth_state.with_untracked(|s| s.access.active_sector) != chosen {
            log::info!("active sector -> {:?}", chosen);
            set_active_sector(set_auth_state, chosen);
        }
    });

    let logout = move |_| {
        modal_stack.clear();
        ctx.close_all();
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Producción y reciclado"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__sector" title="Sector activo">
                    {icon("factory")}
                    <EntitySelect<Sector> value=sector placeholder="Todos los sectores" />
                </div>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.with(|s| s.user_info.as_ref().map(|u| {
                            u.full_name.clone().filter(|n| !n.trim().is_empty()).unwrap_or_else(|| u.username.clone())
                        }).unwrap_or_default())}
                    </span>
                    <Show when=move || auth_state.with(|s| s.is_admin())>
                        <span class="top-header__badge">"admin"</span>
                    </Show>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Salir">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
