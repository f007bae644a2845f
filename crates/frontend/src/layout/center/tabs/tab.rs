use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        key.with_value(|k| tabs_store.active.with(|a| a.as_deref() == Some(k.as_str())))
    });

    let on_click = move |_| key.with_value(|k| tabs_store.activate_tab(k));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" title="Cerrar" on:click=on_close>{icon("x")}</button>
        </div>
    }
}
