use crate::layout::center::tabs::tab::Tab;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Tab bar plus the pages passed as children.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <Tab tab=tab /> }
                />
            </div>
            <Show when=move || tabs_store.opened.with(|t| t.is_empty())>
                <div class="tabs__empty">"Seleccione una opción del menú"</div>
            </Show>
            {children()}
        </div>
    }
}
