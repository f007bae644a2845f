//! Application Shell - корневые компоненты приложения
//!
//! - `AppShell` - auth gate (LoginPage или MainLayout)
//! - `MainLayout` - Shell + Sidebar + Tabs

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::{use_auth, visible_screens};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Main layout, синхронизирует табы с URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    let (auth_state, _) = use_auth();

    tabs_store.init_router_integration();

    // смена сектора может убрать доступ к открытым экранам
    Effect::new(move |_| {
        let visible = auth_state.with(visible_screens);
        tabs_store.retain_screens(&visible);
    });

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access_token.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
