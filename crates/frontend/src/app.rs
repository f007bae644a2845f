use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs state for the whole app
    provide_context(AppGlobalContext::new());

    // Stacked dialogs, rendered once by ModalHost
    provide_context(ModalStackService::new());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AuthProvider>
                    <AppShell />
                    <ModalHost />
                </AuthProvider>
            </ToasterProvider>
        </ConfigProvider>
    }
}
