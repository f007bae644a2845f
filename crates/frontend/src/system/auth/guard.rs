use contracts::system::permissions::{Action, Screen};
use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only when the user may view `screen`
/// in the active sector.
#[component]
pub fn RequireScreen(screen: Screen, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access.can(screen, Action::View))
            fallback=move || view! {
                <div class="alert alert--warning">
                    {format!("Sin acceso a «{}» en el sector activo", screen.label())}
                </div>
            }
        >
            {children()}
        </Show>
    }
}
