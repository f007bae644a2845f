use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::crud::ApiError;
use crate::system::auth::context::{do_login, use_auth};

fn login_error_text(error: &ApiError) -> String {
    match error {
        ApiError::Unauthenticated => "Usuario o contraseña incorrectos".to_string(),
        other => format!("No se pudo iniciar sesión: {}", other),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if username_val.is_empty() || password_val.is_empty() {
            error_message.set(Some("Escriba usuario y contraseña".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            // при успехе AuthState переключит App на оболочку
            if let Err(e) = do_login(username_val, password_val, set_auth_state).await {
                log::warn!("login failed: {}", e);
                error_message.set(Some(login_error_text(&e)));
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <form
                class="login-box"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1>"Planta"</h1>
                <h2>"Producción y reciclado"</h2>

                {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label">"Usuario"</label>
                    <Input value=username disabled=Signal::derive(move || is_loading.get()) />
                </div>

                <div class="form__group">
                    <label class="form__label">"Contraseña"</label>
                    <Input
                        value=password
                        input_type=InputType::Password
                        disabled=Signal::derive(move || is_loading.get())
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Submit
                    disabled=Signal::derive(move || is_loading.get())
                >
                    {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                </Button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_credentials_get_a_plain_message() {
        assert_eq!(login_error_text(&ApiError::Unauthenticated), "Usuario o contraseña incorrectos");
        assert!(login_error_text(&ApiError::Network("timeout".into())).starts_with("No se pudo"));
    }
}
