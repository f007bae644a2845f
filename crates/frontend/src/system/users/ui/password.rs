use crate::shared::icons::icon;
use crate::shared::notify::Notifier;
use crate::system::users::api;
use contracts::domain::common::EntityId;
use contracts::system::users::ChangePasswordDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const MIN_LENGTH: usize = 6;

/// Checks both inputs before anything is sent.
pub fn check_new_password(password: &str, confirm: &str) -> Result<(), String> {
    if password.chars().count() < MIN_LENGTH {
        return Err(format!("la contraseña necesita al menos {} caracteres", MIN_LENGTH));
    }
    if password != confirm {
        return Err("las contraseñas no coinciden".to_string());
    }
    Ok(())
}

/// Contraseña de otro usuario, la cambia el administrador.
#[component]
pub fn ChangePasswordDialog(
    user_id: EntityId,
    #[prop(into)] username: String,
    on_done: Callback<()>,
) -> impl IntoView {
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let notifier = Notifier::new();

    let submit = move |_| {
        let new_password = password.get_untracked();
        if let Err(e) = check_new_password(&new_password, &confirm.get_untracked()) {
            error.set(Some(e));
            return;
        }
        error.set(None);
        saving.set(true);
        let dto = ChangePasswordDto {
            user_id,
            old_password: None,
            new_password,
        };
        spawn_local(async move {
            let result = api::change_password(&dto, notifier).await;
            saving.set(false);
            match result {
                Ok(()) => on_done.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-dialog">
            <div class="modal-header">
                <h3 class="modal-title">{icon("key")} {format!(" Contraseña: {}", username)}</h3>
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="modal-body">
                <div class="form__group">
                    <label class="form__label">"Nueva contraseña"</label>
                    <Input value=password input_type=InputType::Password />
                </div>
                <div class="form__group">
                    <label class="form__label">"Confirmar"</label>
                    <Input value=confirm input_type=InputType::Password />
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_done.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Guardando..." } else { "Cambiar" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_password_must_be_long_and_confirmed() {
        assert!(check_new_password("12345", "12345").is_err());
        assert_eq!(
            check_new_password("secreto1", "secreto2").unwrap_err(),
            "las contraseñas no coinciden"
        );
        assert!(check_new_password("contraseña", "contraseña").is_ok());
    }
}
