use crate::shared::components::crud_table::{Column, CrudPage, ListController, RowActions};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::use_access;
use crate::system::permissions::ui::PermissionMatrixDialog;
use crate::system::users::ui::details::UserDetails;
use crate::system::users::ui::password::ChangePasswordDialog;
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::system::permissions::{Action, Screen};
use contracts::system::users::SystemUser;
use leptos::prelude::*;
use std::sync::Arc;

fn yes_no(value: bool) -> String {
    if value { "Sí" } else { "No" }.to_string()
}

fn columns() -> Vec<Column<SystemUser>> {
    vec![
        Column::new("username", "Usuario", |u: &SystemUser| u.username.clone()).width(130.0),
        Column::new("full_name", "Nombre", |u: &SystemUser| u.full_name.clone()).width(200.0),
        Column::new("email", "Correo", |u: &SystemUser| u.email.clone().unwrap_or_default()),
        Column::new("work_group", "Grupo", |u: &SystemUser| {
            u.work_group.as_ref().map(|g| g.name.clone()).unwrap_or_default()
        }),
        Column::new("is_admin", "Admin", |u: &SystemUser| yes_no(u.is_admin)).width(70.0),
        Column::new("is_active", "Activo", |u: &SystemUser| yes_no(u.is_active)).width(70.0),
        Column::new("created_at", "Creado", |u: &SystemUser| format_timestamp(&u.metadata.created_at))
            .width(140.0)
            .sort_by(|a: &SystemUser, b: &SystemUser| a.metadata.created_at.cmp(&b.metadata.created_at))
            .hidden(),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let access = use_access();
    let controller = ListController::<SystemUser>::new("username");

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <UserDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    let open_password = move |user_id: EntityId, username: String| {
        modal_stack.push(move |handle| {
            let on_done = Callback::new(move |_| handle.close());
            view! { <ChangePasswordDialog user_id=user_id username=username.clone() on_done=on_done /> }
                .into_any()
        });
    };

    let open_matrix = move |user_id: EntityId, title: String| {
        modal_stack.push_wide(move |handle| {
            let on_done = Callback::new(move |_| handle.close());
            view! { <PermissionMatrixDialog user_id=user_id title=title.clone() on_done=on_done /> }
                .into_any()
        });
    };

    // администраторы видят всё, матрица им не нужна
    let extra: RowActions<SystemUser> = Arc::new(move |u: &SystemUser| {
        let user_id = u.id;
        let username = u.username.clone();
        let title = u.display_name();
        let show_matrix = !u.is_admin && !u.is_deleted();
        let can_edit_users = move || access.with(|a| a.can(SystemUser::screen(), Action::Edit));
        let can_edit_matrix = move || access.with(|a| a.can(Screen::Permissions, Action::Edit));
        view! {
            <Show when=can_edit_users>
                <button
                    class="button button--icon"
                    title="Cambiar contraseña"
                    on:click={
                        let username = username.clone();
                        move |_| open_password(user_id, username.clone())
                    }
                >
                    {icon("key")}
                </button>
            </Show>
            <Show when=move || show_matrix && can_edit_matrix()>
                <button
                    class="button button--icon"
                    title="Permisos"
                    on:click={
                        let title = title.clone();
                        move |_| open_matrix(user_id, title.clone())
                    }
                >
                    {icon("shield")}
                </button>
            </Show>
        }
        .into_any()
    });

    view! { <CrudPage controller=controller columns=columns() on_open=on_open row_actions=extra /> }
}
