use super::details::ProcessDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_process::aggregate::Process;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProcessList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<Process>::new("name");

    let columns = vec![
        Column::new("name", "Nombre", |p: &Process| p.name.clone()).width(200.0),
        Column::new("description", "Descripción", |p: &Process| p.description.clone()).width(300.0),
    ];

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            view! {
                <ProcessDetails id=id on_saved=on_saved on_cancel=Callback::new(move |_| handle.close()) />
            }
            .into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns on_open=on_open /> }
}
