use super::details::WorkGroupDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController};
use crate::shared::date_utils::format_timestamp;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::common::EntityId;
use contracts::system::work_groups::WorkGroup;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn WorkGroupList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<WorkGroup>::new("name");

    let columns = vec![
        Column::new("name", "Nombre", |g: &WorkGroup| g.name.clone()).width(200.0),
        Column::new("description", "Descripción", |g: &WorkGroup| g.description.clone()).width(300.0),
        Column::new("updated_at", "Modificado", |g: &WorkGroup| format_timestamp(&g.metadata.updated_at))
            .width(140.0)
            .sort_by(|a: &WorkGroup, b: &WorkGroup| a.metadata.updated_at.cmp(&b.metadata.updated_at))
            .hidden(),
    ];

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            view! {
                <WorkGroupDetails id=id on_saved=on_saved on_cancel=Callback::new(move |_| handle.close()) />
            }
            .into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns on_open=on_open /> }
}
