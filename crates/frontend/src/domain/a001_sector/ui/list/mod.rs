use crate::domain::a001_sector::ui::details::SectorDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController};
use crate::shared::date_utils::format_timestamp;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_sector::aggregate::Sector;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

fn columns() -> Vec<Column<Sector>> {
    vec![
        Column::new("name", "Nombre", |s: &Sector| s.name.clone()).width(200.0),
        Column::new("description", "Descripción", |s: &Sector| s.description.clone()).width(260.0),
        Column::new("updated_at", "Modificado", |s: &Sector| format_timestamp(&s.metadata.updated_at))
            .sort_by(|a: &Sector, b: &Sector| a.metadata.updated_at.cmp(&b.metadata.updated_at))
            .hidden(),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn SectorList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<Sector>::new("name");

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <SectorDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns() on_open=on_open /> }
}
