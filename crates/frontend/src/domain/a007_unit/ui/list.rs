use super::details::UnitDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a007_unit::aggregate::Unit;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn UnitList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<Unit>::new("name");

    let columns = vec![
        Column::new("name", "Nombre", |u: &Unit| u.name.clone()).width(200.0),
        Column::new("abbreviation", "Abreviatura", |u: &Unit| u.abbreviation.clone()).width(100.0),
    ];

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <UnitDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns on_open=on_open /> }
}
