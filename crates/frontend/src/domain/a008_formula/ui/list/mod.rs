use crate::domain::a008_formula::ui::details::FormulaDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a008_formula::aggregate::Formula;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

fn color_name(f: &Formula) -> String {
    f.color
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("#{}", f.color_id))
}

#[component]
#[allow(non_snake_case)]
pub fn FormulaList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<Formula>::new("name");

    let columns = vec![
        Column::new("name", "Nombre", |f: &Formula| f.name.clone()).width(220.0),
        Column::new("color", "Color", color_name).width(140.0),
        Column::new("description", "Composición", |f: &Formula| f.description.clone()).width(300.0),
    ];

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <FormulaDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns on_open=on_open /> }
}
