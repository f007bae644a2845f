use crate::domain::a006_color::ui::details::ColorDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController, RowActions};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a006_color::aggregate::Color;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
#[allow(non_snake_case)]
pub fn ColorList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<Color>::new("name");

    let columns = vec![
        Column::new("name", "Nombre", |c: &Color| c.name.clone()).width(200.0),
        Column::new("hex", "Hex", |c: &Color| c.hex.clone()).width(100.0),
    ];

    // muestra del color junto a las acciones
    let swatch: RowActions<Color> = Arc::new(|c: &Color| {
        view! {
            <span class="color-swatch" style=format!("background: {};", c.hex) title=c.hex.clone()></span>
        }
        .into_any()
    });

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <ColorDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns on_open=on_open row_actions=swatch /> }
}
