use super::details::ProductModelDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a005_product_model::aggregate::ProductModel;
use contracts::domain::common::{AggregateRoot, EntityId};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductModelList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<ProductModel>::new("name");

    let columns = vec![
        Column::new("name", "Nombre", |m: &ProductModel| m.name.clone()).width(200.0),
        Column::new("sector_process", "Sector / Proceso", |m: &ProductModel| {
            m.sector_process
                .as_ref()
                .map(|sp| sp.display_name())
                .unwrap_or_else(|| format!("#{}", m.sector_process_id))
        })
        .width(220.0),
        Column::new("description", "Descripción", |m: &ProductModel| m.description.clone()).width(260.0),
    ];

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <ProductModelDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns on_open=on_open /> }
}
