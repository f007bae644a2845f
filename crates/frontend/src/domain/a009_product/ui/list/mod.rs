use crate::domain::a009_product::ui::details::ProductDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a009_product::aggregate::Product;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

fn columns() -> Vec<Column<Product>> {
    vec![
        Column::new("code", "Código", |p: &Product| p.code.clone()).width(110.0),
        Column::new("name", "Nombre", |p: &Product| p.name.clone()).width(220.0),
        Column::new("model", "Modelo", |p: &Product| {
            p.model.as_ref().map(|m| m.name.clone()).unwrap_or_default()
        }),
        Column::new("formula", "Fórmula", |p: &Product| {
            p.formula.as_ref().map(|f| f.name.clone()).unwrap_or_default()
        }),
        Column::new("unit", "Unidad", |p: &Product| p.unit_abbreviation().to_string()).width(80.0),
        Column::new("weight_kg", "Peso, kg", |p: &Product| format!("{:.3}", p.weight_kg))
            .width(90.0)
            .sort_by(|a: &Product, b: &Product| a.weight_kg.total_cmp(&b.weight_kg)),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<Product>::new("code");

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <ProductDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns() on_open=on_open /> }
}
