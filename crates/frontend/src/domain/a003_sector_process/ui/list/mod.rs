use crate::domain::a003_sector_process::ui::details::SectorProcessDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a003_sector_process::aggregate::SectorProcess;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

fn columns() -> Vec<Column<SectorProcess>> {
    vec![
        Column::new("sector", "Sector", |sp: &SectorProcess| sp.sector_name()).width(200.0),
        Column::new("process", "Proceso", |sp: &SectorProcess| sp.process_name()).width(200.0),
        Column::new("id", "ID", |sp: &SectorProcess| sp.id.to_string())
            .width(80.0)
            .sort_by(|a: &SectorProcess, b: &SectorProcess| a.id.cmp(&b.id))
            .hidden(),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn SectorProcessList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<SectorProcess>::new("sector");

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <SectorProcessDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns() on_open=on_open /> }
}
