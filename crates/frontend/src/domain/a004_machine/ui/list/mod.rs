use crate::domain::a004_machine::ui::details::MachineDetails;
use crate::shared::components::crud_table::{Column, CrudPage, ListController};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_machine::aggregate::Machine;
use contracts::domain::common::{AggregateRoot, EntityId};
use leptos::prelude::*;

fn sector_process_label(m: &Machine) -> String {
    m.sector_process
        .as_ref()
        .map(|sp| sp.display_name())
        .unwrap_or_else(|| format!("#{}", m.sector_process_id))
}

#[component]
#[allow(non_snake_case)]
pub fn MachineList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let controller = ListController::<Machine>::new("code");

    let columns = vec![
        Column::new("code", "Código", |m: &Machine| m.code.clone()).width(100.0),
        Column::new("name", "Nombre", |m: &Machine| m.name.clone()).width(220.0),
        Column::new("sector_process", "Sector / Proceso", sector_process_label).width(220.0),
    ];

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <MachineDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    view! { <CrudPage controller=controller columns=columns on_open=on_open /> }
}
