use crate::domain::a010_production_order::api;
use crate::domain::a010_production_order::ui::details::ProductionOrderDetails;
use crate::shared::components::crud_table::{Column, CrudPage, Fetcher, ListController, ListFuture};
use crate::shared::components::date_range_filter::DateRangeFilter;
use crate::shared::crud;
use crate::shared::date_utils::format_naive_date;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::Notifier;
use contracts::domain::a010_production_order::aggregate::ProductionOrder;
use contracts::domain::a011_production::aggregate::ProductionDateRange;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

fn columns() -> Vec<Column<ProductionOrder>> {
    vec![
        Column::new("code", "Código", |o: &ProductionOrder| o.code.clone()).width(130.0),
        Column::new("due_date", "Entrega", |o: &ProductionOrder| format_naive_date(&o.due_date))
            .width(110.0)
            .sort_by(|a: &ProductionOrder, b: &ProductionOrder| a.due_date.cmp(&b.due_date)),
        Column::new("status", "Estado", |o: &ProductionOrder| o.status.label().to_string()).width(110.0),
        Column::new("lines", "Renglones", |o: &ProductionOrder| {
            o.details.iter().filter(|d| !d.metadata.is_deleted()).count().to_string()
        })
        .width(90.0)
        .hidden(),
        Column::new("total_quantity", "Cantidad total", |o: &ProductionOrder| {
            format!("{:.2}", o.total_quantity())
        })
        .width(120.0)
        .sort_by(|a: &ProductionOrder, b: &ProductionOrder| {
            a.total_quantity().total_cmp(&b.total_quantity())
        }),
        Column::new("description", "Descripción", |o: &ProductionOrder| o.description.clone()),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ProductionOrderList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let range = RwSignal::new(None::<ProductionDateRange>);

    // без диапазона грузим всю коллекцию
    let fetcher: Fetcher<ProductionOrder> = Arc::new(move |notifier: Notifier| -> ListFuture<ProductionOrder> {
        let selected = range.get_untracked();
        Box::pin(async move {
            match selected {
                Some(r) => api::list_by_date(r, notifier).await,
                None => crud::list::<ProductionOrder>(notifier).await,
            }
        })
    });
    let controller = ListController::with_fetcher("due_date", fetcher);

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push_wide(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <ProductionOrderDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    let filters: ChildrenFn = Arc::new(move || {
        view! {
            <DateRangeFilter range=range on_change=Callback::new(move |_| controller.reload()) />
        }
        .into_any()
    });

    let open_count = move || {
        controller.rows.with(|rows| rows.iter().filter(|o| !o.metadata.is_deleted() && o.status.is_open()).count())
    };
    let actions: ChildrenFn = Arc::new(move || {
        view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                {move || format!("{} abiertas", open_count())}
            </Badge>
        }
        .into_any()
    });

    view! {
        <CrudPage
            controller=controller
            columns=columns()
            on_open=on_open
            filters=filters
            actions=actions
        />
    }
}
