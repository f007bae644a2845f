use crate::domain::a011_production::api;
use crate::domain::a011_production::ui::details::ProductionDetails;
use crate::domain::a011_production::ui::lots::LotGeneratorDialog;
use crate::shared::components::crud_table::{Column, CrudPage, Fetcher, ListController, ListFuture};
use crate::shared::components::date_range_filter::{current_month, DateRangeFilter};
use crate::shared::crud;
use crate::shared::date_utils::{format_timestamp, today};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::Notifier;
use crate::system::auth::context::use_access;
use contracts::domain::a011_production::aggregate::{Production, ProductionDateRange};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::system::permissions::Action;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

fn columns() -> Vec<Column<Production>> {
    vec![
        Column::new("lot_code", "Lote", |p: &Production| p.lot_code.clone()).width(130.0),
        Column::new("machine", "Máquina", |p: &Production| p.machine_name()).width(160.0),
        Column::new("order_detail", "Orden", |p: &Production| {
            p.order_detail.as_ref().map(|d| d.display_name()).unwrap_or_default()
        }),
        Column::new("quality", "Calidad", |p: &Production| p.quality.label().to_string()).width(90.0),
        Column::new("started_at", "Inicio", |p: &Production| format_timestamp(&p.started_at))
            .width(140.0)
            .sort_by(|a: &Production, b: &Production| a.started_at.cmp(&b.started_at)),
        Column::new("finished_at", "Fin", |p: &Production| format_timestamp(&p.finished_at))
            .width(140.0)
            .sort_by(|a: &Production, b: &Production| a.finished_at.cmp(&b.finished_at)),
        Column::new("duration", "Min", |p: &Production| p.duration_minutes().to_string())
            .width(70.0)
            .sort_by(|a: &Production, b: &Production| a.duration_minutes().cmp(&b.duration_minutes())),
        Column::new("weight_kg", "Peso, kg", |p: &Production| {
            p.weight_kg.map(|w| format!("{:.3}", w)).unwrap_or_default()
        })
        .width(90.0)
        .sort_by(|a: &Production, b: &Production| {
            a.weight_kg.unwrap_or(0.0).total_cmp(&b.weight_kg.unwrap_or(0.0))
        }),
        Column::new("description", "Descripción", |p: &Production| p.description.clone()).hidden(),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ProductionList() -> impl IntoView {
    let modal_stack = expect_context::<ModalStackService>();
    let access = use_access();
    // производство по умолчанию за текущий месяц
    let range = RwSignal::new(Some(current_month(today())));

    let fetcher: Fetcher<Production> = Arc::new(move |notifier: Notifier| -> ListFuture<Production> {
        let selected: Option<ProductionDateRange> = range.get_untracked();
        Box::pin(async move {
            match selected {
                Some(r) => api::list_by_date(r, notifier).await,
                None => crud::list::<Production>(notifier).await,
            }
        })
    });
    let controller = ListController::with_fetcher("started_at", fetcher);

    let on_open = Callback::new(move |id: Option<EntityId>| {
        modal_stack.push_wide(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <ProductionDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    });

    let open_generator = move |_| {
        modal_stack.push_wide(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                controller.reload();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <LotGeneratorDialog on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    let filters: ChildrenFn = Arc::new(move || {
        view! {
            <DateRangeFilter range=range on_change=Callback::new(move |_| controller.reload()) />
        }
        .into_any()
    });

    let can_create = move || access.with(|a| a.can(Production::screen(), Action::Create));
    let actions: ChildrenFn = Arc::new(move || {
        view! {
            <Show when=can_create>
                <Button appearance=ButtonAppearance::Secondary on_click=open_generator>
                    {icon("scissors")}
                    " Generar lotes"
                </Button>
            </Show>
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
