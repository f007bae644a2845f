use super::view_model::OrderFields;
use crate::shared::components::entity_select::select_options;
use crate::shared::crud;
use crate::shared::details::{DetailsDialog, DetailsViewModel};
use crate::shared::icons::icon;
use contracts::domain::a009_product::aggregate::Product;
use contracts::domain::a010_production_order::aggregate::OrderStatus;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ProductionOrderDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<OrderFields>::new(id);
    vm.load();
    let f = vm.fields;

    // один запрос на весь диалог, не на каждую строку
    let products = RwSignal::new(Vec::<Product>::new());
    let notifier = vm.notifier();
    spawn_local(async move {
        if let Ok(list) = crud::list::<Product>(notifier).await {
            products.set(list);
        }
    });

    let total = move || {
        f.lines.with(|lines| {
            lines
                .iter()
                .filter_map(|l| l.quantity.trim().replace(',', ".").parse::<f64>().ok())
                .sum::<f64>()
        })
    };

    view! {
        <DetailsDialog
            title=Signal::derive(move || vm.title())
            error=vm.error
            loading=vm.loading
            saving=vm.saving
            on_save=Callback::new(move |_| vm.save(on_saved))
            on_cancel=on_cancel
        >
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Código" <span class="form__required">"*"</span></label>
                    <Input value=f.code placeholder="OP-2024-001" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Fecha de entrega" <span class="form__required">"*"</span></label>
                    <input
                        type="date"
                        class="form__input form__input--date"
                        prop:value=move || f.due_date.get()
                        on:change=move |ev| f.due_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Estado"</label>
                    <select
                        class="form__select"
                        prop:value=move || f.status.get()
                        on:change=move |ev| f.status.set(event_target_value(&ev))
                    >
                        {OrderStatus::ALL.iter().map(|s| {
                            let code = s.code();
                            view! {
                                <option value=code selected=move || f.status.get() == code>
                                    {s.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="form__group">
                <label class="form__label">"Descripción"</label>
                <Textarea value=f.description placeholder="Notas de la orden" />
            </div>

            <div class="order-lines">
                <div class="order-lines__header">
                    <h4>"Productos"</h4>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| f.add_line()
                    >
                        {icon("plus")}
                        " Agregar renglón"
                    </Button>
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=40.0>"#"</TableHeaderCell>
                            <TableHeaderCell min_width=260.0>"Producto"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell min_width=40.0>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || f.lines.get()
                            key=|line| line.key
                            children=move |line| {
                                let key = line.key;
                                let position = move || {
                                    f.lines.with(|lines| lines.iter().position(|l| l.key == key).map(|p| p + 1).unwrap_or(0))
                                };
                                let current = move || f.line(key).and_then(|l| l.product_id);
                                let unit = move || {
                                    let product_id = current();
                                    products.with(|rows| {
                                        rows.iter()
                                            .find(|p| Some(p.id) == product_id)
                                            .map(|p| p.unit_abbreviation().to_string())
                                            .unwrap_or_default()
                                    })
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>{position}</TableCell>
                                        <TableCell>
                                            <select
                                                class="form__select"
                                                prop:value=move || current().map(|id| id.to_string()).unwrap_or_default()
                                                on:change=move |ev| {
                                                    let chosen = event_target_value(&ev).parse::<EntityId>().ok();
                                                    f.edit_line(key, |l| l.product_id = chosen);
                                                }
                                            >
                                                <option value="" selected=move || current().is_none()>"— producto —"</option>
                                                {move || {
                                                    let selected = current();
                                                    products.with(|rows| select_options(rows, selected, |_| true))
                                                        .into_iter()
                                                        .map(|(id, label)| view! {
                                                            <option value=id.to_string() selected=move || current() == Some(id)>
                                                                {label}
                                                            </option>
                                                        })
                                                        .collect_view()
                                                }}
                                            </select>
                                        </TableCell>
                                        <TableCell>
                                            <div class="order-lines__quantity">
                                                <input
                                                    class="form__input form__input--number"
                                                    prop:value=move || f.line(key).map(|l| l.quantity).unwrap_or_default()
                                                    on:input=move |ev| {
                                                        let text = event_target_value(&ev);
                                                        f.edit_line(key, |l| l.quantity = text);
                                                    }
                                                />
                                                <span class="order-lines__unit">{unit}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <button
                                                class="button button--icon"
                                                title="Quitar"
                                                on:click=move |_| f.remove_line(key)
                                            >
                                                {icon("x")}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                <div class="order-lines__total">
                    "Total: " {move || format!("{:.2}", total())}
                </div>
            </div>
        </DetailsDialog>
    }
}
