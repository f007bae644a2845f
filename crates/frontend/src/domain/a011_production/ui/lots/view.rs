use super::view_model::{build_plan, LotInputs};
use crate::domain::a011_production::ui::details::QualitySelect;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::crud;
use crate::shared::date_utils::{format_timestamp, to_datetime_input};
use crate::shared::icons::icon;
use crate::shared::notify::Notifier;
use chrono::Utc;
use contracts::domain::a004_machine::aggregate::Machine;
use contracts::domain::a010_production_order::aggregate::OrderDetail;
use contracts::domain::a011_production::aggregate::{Production, ProductionForm, Quality};
use contracts::domain::a011_production::lots::split_lots;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn LotGeneratorDialog(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let notifier = Notifier::new();
    let start = RwSignal::new(to_datetime_input(&Utc::now()));
    let total_minutes = RwSignal::new("480".to_string());
    let count = RwSignal::new("8".to_string());
    let description = RwSignal::new(String::new());
    let machine_id = RwSignal::new(None);
    let quality = RwSignal::new(Quality::First.code().to_string());
    let order_detail_id = RwSignal::new(None);
    let lot_prefix = RwSignal::new(String::new());
    let total_weight_kg = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let preview = Memo::new(move |_| -> Result<Vec<ProductionForm>, String> {
        let inputs = LotInputs {
            start: start.get(),
            total_minutes: total_minutes.get(),
            count: count.get(),
            description: description.get(),
            machine_id: machine_id.get(),
            quality: quality.get(),
            order_detail_id: order_detail_id.get(),
            lot_prefix: lot_prefix.get(),
            total_weight_kg: total_weight_kg.get(),
        };
        let plan = build_plan(&inputs)?;
        split_lots(&plan).map_err(|e| e.to_string())
    });

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let lots = match preview.get_untracked() {
            Ok(lots) => lots,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = crud::bulk_create::<Production>(&lots, notifier).await;
            saving.set(false);
            match result {
                Ok(created) => {
                    log::info!("{} lots created", created.len());
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-dialog">
            <div class="modal-header">
                <h3 class="modal-title">"Generar lotes"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="modal-body">
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Máquina" <span class="form__required">"*"</span></label>
                        <EntitySelect<Machine> value=machine_id />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Renglón de orden"</label>
                        <EntitySelect<OrderDetail> value=order_detail_id placeholder="— sin orden —" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Calidad"</label>
                        <QualitySelect value=quality />
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Inicio" <span class="form__required">"*"</span></label>
                        <input
                            type="datetime-local"
                            class="form__input"
                            prop:value=move || start.get()
                            on:change=move |ev| start.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Duración, min" <span class="form__required">"*"</span></label>
                        <Input value=total_minutes />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Lotes" <span class="form__required">"*"</span></label>
                        <Input value=count />
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Prefijo" <span class="form__required">"*"</span></label>
                        <Input value=lot_prefix placeholder="L240603" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Peso total, kg"</label>
                        <Input value=total_weight_kg placeholder="opcional" />
                    </div>
                </div>
                <div class="form__group">
                    <label class="form__label">"Descripción"</label>
                    <Textarea value=description />
                </div>

                <div class="lot-preview">
                    {move || match preview.get() {
                        Err(e) => view! { <div class="alert alert--warning">{e}</div> }.into_any(),
                        Ok(lots) => view! {
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=120.0>"Lote"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>"Inicio"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>"Fin"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"Peso, kg"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {lots.into_iter().map(|lot| view! {
                                        <TableRow>
                                            <TableCell>{lot.lot_code}</TableCell>
                                            <TableCell>{format_timestamp(&lot.started_at)}</TableCell>
                                            <TableCell>{format_timestamp(&lot.finished_at)}</TableCell>
                                            <TableCell>
                                                {lot.weight_kg.map(|w| format!("{:.3}", w)).unwrap_or_default()}
                                            </TableCell>
                                        </TableRow>
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        }.into_any(),
                    }}
                </div>
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || saving.get() || preview.with(|p| p.is_err()))
                >
                    {icon("layers")}
                    {move || {
                        let n = preview.with(|p| p.as_ref().map(|l| l.len()).unwrap_or(0));
                        if saving.get() { "Creando...".to_string() } else { format!(" Crear {} lotes", n) }
                    }}
                </Button>
            </div>
        </div>
    }
}
