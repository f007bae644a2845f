//! Sector × screen editor of one user's degrees.

use crate::shared::crud::{self, report};
use crate::shared::icons::icon;
use crate::shared::notify::Notifier;
use crate::system::permissions::api;
use contracts::domain::a001_sector::aggregate::Sector;
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::system::permissions::{Degree, PermissionMatrix, Screen};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn degree_options(selected: Degree) -> impl IntoView {
    Degree::ALL
        .iter()
        .map(|&d| {
            view! {
                <option value=d.value().to_string() selected=d == selected>
                    {d.to_string()}
                </option>
            }
        })
        .collect_view()
}

fn parse_degree(text: &str) -> Degree {
    text.parse::<u8>().map(Degree::new).unwrap_or(Degree::NONE)
}

/// The bulk request replaces every degree of the user, so a matrix that
/// was never loaded must not be sent.
fn can_save(loaded: bool, dirty: bool, busy: bool) -> bool {
    loaded && dirty && !busy
}

#[component]
pub fn PermissionMatrixDialog(
    user_id: EntityId,
    #[prop(into)] title: String,
    on_done: Callback<()>,
) -> impl IntoView {
    let notifier = Notifier::new();
    let matrix = RwSignal::new(PermissionMatrix::new(user_id));
    let sectors = RwSignal::new(Vec::<Sector>::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let dirty = RwSignal::new(false);
    // None while loading, Some(false) when the user's degrees could not be read
    let loaded = RwSignal::new(None::<bool>);
    let locked = move || loaded.get() != Some(true);

    spawn_local(async move {
        let rows = report(
            notifier,
            &format!("Cargar permisos del usuario #{}", user_id),
            api::fetch_for_user(user_id).await,
            None,
        );
        match rows {
            Ok(rows) => {
                matrix.set(PermissionMatrix::from_permissions(user_id, &rows));
                loaded.set(Some(true));
            }
            Err(_) => {
                loaded.set(Some(false));
                loading.set(false);
                return;
            }
        }
        if let Ok(list) = crud::list::<Sector>(notifier).await {
            let mut active: Vec<Sector> = list.into_iter().filter(|s| !s.is_deleted()).collect();
            active.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            sectors.set(active);
        }
        loading.set(false);
    });

    let set_cell = move |sector_id: EntityId, screen: Screen, degree: Degree| {
        if loaded.get_untracked() != Some(true) {
            return;
        }
        let mut changed = false;
        matrix.update(|m| changed = m.upsert(sector_id, screen, degree));
        if changed {
            dirty.set(true);
        }
    };

    let set_row = move |sector_id: EntityId, degree: Degree| {
        if loaded.get_untracked() != Some(true) {
            return;
        }
        let row: Vec<(Screen, Degree)> = Screen::ALL.iter().map(|&s| (s, degree)).collect();
        let mut changed = 0;
        matrix.update(|m| changed = m.set_sector_row(sector_id, &row));
        if changed > 0 {
            dirty.set(true);
        }
    };

    let save = move |_| {
        if !can_save(loaded.get_untracked() == Some(true), dirty.get_untracked(), saving.get_untracked()) {
            return;
        }
        saving.set(true);
        let snapshot = matrix.get_untracked();
        spawn_local(async move {
            let result = api::save_matrix(&snapshot, notifier).await;
            saving.set(false);
            if result.is_ok() {
                dirty.set(false);
                on_done.run(());
            }
        });
    };

    view! {
        <div class="details-dialog permission-matrix">
            <div class="modal-header">
                <h3 class="modal-title">{icon("shield")} {format!(" Permisos: {}", title)}</h3>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>

            <div class="modal-body permission-matrix__body">
                <Show when=move || loaded.get() == Some(false)>
                    <div class="alert alert--error">
                        "No se pudieron cargar los permisos del usuario. La edición está bloqueada."
                    </div>
                </Show>
                <Show
                    when=move || !sectors.with(|s| s.is_empty()) || loading.get() || locked()
                    fallback=|| view! { <div class="alert alert--warning">"No hay sectores activos"</div> }
                >
                    <table class="permission-matrix__table">
                        <thead>
                            <tr>
                                <th>"Sector"</th>
                                <th>"Toda la fila"</th>
                                {Screen::ALL.iter().map(|s| view! { <th>{s.label()}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || sectors.get()
                                key=|s| s.id
                                children=move |sector| {
                                    let sector_id = sector.id;
                                    view! {
                                        <tr>
                                            <td class="permission-matrix__sector">{sector.name.clone()}</td>
                                            <td>
                                                <select
                                                    class="form__select form__select--compact"
                                                    disabled=locked
                                                    on:change=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        if !value.is_empty() {
                                                            set_row(sector_id, parse_degree(&value));
                                                        }
                                                    }
                                                >
                                                    <option value="" selected=true>"—"</option>
                                                    {degree_options(Degree::NONE)}
                                                </select>
                                            </td>
                                            {Screen::ALL.iter().map(|&screen| {
                                                let current = move || matrix.with(|m| m.degree(sector_id, screen));
                                                view! {
                                                    <td>
                                                        <select
                                                            class="form__select form__select--compact"
                                                            disabled=locked
                                                            class=("permission-matrix__cell--granted", move || current() > Degree::NONE)
                                                            prop:value=move || current().value().to_string()
                                                            on:change=move |ev| {
                                                                set_cell(sector_id, screen, parse_degree(&event_target_value(&ev)));
                                                            }
                                                        >
                                                            {move || degree_options(current())}
                                                        </select>
                                                    </td>
                                                }
                                            }).collect_view()}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_done.run(())>
                    "Cerrar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || {
                        !can_save(loaded.get() == Some(true), dirty.get(), saving.get() || loading.get())
                    })
                >
                    {icon("save")}
                    {move || if saving.get() { " Guardando..." } else { " Guardar" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_text_is_clamped() {
        assert_eq!(parse_degree("3"), Degree::EDIT);
        assert_eq!(parse_degree("9"), Degree::FULL);
        assert_eq!(parse_degree(""), Degree::NONE);
    }

    #[test]
    fn unloaded_matrix_is_never_saved() {
        // an empty matrix with one edited cell would revoke everything else
        let mut matrix = PermissionMatrix::new(7);
        assert!(matrix.upsert(1, Screen::Sectors, Degree::VIEW));
        assert_eq!(matrix.to_bulk_request().permissions.len(), 1);
        assert!(!can_save(false, true, false));

        assert!(can_save(true, true, false));
        assert!(!can_save(true, false, false));
        assert!(!can_save(true, true, true));
    }
}
