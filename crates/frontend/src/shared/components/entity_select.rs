use crate::shared::crud;
use crate::shared::notify::Notifier;
use contracts::domain::common::{AggregateRoot, EntityId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

pub type OptionFilter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Options of a reference select: active rows plus the current value even if
/// it was soft-deleted meanwhile.
pub fn select_options<T, F>(rows: &[T], current: Option<EntityId>, keep: F) -> Vec<(EntityId, String)>
where
    T: AggregateRoot,
    F: Fn(&T) -> bool,
{
    let mut options: Vec<(EntityId, String)> = rows
        .iter()
        .filter(|r| Some(r.id()) == current || (!r.is_deleted() && keep(r)))
        .map(|r| {
            let label = if r.is_deleted() {
                format!("{} (eliminado)", r.display_name())
            } else {
                r.display_name()
            };
            (r.id(), label)
        })
        .collect();
    options.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()));
    options
}

/// Select of another aggregate, loaded through the generic client.
///
/// `value` is `None` while nothing is chosen.
#[component]
pub fn EntitySelect<T: AggregateRoot>(
    value: RwSignal<Option<EntityId>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] filter: Option<OptionFilter<T>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let rows = RwSignal::new(Vec::<T>::new());
    let loading = RwSignal::new(true);
    let notifier = Notifier::new();
    let placeholder = placeholder.unwrap_or_else(|| "— seleccione —".to_string());
    let filter = StoredValue::new(filter);

    spawn_local(async move {
        if let Ok(list) = crud::list::<T>(notifier).await {
            rows.set(list);
        }
        loading.set(false);
    });

    let options = move || {
        let current = value.get();
        rows.with(|rows| {
            filter.with_value(|f| match f {
                Some(f) => select_options(rows, current, |r| f(r)),
                None => select_options(rows, current, |_| true),
            })
        })
    };

    view! {
        <select
            class="form__select"
            disabled=move || disabled.get() || loading.get()
            prop:value=move || value.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| {
                let chosen = event_target_value(&ev).parse::<EntityId>().ok();
                value.set(chosen);
            }
        >
            <option value="" selected=move || value.get().is_none()>
                {move || if loading.get() { "Cargando...".to_string() } else { placeholder.clone() }}
            </option>
            {move || options().into_iter().map(|(id, label)| {
                view! {
                    <option value=id.to_string() selected=move || value.get() == Some(id)>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Forms store "nothing selected" as 0.
pub fn id_or_zero(value: Option<EntityId>) -> EntityId {
    value.unwrap_or(0)
}

pub fn non_zero(id: EntityId) -> Option<EntityId> {
    (id > 0).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::a006_color::aggregate::Color;
    use contracts::domain::common::EntityMetadata;

    fn color(id: EntityId, name: &str, deleted: bool) -> Color {
        let mut metadata = EntityMetadata::new();
        if deleted {
            metadata.deleted_at = Some(Utc::now());
        }
        Color {
            id,
            name: name.to_string(),
            hex: "#FFFFFF".to_string(),
            metadata,
        }
    }

    #[test]
    fn deleted_rows_only_when_selected() {
        let rows = vec![color(1, "Rojo", false), color(2, "azul", true), color(3, "Azul cielo", false)];
        assert_eq!(
            select_options(&rows, None, |_| true),
            vec![(3, "Azul cielo".to_string()), (1, "Rojo".to_string())]
        );
        let with_current = select_options(&rows, Some(2), |_| true);
        assert_eq!(with_current[0], (2, "azul (eliminado)".to_string()));
        assert_eq!(with_current.len(), 3);
    }

    #[test]
    fn filter_applies_to_active_rows() {
        let rows = vec![color(1, "Rojo", false), color(3, "Azul", false)];
        let options = select_options(&rows, Some(1), |c| c.name.starts_with('A'));
        assert_eq!(options.len(), 2);
        let options = select_options(&rows, None, |c| c.name.starts_with('A'));
        assert_eq!(options, vec![(3, "Azul".to_string())]);
        assert_eq!(non_zero(0), None);
        assert_eq!(id_or_zero(Some(7)), 7);
    }
}
