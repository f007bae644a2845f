//! Column visibility per table, remembered in localStorage.

use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::BTreeSet;

const KEY_PREFIX: &str = "pr_columns_";

pub fn storage_key(table_key: &str) -> String {
    format!("{}{}", KEY_PREFIX, table_key)
}

/// Hidden columns as a comma list, stable order.
pub fn encode_hidden(hidden: &BTreeSet<String>) -> String {
    hidden.iter().cloned().collect::<Vec<_>>().join(",")
}

pub fn decode_hidden(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// `None` when the table was never customised.
pub fn load_hidden(table_key: &str) -> Option<BTreeSet<String>> {
    let raw = local_storage()?.get_item(&storage_key(table_key)).ok()??;
    Some(decode_hidden(&raw))
}

pub fn save_hidden(table_key: &str, hidden: &BTreeSet<String>) {
    if let Some(storage) = local_storage() {
        if storage
            .set_item(&storage_key(table_key), &encode_hidden(hidden))
            .is_err()
        {
            log::warn!("could not persist columns of {}", table_key);
        }
    }
}

/// Dropdown with one checkbox per column.
#[component]
pub fn ColumnPicker(
    /// (key, label) of every column
    columns: Vec<(&'static str, &'static str)>,
    hidden: RwSignal<BTreeSet<String>>,
    #[prop(into)] table_key: String,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let table_key = StoredValue::new(table_key);

    let toggle = move |key: &'static str, visible: bool| {
        hidden.update(|h| {
            if visible {
                h.remove(key);
            } else {
                h.insert(key.to_string());
            }
        });
        table_key.with_value(|k| save_hidden(k, &hidden.get_untracked()));
    };

    view! {
        <div class="column-picker">
            <button
                class="button button--secondary column-picker__toggle"
                title="Columnas"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("columns")}
            </button>
            <Show when=move || open.get()>
                <div class="column-picker__menu">
                    {columns.iter().map(|&(key, label)| {
                        view! {
                            <label class="column-picker__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || hidden.with(|h| !h.contains(key))
                                    on:change=move |ev| toggle(key, event_target_checked(&ev))
                                />
                                {label}
                            </label>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_set_round_trips_through_text() {
        let hidden: BTreeSet<String> = ["updated", "code"].iter().map(|s| s.to_string()).collect();
        let raw = encode_hidden(&hidden);
        assert_eq!(raw, "code,updated");
        assert_eq!(decode_hidden(&raw), hidden);
        assert!(decode_hidden("").is_empty());
        assert_eq!(decode_hidden(" a ,,b").len(), 2);
        assert_eq!(storage_key("a006_color"), "pr_columns_a006_color");
    }
}
