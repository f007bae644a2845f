//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Código"
//!     sort_field="code"
//!     current_sort_field=Signal::derive(move || query.with(|q| q.sort_field.clone()))
//!     sort_ascending=Signal::derive(move || query.with(|q| q.sort_ascending))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Header cell with a ▲/▼ indicator; click toggles the sort.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    current_sort_field: Signal<String>,

    #[prop(into)]
    sort_ascending: Signal<bool>,

    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field = StoredValue::new(sort_field);

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| on_sort.run(sort_field.get_value())
            >
                {label}
                <span class=move || {
                    sort_field.with_value(|f| get_sort_class(&current_sort_field.get(), f))
                }>
                    {move || {
                        sort_field.with_value(|f| {
                            get_sort_indicator(&current_sort_field.get(), f, sort_ascending.get())
                        })
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
