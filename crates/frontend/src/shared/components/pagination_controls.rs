use crate::shared::config::app_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// "21–40 de 57" for a 0-based page; "0 registros" on an empty list.
pub fn range_label(page: usize, page_size: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "0 registros".to_string();
    }
    let size = page_size.max(1);
    let first = (page * size + 1).min(total_count);
    let last = ((page + 1) * size).min(total_count);
    format!("{}–{} de {}", first, last, total_count)
}

/// Last valid page index, 0 for an empty list.
fn last_page(total_pages: usize) -> usize {
    total_pages.saturating_sub(1)
}

/// Navigation under every list: first/prev/next/last and the page size.
///
/// Available sizes come from `[ui] page_size_options`; the current size
/// is always offered even when the config does not list it.
#[component]
pub fn PaginationControls(
    /// 0-based
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let ui = &app_config().ui;
    let fallback_size = ui.page_size;
    let configured = ui.page_size_options.clone();

    let size_options = move || {
        let mut sizes = configured.clone();
        let current = page_size.get();
        if !sizes.contains(&current) {
            sizes.push(current);
            sizes.sort_unstable();
        }
        sizes
    };

    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() >= last_page(total_pages.get());
    let go = move |page: usize| {
        let page = page.min(last_page(total_pages.get_untracked()));
        if page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="Primera página"
                disabled=at_start
                on:click=move |_| go(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Página anterior"
                disabled=at_start
                on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "Página {} de {} · {}",
                    current_page.get() + 1,
                    total_pages.get().max(1),
                    range_label(current_page.get(), page_size.get(), total_count.get()),
                )}
            </span>
            <button
                class="pagination-btn"
                title="Página siguiente"
                disabled=at_end
                on:click=move |_| go(current_page.get_untracked() + 1)
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Última página"
                disabled=at_end
                on:click=move |_| go(usize::MAX)
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                title="Registros por página"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(size);
                }
            >
                {move || size_options().into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_label_clamps_to_total() {
        assert_eq!(range_label(0, 20, 0), "0 registros");
        assert_eq!(range_label(0, 20, 57), "1–20 de 57");
        assert_eq!(range_label(2, 20, 57), "41–57 de 57");
        // page beyond the end after a filter shrank the list
        assert_eq!(range_label(9, 20, 57), "57–57 de 57");
    }

    #[test]
    fn last_page_of_empty_list_is_zero() {
        assert_eq!(last_page(0), 0);
        assert_eq!(last_page(3), 2);
    }
}
