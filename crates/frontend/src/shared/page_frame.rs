//! PageFrame — standard root wrapper for every page rendered inside a tab.
//!
//! Sets `id` (`"{tab_key}--{category}"`) and `data-page-category` on the
//! root element.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{tab_key}--{category}`
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
