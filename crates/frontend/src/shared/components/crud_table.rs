//! Generic list page for any [`AggregateRoot`]: search, "show deleted",
//! column picker, sortable headers, pagination and degree-gated row actions.
//!
//! The page keeps the whole collection in memory and runs
//! [`ListQuery::apply`] over it; every mutation triggers a full re-fetch.

use crate::shared::components::column_picker::{load_hidden, ColumnPicker};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::app_config;
use crate::shared::crud::{self, ApiError};
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_text, ListPage, ListQuery};
use crate::shared::notify::Notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{list_category, page_id};
use crate::system::auth::context::use_access;
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::system::permissions::Action;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thaw::*;

type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type SortFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

pub type ListFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, ApiError>>>>;
pub type Fetcher<T> = Arc<dyn Fn(Notifier) -> ListFuture<T> + Send + Sync>;
/// Extra buttons rendered in the actions cell of each row
pub type RowActions<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// One table column: header, cell text and optional custom ordering.
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub min_width: f64,
    pub hidden_by_default: bool,
    value: CellFn<T>,
    sort: Option<SortFn<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            min_width: self.min_width,
            hidden_by_default: self.hidden_by_default,
            value: self.value.clone(),
            sort: self.sort.clone(),
        }
    }
}

impl<T> Column<T> {
    pub fn new<F>(key: &'static str, label: &'static str, value: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            key,
            label,
            min_width: 120.0,
            hidden_by_default: false,
            value: Arc::new(value),
            sort: None,
        }
    }

    pub fn width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    /// Numeric/date columns must not sort as text
    pub fn sort_by<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.sort = Some(Arc::new(compare));
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden_by_default = true;
        self
    }

    pub fn text(&self, row: &T) -> String {
        (self.value)(row)
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.sort {
            Some(compare) => compare(a, b),
            None => compare_text(&self.text(a), &self.text(b)),
        }
    }
}

pub fn default_hidden<T>(columns: &[Column<T>]) -> BTreeSet<String> {
    columns
        .iter()
        .filter(|c| c.hidden_by_default)
        .map(|c| c.key.to_string())
        .collect()
}

/// Filter → sort → paginate using the column definitions.
///
/// Search looks at the text of every column, hidden ones included.
pub fn page_rows<T: AggregateRoot>(rows: &[T], columns: &[Column<T>], query: &ListQuery) -> ListPage<T> {
    query.apply(
        rows,
        |row| {
            columns
                .iter()
                .map(|c| c.text(row))
                .collect::<Vec<_>>()
                .join(" ")
        },
        |row| row.is_deleted(),
        |a, b, field| {
            columns
                .iter()
                .find(|c| c.key == field)
                .map(|c| c.compare(a, b))
                .unwrap_or(Ordering::Equal)
        },
    )
}

/// State of one list page: the fetched snapshot plus the query.
pub struct ListController<T: AggregateRoot> {
    pub rows: RwSignal<Vec<T>>,
    pub query: RwSignal<ListQuery>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    fetcher: StoredValue<Fetcher<T>>,
    notifier: Notifier,
}

impl<T: AggregateRoot> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: AggregateRoot> Copy for ListController<T> {}

impl<T: AggregateRoot> ListController<T> {
    /// Plain `GET /{collection}` list
    pub fn new(default_sort: &str) -> Self {
        let fetcher: Fetcher<T> =
            Arc::new(|notifier: Notifier| -> ListFuture<T> { Box::pin(crud::list::<T>(notifier)) });
        Self::with_fetcher(default_sort, fetcher)
    }

    pub fn with_fetcher(default_sort: &str, fetcher: Fetcher<T>) -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            query: RwSignal::new(ListQuery::new(default_sort, app_config().ui.page_size)),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            fetcher: StoredValue::new(fetcher),
            notifier: Notifier::new(),
        }
    }

    pub fn notifier(&self) -> Notifier {
        self.notifier
    }

    /// Discards the snapshot and fetches it again.
    pub fn reload(&self) {
        let ctl = *self;
        let fetch = ctl.fetcher.get_value();
        ctl.loading.set(true);
        spawn_local(async move {
            match fetch(ctl.notifier).await {
                Ok(rows) => {
                    log::debug!("{}: {} rows", T::collection_name(), rows.len());
                    ctl.rows.set(rows);
                    ctl.error.set(None);
                }
                Err(e) => ctl.error.set(Some(e.to_string())),
            }
            ctl.loading.set(false);
        });
    }

    /// Changes that narrow the result restart from the first page
    pub fn refine(&self, f: impl FnOnce(&mut ListQuery)) {
        self.query.update(|q| {
            f(q);
            q.page = 0;
        });
    }

    fn run_mutation<Fut>(&self, call: Fut)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let ctl = *self;
        spawn_local(async move {
            if call.await.is_ok() {
                ctl.reload();
            }
        });
    }

    pub fn soft_delete(&self, id: EntityId) {
        self.run_mutation(crud::soft_delete::<T>(id, self.notifier));
    }

    pub fn recover(&self, id: EntityId) {
        self.run_mutation(crud::recover::<T>(id, self.notifier));
    }

    pub fn hard_delete(&self, id: EntityId) {
        self.run_mutation(crud::hard_delete::<T>(id, self.notifier));
    }
}

#[component]
pub fn CrudPage<T: AggregateRoot>(
    controller: ListController<T>,
    columns: Vec<Column<T>>,
    /// Opens the details dialog, `None` for a new record
    on_open: Callback<Option<EntityId>>,
    /// Controls placed next to the search box
    #[prop(optional)]
    filters: Option<ChildrenFn>,
    /// Buttons placed in the page header after "Nuevo"
    #[prop(optional)]
    actions: Option<ChildrenFn>,
    #[prop(optional)] row_actions: Option<RowActions<T>>,
) -> impl IntoView {
    let access = use_access();
    let screen = T::screen();
    let can = move |action: Action| access.with(|a| a.can(screen, action));

    let table_key = T::full_name();
    let column_defs: Vec<(&'static str, &'static str)> =
        columns.iter().map(|c| (c.key, c.label)).collect();
    let hidden = RwSignal::new(load_hidden(&table_key).unwrap_or_else(|| default_hidden(&columns)));
    let columns = StoredValue::new(columns);
    let row_actions = StoredValue::new(row_actions);
    let search = RwSignal::new(String::new());
    let show_deleted = RwSignal::new(false);

    // hard delete waits for confirmation
    let confirm_open = RwSignal::new(false);
    let pending_hard = RwSignal::new(None::<(EntityId, String)>);

    Effect::new(move |_| {
        let text = search.get();
        if controller.query.with_untracked(|q| q.search != text) {
            controller.refine(|q| q.search = text);
        }
    });
    Effect::new(move |_| {
        let flag = show_deleted.get();
        if controller.query.with_untracked(|q| q.show_deleted != flag) {
            controller.refine(|q| q.show_deleted = flag);
        }
    });

    controller.reload();

    let page = Signal::derive(move || {
        let query = controller.query.get();
        controller
            .rows
            .with(|rows| columns.with_value(|cols| page_rows(rows, cols, &query)))
    });

    let visible_columns = move || {
        let hidden = hidden.get();
        columns.with_value(|cols| {
            cols.iter()
                .filter(|c| !hidden.contains(c.key))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let sort_field = Signal::derive(move || controller.query.with(|q| q.sort_field.clone()));
    let sort_ascending = Signal::derive(move || controller.query.with(|q| q.sort_ascending));
    let on_sort = Callback::new(move |field: String| controller.query.update(|q| q.toggle_sort(&field)));

    let tab_key = screen.tab_key();
    let category = list_category(T::aggregate_index());

    view! {
        <PageFrame page_id=page_id(tab_key, category) category=category>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{T::list_name()}</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || page.with(|p| p.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can(Action::Create)>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_open.run(None)
                        >
                            {icon("plus")}
                            " Nuevo"
                        </Button>
                    </Show>
                    {actions.clone().map(|a| a())}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| controller.reload()
                        disabled=controller.loading
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-bar">
                    <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                        <Input value=search placeholder="Buscar..." />
                        <Switch checked=show_deleted label="Mostrar eliminados" />
                        {filters.clone().map(|f| f())}
                        <ColumnPicker columns=column_defs hidden=hidden table_key=table_key />
                    </Flex>
                </div>

                {move || controller.error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", tab_key) attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {move || visible_columns().into_iter().map(|col| {
                                    view! {
                                        <SortableHeaderCell
                                            label=col.label
                                            sort_field=col.key
                                            current_sort_field=sort_field
                                            sort_ascending=sort_ascending
                                            on_sort=on_sort
                                            min_width=col.min_width
                                        />
                                    }
                                }).collect_view()}
                                <TableHeaderCell resizable=false min_width=140.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let cols = visible_columns();
                                page.get().items.into_iter().map(|row| {
                                    let id = row.id();
                                    let deleted = row.is_deleted();
                                    let name = row.display_name();
                                    let cells = cols.iter().enumerate().map(|(idx, col)| {
                                        let text = col.text(&row);
                                        if idx == 0 && !deleted && can(Action::Edit) {
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                on_open.run(Some(id));
                                                            }
                                                        >
                                                            {text}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                            }.into_any()
                                        } else {
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                </TableCell>
                                            }.into_any()
                                        }
                                    }).collect_view();
                                    let extra = row_actions.with_value(|ra| ra.as_ref().map(|f| f(&row)));

                                    view! {
                                        <TableRow class={if deleted { "table__row--deleted" } else { "" }}>
                                            {cells}
                                            <TableCell>
                                                <div class="table__actions">
                                                    {(!deleted && can(Action::Edit)).then(|| view! {
                                                        <button class="button button--icon" title="Editar"
                                                            on:click=move |_| on_open.run(Some(id))>
                                                            {icon("edit")}
                                                        </button>
                                                    })}
                                                    {(!deleted && can(Action::SoftDelete)).then(|| view! {
                                                        <button class="button button--icon" title="Eliminar"
                                                            on:click=move |_| controller.soft_delete(id)>
                                                            {icon("trash")}
                                                        </button>
                                                    })}
                                                    {(deleted && can(Action::Recover)).then(|| view! {
                                                        <button class="button button--icon" title="Recuperar"
                                                            on:click=move |_| controller.recover(id)>
                                                            {icon("rotate-ccw")}
                                                        </button>
                                                    })}
                                                    {can(Action::HardDelete).then(|| {
                                                        let name = name.clone();
                                                        view! {
                                                            <button class="button button--icon button--danger"
                                                                title="Eliminar definitivamente"
                                                                on:click=move |_| {
                                                                    pending_hard.set(Some((id, name.clone())));
                                                                    confirm_open.set(true);
                                                                }>
                                                                {icon("trash-x")}
                                                            </button>
                                                        }
                                                    })}
                                                    {extra}
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.page))
                    total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                    total_count=Signal::derive(move || page.with(|p| p.total_count))
                    page_size=Signal::derive(move || controller.query.with(|q| q.page_size))
                    on_page_change=Callback::new(move |p| controller.query.update(|q| q.page = p))
                    on_page_size_change=Callback::new(move |size| controller.refine(|q| q.page_size = size))
                />
            </div>

            <Dialog open=confirm_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Eliminar definitivamente"</DialogTitle>
                        <DialogContent>
                            {move || pending_hard.get().map(|(_, name)| format!(
                                "«{}» se eliminará de forma permanente. Esta acción no se puede deshacer.",
                                name
                            ))}
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    pending_hard.set(None);
                                    confirm_open.set(false);
                                }
                            >
                                "Cancelar"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    if let Some((id, _)) = pending_hard.get_untracked() {
                                        controller.hard_delete(id);
                                    }
                                    pending_hard.set(None);
                                    confirm_open.set(false);
                                }
                            >
                                "Eliminar"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_unit::aggregate::Unit;
    use contracts::domain::common::EntityMetadata;

    fn unit(id: EntityId, name: &str, abbreviation: &str) -> Unit {
        Unit {
            id,
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            metadata: EntityMetadata::new(),
        }
    }

    fn columns() -> Vec<Column<Unit>> {
        vec![
            Column::new("name", "Nombre", |u: &Unit| u.name.clone()),
            Column::new("abbreviation", "Abrev.", |u: &Unit| u.abbreviation.clone()),
            Column::new("id", "ID", |u: &Unit| u.id.to_string())
                .sort_by(|a: &Unit, b: &Unit| a.id.cmp(&b.id))
                .hidden(),
        ]
    }

    #[test]
    fn numeric_column_sorts_by_value_not_text() {
        let rows = vec![unit(10, "Kilo", "kg"), unit(9, "Metro", "m"), unit(100, "Pieza", "pz")];
        let mut query = ListQuery::new("id", 50);
        let page = page_rows(&rows, &columns(), &query);
        let ids: Vec<EntityId> = page.items.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![9, 10, 100]);

        query.toggle_sort("name");
        query.toggle_sort("name");
        let page = page_rows(&rows, &columns(), &query);
        assert_eq!(page.items[0].name, "Pieza");
    }

    #[test]
    fn search_covers_hidden_columns() {
        let rows = vec![unit(1, "Kilo", "kg"), unit(2, "Litro", "l")];
        let mut query = ListQuery::new("name", 50);
        query.search = "KG".to_string();
        let page = page_rows(&rows, &columns(), &query);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].id, 1);

        assert_eq!(default_hidden(&columns()).into_iter().collect::<Vec<_>>(), vec!["id"]);
    }
}
