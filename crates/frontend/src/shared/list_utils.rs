//! Универсальные утилиты для работы со списками (поиск, сортировка, пагинация)
use std::cmp::Ordering;

/// Case-insensitive comparison used by text columns.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Filter, sort and page settings of one table.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub search: String,
    pub show_deleted: bool,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self {
            search: String::new(),
            show_deleted: false,
            sort_field: sort_field.to_string(),
            sort_ascending: true,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Same field flips direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    /// Runs filter → sort → paginate.
    ///
    /// `haystack` returns the searchable text of a row; rows whose text does
    /// not contain every search term are dropped. Deleted rows are kept only
    /// with `show_deleted`. The page index is clamped to the last page.
    pub fn apply<T, H, D, C>(&self, rows: &[T], haystack: H, is_deleted: D, compare: C) -> ListPage<T>
    where
        T: Clone,
        H: Fn(&T) -> String,
        D: Fn(&T) -> bool,
        C: Fn(&T, &T, &str) -> Ordering,
    {
        let terms: Vec<String> = self
            .search
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();

        let mut data: Vec<T> = rows
            .iter()
            .filter(|row| self.show_deleted || !is_deleted(row))
            .filter(|row| {
                if terms.is_empty() {
                    return true;
                }
                let text = haystack(row).to_lowercase();
                terms.iter().all(|t| text.contains(t.as_str()))
            })
            .cloned()
            .collect();

        data.sort_by(|a, b| {
            let cmp = compare(a, b, &self.sort_field);
            if self.sort_ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        let page_size = self.page_size.max(1);
        let total_count = data.len();
        let total_pages = if total_count == 0 {
            1
        } else {
            (total_count + page_size - 1) / page_size
        };
        let page = self.page.min(total_pages - 1);
        let start = page * page_size;
        let end = (start + page_size).min(total_count);

        ListPage {
            items: data.get(start..end).unwrap_or(&[]).to_vec(),
            total_count,
            total_pages,
            page,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    /// Page actually shown after clamping
    pub page: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
        deleted: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Molino 2", deleted: false },
            Row { id: 2, name: "extrusora", deleted: false },
            Row { id: 3, name: "Inyectora", deleted: true },
            Row { id: 4, name: "molino 1", deleted: false },
            Row { id: 5, name: "Aglutinador", deleted: false },
        ]
    }

    fn run(query: &ListQuery) -> ListPage<Row> {
        query.apply(
            &rows(),
            |r| format!("{} {}", r.id, r.name),
            |r| r.deleted,
            |a, b, field| match field {
                "id" => a.id.cmp(&b.id),
                _ => compare_text(a.name, b.name),
            },
        )
    }

    fn ids(page: &ListPage<Row>) -> Vec<i64> {
        page.items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_filter_then_sort() {
        let mut q = ListQuery::new("name", 50);
        q.search = "MOLINO".into();
        let page = run(&q);
        assert_eq!(ids(&page), vec![4, 1]);
        assert_eq!(page.total_count, 2);

        q.search = "molino 2".into();
        assert_eq!(ids(&run(&q)), vec![1]);
    }

    #[test]
    fn test_deleted_rows_hidden_by_default() {
        let mut q = ListQuery::new("id", 50);
        assert_eq!(ids(&run(&q)), vec![1, 2, 4, 5]);
        q.show_deleted = true;
        assert_eq!(ids(&run(&q)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_toggle_sort() {
        let mut q = ListQuery::new("id", 50);
        q.toggle_sort("id");
        assert!(!q.sort_ascending);
        assert_eq!(ids(&run(&q)), vec![5, 4, 2, 1]);
        q.toggle_sort("name");
        assert!(q.sort_ascending);
        assert_eq!(q.sort_field, "name");
        assert_eq!(ids(&run(&q)), vec![5, 2, 4, 1]);
    }

    #[test]
    fn test_pagination_clamps_page() {
        let mut q = ListQuery::new("id", 3);
        q.show_deleted = true;
        q.page = 1;
        let page = run(&q);
        assert_eq!(page.total_pages, 2);
        assert_eq!(ids(&page), vec![4, 5]);

        q.page = 9;
        let page = run(&q);
        assert_eq!(page.page, 1);
        assert_eq!(ids(&page), vec![4, 5]);

        q.search = "nada".into();
        let page = run(&q);
        assert_eq!((page.total_count, page.total_pages, page.page), (0, 1, 0));
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("id", "name", true), " ⇅");
    }
}
