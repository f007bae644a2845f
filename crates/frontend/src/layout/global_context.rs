use contracts::system::permissions::Screen;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

/// Tab to activate after `closing` goes away: the active one stays, otherwise
/// the right neighbour, otherwise the left one.
pub fn next_active_after_close(tabs: &[Tab], closing: &str, active: Option<&str>) -> Option<String> {
    if active != Some(closing) {
        return active.map(str::to_string);
    }
    let idx = tabs.iter().position(|t| t.key == closing)?;
    tabs.get(idx + 1)
        .or_else(|| idx.checked_sub(1).and_then(|i| tabs.get(i)))
        .map(|t| t.key.clone())
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores `?active=` on start and keeps it in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(screen) = params.get("active").and_then(|k| Screen::from_tab_key(k)) {
            self.open_screen(screen);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = match this.active.get() {
                Some(active_key) => {
                    let query_string =
                        serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                            .unwrap_or_default();
                    format!("?{}", query_string)
                }
                None => String::new(),
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let url = if new_url.is_empty() { "?" } else { new_url.as_str() };
                        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
                    }
                }
            }
        });
    }

    pub fn open_screen(&self, screen: Screen) {
        let screen = screen.page_screen();
        self.open_tab(screen.tab_key(), screen.label());
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        let next = self.opened.with_untracked(|tabs| {
            let active = self.active.get_untracked();
            next_active_after_close(tabs, key, active.as_deref())
        });
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        self.active.set(next);
    }

    /// Drops tabs of screens the user can no longer see (sector switch).
    pub fn retain_screens(&self, visible: &[Screen]) {
        let hidden: Vec<String> = self.opened.with_untracked(|tabs| {
            tabs.iter()
                .filter(|t| {
                    Screen::from_tab_key(&t.key).map_or(true, |s| !visible.contains(&s))
                })
                .map(|t| t.key.clone())
                .collect()
        });
        for key in hidden {
            self.close_tab(&key);
        }
    }

    pub fn close_all(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn closing_active_tab_moves_to_a_neighbour() {
        let t = tabs(&["a001_sector", "a006_color", "a007_unit"]);
        assert_eq!(
            next_active_after_close(&t, "a006_color", Some("a006_color")).as_deref(),
            Some("a007_unit")
        );
        assert_eq!(
            next_active_after_close(&t, "a007_unit", Some("a007_unit")).as_deref(),
            Some("a006_color")
        );
        assert_eq!(
            next_active_after_close(&t, "a001_sector", Some("a007_unit")).as_deref(),
            Some("a007_unit")
        );
        assert_eq!(next_active_after_close(&tabs(&["a001_sector"]), "a001_sector", Some("a001_sector")), None);
    }
}
