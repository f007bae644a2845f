use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type Builder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Builder,
    modal_class: Option<String>,
}

/// A handle returned by `ModalStackService::push`.
///
/// Can be cloned and used inside event handlers to close the modal.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open dialogs (details form, then e.g. a confirm on top).
///
/// Escape closes only the topmost modal (handled by `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // next tick: the closing click handler must finish before its DOM is removed
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    fn push_entry(&self, modal_class: Option<String>, builder: Builder) -> ModalHandle {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                modal_class,
            })
        });
        ModalHandle { id, svc: *self }
    }

    /// Push a new modal onto the stack.
    ///
    /// `builder` receives a `ModalHandle` so the modal can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(None, Arc::new(builder))
    }

    /// Same as `push` with a wide surface (matrices, line-item editors).
    pub fn push_wide<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(Some("modal--wide".to_string()), Arc::new(builder))
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }

    /// Drops every modal, used on logout.
    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let Some(svc) = use_context::<ModalStackService>() else {
        log::error!("ModalHost mounted without ModalStackService");
        return ().into_any();
    };

    // Escape closes the topmost modal
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                svc.pop_deferred();
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    // host lives as long as the app
    closure.forget();

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let z_index = 1000 + idx as i32;
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let view = (entry.builder)(ModalHandle { id, svc });
                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_class=entry.modal_class.clone().unwrap_or_default()
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
    .into_any()
}
