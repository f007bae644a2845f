//! Базовая ViewModel для диалогов создания/редактирования.
//!
//! Each entity keeps its own `view_model.rs` with one signal per input;
//! everything around it (fetch on edit, validation, saving flag, refresh
//! callback) lives here.

use crate::shared::crud::{self, ApiError};
use crate::shared::notify::Notifier;
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::validation::validate_form;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

type FormOf<B> = <<B as FormBinding>::Entity as AggregateRoot>::Form;

/// Input signals of one details form.
pub trait FormBinding: Copy + Send + Sync + 'static {
    type Entity: AggregateRoot;

    /// Signals initialised from `Form::default()`
    fn new() -> Self;

    fn fill(&self, form: &FormOf<Self>);

    /// Parses the inputs; text that does not parse is reported as an error.
    fn read(&self) -> Result<FormOf<Self>, String>;

    /// Checks the validator derive cannot express.
    fn check(&self, _form: &FormOf<Self>, _is_new: bool) -> Result<(), String> {
        Ok(())
    }
}

pub struct DetailsViewModel<B: FormBinding> {
    pub id: Option<EntityId>,
    pub fields: B,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    /// Record as fetched, None for a new one
    pub loaded: RwSignal<Option<B::Entity>>,
    notifier: Notifier,
}

impl<B: FormBinding> Clone for DetailsViewModel<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: FormBinding> Copy for DetailsViewModel<B> {}

impl<B: FormBinding> DetailsViewModel<B> {
    pub fn new(id: Option<EntityId>) -> Self {
        Self {
            id,
            fields: B::new(),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            loaded: RwSignal::new(None),
            notifier: Notifier::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn notifier(&self) -> Notifier {
        self.notifier
    }

    pub fn title(&self) -> String {
        let element = B::Entity::element_name();
        match (self.id, self.loaded.get()) {
            (Some(_), Some(entity)) => format!("{}: {}", element, entity.display_name()),
            (Some(id), None) => format!("{} #{}", element, id),
            (None, _) => format!("{} · nuevo", element),
        }
    }

    /// Fetch the current record when editing
    pub fn load(&self) {
        let Some(id) = self.id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match crud::get_by_id::<B::Entity>(id, vm.notifier).await {
                Ok(entity) => {
                    vm.fields.fill(&entity.to_form());
                    vm.loaded.set(Some(entity));
                    vm.error.set(None);
                }
                Err(e) => vm.error.set(Some(format!("Error de carga: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    /// Runs every client-side check, the message ends up in `error`.
    pub fn prepare(&self) -> Option<FormOf<B>> {
        let checked = self.fields.read().and_then(|form| {
            validate_form(&form)?;
            self.fields.check(&form, !self.is_edit_mode())?;
            Ok(form)
        });
        match checked {
            Ok(form) => {
                self.error.set(None);
                Some(form)
            }
            Err(message) => {
                self.error.set(Some(message));
                None
            }
        }
    }

    pub fn save(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let Some(form) = self.prepare() else {
            return;
        };
        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            let result: Result<B::Entity, ApiError> = match vm.id {
                Some(id) => crud::update::<B::Entity>(id, &form, vm.notifier).await,
                None => crud::create::<B::Entity>(&form, vm.notifier).await,
            };
            vm.saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => vm.error.set(Some(e.to_string())),
            }
        });
    }
}

/// Parse a decimal typed by the user, `,` is accepted as separator.
pub fn parse_decimal(label: &str, text: &str) -> Result<f64, String> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return Ok(0.0);
    }
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("{}: número inválido", label)),
    }
}

/// Like [`parse_decimal`] but empty text means "no value".
pub fn parse_optional_decimal(label: &str, text: &str) -> Result<Option<f64>, String> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_decimal(label, text).map(Some)
}

pub fn decimal_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Layout shared by every details dialog: header, error, body, actions.
#[component]
pub fn DetailsDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="details-dialog">
            <div class="modal-header">
                <h3 class="modal-title">{move || title.get()}</h3>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="modal-body">
                {children()}
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_save.run(())
                    disabled=Signal::derive(move || saving.get() || loading.get())
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_accept_comma_and_empty() {
        assert_eq!(parse_decimal("peso", "2,5"), Ok(2.5));
        assert_eq!(parse_decimal("peso", " "), Ok(0.0));
        assert_eq!(
            parse_decimal("peso", "dos"),
            Err("peso: número inválido".to_string())
        );
        assert_eq!(parse_optional_decimal("peso", ""), Ok(None));
        assert_eq!(parse_optional_decimal("peso", "0.75"), Ok(Some(0.75)));
        for text in ["NaN", "inf", "-infinity", "1e999"] {
            assert!(parse_decimal("peso", text).is_err(), "{} accepted", text);
        }
        assert!(parse_optional_decimal("peso", "inf").is_err());
        assert_eq!(decimal_text(0.0), "");
        assert_eq!(decimal_text(1.25), "1.25");
    }
}
