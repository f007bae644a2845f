//! Color: name plus `#RRGGBB` picked with the native color input.

use crate::shared::details::{DetailsDialog, DetailsViewModel, FormBinding};
use contracts::domain::a006_color::aggregate::{Color, ColorForm};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
pub struct ColorFields {
    pub name: RwSignal<String>,
    pub hex: RwSignal<String>,
}

impl FormBinding for ColorFields {
    type Entity = Color;

    fn new() -> Self {
        let defaults = ColorForm::default();
        Self {
            name: RwSignal::new(defaults.name),
            hex: RwSignal::new(defaults.hex),
        }
    }

    fn fill(&self, form: &ColorForm) {
        self.name.set(form.name.clone());
        self.hex.set(form.hex.clone());
    }

    fn read(&self) -> Result<ColorForm, String> {
        Ok(ColorForm {
            name: self.name.get_untracked(),
            hex: self.hex.get_untracked().trim().to_uppercase(),
        })
    }
}

#[component]
pub fn ColorDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<ColorFields>::new(id);
    vm.load();
    let f = vm.fields;

    view! {
        <DetailsDialog
            title=Signal::derive(move || vm.title())
            error=vm.error
            loading=vm.loading
            saving=vm.saving
            on_save=Callback::new(move |_| vm.save(on_saved))
            on_cancel=on_cancel
        >
            <div class="form__group">
                <label class="form__label">"Nombre" <span class="form__required">"*"</span></label>
                <Input value=f.name placeholder="Azul marino" />
            </div>
            <div class="form__group">
                <label class="form__label">"Color"</label>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <input
                        type="color"
                        class="form__color"
                        prop:value=move || f.hex.get().to_lowercase()
                        on:input=move |ev| f.hex.set(event_target_value(&ev))
                    />
                    <Input value=f.hex placeholder="#000000" />
                </Flex>
            </div>
        </DetailsDialog>
    }
}
