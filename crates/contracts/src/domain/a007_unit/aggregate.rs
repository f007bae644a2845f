use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Единица измерения (kg, pza, m)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: EntityId,
    pub name: String,
    pub abbreviation: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnitForm {
    #[validate(length(min = 1, max = 40, message = "entre 1 y 40 caracteres"), custom = "not_blank")]
    pub name: String,
    #[validate(length(min = 1, max = 10, message = "entre 1 y 10 caracteres"), custom = "not_blank")]
    pub abbreviation: String,
}

impl AggregateRoot for Unit {
    type Form = UnitForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.abbreviation)
    }

    fn to_form(&self) -> Self::Form {
        UnitForm {
            name: self.name.clone(),
            abbreviation: self.abbreviation.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "unit"
    }

    fn element_name() -> &'static str {
        "Unidad"
    }

    fn list_name() -> &'static str {
        "Unidades"
    }

    fn screen() -> Screen {
        Screen::Units
    }
}
