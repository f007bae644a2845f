use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Группа пользователей (turno, cuadrilla)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkGroup {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkGroupForm {
    #[validate(length(min = 1, max = 80, message = "entre 1 y 80 caracteres"), custom = "not_blank")]
    pub name: String,
    #[validate(length(max = 255, message = "máximo 255 caracteres"))]
    pub description: String,
}

impl AggregateRoot for WorkGroup {
    type Form = WorkGroupForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_form(&self) -> Self::Form {
        WorkGroupForm {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "sys"
    }

    fn collection_name() -> &'static str {
        "work-group"
    }

    fn element_name() -> &'static str {
        "Grupo de trabajo"
    }

    fn list_name() -> &'static str {
        "Grupos de trabajo"
    }

    fn screen() -> Screen {
        Screen::WorkGroups
    }
}
