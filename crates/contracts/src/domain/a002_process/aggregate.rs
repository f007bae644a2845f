use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Процесс: how production happens (extrusión, lavado, peletizado...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProcessForm {
    #[validate(length(min = 1, max = 80, message = "entre 1 y 80 caracteres"), custom = "not_blank")]
    pub name: String,
    #[validate(length(max = 255, message = "máximo 255 caracteres"))]
    pub description: String,
}

impl AggregateRoot for Process {
    type Form = ProcessForm;

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
        ProcessForm {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "process"
    }

    fn element_name() -> &'static str {
        "Proceso"
    }

    fn list_name() -> &'static str {
        "Procesos"
    }

    fn screen() -> Screen {
        Screen::Processes
    }
}
