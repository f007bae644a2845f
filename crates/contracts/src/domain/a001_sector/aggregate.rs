use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Сектор: area of the plant where production happens (inyección, molienda...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl AggregateRoot for Sector {
    type Form = SectorForm;

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
        SectorForm {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "sector"
    }

    fn element_name() -> &'static str {
        "Sector"
    }

    fn list_name() -> &'static str {
        "Sectores"
    }

    fn screen() -> Screen {
        Screen::Sectors
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SectorForm {
    #[validate(length(min = 1, max = 80, message = "entre 1 y 80 caracteres"), custom = "not_blank")]
    pub name: String,
    #[validate(length(max = 255, message = "máximo 255 caracteres"))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;

    #[test]
    fn collection_and_tab_key() {
        assert_eq!(Sector::full_name(), "a001_sector");
        assert_eq!(Sector::full_name(), Screen::Sectors.tab_key());
    }

    #[test]
    fn blank_name_is_rejected() {
        let form = SectorForm {
            name: "   ".into(),
            description: String::new(),
        };
        assert_eq!(validate_form(&form).unwrap_err(), "name: no puede estar vacío");
    }
}
