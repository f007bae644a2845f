use crate::domain::a003_sector_process::aggregate::SectorProcess;
use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Модель изделия: product family made by one sector/process pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductModel {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sector_process_id: EntityId,
    #[serde(default)]
    pub sector_process: Option<SectorProcess>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductModelForm {
    #[validate(length(min = 1, max = 80, message = "entre 1 y 80 caracteres"), custom = "not_blank")]
    pub name: String,
    #[validate(length(max = 255, message = "máximo 255 caracteres"))]
    pub description: String,
    #[validate(range(min = 1, message = "seleccione sector / proceso"))]
    pub sector_process_id: i64,
}

impl AggregateRoot for ProductModel {
    type Form = ProductModelForm;

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
        ProductModelForm {
            name: self.name.clone(),
            description: self.description.clone(),
            sector_process_id: self.sector_process_id,
        }
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "model"
    }

    fn element_name() -> &'static str {
        "Modelo"
    }

    fn list_name() -> &'static str {
        "Modelos"
    }

    fn screen() -> Screen {
        Screen::Models
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;

    #[test]
    fn model_needs_sector_process() {
        let mut form = ProductModelForm {
            name: "Tarima estándar".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_form(&form).unwrap_err(),
            "sector_process_id: seleccione sector / proceso"
        );
        form.sector_process_id = 2;
        assert!(validate_form(&form).is_ok());
    }
}
