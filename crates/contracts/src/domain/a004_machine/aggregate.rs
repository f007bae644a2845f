use crate::domain::a003_sector_process::aggregate::SectorProcess;
use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: EntityId,
    pub name: String,
    /// Inventory tag painted on the machine
    pub code: String,
    pub sector_process_id: EntityId,
    #[serde(default)]
    pub sector_process: Option<SectorProcess>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MachineForm {
    #[validate(length(min = 1, max = 80, message = "entre 1 y 80 caracteres"), custom = "not_blank")]
    pub name: String,
    #[validate(length(min = 1, max = 30, message = "entre 1 y 30 caracteres"), custom = "not_blank")]
    pub code: String,
    #[validate(range(min = 1, message = "seleccione sector / proceso"))]
    pub sector_process_id: i64,
}

impl AggregateRoot for Machine {
    type Form = MachineForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        format!("{} [{}]", self.name, self.code)
    }

    fn to_form(&self) -> Self::Form {
        MachineForm {
            name: self.name.clone(),
            code: self.code.clone(),
            sector_process_id: self.sector_process_id,
        }
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "machine"
    }

    fn element_name() -> &'static str {
        "Máquina"
    }

    fn list_name() -> &'static str {
        "Máquinas"
    }

    fn screen() -> Screen {
        Screen::Machines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;

    #[test]
    fn machine_needs_sector_process() {
        let mut form = MachineForm {
            name: "Extrusora 2".into(),
            code: "EXT-02".into(),
            sector_process_id: 0,
        };
        assert_eq!(
            validate_form(&form).unwrap_err(),
            "sector_process_id: seleccione sector / proceso"
        );
        form.sector_process_id = 4;
        assert!(validate_form(&form).is_ok());
    }
}
