use crate::domain::a001_sector::aggregate::Sector;
use crate::domain::a002_process::aggregate::Process;
use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which process runs in which sector. Machines and models hang off this pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorProcess {
    pub id: EntityId,
    pub sector_id: EntityId,
    pub process_id: EntityId,
    /// Embedded by the server
    #[serde(default)]
    pub sector: Option<Sector>,
    #[serde(default)]
    pub process: Option<Process>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl SectorProcess {
    pub fn sector_name(&self) -> String {
        self.sector
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("#{}", self.sector_id))
    }

    pub fn process_name(&self) -> String {
        self.process
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("#{}", self.process_id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SectorProcessForm {
    #[validate(range(min = 1, message = "seleccione un sector"))]
    pub sector_id: i64,
    #[validate(range(min = 1, message = "seleccione un proceso"))]
    pub process_id: i64,
}

impl AggregateRoot for SectorProcess {
    type Form = SectorProcessForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        format!("{} / {}", self.sector_name(), self.process_name())
    }

    fn to_form(&self) -> Self::Form {
        SectorProcessForm {
            sector_id: self.sector_id,
            process_id: self.process_id,
        }
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "sector-process"
    }

    fn element_name() -> &'static str {
        "Sector / Proceso"
    }

    fn list_name() -> &'static str {
        "Sectores / Procesos"
    }

    fn screen() -> Screen {
        Screen::SectorProcesses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;

    #[test]
    fn display_name_falls_back_to_ids() {
        let json = r#"{"id":1,"sectorId":3,"processId":9,
            "sector":{"id":3,"name":"Molienda","description":"","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
            "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#;
        let sp: SectorProcess = serde_json::from_str(json).unwrap();
        assert_eq!(sp.display_name(), "Molienda / #9");
        assert_eq!(SectorProcess::full_name(), "a003_sector_process");
    }

    #[test]
    fn both_references_are_required() {
        let form = SectorProcessForm { sector_id: 0, process_id: 9 };
        assert_eq!(validate_form(&form).unwrap_err(), "sector_id: seleccione un sector");

        let form = SectorProcessForm { sector_id: 3, process_id: 0 };
        assert_eq!(validate_form(&form).unwrap_err(), "process_id: seleccione un proceso");

        assert!(validate_form(&SectorProcessForm { sector_id: 3, process_id: 9 }).is_ok());
    }
}
