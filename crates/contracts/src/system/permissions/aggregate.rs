use super::{Degree, Screen};
use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One (user, sector, screen) → degree row as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: EntityId,
    pub user_id: EntityId,
    pub sector_id: EntityId,
    /// Kept numeric: rows for screens this build does not know are ignored, not rejected
    pub screen_id: u16,
    pub degree: Degree,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Permission {
    pub fn screen(&self) -> Option<Screen> {
        Screen::from_id(self.screen_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PermissionForm {
    #[validate(range(min = 1, message = "seleccione un usuario"))]
    pub user_id: i64,
    #[validate(range(min = 1, message = "seleccione un sector"))]
    pub sector_id: i64,
    #[validate(range(min = 1, max = 14, message = "pantalla desconocida"))]
    pub screen_id: u16,
    pub degree: Degree,
}

impl AggregateRoot for Permission {
    type Form = PermissionForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        let screen = self
            .screen()
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| format!("#{}", self.screen_id));
        format!("{} ({})", screen, self.degree)
    }

    fn to_form(&self) -> Self::Form {
        PermissionForm {
            user_id: self.user_id,
            sector_id: self.sector_id,
            screen_id: self.screen_id,
            degree: self.degree,
        }
    }

    fn aggregate_index() -> &'static str {
        "sys"
    }

    fn collection_name() -> &'static str {
        "permission"
    }

    fn element_name() -> &'static str {
        "Permiso"
    }

    fn list_name() -> &'static str {
        "Permisos"
    }

    fn screen() -> Screen {
        Screen::Permissions
    }
}

/// Matrix cell as held in UI state; `id` is set for rows the server already has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionEntry {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<EntityId>,
    pub sector_id: EntityId,
    pub screen_id: u16,
    pub degree: Degree,
}

/// Body of `POST /permission/bulk`: the full matrix of one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionBulkRequest {
    pub user_id: EntityId,
    pub permissions: Vec<PermissionEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;

    #[test]
    fn permission_needs_user_and_sector() {
        let form = PermissionForm {
            user_id: 0,
            sector_id: 0,
            screen_id: Screen::Machines.id(),
            degree: Degree::EDIT,
        };
        assert_eq!(
            validate_form(&form).unwrap_err(),
            "sector_id: seleccione un sector; user_id: seleccione un usuario"
        );
        let form = PermissionForm { user_id: 7, sector_id: 2, ..form };
        assert!(validate_form(&form).is_ok());
    }
}
