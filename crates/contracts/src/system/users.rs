use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::{not_blank, validate_form};
use crate::system::permissions::Screen;
use crate::system::work_groups::WorkGroup;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemUser {
    pub id: EntityId,
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub work_group_id: Option<EntityId>,
    #[serde(default)]
    pub work_group: Option<WorkGroup>,
    pub is_admin: bool,
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Create/update DTO. `password` is required on create and optional on update
/// (empty keeps the current one), see [`SystemUserForm::validate_for`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SystemUserForm {
    #[validate(length(min = 3, max = 40, message = "entre 3 y 40 caracteres"), custom = "not_blank")]
    pub username: String,
    #[validate(length(min = 1, max = 120, message = "entre 1 y 120 caracteres"), custom = "not_blank")]
    pub full_name: String,
    #[validate(email(message = "correo inválido"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, message = "mínimo 6 caracteres"))]
    pub password: Option<String>,
    pub work_group_id: Option<EntityId>,
    pub is_admin: bool,
    pub is_active: bool,
}

impl Default for SystemUserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            full_name: String::new(),
            email: None,
            password: None,
            work_group_id: None,
            is_admin: false,
            is_active: true,
        }
    }
}

impl SystemUserForm {
    pub fn validate_for(&self, is_new: bool) -> Result<(), String> {
        validate_form(self)?;
        if is_new && self.password.as_deref().map_or(true, |p| p.is_empty()) {
            return Err("password: obligatoria para un usuario nuevo".into());
        }
        Ok(())
    }
}

impl AggregateRoot for SystemUser {
    type Form = SystemUserForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        if self.full_name.trim().is_empty() {
            self.username.clone()
        } else {
            format!("{} ({})", self.full_name, self.username)
        }
    }

    fn to_form(&self) -> Self::Form {
        SystemUserForm {
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: None,
            work_group_id: self.work_group_id,
            is_admin: self.is_admin,
            is_active: self.is_active,
        }
    }

    fn aggregate_index() -> &'static str {
        "sys"
    }

    fn collection_name() -> &'static str {
        "user"
    }

    fn element_name() -> &'static str {
        "Usuario"
    }

    fn list_name() -> &'static str {
        "Usuarios"
    }

    fn screen() -> Screen {
        Screen::Users
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub user_id: EntityId,
    /// None if admin changing someone else's password
    pub old_password: Option<String>,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SystemUserForm {
        SystemUserForm {
            username: "operador1".into(),
            full_name: "Ana Pérez".into(),
            email: Some("ana@planta.mx".into()),
            ..Default::default()
        }
    }

    #[test]
    fn password_required_only_for_new_users() {
        let f = form();
        assert!(f.validate_for(false).is_ok());
        assert!(f.validate_for(true).unwrap_err().starts_with("password"));

        let f = SystemUserForm {
            password: Some("secreto1".into()),
            ..form()
        };
        assert!(f.validate_for(true).is_ok());
    }

    #[test]
    fn short_password_and_bad_email_are_rejected() {
        let f = SystemUserForm {
            password: Some("123".into()),
            email: Some("no-es-correo".into()),
            ..form()
        };
        let msg = f.validate_for(false).unwrap_err();
        assert!(msg.contains("email: correo inválido"));
        assert!(msg.contains("password: mínimo 6 caracteres"));
    }

    #[test]
    fn user_json_embeds_work_group() {
        let json = r#"{
            "id": 4, "username": "jlopez", "fullName": "Juan López", "email": null,
            "workGroupId": 2,
            "workGroup": {"id": 2, "name": "Turno A", "description": "",
                          "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"},
            "isAdmin": false, "isActive": true,
            "createdAt": "2024-01-02T00:00:00Z", "updatedAt": "2024-01-02T00:00:00Z", "deletedAt": null
        }"#;
        let user: SystemUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.work_group.as_ref().map(|g| g.name.as_str()), Some("Turno A"));
        assert_eq!(user.display_name(), "Juan López (jlopez)");
        assert!(!user.is_deleted());
    }
}
