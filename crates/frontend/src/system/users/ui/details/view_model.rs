use crate::shared::details::FormBinding;
use contracts::domain::common::EntityId;
use contracts::system::users::{SystemUser, SystemUserForm};
use leptos::prelude::*;

fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Copy)]
pub struct UserFields {
    pub username: RwSignal<String>,
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    /// Пусто при редактировании = не менять
    pub password: RwSignal<String>,
    pub work_group_id: RwSignal<Option<EntityId>>,
    pub is_admin: RwSignal<bool>,
    pub is_active: RwSignal<bool>,
}

impl FormBinding for UserFields {
    type Entity = SystemUser;

    fn new() -> Self {
        let fields = Self {
            username: RwSignal::new(String::new()),
            full_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            work_group_id: RwSignal::new(None),
            is_admin: RwSignal::new(false),
            is_active: RwSignal::new(true),
        };
        fields.fill(&SystemUserForm::default());
        fields
    }

    fn fill(&self, form: &SystemUserForm) {
        self.username.set(form.username.clone());
        self.full_name.set(form.full_name.clone());
        self.email.set(form.email.clone().unwrap_or_default());
        self.password.set(String::new());
        self.work_group_id.set(form.work_group_id);
        self.is_admin.set(form.is_admin);
        self.is_active.set(form.is_active);
    }

    fn read(&self) -> Result<SystemUserForm, String> {
        Ok(SystemUserForm {
            username: self.username.get_untracked().trim().to_string(),
            full_name: self.full_name.get_untracked().trim().to_string(),
            email: optional_text(self.email.get_untracked()),
            password: optional_text(self.password.get_untracked()),
            work_group_id: self.work_group_id.get_untracked(),
            is_admin: self.is_admin.get_untracked(),
            is_active: self.is_active.get_untracked(),
        })
    }

    fn check(&self, form: &SystemUserForm, is_new: bool) -> Result<(), String> {
        form.validate_for(is_new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_text_is_none() {
        assert_eq!(optional_text("   ".to_string()), None);
        assert_eq!(optional_text(" ana@planta.mx ".to_string()).as_deref(), Some("ana@planta.mx"));
    }
}
