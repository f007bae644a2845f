use crate::shared::api_utils::collection_path;
use crate::shared::crud::{report, send_empty_json, ApiError};
use crate::shared::notify::Notifier;
use contracts::domain::common::AggregateRoot;
use contracts::system::users::{ChangePasswordDto, SystemUser};

/// `POST /user/{id}/change-password`
pub async fn change_password(dto: &ChangePasswordDto, notifier: Notifier) -> Result<(), ApiError> {
    let path = collection_path(
        SystemUser::collection_name(),
        &[&dto.user_id.to_string(), "change-password"],
    );
    let result = send_empty_json(&path, dto).await;
    report(notifier, "Cambiar contraseña", result, Some("Contraseña · cambiada".to_string()))
}
