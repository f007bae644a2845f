use crate::shared::api_utils::collection_path;
use crate::shared::crud::{fetch_json, report, send_empty_json, ApiError};
use crate::shared::notify::Notifier;
use contracts::domain::common::EntityId;
use contracts::system::permissions::{Permission, PermissionMatrix};

/// Rows of one user in every sector. `GET /permission/user/{id}`
pub async fn fetch_for_user(user_id: EntityId) -> Result<Vec<Permission>, ApiError> {
    let path = collection_path("permission", &["user", &user_id.to_string()]);
    fetch_json::<Vec<Permission>>(&path).await
}

/// Replaces the whole matrix of a user. `POST /permission/bulk`
pub async fn save_matrix(matrix: &PermissionMatrix, notifier: Notifier) -> Result<(), ApiError> {
    let path = collection_path("permission", &["bulk"]);
    let request = matrix.to_bulk_request();
    log::debug!(
        "saving {} permission cells for user {}",
        request.permissions.len(),
        request.user_id
    );
    let result = send_empty_json(&path, &request).await;
    report(
        notifier,
        &format!("Guardar permisos del usuario #{}", matrix.user_id),
        result,
        Some("Permisos · guardados".to_string()),
    )
}
