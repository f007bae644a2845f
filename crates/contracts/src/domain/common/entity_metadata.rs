use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit block carried by every record (lifecycle tracking)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Дата создания записи
    pub created_at: DateTime<Utc>,
    /// Дата последнего обновления
    pub updated_at: DateTime<Utc>,
    /// Мягкое удаление (soft delete): `Some` while the record is inactive
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleted_at_is_optional_in_json() {
        let json = r#"{"createdAt":"2024-03-15T14:02:26Z","updatedAt":"2024-03-16T08:00:00Z"}"#;
        let meta: EntityMetadata = serde_json::from_str(json).unwrap();
        assert!(!meta.is_deleted());

        let json = r#"{"createdAt":"2024-03-15T14:02:26Z","updatedAt":"2024-03-16T08:00:00Z","deletedAt":"2024-04-01T00:00:00Z"}"#;
        let meta: EntityMetadata = serde_json::from_str(json).unwrap();
        assert!(meta.is_deleted());
    }
}
