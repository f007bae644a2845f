use super::{EntityId, EntityMetadata};
use crate::system::permissions::Screen;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

/// Трейт для корня агрегата
///
/// Every record mirrored from the backend implements this. The generic HTTP
/// client and the list/table components are written against it.
pub trait AggregateRoot: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// DTO sent on create/update, validated before it leaves the browser
    type Form: Clone + Default + Serialize + Validate + Send + Sync + 'static;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    fn id(&self) -> EntityId;

    fn metadata(&self) -> &EntityMetadata;

    /// Human readable label used in selects, toasts and confirmations
    fn display_name(&self) -> String;

    /// Current values as an editable form
    fn to_form(&self) -> Self::Form;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// REST path segment under the API prefix (например, "sector-process")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Screen whose degree gates actions on this aggregate
    fn screen() -> Screen;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    fn is_deleted(&self) -> bool {
        self.metadata().is_deleted()
    }

    /// Полное имя агрегата, used as tab key (например, "a003_sector_process")
    fn full_name() -> String {
        format!(
            "{}_{}",
            Self::aggregate_index(),
            Self::collection_name().replace('-', "_")
        )
    }
}
