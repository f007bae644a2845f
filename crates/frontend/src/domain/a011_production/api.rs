use crate::shared::api_utils::collection_path;
use crate::shared::crud::{fetch_json, report, ApiError};
use crate::shared::notify::Notifier;
use contracts::domain::a011_production::aggregate::{Production, ProductionDateRange};
use contracts::domain::common::AggregateRoot;

/// Lots started inside the range. `GET /production/date?from=&to=`
pub async fn list_by_date(
    range: ProductionDateRange,
    notifier: Notifier,
) -> Result<Vec<Production>, ApiError> {
    let path = format!(
        "{}?{}",
        collection_path(Production::collection_name(), &["date"]),
        range.to_query_string()
    );
    let result = fetch_json::<Vec<Production>>(&path).await;
    report(notifier, "Cargar producción por fecha", result, None)
}
