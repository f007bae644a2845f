use crate::shared::api_utils::collection_path;
use crate::shared::crud::{fetch_json, report, ApiError};
use crate::shared::notify::Notifier;
use contracts::domain::a010_production_order::aggregate::ProductionOrder;
use contracts::domain::a011_production::aggregate::ProductionDateRange;
use contracts::domain::common::AggregateRoot;

/// Orders due inside the range. `GET /order/date?from=&to=`
pub async fn list_by_date(
    range: ProductionDateRange,
    notifier: Notifier,
) -> Result<Vec<ProductionOrder>, ApiError> {
    let path = format!(
        "{}?{}",
        collection_path(ProductionOrder::collection_name(), &["date"]),
        range.to_query_string()
    );
    let result = fetch_json::<Vec<ProductionOrder>>(&path).await;
    report(notifier, "Cargar órdenes por fecha", result, None)
}
