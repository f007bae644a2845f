use crate::domain::a009_product::aggregate::Product;
use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Finished,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Finished,
        OrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::InProgress => "En proceso",
            OrderStatus::Finished => "Terminada",
            OrderStatus::Cancelled => "Cancelada",
        }
    }

    /// Wire value, used as `<option value>` in selects.
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "inProgress",
            OrderStatus::Finished => "finished",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Closed orders no longer accept production lots.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::InProgress)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: EntityId,
    pub order_id: EntityId,
    pub product_id: EntityId,
    pub quantity: f64,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl OrderDetail {
    pub fn product_name(&self) -> String {
        self.product
            .as_ref()
            .map(|p| p.display_name())
            .unwrap_or_else(|| format!("#{}", self.product_id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailForm {
    /// Set when editing a row that already exists on the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub order_id: EntityId,
    #[validate(range(min = 1, message = "seleccione un producto"))]
    pub product_id: i64,
    #[validate(range(min = 0.001, message = "la cantidad debe ser mayor a cero"))]
    pub quantity: f64,
}

impl AggregateRoot for OrderDetail {
    type Form = OrderDetailForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        format!("{} x {}", self.product_name(), self.quantity)
    }

    fn to_form(&self) -> Self::Form {
        OrderDetailForm {
            id: Some(self.id),
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "order-detail"
    }

    fn element_name() -> &'static str {
        "Detalle de orden"
    }

    fn list_name() -> &'static str {
        "Detalles de orden"
    }

    fn screen() -> Screen {
        Screen::Orders
    }
}

/// Orden de producción
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOrder {
    pub id: EntityId,
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub details: Vec<OrderDetail>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ProductionOrder {
    /// Sum of ordered quantities over live detail rows.
    pub fn total_quantity(&self) -> f64 {
        self.details
            .iter()
            .filter(|d| !d.metadata.is_deleted())
            .map(|d| d.quantity)
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_details"))]
pub struct ProductionOrderForm {
    #[validate(length(min = 1, max = 30, message = "entre 1 y 30 caracteres"), custom = "not_blank")]
    pub code: String,
    #[validate(length(max = 500, message = "máximo 500 caracteres"))]
    pub description: String,
    pub due_date: NaiveDate,
    pub status: OrderStatus,
    pub details: Vec<OrderDetailForm>,
}

impl Default for ProductionOrderForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            description: String::new(),
            due_date: chrono::Utc::now().date_naive(),
            status: OrderStatus::Pending,
            details: Vec::new(),
        }
    }
}

fn detail_error(message: String) -> ValidationError {
    let mut err = ValidationError::new("details");
    err.message = Some(Cow::from(message));
    err
}

fn validate_details(form: &ProductionOrderForm) -> Result<(), ValidationError> {
    if form.details.is_empty() {
        return Err(detail_error("agregue al menos un producto".to_string()));
    }
    for (i, detail) in form.details.iter().enumerate() {
        if detail.validate().is_err() {
            return Err(detail_error(format!(
                "renglón {}: producto y cantidad son obligatorios",
                i + 1
            )));
        }
        if form.details[..i].iter().any(|d| d.product_id == detail.product_id) {
            return Err(detail_error(format!("renglón {}: producto repetido", i + 1)));
        }
    }
    Ok(())
}

impl AggregateRoot for ProductionOrder {
    type Form = ProductionOrderForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        self.code.clone()
    }

    fn to_form(&self) -> Self::Form {
        ProductionOrderForm {
            code: self.code.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            status: self.status,
            details: self
                .details
                .iter()
                .filter(|d| !d.metadata.is_deleted())
                .map(|d| d.to_form())
                .collect(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Orden de producción"
    }

    fn list_name() -> &'static str {
        "Órdenes de producción"
    }

    fn screen() -> Screen {
        Screen::Orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;

    fn detail(id: EntityId, product_id: EntityId, quantity: f64) -> OrderDetail {
        OrderDetail {
            id,
            order_id: 1,
            product_id,
            quantity,
            product: None,
            metadata: EntityMetadata::new(),
        }
    }

    fn order(details: Vec<OrderDetail>) -> ProductionOrder {
        ProductionOrder {
            id: 1,
            code: "OP-0001".into(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            status: OrderStatus::Pending,
            details,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn total_quantity_skips_deleted_rows() {
        let mut gone = detail(3, 7, 100.0);
        gone.metadata.deleted_at = Some(chrono::Utc::now());
        let o = order(vec![detail(1, 5, 250.0), detail(2, 6, 12.5), gone]);
        assert_eq!(o.total_quantity(), 262.5);
        assert_eq!(o.to_form().details.len(), 2);
    }

    #[test]
    fn status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"inProgress\"");
        assert_eq!(OrderStatus::from_code("cancelled"), Some(OrderStatus::Cancelled));
        assert_eq!(OrderStatus::from_code("nope"), None);
        assert!(!OrderStatus::Finished.is_open());
    }

    #[test]
    fn details_are_validated() {
        let mut form = order(vec![]).to_form();
        assert_eq!(
            validate_form(&form).unwrap_err(),
            "agregue al menos un producto"
        );

        form.details = vec![
            OrderDetailForm { product_id: 5, quantity: 1.0, ..Default::default() },
            OrderDetailForm { product_id: 5, quantity: 2.0, ..Default::default() },
        ];
        assert_eq!(validate_form(&form).unwrap_err(), "renglón 2: producto repetido");

        form.details[1].product_id = 6;
        form.details[1].quantity = 0.0;
        assert_eq!(
            validate_form(&form).unwrap_err(),
            "renglón 2: producto y cantidad son obligatorios"
        );

        form.details[1].quantity = 3.0;
        assert!(validate_form(&form).is_ok());
    }

    #[test]
    fn detail_row_needs_product() {
        let row = OrderDetailForm { product_id: 0, quantity: 4.0, ..Default::default() };
        assert_eq!(validate_form(&row).unwrap_err(), "product_id: seleccione un producto");
        let row = OrderDetailForm { product_id: 8, ..row };
        assert!(validate_form(&row).is_ok());
    }
}
