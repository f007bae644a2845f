use crate::domain::a004_machine::aggregate::Machine;
use crate::domain::a010_production_order::aggregate::OrderDetail;
use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Quality {
    #[default]
    First,
    Second,
    /// Goes back to the grinder
    Recycled,
    Scrap,
}

impl Quality {
    pub const ALL: [Quality; 4] = [
        Quality::First,
        Quality::Second,
        Quality::Recycled,
        Quality::Scrap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quality::First => "Primera",
            Quality::Second => "Segunda",
            Quality::Recycled => "Reciclado",
            Quality::Scrap => "Merma",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Quality::First => "first",
            Quality::Second => "second",
            Quality::Recycled => "recycled",
            Quality::Scrap => "scrap",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.code() == code)
    }
}

/// Один производственный лот
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Production {
    pub id: EntityId,
    #[serde(default)]
    pub order_detail_id: Option<EntityId>,
    pub machine_id: EntityId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quality: Quality,
    pub lot_code: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    #[serde(default)]
    pub machine: Option<Machine>,
    #[serde(default)]
    pub order_detail: Option<OrderDetail>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Production {
    pub fn duration_minutes(&self) -> i64 {
        (self.finished_at - self.started_at).num_minutes()
    }

    pub fn machine_name(&self) -> String {
        self.machine
            .as_ref()
            .map(|m| m.display_name())
            .unwrap_or_else(|| format!("#{}", self.machine_id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_interval"))]
pub struct ProductionForm {
    #[serde(default)]
    pub order_detail_id: Option<EntityId>,
    #[validate(range(min = 1, message = "seleccione una máquina"))]
    pub machine_id: i64,
    #[validate(length(max = 500, message = "máximo 500 caracteres"))]
    pub description: String,
    pub quality: Quality,
    #[validate(length(min = 1, max = 40, message = "entre 1 y 40 caracteres"), custom = "not_blank")]
    pub lot_code: String,
    #[validate(range(min = 0.0, message = "el peso no puede ser negativo"))]
    pub weight_kg: Option<f64>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl Default for ProductionForm {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            order_detail_id: None,
            machine_id: 0,
            description: String::new(),
            quality: Quality::First,
            lot_code: String::new(),
            weight_kg: None,
            started_at: now,
            finished_at: now,
        }
    }
}

fn validate_interval(form: &ProductionForm) -> Result<(), ValidationError> {
    if form.finished_at <= form.started_at {
        let mut err = ValidationError::new("interval");
        err.message = Some(Cow::from("el fin debe ser posterior al inicio"));
        return Err(err);
    }
    Ok(())
}

impl AggregateRoot for Production {
    type Form = ProductionForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        self.lot_code.clone()
    }

    fn to_form(&self) -> Self::Form {
        ProductionForm {
            order_detail_id: self.order_detail_id,
            machine_id: self.machine_id,
            description: self.description.clone(),
            quality: self.quality,
            lot_code: self.lot_code.clone(),
            weight_kg: self.weight_kg,
            started_at: self.started_at,
            finished_at: self.finished_at,
        }
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "production"
    }

    fn element_name() -> &'static str {
        "Lote de producción"
    }

    fn list_name() -> &'static str {
        "Producción"
    }

    fn screen() -> Screen {
        Screen::Productions
    }
}

/// Inclusive day range for the `/date` list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionDateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ProductionDateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, String> {
        let range = Self { from, to };
        range.validate()?;
        Ok(range)
    }

    /// Parses the `YYYY-MM-DD` values coming from date inputs.
    pub fn parse(from: &str, to: &str) -> Result<Self, String> {
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map_err(|_| format!("fecha inválida: '{}'", s))
        };
        Self::new(parse(from)?, parse(to)?)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.from > self.to {
            return Err("la fecha inicial es posterior a la final".to_string());
        }
        Ok(())
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "from={}&to={}",
            self.from.format("%Y-%m-%d"),
            self.to.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn date_range_rejects_inverted_bounds() {
        assert!(ProductionDateRange::new(d(2024, 5, 2), d(2024, 5, 1)).is_err());
        let same_day = ProductionDateRange::new(d(2024, 5, 1), d(2024, 5, 1)).unwrap();
        assert!(same_day.contains(d(2024, 5, 1)));
        assert!(!same_day.contains(d(2024, 5, 2)));
    }

    #[test]
    fn date_range_query_string() {
        let range = ProductionDateRange::parse("2024-01-05", " 2024-02-29 ").unwrap();
        assert_eq!(range.to_query_string(), "from=2024-01-05&to=2024-02-29");
        assert!(ProductionDateRange::parse("05/01/2024", "2024-02-29").is_err());
    }

    #[test]
    fn interval_must_be_positive() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let mut form = ProductionForm {
            machine_id: 2,
            lot_code: "L-001".into(),
            started_at: at,
            finished_at: at,
            ..Default::default()
        };
        assert_eq!(
            validate_form(&form).unwrap_err(),
            "el fin debe ser posterior al inicio"
        );
        form.finished_at = at + chrono::Duration::minutes(30);
        assert!(validate_form(&form).is_ok());
    }

    #[test]
    fn quality_codes() {
        assert_eq!(serde_json::to_string(&Quality::Recycled).unwrap(), "\"recycled\"");
        assert_eq!(Quality::from_code("scrap"), Some(Quality::Scrap));
    }

    #[test]
    fn production_needs_machine() {
        let start = Utc.with_ymd_and_hms(2024, 6, 3, 7, 0, 0).unwrap();
        let mut form = ProductionForm {
            lot_code: "L0603-001".into(),
            started_at: start,
            finished_at: start + chrono::Duration::hours(1),
            ..Default::default()
        };
        assert_eq!(validate_form(&form).unwrap_err(), "machine_id: seleccione una máquina");
        form.machine_id = 5;
        assert!(validate_form(&form).is_ok());
    }
}
