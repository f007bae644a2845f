use crate::shared::components::entity_select::{id_or_zero, non_zero};
use crate::shared::date_utils::{parse_datetime_input, to_datetime_input};
use crate::shared::details::{parse_optional_decimal, FormBinding};
use contracts::domain::a011_production::aggregate::{Production, ProductionForm, Quality};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductionFields {
    pub machine_id: RwSignal<Option<EntityId>>,
    pub order_detail_id: RwSignal<Option<EntityId>>,
    pub quality: RwSignal<String>,
    pub lot_code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub weight_kg: RwSignal<String>,
    pub started_at: RwSignal<String>,
    pub finished_at: RwSignal<String>,
}

fn datetime(label: &str, text: &str) -> Result<chrono::DateTime<chrono::Utc>, String> {
    parse_datetime_input(text).ok_or_else(|| format!("{}: fecha y hora inválidas", label))
}

impl FormBinding for ProductionFields {
    type Entity = Production;

    fn new() -> Self {
        let fields = Self {
            machine_id: RwSignal::new(None),
            order_detail_id: RwSignal::new(None),
            quality: RwSignal::new(String::new()),
            lot_code: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            weight_kg: RwSignal::new(String::new()),
            started_at: RwSignal::new(String::new()),
            finished_at: RwSignal::new(String::new()),
        };
        fields.fill(&ProductionForm::default());
        fields
    }

    fn fill(&self, form: &ProductionForm) {
        self.machine_id.set(non_zero(form.machine_id));
        self.order_detail_id.set(form.order_detail_id.and_then(non_zero));
        self.quality.set(form.quality.code().to_string());
        self.lot_code.set(form.lot_code.clone());
        self.description.set(form.description.clone());
        self.weight_kg
            .set(form.weight_kg.map(|w| w.to_string()).unwrap_or_default());
        self.started_at.set(to_datetime_input(&form.started_at));
        self.finished_at.set(to_datetime_input(&form.finished_at));
    }

    fn read(&self) -> Result<ProductionForm, String> {
        Ok(ProductionForm {
            order_detail_id: self.order_detail_id.get_untracked(),
            machine_id: id_or_zero(self.machine_id.get_untracked()),
            description: self.description.get_untracked(),
            quality: Quality::from_code(&self.quality.get_untracked()).unwrap_or_default(),
            lot_code: self.lot_code.get_untracked().trim().to_string(),
            weight_kg: parse_optional_decimal("weight_kg", &self.weight_kg.get_untracked())?,
            started_at: datetime("started_at", &self.started_at.get_untracked())?,
            finished_at: datetime("finished_at", &self.finished_at.get_untracked())?,
        })
    }
}
