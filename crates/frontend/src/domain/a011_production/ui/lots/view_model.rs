use crate::shared::date_utils::parse_datetime_input;
use crate::shared::details::parse_optional_decimal;
use contracts::domain::a011_production::aggregate::Quality;
use contracts::domain::a011_production::lots::LotPlan;
use contracts::domain::common::EntityId;

/// Raw dialog inputs, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LotInputs {
    pub start: String,
    pub total_minutes: String,
    pub count: String,
    pub description: String,
    pub machine_id: Option<EntityId>,
    pub quality: String,
    pub order_detail_id: Option<EntityId>,
    pub lot_prefix: String,
    pub total_weight_kg: String,
}

fn whole_number(label: &str, text: &str) -> Result<u32, String> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| format!("{}: número entero inválido", label))
}

/// Parses the inputs into a plan; splitting itself is left to `split_lots`.
pub fn build_plan(inputs: &LotInputs) -> Result<LotPlan, String> {
    let machine_id = inputs
        .machine_id
        .filter(|id| *id > 0)
        .ok_or_else(|| "seleccione una máquina".to_string())?;
    let start = parse_datetime_input(&inputs.start)
        .ok_or_else(|| "inicio: fecha y hora inválidas".to_string())?;
    let prefix = inputs.lot_prefix.trim();
    if prefix.is_empty() {
        return Err("prefijo de lote: no puede estar vacío".to_string());
    }
    Ok(LotPlan {
        start,
        total_minutes: whole_number("duración", &inputs.total_minutes)?,
        count: whole_number("lotes", &inputs.count)?,
        description: inputs.description.clone(),
        machine_id,
        quality: Quality::from_code(&inputs.quality).unwrap_or_default(),
        order_detail_id: inputs.order_detail_id.filter(|id| *id > 0),
        lot_prefix: prefix.to_string(),
        total_weight_kg: parse_optional_decimal("peso total", &inputs.total_weight_kg)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a011_production::lots::{split_lots, LotSplitError};

    fn inputs() -> LotInputs {
        LotInputs {
            start: "2024-06-03T07:00".into(),
            total_minutes: "480".into(),
            count: "3".into(),
            description: "Turno".into(),
            machine_id: Some(4),
            quality: "second".into(),
            order_detail_id: None,
            lot_prefix: " L0603 ".into(),
            total_weight_kg: "10".into(),
        }
    }

    #[test]
    fn plan_from_typed_inputs() {
        let plan = build_plan(&inputs()).unwrap();
        assert_eq!(plan.total_minutes, 480);
        assert_eq!(plan.count, 3);
        assert_eq!(plan.quality, Quality::Second);
        assert_eq!(plan.lot_prefix, "L0603");
        assert_eq!(plan.total_weight_kg, Some(10.0));

        let lots = split_lots(&plan).unwrap();
        assert_eq!(lots.len(), 3);
        assert_eq!(lots[2].lot_code, "L0603-003");
        assert_eq!(lots[0].finished_at, lots[1].started_at);
    }

    #[test]
    fn bad_inputs_are_reported() {
        let mut no_machine = inputs();
        no_machine.machine_id = None;
        assert_eq!(build_plan(&no_machine).unwrap_err(), "seleccione una máquina");

        let mut count = inputs();
        count.count = "tres".into();
        assert_eq!(build_plan(&count).unwrap_err(), "lotes: número entero inválido");

        let mut zero = inputs();
        zero.count = "0".into();
        let plan = build_plan(&zero).unwrap();
        assert_eq!(split_lots(&plan), Err(LotSplitError::ZeroCount));
    }
}
