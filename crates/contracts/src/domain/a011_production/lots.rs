//! Splitting one production run into equally long, contiguous lots.

use super::aggregate::{ProductionForm, Quality};
use crate::domain::common::EntityId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_LOTS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotPlan {
    pub start: DateTime<Utc>,
    pub total_minutes: u32,
    pub count: u32,
    pub description: String,
    pub machine_id: EntityId,
    pub quality: Quality,
    pub order_detail_id: Option<EntityId>,
    pub lot_prefix: String,
    pub total_weight_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotSplitError {
    #[error("la cantidad de lotes debe ser mayor a cero")]
    ZeroCount,
    #[error("la duración total debe ser mayor a cero")]
    ZeroDuration,
    #[error("máximo {max} lotes por corrida (se pidieron {requested})")]
    TooManyLots { requested: u32, max: u32 },
    #[error("{minutes} min no alcanzan para {count} lotes")]
    DurationTooShort { minutes: u32, count: u32 },
}

/// Builds one `ProductionForm` per lot.
///
/// Lot `i` covers `[start + i*step, start + (i+1)*step)` where `step` is the
/// total duration in seconds divided by `count`. The last lot ends exactly at
/// `start + total_minutes`, whatever the remainder. Weight (if any) is spread
/// evenly at gram precision with the last lot taking the rounding difference.
pub fn split_lots(plan: &LotPlan) -> Result<Vec<ProductionForm>, LotSplitError> {
    if plan.count == 0 {
        return Err(LotSplitError::ZeroCount);
    }
    if plan.total_minutes == 0 {
        return Err(LotSplitError::ZeroDuration);
    }
    if plan.count > MAX_LOTS {
        return Err(LotSplitError::TooManyLots {
            requested: plan.count,
            max: MAX_LOTS,
        });
    }

    let total_secs = i64::from(plan.total_minutes) * 60;
    let count = i64::from(plan.count);
    if total_secs < count {
        return Err(LotSplitError::DurationTooShort {
            minutes: plan.total_minutes,
            count: plan.count,
        });
    }

    let step = total_secs / count;
    let end = plan.start + Duration::seconds(total_secs);
    let weights = plan.total_weight_kg.map(|w| split_weight(w, plan.count));
    let prefix = plan.lot_prefix.trim();

    let lots = (0..plan.count)
        .map(|i| {
            let idx = i as usize;
            let started_at = plan.start + Duration::seconds(step * i64::from(i));
            let finished_at = if i + 1 == plan.count {
                end
            } else {
                plan.start + Duration::seconds(step * i64::from(i + 1))
            };
            ProductionForm {
                order_detail_id: plan.order_detail_id,
                machine_id: plan.machine_id,
                description: plan.description.clone(),
                quality: plan.quality,
                lot_code: format!("{}-{:03}", prefix, i + 1),
                weight_kg: weights.as_ref().map(|w| w[idx]),
                started_at,
                finished_at,
            }
        })
        .collect();

    Ok(lots)
}

/// Work in grams so the parts add up exactly.
fn split_weight(total_kg: f64, count: u32) -> Vec<f64> {
    let total_g = (total_kg * 1000.0).round() as i64;
    let n = i64::from(count);
    let each = total_g / n;
    let last = total_g - each * (n - 1);
    (0..n)
        .map(|i| if i + 1 == n { last } else { each })
        .map(|g| g as f64 / 1000.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn plan(total_minutes: u32, count: u32) -> LotPlan {
        LotPlan {
            start: Utc.with_ymd_and_hms(2024, 6, 3, 7, 0, 0).unwrap(),
            total_minutes,
            count,
            description: "Turno matutino".into(),
            machine_id: 4,
            quality: Quality::First,
            order_detail_id: Some(12),
            lot_prefix: "INY4".into(),
            total_weight_kg: None,
        }
    }

    #[test]
    fn even_split() {
        let lots = split_lots(&plan(480, 4)).unwrap();
        assert_eq!(lots.len(), 4);
        assert_eq!(lots[0].lot_code, "INY4-001");
        assert_eq!(lots[3].lot_code, "INY4-004");
        for lot in &lots {
            assert_eq!((lot.finished_at - lot.started_at).num_minutes(), 120);
            assert_eq!(lot.machine_id, 4);
            assert_eq!(lot.order_detail_id, Some(12));
            assert_eq!(lot.description, "Turno matutino");
            assert_eq!(lot.weight_kg, None);
        }
    }

    #[test]
    fn lots_are_contiguous_and_last_absorbs_remainder() {
        let p = plan(100, 7);
        let lots = split_lots(&p).unwrap();
        for pair in lots.windows(2) {
            assert_eq!(pair[0].finished_at, pair[1].started_at);
        }
        assert_eq!(lots[0].started_at, p.start);
        assert_eq!(lots[6].finished_at, p.start + Duration::minutes(100));
        // 6000 s / 7 = 857 s, remainder 1 s
        assert_eq!((lots[0].finished_at - lots[0].started_at).num_seconds(), 857);
        assert_eq!((lots[6].finished_at - lots[6].started_at).num_seconds(), 858);
    }

    #[test]
    fn weight_sums_exactly() {
        let mut p = plan(60, 3);
        p.total_weight_kg = Some(10.0);
        let lots = split_lots(&p).unwrap();
        let weights: Vec<f64> = lots.iter().map(|l| l.weight_kg.unwrap()).collect();
        assert_eq!(weights, vec![3.333, 3.333, 3.334]);
        let grams: i64 = weights.iter().map(|w| (w * 1000.0).round() as i64).sum();
        assert_eq!(grams, 10_000);
    }

    #[test]
    fn invalid_plans() {
        assert_eq!(split_lots(&plan(60, 0)), Err(LotSplitError::ZeroCount));
        assert_eq!(split_lots(&plan(0, 3)), Err(LotSplitError::ZeroDuration));
        assert_eq!(
            split_lots(&plan(10_000, 501)),
            Err(LotSplitError::TooManyLots { requested: 501, max: 500 })
        );
        assert_eq!(
            split_lots(&plan(1, 61)),
            Err(LotSplitError::DurationTooShort { minutes: 1, count: 61 })
        );
        assert_eq!(split_lots(&plan(1, 60)).map(|l| l.len()), Ok(60));
    }

    #[test]
    fn single_lot_covers_whole_run() {
        let p = plan(45, 1);
        let lots = split_lots(&p).unwrap();
        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].started_at, p.start);
        assert_eq!(lots[0].finished_at, p.start + Duration::minutes(45));
    }
}
