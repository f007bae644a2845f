use crate::shared::date_utils::{to_date_input, today};
use crate::shared::icons::icon;
use crate::shared::notify::Notifier;
use chrono::{Datelike, NaiveDate};
use contracts::domain::a011_production::aggregate::ProductionDateRange;
use leptos::prelude::*;
use thaw::*;

/// First day of the current month … today
pub fn current_month(day: NaiveDate) -> ProductionDateRange {
    let first = day.with_day(1).unwrap_or(day);
    ProductionDateRange {
        from: first,
        to: day,
    }
}

/// Two date inputs. "Filtrar" applies the range, "Todo" drops it.
///
/// `range` is `None` while the whole collection is shown.
#[component]
pub fn DateRangeFilter(
    range: RwSignal<Option<ProductionDateRange>>,
    on_change: Callback<()>,
) -> impl IntoView {
    let initial = range.get_untracked().unwrap_or_else(|| current_month(today()));
    let from = RwSignal::new(to_date_input(&initial.from));
    let to = RwSignal::new(to_date_input(&initial.to));
    let notifier = Notifier::new();

    let apply = move |_| match ProductionDateRange::parse(&from.get_untracked(), &to.get_untracked()) {
        Ok(parsed) => {
            range.set(Some(parsed));
            on_change.run(());
        }
        Err(e) => notifier.warning(e),
    };

    let clear = move |_| {
        range.set(None);
        on_change.run(());
    };

    view! {
        <div class="date-range-filter">
            {icon("calendar")}
            <input
                type="date"
                class="form__input form__input--date"
                prop:value=move || from.get()
                on:change=move |ev| from.set(event_target_value(&ev))
            />
            <span>"—"</span>
            <input
                type="date"
                class="form__input form__input--date"
                prop:value=move || to.get()
                on:change=move |ev| to.set(event_target_value(&ev))
            />
            <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Small on_click=apply>
                {icon("filter")}
                " Filtrar"
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=clear
                disabled=Signal::derive(move || range.get().is_none())
            >
                "Todo"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_month_starts_on_the_first() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let range = current_month(day);
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(range.to, day);
        assert!(range.validate().is_ok());
    }
}
