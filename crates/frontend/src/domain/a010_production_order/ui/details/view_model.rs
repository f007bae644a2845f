use crate::shared::date_utils::{parse_date_input, to_date_input};
use crate::shared::details::{decimal_text, parse_decimal, FormBinding};
use contracts::domain::a010_production_order::aggregate::{
    OrderDetailForm, OrderStatus, ProductionOrder, ProductionOrderForm,
};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

/// Строка заказа в редакторе
#[derive(Clone, Debug, PartialEq)]
pub struct DetailLine {
    /// Local key for `<For>`, never sent
    pub key: u64,
    pub id: Option<EntityId>,
    pub order_id: EntityId,
    pub product_id: Option<EntityId>,
    pub quantity: String,
}

/// Lines as form DTOs. Quantities that do not parse are reported by row.
pub fn lines_to_forms(lines: &[DetailLine]) -> Result<Vec<OrderDetailForm>, String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let quantity = parse_decimal(&format!("renglón {}: cantidad", i + 1), &line.quantity)?;
            Ok(OrderDetailForm {
                id: line.id,
                order_id: line.order_id,
                product_id: line.product_id.unwrap_or(0),
                quantity,
            })
        })
        .collect()
}

#[derive(Clone, Copy)]
pub struct OrderFields {
    pub code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub due_date: RwSignal<String>,
    /// `OrderStatus::code()`
    pub status: RwSignal<String>,
    pub lines: RwSignal<Vec<DetailLine>>,
    next_key: StoredValue<u64>,
}

impl OrderFields {
    fn take_key(&self) -> u64 {
        let key = self.next_key.get_value();
        self.next_key.set_value(key + 1);
        key
    }

    pub fn add_line(&self) {
        let key = self.take_key();
        self.lines.update(|lines| {
            lines.push(DetailLine {
                key,
                id: None,
                order_id: lines.first().map(|l| l.order_id).unwrap_or(0),
                product_id: None,
                quantity: String::new(),
            })
        });
    }

    pub fn remove_line(&self, key: u64) {
        self.lines.update(|lines| lines.retain(|l| l.key != key));
    }

    pub fn edit_line(&self, key: u64, f: impl FnOnce(&mut DetailLine)) {
        self.lines.update(|lines| {
            if let Some(line) = lines.iter_mut().find(|l| l.key == key) {
                f(line);
            }
        });
    }

    pub fn line(&self, key: u64) -> Option<DetailLine> {
        self.lines.with(|lines| lines.iter().find(|l| l.key == key).cloned())
    }
}

impl FormBinding for OrderFields {
    type Entity = ProductionOrder;

    fn new() -> Self {
        let fields = Self {
            code: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            due_date: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            lines: RwSignal::new(Vec::new()),
            next_key: StoredValue::new(1),
        };
        fields.fill(&ProductionOrderForm::default());
        fields.add_line();
        fields
    }

    fn fill(&self, form: &ProductionOrderForm) {
        self.code.set(form.code.clone());
        self.description.set(form.description.clone());
        self.due_date.set(to_date_input(&form.due_date));
        self.status.set(form.status.code().to_string());
        let lines: Vec<DetailLine> = form
            .details
            .iter()
            .map(|d| DetailLine {
                key: self.take_key(),
                id: d.id,
                order_id: d.order_id,
                product_id: (d.product_id > 0).then_some(d.product_id),
                quantity: decimal_text(d.quantity),
            })
            .collect();
        self.lines.set(lines);
    }

    fn read(&self) -> Result<ProductionOrderForm, String> {
        let due_date = parse_date_input(&self.due_date.get_untracked())
            .ok_or_else(|| "due_date: fecha inválida".to_string())?;
        let status = OrderStatus::from_code(&self.status.get_untracked()).unwrap_or_default();
        let details = self.lines.with_untracked(|lines| lines_to_forms(lines))?;
        Ok(ProductionOrderForm {
            code: self.code.get_untracked().trim().to_string(),
            description: self.description.get_untracked(),
            due_date,
            status,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::validate_form;

    fn line(key: u64, product_id: Option<EntityId>, quantity: &str) -> DetailLine {
        DetailLine {
            key,
            id: None,
            order_id: 4,
            product_id,
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn lines_parse_quantities_by_row() {
        let forms = lines_to_forms(&[line(1, Some(7), "12,5"), line(2, None, "")]).unwrap();
        assert_eq!(forms[0].product_id, 7);
        assert_eq!(forms[0].quantity, 12.5);
        assert_eq!(forms[0].order_id, 4);
        assert_eq!(forms[1].product_id, 0);

        let err = lines_to_forms(&[line(1, Some(7), "1"), line(2, Some(8), "mucho")]).unwrap_err();
        assert_eq!(err, "renglón 2: cantidad: número inválido");
    }

    #[test]
    fn unselected_product_fails_order_validation() {
        let form = ProductionOrderForm {
            code: "OP-1".to_string(),
            details: lines_to_forms(&[line(1, Some(3), "10"), line(2, None, "5")]).unwrap(),
            ..Default::default()
        };
        assert_eq!(
            validate_form(&form).unwrap_err(),
            "renglón 2: producto y cantidad son obligatorios"
        );
    }
}
