use crate::domain::a006_color::aggregate::Color;
use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Material mix (virgin/recycled resin, pigment) that gives a product its color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color_id: EntityId,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormulaForm {
    #[validate(length(min = 1, max = 80, message = "entre 1 y 80 caracteres"), custom = "not_blank")]
    pub name: String,
    #[validate(length(max = 500, message = "máximo 500 caracteres"))]
    pub description: String,
    #[validate(range(min = 1, message = "seleccione un color"))]
    pub color_id: i64,
}

impl AggregateRoot for Formula {
    type Form = FormulaForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_form(&self) -> Self::Form {
        FormulaForm {
            name: self.name.clone(),
            description: self.description.clone(),
            color_id: self.color_id,
        }
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "formula"
    }

    fn element_name() -> &'static str {
        "Fórmula"
    }

    fn list_name() -> &'static str {
        "Fórmulas"
    }

    fn screen() -> Screen {
        Screen::Formulas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;

    #[test]
    fn formula_needs_color() {
        let mut form = FormulaForm {
            name: "PEAD reciclado negro".into(),
            description: "70% molido".into(),
            color_id: 0,
        };
        assert_eq!(validate_form(&form).unwrap_err(), "color_id: seleccione un color");
        form.color_id = 1;
        assert!(validate_form(&form).is_ok());
    }
}
