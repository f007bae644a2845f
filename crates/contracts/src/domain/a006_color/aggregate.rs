use crate::domain::common::{AggregateRoot, EntityId, EntityMetadata};
use crate::shared::validation::not_blank;
use crate::system::permissions::Screen;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: EntityId,
    pub name: String,
    /// `#RRGGBB`
    pub hex: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ColorForm {
    #[validate(length(min = 1, max = 60, message = "entre 1 y 60 caracteres"), custom = "not_blank")]
    pub name: String,
    #[validate(custom = "hex_color")]
    pub hex: String,
}

impl Default for ColorForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            hex: "#000000".to_string(),
        }
    }
}

fn hex_color(value: &str) -> Result<(), ValidationError> {
    let digits = value.strip_prefix('#').unwrap_or("");
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("hex");
        err.message = Some("formato #RRGGBB".into());
        Err(err)
    }
}

impl AggregateRoot for Color {
    type Form = ColorForm;

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
        ColorForm {
            name: self.name.clone(),
            hex: self.hex.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "color"
    }

    fn element_name() -> &'static str {
        "Color"
    }

    fn list_name() -> &'static str {
        "Colores"
    }

    fn screen() -> Screen {
        Screen::Colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_format() {
        assert!(hex_color("#1a2B3c").is_ok());
        assert!(hex_color("1a2b3c").is_err());
        assert!(hex_color("#12345").is_err());
        assert!(hex_color("#GGGGGG").is_err());
    }
}
