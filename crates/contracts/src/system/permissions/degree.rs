use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission level a user holds on a screen.
///
/// Levels are cumulative: a higher degree allows everything a lower one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Degree(u8);

impl Degree {
    pub const NONE: Degree = Degree(0);
    pub const VIEW: Degree = Degree(1);
    pub const CREATE: Degree = Degree(2);
    pub const EDIT: Degree = Degree(3);
    pub const DELETE: Degree = Degree(4);
    pub const FULL: Degree = Degree(5);

    pub const ALL: [Degree; 6] = [
        Degree::NONE,
        Degree::VIEW,
        Degree::CREATE,
        Degree::EDIT,
        Degree::DELETE,
        Degree::FULL,
    ];

    /// Values above `FULL` are clamped.
    pub const fn new(value: u8) -> Self {
        if value > Self::FULL.0 {
            Self::FULL
        } else {
            Degree(value)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn allows(self, action: Action) -> bool {
        self >= action.required_degree()
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Sin acceso",
            1 => "Consulta",
            2 => "Alta",
            3 => "Modificación",
            4 => "Baja",
            _ => "Total",
        }
    }
}

impl From<u8> for Degree {
    fn from(value: u8) -> Self {
        Degree::new(value)
    }
}

impl From<Degree> for u8 {
    fn from(degree: Degree) -> Self {
        degree.0
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.0, self.label())
    }
}

/// Row/page level operations gated by degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Create,
    Edit,
    SoftDelete,
    Recover,
    HardDelete,
}

impl Action {
    pub fn required_degree(self) -> Degree {
        match self {
            Action::View => Degree::VIEW,
            Action::Create => Degree::CREATE,
            Action::Edit => Degree::EDIT,
            Action::SoftDelete | Action::Recover => Degree::DELETE,
            Action::HardDelete => Degree::FULL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_are_cumulative() {
        assert!(!Degree::NONE.allows(Action::View));
        assert!(Degree::VIEW.allows(Action::View));
        assert!(!Degree::VIEW.allows(Action::Create));
        assert!(Degree::EDIT.allows(Action::Create));
        assert!(!Degree::EDIT.allows(Action::SoftDelete));
        assert!(Degree::DELETE.allows(Action::Recover));
        assert!(!Degree::DELETE.allows(Action::HardDelete));
        assert!(Degree::FULL.allows(Action::HardDelete));
    }

    #[test]
    fn out_of_range_values_clamp_to_full() {
        assert_eq!(Degree::new(9), Degree::FULL);
        let d: Degree = serde_json::from_str("200").unwrap();
        assert_eq!(d, Degree::FULL);
        assert_eq!(serde_json::to_string(&Degree::EDIT).unwrap(), "3");
    }
}
