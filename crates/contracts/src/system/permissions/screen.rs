use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens of the dashboard. The numeric id is what the backend stores in
/// `permission.screenId`, so the discriminants must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Screen {
    Sectors = 1,
    Processes = 2,
    SectorProcesses = 3,
    Machines = 4,
    Models = 5,
    Colors = 6,
    Units = 7,
    Formulas = 8,
    Products = 9,
    Orders = 10,
    Productions = 11,
    Users = 12,
    WorkGroups = 13,
    Permissions = 14,
}

impl Screen {
    pub const ALL: [Screen; 14] = [
        Screen::Sectors,
        Screen::Processes,
        Screen::SectorProcesses,
        Screen::Machines,
        Screen::Models,
        Screen::Colors,
        Screen::Units,
        Screen::Formulas,
        Screen::Products,
        Screen::Orders,
        Screen::Productions,
        Screen::Users,
        Screen::WorkGroups,
        Screen::Permissions,
    ];

    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Option<Screen> {
        Screen::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Tab key of the list page for this screen
    pub fn tab_key(self) -> &'static str {
        match self {
            Screen::Sectors => "a001_sector",
            Screen::Processes => "a002_process",
            Screen::SectorProcesses => "a003_sector_process",
            Screen::Machines => "a004_machine",
            Screen::Models => "a005_model",
            Screen::Colors => "a006_color",
            Screen::Units => "a007_unit",
            Screen::Formulas => "a008_formula",
            Screen::Products => "a009_product",
            Screen::Orders => "a010_order",
            Screen::Productions => "a011_production",
            Screen::Users => "sys_users",
            Screen::WorkGroups => "sys_work_groups",
            Screen::Permissions => "sys_permissions",
        }
    }

    pub fn from_tab_key(key: &str) -> Option<Screen> {
        Screen::ALL.iter().copied().find(|s| s.tab_key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Sectors => "Sectores",
            Screen::Processes => "Procesos",
            Screen::SectorProcesses => "Sector / Proceso",
            Screen::Machines => "Máquinas",
            Screen::Models => "Modelos",
            Screen::Colors => "Colores",
            Screen::Units => "Unidades",
            Screen::Formulas => "Fórmulas",
            Screen::Products => "Productos",
            Screen::Orders => "Órdenes de producción",
            Screen::Productions => "Producción",
            Screen::Users => "Usuarios",
            Screen::WorkGroups => "Grupos de trabajo",
            Screen::Permissions => "Permisos",
        }
    }

    /// Permissions are edited from the users page and have no tab of their own.
    pub fn has_page(self) -> bool {
        self != Screen::Permissions
    }

    /// Screen whose tab opens when this one is requested.
    pub fn page_screen(self) -> Screen {
        if self.has_page() {
            self
        } else {
            Screen::Users
        }
    }
}

impl From<Screen> for u16 {
    fn from(screen: Screen) -> Self {
        screen.id()
    }
}

impl TryFrom<u16> for Screen {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Screen::from_id(value).ok_or_else(|| format!("Unknown screen id: {}", value))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_are_unique() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_id(screen.id()), Some(screen));
            assert_eq!(Screen::from_tab_key(screen.tab_key()), Some(screen));
        }
        assert_eq!(Screen::from_id(0), None);
        assert_eq!(Screen::from_id(99), None);
    }

    #[test]
    fn permissions_open_the_users_page() {
        assert_eq!(Screen::Permissions.page_screen(), Screen::Users);
        for screen in Screen::ALL {
            assert!(screen.page_screen().has_page());
        }
        assert_eq!(Screen::Orders.page_screen(), Screen::Orders);
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&Screen::Machines).unwrap(), "4");
        let s: Screen = serde_json::from_str("11").unwrap();
        assert_eq!(s, Screen::Productions);
        assert!(serde_json::from_str::<Screen>("77").is_err());
    }
}
