use super::{Action, Degree, Permission, PermissionBulkRequest, PermissionEntry, Screen};
use crate::domain::common::EntityId;

/// Sparse degree matrix of a single user, keyed by (sector, screen).
///
/// Missing cells mean `Degree::NONE`. Order of `entries` is insertion order;
/// lookups are linear, the matrix never holds more than sectors × 14 cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionMatrix {
    pub user_id: EntityId,
    pub entries: Vec<PermissionEntry>,
}

impl PermissionMatrix {
    pub fn new(user_id: EntityId) -> Self {
        Self {
            user_id,
            entries: Vec::new(),
        }
    }

    /// Build from server rows. Rows of other users and unknown screens are skipped;
    /// a duplicated (sector, screen) keeps the last row.
    pub fn from_permissions(user_id: EntityId, rows: &[Permission]) -> Self {
        let mut matrix = Self::new(user_id);
        for row in rows.iter().filter(|r| r.user_id == user_id) {
            if let Some(screen) = row.screen() {
                matrix.upsert(row.sector_id, screen, row.degree);
                if let Some(entry) = matrix.find_mut(row.sector_id, screen) {
                    entry.id = Some(row.id);
                }
            }
        }
        matrix
    }

    fn position(&self, sector_id: EntityId, screen: Screen) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.sector_id == sector_id && e.screen_id == screen.id())
    }

    fn find_mut(&mut self, sector_id: EntityId, screen: Screen) -> Option<&mut PermissionEntry> {
        let idx = self.position(sector_id, screen)?;
        self.entries.get_mut(idx)
    }

    /// Replace the degree of an existing cell or append a new one.
    /// Returns `true` when the matrix changed.
    pub fn upsert(&mut self, sector_id: EntityId, screen: Screen, degree: Degree) -> bool {
        match self.find_mut(sector_id, screen) {
            Some(entry) if entry.degree == degree => false,
            Some(entry) => {
                entry.degree = degree;
                true
            }
            None => {
                self.entries.push(PermissionEntry {
                    id: None,
                    sector_id,
                    screen_id: screen.id(),
                    degree,
                });
                true
            }
        }
    }

    pub fn degree(&self, sector_id: EntityId, screen: Screen) -> Degree {
        self.position(sector_id, screen)
            .map(|idx| self.entries[idx].degree)
            .unwrap_or(Degree::NONE)
    }

    /// Degree in the given sector; without a sector, the highest degree over all sectors.
    pub fn effective_degree(&self, sector_id: Option<EntityId>, screen: Screen) -> Degree {
        match sector_id {
            Some(sector) => self.degree(sector, screen),
            None => self
                .entries
                .iter()
                .filter(|e| e.screen_id == screen.id())
                .map(|e| e.degree)
                .max()
                .unwrap_or(Degree::NONE),
        }
    }

    /// One row of the editor: every screen with its degree in `sector_id`.
    pub fn row_for_sector(&self, sector_id: EntityId) -> Vec<(Screen, Degree)> {
        Screen::ALL
            .iter()
            .map(|&screen| (screen, self.degree(sector_id, screen)))
            .collect()
    }

    /// Upsert every pair of a row. Returns how many cells changed.
    pub fn set_sector_row(&mut self, sector_id: EntityId, row: &[(Screen, Degree)]) -> usize {
        row.iter()
            .filter(|(screen, degree)| self.upsert(sector_id, *screen, *degree))
            .count()
    }

    pub fn visible_screens(&self, sector_id: Option<EntityId>) -> Vec<Screen> {
        Screen::ALL
            .iter()
            .copied()
            .filter(|&s| self.effective_degree(sector_id, s).allows(Action::View))
            .collect()
    }

    /// Cells with degree 0 are sent too, so the server can revoke them.
    pub fn to_bulk_request(&self) -> PermissionBulkRequest {
        PermissionBulkRequest {
            user_id: self.user_id,
            permissions: self.entries.clone(),
        }
    }
}

/// What the signed-in user may do, resolved against the active sector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessContext {
    pub is_admin: bool,
    pub active_sector: Option<EntityId>,
    pub matrix: PermissionMatrix,
}

impl AccessContext {
    pub fn degree(&self, screen: Screen) -> Degree {
        if self.is_admin {
            return Degree::FULL;
        }
        self.matrix.effective_degree(self.active_sector, screen)
    }

    pub fn can(&self, screen: Screen, action: Action) -> bool {
        self.degree(screen).allows(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityMetadata;

    fn row(id: EntityId, user_id: EntityId, sector_id: EntityId, screen_id: u16, degree: u8) -> Permission {
        Permission {
            id,
            user_id,
            sector_id,
            screen_id,
            degree: Degree::new(degree),
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn upsert_replaces_in_place_or_appends() {
        let mut m = PermissionMatrix::new(1);
        assert!(m.upsert(10, Screen::Machines, Degree::VIEW));
        assert!(m.upsert(10, Screen::Colors, Degree::EDIT));
        assert!(m.upsert(10, Screen::Machines, Degree::DELETE));
        assert!(!m.upsert(10, Screen::Machines, Degree::DELETE));

        assert_eq!(m.entries.len(), 2);
        assert_eq!(m.entries[0].screen_id, Screen::Machines.id());
        assert_eq!(m.entries[0].degree, Degree::DELETE);
        assert_eq!(m.degree(10, Screen::Colors), Degree::EDIT);
        assert_eq!(m.degree(11, Screen::Colors), Degree::NONE);
    }

    #[test]
    fn from_permissions_filters_user_and_unknown_screens() {
        let rows = vec![
            row(1, 7, 10, Screen::Orders.id(), 3),
            row(2, 8, 10, Screen::Orders.id(), 5),
            row(3, 7, 10, 250, 5),
            row(4, 7, 20, Screen::Orders.id(), 1),
        ];
        let m = PermissionMatrix::from_permissions(7, &rows);
        assert_eq!(m.entries.len(), 2);
        assert_eq!(m.entries[0].id, Some(1));
        assert_eq!(m.degree(10, Screen::Orders), Degree::EDIT);
        assert_eq!(m.degree(20, Screen::Orders), Degree::VIEW);
    }

    #[test]
    fn effective_degree_without_sector_takes_max() {
        let mut m = PermissionMatrix::new(1);
        m.upsert(10, Screen::Products, Degree::VIEW);
        m.upsert(20, Screen::Products, Degree::DELETE);
        assert_eq!(m.effective_degree(None, Screen::Products), Degree::DELETE);
        assert_eq!(m.effective_degree(Some(10), Screen::Products), Degree::VIEW);
        assert_eq!(m.effective_degree(None, Screen::Units), Degree::NONE);
    }

    #[test]
    fn sector_row_covers_all_screens_and_bulk_keeps_zero_degrees() {
        let mut m = PermissionMatrix::new(3);
        let changed = m.set_sector_row(
            10,
            &[(Screen::Sectors, Degree::FULL), (Screen::Units, Degree::NONE)],
        );
        assert_eq!(changed, 2);
        let r = m.row_for_sector(10);
        assert_eq!(r.len(), Screen::ALL.len());
        assert_eq!(r[0], (Screen::Sectors, Degree::FULL));

        let bulk = m.to_bulk_request();
        assert_eq!(bulk.user_id, 3);
        assert!(bulk
            .permissions
            .iter()
            .any(|e| e.screen_id == Screen::Units.id() && e.degree == Degree::NONE));
        assert_eq!(m.visible_screens(Some(10)), vec![Screen::Sectors]);
    }

    #[test]
    fn admin_gets_full_degree_everywhere() {
        let ctx = AccessContext {
            is_admin: true,
            ..Default::default()
        };
        assert!(ctx.can(Screen::Permissions, Action::HardDelete));

        let mut ctx = AccessContext::default();
        ctx.matrix.upsert(5, Screen::Colors, Degree::EDIT);
        ctx.active_sector = Some(5);
        assert!(ctx.can(Screen::Colors, Action::Edit));
        assert!(!ctx.can(Screen::Colors, Action::SoftDelete));
        ctx.active_sector = Some(6);
        assert!(!ctx.can(Screen::Colors, Action::View));
    }

    #[test]
    fn bulk_request_json_shape() {
        let mut m = PermissionMatrix::new(2);
        m.upsert(1, Screen::Sectors, Degree::VIEW);
        let json = serde_json::to_value(m.to_bulk_request()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": 2,
                "permissions": [{"sectorId": 1, "screenId": 1, "degree": 1}]
            })
        );
    }
}
