//! Page-shell behaviour shared by every page: the collapsible sidebar and
//! the exclusive selection of campus map regions.

use crate::storage::KeyValueStore;

/// localStorage key remembering whether the sidebar is open.
pub const SIDEBAR_OPEN_KEY: &str = "sidebarOpen";

/// Open/closed state of the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    /// Restore the persisted state. Only an explicit `"false"` closes the
    /// sidebar; a missing or unreadable value leaves it open.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let open = store.get_item(SIDEBAR_OPEN_KEY).as_deref() != Some("false");
        log::debug!("Sidebar starts {}", if open { "open" } else { "closed" });
        Self { open }
    }

    /// Flip the state and persist it.
    pub fn toggle(&mut self, store: &dyn KeyValueStore) {
        self.open = !self.open;
        store.set_item(SIDEBAR_OPEN_KEY, if self.open { "true" } else { "false" });
    }

    /// Class changes that make the DOM reflect this state.
    pub fn classes(&self) -> SidebarClasses {
        SidebarClasses {
            sidebar_closed: !self.open,
            content_sidebar_closed: !self.open,
            toggle_toggled: self.open,
        }
    }
}

/// Whether each shell class should be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarClasses {
    /// `closed` on the sidebar.
    pub sidebar_closed: bool,
    /// `sidebar-closed` on the main content.
    pub content_sidebar_closed: bool,
    /// `toggled` on the toggle button.
    pub toggle_toggled: bool,
}

/// A clickable map region as rendered in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRegion {
    pub metric_id: String,
    pub name: String,
}

/// At most one map region is selected at a time.
#[derive(Debug, Clone, Default)]
pub struct MapSelection {
    regions: Vec<MapRegion>,
    selected: Option<usize>,
}

impl MapSelection {
    pub fn new(regions: Vec<MapRegion>) -> Self {
        Self {
            regions,
            selected: None,
        }
    }

    /// Select the region showing `metric_id`, clearing any other selection.
    /// Metrics without a region (the default total) leave nothing selected.
    pub fn select(&mut self, metric_id: &str) -> Option<&MapRegion> {
        self.selected = self.regions.iter().position(|r| r.metric_id == metric_id);
        self.selected()
    }

    pub fn selected(&self) -> Option<&MapRegion> {
        self.selected.and_then(|index| self.regions.get(index))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn regions() -> Vec<MapRegion> {
        [("hostels_util_pred", "Hostels"), ("stp_util_pred", "STP")]
            .into_iter()
            .map(|(metric_id, name)| MapRegion {
                metric_id: metric_id.to_string(),
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_sidebar_defaults_open() {
        let state = SidebarState::load(&MemoryStore::new());
        assert!(state.open);
        assert!(state.classes().toggle_toggled);
        assert!(!state.classes().sidebar_closed);
    }

    #[test]
    fn test_sidebar_closed_only_by_explicit_false() {
        assert!(!SidebarState::load(&MemoryStore::with_item(SIDEBAR_OPEN_KEY, "false")).open);
        assert!(SidebarState::load(&MemoryStore::with_item(SIDEBAR_OPEN_KEY, "garbage")).open);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let mut state = SidebarState::load(&store);

        state.toggle(&store);
        assert_eq!(store.get_item(SIDEBAR_OPEN_KEY).as_deref(), Some("false"));
        assert_eq!(SidebarState::load(&store), state);

        state.toggle(&store);
        assert_eq!(store.get_item(SIDEBAR_OPEN_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_map_selection_is_exclusive() {
        let mut selection = MapSelection::new(regions());

        selection.select("hostels_util_pred");
        assert!(selection.is_selected(0));

        let selected = selection.select("stp_util_pred").map(|r| r.name.clone());
        assert_eq!(selected.as_deref(), Some("STP"));
        assert!(!selection.is_selected(0));
        assert!(selection.is_selected(1));

        assert!(selection.select("total_consumption_pred").is_none());
        assert!(!selection.is_selected(1));
    }
}
