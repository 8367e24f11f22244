//! Tab activation and the page-wide registry of groups.

use super::error::TabPanelError;
use super::layout::{self, ContentHeight};
use super::state::{GroupId, TabGroupState};
use super::view::TabGroupView;
use std::cell::RefCell;
use std::rc::Rc;

/// Handle shared between the registry and the click handlers of one group.
pub type SharedGroup<V> = Rc<RefCell<TabGroup<V>>>;

/// One tab group: its explicit state plus the surface it renders to.
pub struct TabGroup<V: TabGroupView> {
    state: TabGroupState,
    view: V,
}

impl<V: TabGroupView> TabGroup<V> {
    pub fn new(group_id: GroupId, view: V) -> Self {
        let len = view.item_count();
        Self {
            state: TabGroupState::new(group_id, len),
            view,
        }
    }

    pub fn id(&self) -> GroupId {
        self.state.group_id
    }

    pub fn state(&self) -> &TabGroupState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Select `index` and redraw the group. Returns the new group height.
    ///
    /// Every content block is collapsed first, whatever the previous state,
    /// then the active one is measured at its natural height.
    pub fn activate(&mut self, index: usize) -> Result<f64, TabPanelError> {
        self.state.select(index)?;
        let items = layout::render(&self.state);

        for i in 0..items.len() {
            self.view.collapse_content(i);
        }
        for (i, item) in items.iter().enumerate() {
            self.view.set_active(i, item.active);
        }

        let mut natural = 0.0;
        for (i, item) in items.iter().enumerate() {
            if item.content == ContentHeight::Natural {
                natural = self.view.expand_content(i);
            }
        }

        let height = layout::group_height(self.view.header_row_height(), natural);
        self.view.set_group_height(height);
        log::trace!("{}: tab {} active, height {}", self.state.group_id, index, height);
        Ok(height)
    }
}

/// Registry of all tab groups on a page.
pub struct TabPanel<V: TabGroupView> {
    groups: Vec<SharedGroup<V>>,
    next_id: usize,
}

impl<V: TabGroupView> TabPanel<V> {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a group without activating it. Views with no items are skipped.
    pub fn register(&mut self, view: V) -> Option<SharedGroup<V>> {
        if view.item_count() == 0 {
            return None;
        }
        let group_id = GroupId(self.next_id);
        self.next_id += 1;

        let group = Rc::new(RefCell::new(TabGroup::new(group_id, view)));
        self.groups.push(Rc::clone(&group));
        Some(group)
    }

    /// Drop a group from the registry, e.g. when its list leaves the page.
    /// Ids are never reused, so handles of other groups stay valid.
    pub fn unregister(&mut self, group_id: GroupId) -> Option<SharedGroup<V>> {
        let position = self
            .groups
            .iter()
            .position(|group| group.borrow().id() == group_id)?;
        Some(self.groups.remove(position))
    }

    /// Activate the first tab of every group that has no active tab yet.
    /// Returns how many groups were started.
    pub fn start_pending(&self) -> usize {
        let mut started = 0;
        for group in &self.groups {
            let mut group = group.borrow_mut();
            if group.state().active_index().is_none() && group.activate(0).is_ok() {
                started += 1;
            }
        }
        started
    }

    pub fn group(&self, group_id: GroupId) -> Option<&SharedGroup<V>> {
        self.groups
            .iter()
            .find(|group| group.borrow().id() == group_id)
    }

    pub fn activate(&self, group_id: GroupId, index: usize) -> Result<f64, TabPanelError> {
        let group = self
            .group(group_id)
            .ok_or(TabPanelError::UnknownGroup(group_id))?;
        group.borrow_mut().activate(index)
    }

    pub fn active_tabs(&self) -> Vec<(GroupId, Option<usize>)> {
        self.groups
            .iter()
            .map(|group| {
                let group = group.borrow();
                (group.id(), group.state().active_index())
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<V: TabGroupView> Default for TabPanel<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records inline styles the way a browser would hold them.
    #[derive(Debug, Default)]
    struct RecordingView {
        row_height: f64,
        natural: Vec<f64>,
        content: Vec<Option<&'static str>>,
        active: Vec<bool>,
        group_height: Option<f64>,
        ops: Vec<String>,
    }

    impl RecordingView {
        fn new(row_height: f64, natural: &[f64]) -> Self {
            Self {
                row_height,
                natural: natural.to_vec(),
                content: vec![None; natural.len()],
                active: vec![false; natural.len()],
                ..Default::default()
            }
        }

        fn active_items(&self) -> Vec<usize> {
            (0..self.active.len()).filter(|&i| self.active[i]).collect()
        }
    }

    impl TabGroupView for RecordingView {
        fn item_count(&self) -> usize {
            self.natural.len()
        }

        fn collapse_content(&mut self, index: usize) {
            self.content[index] = Some("0px");
            self.ops.push(format!("collapse {}", index));
        }

        fn set_active(&mut self, index: usize, active: bool) {
            self.active[index] = active;
            self.ops.push(format!("active {} {}", index, active));
        }

        fn expand_content(&mut self, index: usize) -> f64 {
            self.content[index] = Some("auto");
            self.ops.push(format!("expand {}", index));
            self.natural[index]
        }

        fn header_row_height(&self) -> f64 {
            self.row_height
        }

        fn set_group_height(&mut self, height: f64) {
            self.group_height = Some(height);
            self.ops.push(format!("height {}", height));
        }
    }

    fn os_view() -> RecordingView {
        RecordingView::new(20.0, &[40.0, 60.0, 100.0])
    }

    #[test]
    fn test_start_activates_first_tab_of_each_group() {
        let mut panel = TabPanel::new();
        let a = panel.register(os_view()).unwrap();
        let b = panel.register(RecordingView::new(10.0, &[5.0, 7.0])).unwrap();
        assert_eq!(panel.active_tabs(), vec![(GroupId(0), None), (GroupId(1), None)]);

        assert_eq!(panel.start_pending(), 2);
        assert_eq!(a.borrow().view().active_items(), vec![0]);
        assert_eq!(b.borrow().view().active_items(), vec![0]);
        assert_eq!(
            panel.active_tabs(),
            vec![(GroupId(0), Some(0)), (GroupId(1), Some(0))]
        );
    }

    #[test]
    fn test_start_pending_leaves_started_groups_alone() {
        let mut panel = TabPanel::new();
        let a = panel.register(os_view()).unwrap();
        panel.start_pending();
        a.borrow_mut().activate(2).unwrap();

        panel.register(os_view()).unwrap();
        assert_eq!(panel.start_pending(), 1);
        assert_eq!(a.borrow().state().active_index(), Some(2));
    }

    #[test]
    fn test_os_scenario_heights() {
        let mut panel = TabPanel::new();
        let group = panel.register(os_view()).unwrap();
        panel.start_pending();
        {
            let group = group.borrow();
            assert_eq!(group.state().active_index(), Some(0));
            assert_eq!(group.view().group_height, Some(60.0));
        }

        let height = group.borrow_mut().activate(2).unwrap();
        assert_eq!(height, 120.0);
        let group = group.borrow();
        let view = group.view();
        assert_eq!(view.active_items(), vec![2]);
        assert_eq!(view.content, vec![Some("0px"), Some("0px"), Some("auto")]);
        assert_eq!(view.group_height, Some(120.0));
    }

    #[test]
    fn test_activation_order() {
        let mut group = TabGroup::new(GroupId(0), RecordingView::new(20.0, &[40.0, 60.0]));
        group.activate(1).unwrap();
        assert_eq!(
            group.view().ops,
            vec![
                "collapse 0",
                "collapse 1",
                "active 0 false",
                "active 1 true",
                "expand 1",
                "height 80",
            ]
        );
    }

    #[test]
    fn test_clicking_active_tab_again_changes_nothing() {
        let mut group = TabGroup::new(GroupId(0), os_view());
        let first = group.activate(1).unwrap();
        let content = group.view().content.clone();
        let second = group.activate(1).unwrap();
        assert_eq!(first, second);
        assert_eq!(group.view().content, content);
        assert_eq!(group.view().active_items(), vec![1]);
    }

    #[test]
    fn test_groups_are_independent() {
        let mut panel = TabPanel::new();
        let a = panel.register(os_view()).unwrap();
        let b = panel.register(os_view()).unwrap();
        panel.start_pending();

        panel.activate(GroupId(0), 1).unwrap();
        assert_eq!(a.borrow().view().active_items(), vec![1]);
        assert_eq!(b.borrow().view().active_items(), vec![0]);
        assert_eq!(b.borrow().view().group_height, Some(60.0));
    }

    #[test]
    fn test_empty_group_is_skipped() {
        let mut panel: TabPanel<RecordingView> = TabPanel::new();
        assert!(panel.register(RecordingView::new(20.0, &[])).is_none());
        assert!(panel.is_empty());
        assert_eq!(panel.start_pending(), 0);

        // ids stay dense over skipped lists
        panel.register(os_view()).unwrap();
        assert_eq!(panel.active_tabs(), vec![(GroupId(0), None)]);
    }

    #[test]
    fn test_unregister_releases_group() {
        let mut panel = TabPanel::new();
        let a = panel.register(os_view()).unwrap();
        let b = panel.register(os_view()).unwrap();
        panel.start_pending();
        let a_id = a.borrow().id();
        drop(a);

        let removed = panel.unregister(a_id).unwrap();
        // the registry no longer holds the group
        assert_eq!(Rc::strong_count(&removed), 1);
        assert_eq!(panel.len(), 1);
        assert_eq!(panel.active_tabs(), vec![(GroupId(1), Some(0))]);
        assert!(panel.unregister(a_id).is_none());
        assert_eq!(
            panel.activate(a_id, 0),
            Err(TabPanelError::UnknownGroup(a_id))
        );

        // a later group does not take over the removed id
        let c = panel.register(os_view()).unwrap();
        assert_eq!(c.borrow().id(), GroupId(2));
        panel.activate(GroupId(1), 2).unwrap();
        assert_eq!(b.borrow().view().active_items(), vec![2]);
    }

    #[test]
    fn test_activate_errors() {
        let mut panel = TabPanel::new();
        panel.register(os_view()).unwrap();
        panel.start_pending();

        assert_eq!(
            panel.activate(GroupId(7), 0),
            Err(TabPanelError::UnknownGroup(GroupId(7)))
        );
        assert!(matches!(
            panel.activate(GroupId(0), 3),
            Err(TabPanelError::IndexOutOfRange { index: 3, len: 3, .. })
        ));
        // a rejected click keeps the previous selection
        assert_eq!(panel.active_tabs(), vec![(GroupId(0), Some(0))]);
    }
}
