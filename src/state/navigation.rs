use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use yew::prelude::*;

use crate::config::{HEADER_OFFSET_PX, NAV_SETTLE_DELAY_MS};

/// The page sections, in the order they are stacked on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Experience,
    Tickets,
    Info,
    About,
}

impl SectionId {
    /// Drives both the nav links and the scroll detection, so the two can't
    /// disagree about ordering.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Experience,
        SectionId::Tickets,
        SectionId::Info,
        SectionId::About,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Experience => "experience",
            SectionId::Tickets => "tickets",
            SectionId::Info => "info",
            SectionId::About => "about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Experience => "Experience",
            SectionId::Tickets => "Tickets",
            SectionId::Info => "Info",
            SectionId::About => "About Sanskriti",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, NavError> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| NavError::UnknownSection(id.to_string()))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum NavError {
    #[error("no section is declared with id '{0}'")]
    UnknownSection(String),
    #[error("section '{0}' is not rendered")]
    SectionNotRendered(SectionId),
}

/// Vertical extent of a rendered section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.offset_top && y < self.offset_top + self.offset_height
    }
}

/// Finds where sections live on the page. The browser implementation reads
/// the DOM; tests use a fixed table.
pub trait SectionLocator {
    fn locate(&self, section: SectionId) -> Option<SectionBounds>;

    /// Bounds of every rendered section, in declared order.
    fn measure_all(&self) -> Vec<SectionBounds> {
        SectionId::ALL
            .into_iter()
            .filter_map(|section| self.locate(section))
            .collect()
    }
}

/// Returns the first section (in declared order) whose extent contains
/// `scroll_y` shifted down by the fixed header height.
pub fn derive_active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<SectionId> {
    let position = scroll_y + HEADER_OFFSET_PX;
    SectionId::ALL.into_iter().find(|section| {
        bounds
            .iter()
            .any(|b| b.id == *section && b.contains(position))
    })
}

/// A scroll the page root still has to perform once the drawer has settled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan {
    pub target: SectionId,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub active: SectionId,
    pub drawer_open: bool,
}

impl NavigationState {
    /// Keeps the previous section when nothing matches.
    pub fn apply_scroll(&mut self, scroll_y: f64, bounds: &[SectionBounds]) {
        if let Some(section) = derive_active_section(scroll_y, bounds) {
            self.active = section;
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Validates the target and closes the drawer. The returned plan is the
    /// scroll to run after the drawer has collapsed; on error nothing changes.
    pub fn plan_navigation<L: SectionLocator>(
        &mut self,
        id: &str,
        locator: &L,
    ) -> Result<ScrollPlan, NavError> {
        let target = SectionId::from_id(id)?;
        locator
            .locate(target)
            .ok_or(NavError::SectionNotRendered(target))?;
        self.drawer_open = false;
        Ok(ScrollPlan {
            target,
            delay_ms: NAV_SETTLE_DELAY_MS,
        })
    }
}

pub enum NavAction {
    Scrolled {
        scroll_y: f64,
        bounds: Vec<SectionBounds>,
    },
    ToggleDrawer,
    CloseDrawer,
}

impl NavAction {
    /// Measures every rendered section at the current scroll position.
    pub fn scrolled<L: SectionLocator>(scroll_y: f64, locator: &L) -> Self {
        NavAction::Scrolled {
            scroll_y,
            bounds: locator.measure_all(),
        }
    }
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Scrolled { scroll_y, bounds } => next.apply_scroll(scroll_y, &bounds),
            NavAction::ToggleDrawer => next.toggle_drawer(),
            NavAction::CloseDrawer => next.drawer_open = false,
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedLayout(HashMap<SectionId, SectionBounds>);

    impl FixedLayout {
        fn new(extents: &[(SectionId, f64, f64)]) -> Self {
            FixedLayout(
                extents
                    .iter()
                    .map(|&(id, offset_top, offset_height)| {
                        (id, SectionBounds { id, offset_top, offset_height })
                    })
                    .collect(),
            )
        }
    }

    impl SectionLocator for FixedLayout {
        fn locate(&self, section: SectionId) -> Option<SectionBounds> {
            self.0.get(&section).copied()
        }
    }

    fn full_page() -> FixedLayout {
        FixedLayout::new(&[
            (SectionId::Home, 0.0, 800.0),
            (SectionId::Experience, 800.0, 800.0),
            (SectionId::Tickets, 1600.0, 600.0),
            (SectionId::Info, 2200.0, 700.0),
            (SectionId::About, 2900.0, 900.0),
        ])
    }

    #[test]
    fn header_offset_pushes_active_link_into_next_section() {
        let layout = FixedLayout::new(&[
            (SectionId::Home, 0.0, 800.0),
            (SectionId::Experience, 800.0, 800.0),
        ]);
        let bounds = layout.measure_all();

        // 750 + 100 = 850, which is inside experience
        assert_eq!(derive_active_section(750.0, &bounds), Some(SectionId::Experience));
        assert_eq!(derive_active_section(699.0, &bounds), Some(SectionId::Home));
        assert_eq!(derive_active_section(700.0, &bounds), Some(SectionId::Experience));
    }

    #[test]
    fn derived_section_always_contains_offset_position() {
        let bounds = full_page().measure_all();
        let mut y = 0.0;
        while y < 3700.0 {
            let section = derive_active_section(y, &bounds).expect("page is fully covered");
            let extent = bounds.iter().find(|b| b.id == section).unwrap();
            assert!(extent.contains(y + HEADER_OFFSET_PX), "{} at {}", section, y);
            y += 37.0;
        }
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let bounds = full_page().measure_all();
        let mut state = NavigationState::default();
        state.apply_scroll(1700.0, &bounds);
        assert_eq!(state.active, SectionId::Tickets);

        // past the bottom of the last section
        state.apply_scroll(10_000.0, &bounds);
        assert_eq!(state.active, SectionId::Tickets);

        state.apply_scroll(10_000.0, &[]);
        assert_eq!(state.active, SectionId::Tickets);
    }

    #[test]
    fn first_declared_section_wins_on_overlap() {
        let bounds = vec![
            SectionBounds { id: SectionId::Tickets, offset_top: 0.0, offset_height: 500.0 },
            SectionBounds { id: SectionId::Experience, offset_top: 0.0, offset_height: 500.0 },
        ];
        assert_eq!(derive_active_section(0.0, &bounds), Some(SectionId::Experience));
    }

    #[test]
    fn navigation_closes_drawer_and_schedules_scroll() {
        let layout = full_page();
        let mut state = NavigationState {
            active: SectionId::Home,
            drawer_open: true,
        };

        let plan = state.plan_navigation("tickets", &layout).unwrap();

        assert!(!state.drawer_open);
        assert_eq!(state.active, SectionId::Home);
        assert_eq!(
            plan,
            ScrollPlan {
                target: SectionId::Tickets,
                delay_ms: NAV_SETTLE_DELAY_MS,
            }
        );
        assert_eq!(plan.delay_ms, 100);
    }

    #[test]
    fn unknown_section_leaves_state_untouched() {
        let layout = full_page();
        let mut state = NavigationState {
            active: SectionId::Info,
            drawer_open: true,
        };
        let before = state.clone();

        let err = state.plan_navigation("lineup", &layout).unwrap_err();

        assert_eq!(err, NavError::UnknownSection("lineup".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn unrendered_section_leaves_state_untouched() {
        let layout = FixedLayout::new(&[(SectionId::Home, 0.0, 800.0)]);
        let mut state = NavigationState {
            active: SectionId::Home,
            drawer_open: true,
        };

        let err = state.plan_navigation("about", &layout).unwrap_err();

        assert_eq!(err, NavError::SectionNotRendered(SectionId::About));
        assert!(state.drawer_open);
    }

    #[test]
    fn toggle_drawer_does_not_touch_active_section() {
        let mut state = NavigationState {
            active: SectionId::About,
            drawer_open: false,
        };
        state.toggle_drawer();
        assert!(state.drawer_open);
        assert_eq!(state.active, SectionId::About);
        state.toggle_drawer();
        assert!(!state.drawer_open);
    }

    #[test]
    fn section_ids_round_trip_in_declared_order() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "experience", "tickets", "info", "about"]);
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_id(section.id()), Ok(section));
        }
    }

    #[test]
    fn reducer_returns_same_state_when_nothing_changes() {
        let state = Rc::new(NavigationState::default());
        let next = state.clone().reduce(NavAction::CloseDrawer);
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(NavAction::ToggleDrawer);
        assert!(next.drawer_open);
    }

    #[test]
    fn scroll_action_carries_rendered_sections_in_order() {
        let layout = FixedLayout::new(&[
            (SectionId::About, 2900.0, 900.0),
            (SectionId::Home, 0.0, 800.0),
        ]);
        let NavAction::Scrolled { scroll_y, bounds } = NavAction::scrolled(42.0, &layout) else {
            panic!("expected a scroll action");
        };
        assert_eq!(scroll_y, 42.0);
        let ids: Vec<SectionId> = bounds.iter().map(|b| b.id).collect();
        assert_eq!(ids, [SectionId::Home, SectionId::About]);
    }

    #[test]
    fn scrolling_within_a_section_keeps_the_same_state() {
        let layout = full_page();
        let state = Rc::new(NavigationState::default());

        let next = state.clone().reduce(NavAction::scrolled(10.0, &layout));
        assert!(Rc::ptr_eq(&state, &next));
        let next = next.reduce(NavAction::scrolled(600.0, &layout));
        assert!(Rc::ptr_eq(&state, &next));

        let next = next.reduce(NavAction::scrolled(900.0, &layout));
        assert_eq!(next.active, SectionId::Experience);
    }
}
