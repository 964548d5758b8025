//! Responsive layout tracking.
//!
//! The window is "desktop" at or above 768 logical pixels wide. Crossing the
//! breakpoint in either direction forces the sidebar to the mode's default
//! (open on desktop, closed on mobile); inside a mode the user's manual
//! toggle is left alone.

use crate::controller::navigation::SidebarState;

pub const DESKTOP_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponsiveLayout {
    is_desktop: Option<bool>,
}

impl ResponsiveLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current window width; returns whether the layout is desktop.
    /// The first observation also counts as a transition, so startup lands in
    /// the correct default for the initial window size.
    pub fn observe(&mut self, width: f32, sidebar: &mut SidebarState) -> bool {
        let is_desktop = width >= DESKTOP_BREAKPOINT;
        if self.is_desktop != Some(is_desktop) {
            self.is_desktop = Some(is_desktop);
            sidebar.is_open = is_desktop;
        }
        is_desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinking_below_the_breakpoint_closes_the_sidebar() {
        let mut layout = ResponsiveLayout::new();
        let mut sidebar = SidebarState::default();

        assert!(layout.observe(1024.0, &mut sidebar));
        assert!(sidebar.is_open);

        assert!(!layout.observe(500.0, &mut sidebar));
        assert!(!sidebar.is_open);
    }

    #[test]
    fn growing_past_the_breakpoint_opens_the_sidebar() {
        let mut layout = ResponsiveLayout::new();
        let mut sidebar = SidebarState::default();

        layout.observe(500.0, &mut sidebar);
        assert!(!sidebar.is_open);

        layout.observe(1024.0, &mut sidebar);
        assert!(sidebar.is_open);
    }

    #[test]
    fn manual_toggle_survives_resizes_within_a_mode() {
        let mut layout = ResponsiveLayout::new();
        let mut sidebar = SidebarState::default();

        layout.observe(1024.0, &mut sidebar);
        sidebar.toggle();
        assert!(!sidebar.is_open);

        layout.observe(900.0, &mut sidebar);
        assert!(!sidebar.is_open, "no transition, so no forcing");
    }

    #[test]
    fn boundary_width_counts_as_desktop() {
        let mut layout = ResponsiveLayout::new();
        let mut sidebar = SidebarState::default();
        assert!(layout.observe(DESKTOP_BREAKPOINT, &mut sidebar));
    }
}
