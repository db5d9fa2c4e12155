//! Navigation Panel
//!
//! Open/close state machine for the sliding sidebar. The panel owns a
//! [`PanelFacets`] value describing every piece of page presentation it
//! controls; the front end renders those facets and runs the
//! [`PanelTimer`]s each transition hands back.
//!
//! # Viewport strategies
//!
//! - **Mobile** (`width < 1024`): the panel slides over a dimmed overlay and
//!   page scrolling is locked.
//! - **Desktop** (`width >= 1024`): the panel pushes the main content right.
//!
//! # Timers
//!
//! Every transition bumps an epoch and stamps it on the timers it
//! schedules. A timer whose epoch is no longer current is ignored when it
//! fires, so a quick open/close never leaves the overlay half faded.

use std::time::Duration;

/// Viewport widths below this are treated as mobile (logical px)
pub const MOBILE_BREAKPOINT_PX: f64 = 1024.0;

/// How far the main content shifts right on desktop (logical px)
pub const CONTENT_OFFSET_PX: u32 = 320;

/// Gap between unhiding the overlay and starting its fade-in
pub const OVERLAY_FADE_IN_DELAY: Duration = Duration::from_millis(10);

/// Length of the overlay fade-out before it is hidden
pub const OVERLAY_HIDE_DELAY: Duration = Duration::from_millis(300);

/// Settle time between closing and reopening on resize
pub const RELAYOUT_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Layout strategy picked from the viewport width at transition time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Presentation state the panel keeps in sync with `is_open`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelFacets {
    /// Hamburger icon shown (closed affordance)
    pub hamburger_visible: bool,
    /// Arrow icon shown (open affordance)
    pub arrow_visible: bool,
    /// Overlay is in the layout (no `hidden` class)
    pub overlay_visible: bool,
    /// Overlay faded in (`opacity-100` rather than `opacity-0`)
    pub overlay_opaque: bool,
    /// Page body scrolling disabled
    pub scroll_locked: bool,
    /// Main content left margin in px
    pub content_offset_px: u32,
    /// Panel translated into view
    pub panel_on_screen: bool,
}

impl Default for PanelFacets {
    fn default() -> Self {
        Self {
            hamburger_visible: true,
            arrow_visible: false,
            overlay_visible: false,
            overlay_opaque: false,
            scroll_locked: false,
            content_offset_px: 0,
            panel_on_screen: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fade the overlay in once it is part of the layout
    RevealOverlay,
    /// Remove the overlay after its fade-out
    HideOverlay,
    /// Reopen after a resize-driven close
    Reopen,
}

/// A follow-up scheduled by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTimer {
    kind: TimerKind,
    epoch: u64,
}

impl PanelTimer {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// How long after scheduling the timer should fire
    pub fn delay(&self) -> Duration {
        match self.kind {
            TimerKind::RevealOverlay => OVERLAY_FADE_IN_DELAY,
            TimerKind::HideOverlay => OVERLAY_HIDE_DELAY,
            TimerKind::Reopen => RELAYOUT_DELAY,
        }
    }
}

/// What asked the panel to close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseIcon,
    Overlay,
    Escape,
    /// Navigating away through a menu entry
    MenuLink,
}

/// Sliding navigation panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPanel {
    state: PanelState,
    facets: PanelFacets,
    epoch: u64,
}

impl NavigationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn facets(&self) -> PanelFacets {
        self.facets
    }

    pub fn toggle(&mut self, viewport_width: f64) -> Vec<PanelTimer> {
        if self.is_open() {
            self.close()
        } else {
            self.open(viewport_width)
        }
    }

    /// Open the panel using the strategy for `viewport_width`.
    ///
    /// No-op when already open.
    pub fn open(&mut self, viewport_width: f64) -> Vec<PanelTimer> {
        if self.is_open() {
            return Vec::new();
        }

        self.state = PanelState::Open;
        self.epoch += 1;

        let viewport = ViewportClass::from_width(viewport_width);
        tracing::debug!(?viewport, viewport_width, "opening navigation panel");

        let reveal = self.timer(TimerKind::RevealOverlay);
        let facets = &mut self.facets;
        facets.hamburger_visible = false;
        facets.arrow_visible = true;

        let mut timers = Vec::new();
        match viewport {
            ViewportClass::Mobile => {
                facets.scroll_locked = true;
                facets.overlay_visible = true;
                timers.push(reveal);
            }
            ViewportClass::Desktop => {
                facets.content_offset_px = CONTENT_OFFSET_PX;
                // A mobile close may still be fading out; its hide was just
                // superseded by the epoch bump.
                if facets.overlay_visible && !facets.overlay_opaque {
                    facets.overlay_visible = false;
                }
            }
        }

        self.facets.panel_on_screen = true;
        timers
    }

    /// Close the panel. No-op when already closed.
    pub fn close(&mut self) -> Vec<PanelTimer> {
        if !self.is_open() {
            return Vec::new();
        }

        self.state = PanelState::Closed;
        self.epoch += 1;
        tracing::debug!("closing navigation panel");

        self.facets = PanelFacets {
            // Stays in the layout until the fade-out finishes.
            overlay_visible: self.facets.overlay_visible,
            ..PanelFacets::default()
        };

        vec![self.timer(TimerKind::HideOverlay)]
    }

    pub fn dismiss(&mut self, trigger: DismissTrigger) -> Vec<PanelTimer> {
        if self.is_open() {
            tracing::debug!(?trigger, "dismissing navigation panel");
        }
        self.close()
    }

    /// Re-evaluate the viewport strategy after a resize.
    ///
    /// Closes now and reopens after [`RELAYOUT_DELAY`]. No-op when closed.
    pub fn update_layout(&mut self) -> Vec<PanelTimer> {
        if !self.is_open() {
            return Vec::new();
        }

        let mut timers = self.close();
        timers.push(self.timer(TimerKind::Reopen));
        timers
    }

    /// Apply a timer that has come due. Stale timers are ignored.
    pub fn fire(&mut self, timer: PanelTimer, viewport_width: f64) -> Vec<PanelTimer> {
        if timer.epoch != self.epoch {
            tracing::trace!(kind = ?timer.kind, "ignoring stale panel timer");
            return Vec::new();
        }

        match (timer.kind, self.state) {
            (TimerKind::RevealOverlay, PanelState::Open) => {
                self.facets.overlay_opaque = true;
                Vec::new()
            }
            (TimerKind::HideOverlay, PanelState::Closed) => {
                self.facets.overlay_visible = false;
                Vec::new()
            }
            (TimerKind::Reopen, PanelState::Closed) => self.open(viewport_width),
            _ => Vec::new(),
        }
    }

    fn timer(&self, kind: TimerKind) -> PanelTimer {
        PanelTimer {
            kind,
            epoch: self.epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::TimerQueue;

    const NARROW: f64 = 800.0;
    const WIDE: f64 = 1440.0;

    /// Panel plus virtual clock, firing timers at a fixed viewport width
    struct Harness {
        panel: NavigationPanel,
        timers: TimerQueue<PanelTimer>,
        width: f64,
    }

    impl Harness {
        fn new(width: f64) -> Self {
            Self {
                panel: NavigationPanel::new(),
                timers: TimerQueue::new(),
                width,
            }
        }

        fn schedule(&mut self, timers: Vec<PanelTimer>) {
            for timer in timers {
                self.timers.schedule(timer.delay(), timer);
            }
        }

        fn open(&mut self) {
            let timers = self.panel.open(self.width);
            self.schedule(timers);
        }

        fn close(&mut self) {
            let timers = self.panel.close();
            self.schedule(timers);
        }

        fn resize(&mut self, width: f64) {
            self.width = width;
            let timers = self.panel.update_layout();
            self.schedule(timers);
        }

        fn advance_ms(&mut self, ms: u64) {
            let panel = &mut self.panel;
            let width = self.width;
            self.timers.advance(Duration::from_millis(ms), |queue, timer| {
                for next in panel.fire(timer, width) {
                    queue.schedule(next.delay(), next);
                }
            });
        }

        fn settle(&mut self) {
            let panel = &mut self.panel;
            let width = self.width;
            self.timers.run_until_idle(|queue, timer| {
                for next in panel.fire(timer, width) {
                    queue.schedule(next.delay(), next);
                }
            });
        }

        fn facets(&self) -> PanelFacets {
            self.panel.facets()
        }
    }

    #[test]
    fn test_viewport_class_breakpoint() {
        assert_eq!(ViewportClass::from_width(1023.9), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(1024.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(0.0), ViewportClass::Mobile);
    }

    #[test]
    fn test_starts_closed() {
        let panel = NavigationPanel::new();
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(!panel.is_open());
        assert_eq!(panel.facets(), PanelFacets::default());
    }

    #[test]
    fn test_open_close_restores_initial_facets_mobile() {
        let mut h = Harness::new(NARROW);
        h.open();
        h.advance_ms(20);
        h.close();
        h.settle();
        assert_eq!(h.facets(), PanelFacets::default());
        assert!(!h.panel.is_open());
    }

    #[test]
    fn test_open_close_restores_initial_facets_desktop() {
        let mut h = Harness::new(WIDE);
        h.open();
        h.close();
        h.settle();
        assert_eq!(h.facets(), PanelFacets::default());
    }

    #[test]
    fn test_mobile_open_locks_scroll_and_fades_in() {
        let mut h = Harness::new(NARROW);
        h.open();

        let facets = h.facets();
        assert!(facets.scroll_locked);
        assert!(facets.overlay_visible);
        assert!(!facets.overlay_opaque, "fade-in waits for the next frame");
        assert!(facets.panel_on_screen);
        assert!(facets.arrow_visible);
        assert!(!facets.hamburger_visible);
        assert_eq!(facets.content_offset_px, 0);

        h.advance_ms(9);
        assert!(!h.facets().overlay_opaque);
        h.advance_ms(1);
        assert!(h.facets().overlay_opaque);
    }

    #[test]
    fn test_desktop_open_pushes_content_without_overlay() {
        let mut h = Harness::new(WIDE);
        h.open();
        h.settle();

        let facets = h.facets();
        assert_eq!(facets.content_offset_px, CONTENT_OFFSET_PX);
        assert!(!facets.overlay_visible);
        assert!(!facets.overlay_opaque);
        assert!(!facets.scroll_locked);
        assert!(facets.panel_on_screen);
    }

    #[test]
    fn test_close_hides_overlay_after_fade() {
        let mut h = Harness::new(NARROW);
        h.open();
        h.advance_ms(10);
        h.close();

        let facets = h.facets();
        assert!(!facets.overlay_opaque);
        assert!(facets.overlay_visible, "overlay stays until fade-out ends");
        assert!(!facets.scroll_locked);
        assert!(!facets.panel_on_screen);
        assert!(facets.hamburger_visible);

        h.advance_ms(299);
        assert!(h.facets().overlay_visible);
        h.advance_ms(1);
        assert!(!h.facets().overlay_visible);
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let mut panel = NavigationPanel::new();
        assert!(panel.close().is_empty());

        assert_eq!(panel.open(NARROW).len(), 1);
        let snapshot = panel.clone();
        assert!(panel.open(NARROW).is_empty());
        assert_eq!(panel, snapshot);

        assert_eq!(panel.close().len(), 1);
        assert!(panel.close().is_empty());
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut panel = NavigationPanel::new();
        panel.toggle(WIDE);
        assert!(panel.is_open());
        panel.toggle(WIDE);
        assert!(!panel.is_open());
    }

    #[test]
    fn test_dismiss_triggers_close() {
        for trigger in [
            DismissTrigger::CloseIcon,
            DismissTrigger::Overlay,
            DismissTrigger::Escape,
            DismissTrigger::MenuLink,
        ] {
            let mut panel = NavigationPanel::new();
            panel.open(NARROW);
            let timers = panel.dismiss(trigger);
            assert!(!panel.is_open());
            assert_eq!(timers.len(), 1);
            assert_eq!(timers[0].kind(), TimerKind::HideOverlay);
        }

        let mut closed = NavigationPanel::new();
        assert!(closed.dismiss(DismissTrigger::Escape).is_empty());
    }

    #[test]
    fn test_menu_link_releases_mobile_overlay_and_scroll() {
        let mut h = Harness::new(NARROW);
        h.open();
        h.advance_ms(10);
        assert!(h.panel.facets().overlay_opaque);
        assert!(h.panel.facets().scroll_locked);

        let timers = h.panel.dismiss(DismissTrigger::MenuLink);
        h.schedule(timers);
        assert!(!h.panel.is_open());
        assert!(!h.panel.facets().scroll_locked);

        h.advance_ms(300);
        assert_eq!(h.panel.facets(), PanelFacets::default());
    }

    #[test]
    fn test_quick_close_cancels_fade_in() {
        let mut h = Harness::new(NARROW);
        h.open();
        h.advance_ms(5);
        h.close();
        h.advance_ms(10);
        assert!(!h.facets().overlay_opaque);
        h.settle();
        assert_eq!(h.facets(), PanelFacets::default());
    }

    #[test]
    fn test_quick_reopen_keeps_overlay() {
        let mut h = Harness::new(NARROW);
        h.open();
        h.advance_ms(10);
        h.close();
        h.advance_ms(100);
        h.open();
        h.settle();

        let facets = h.facets();
        assert!(h.panel.is_open());
        assert!(facets.overlay_visible, "stale hide must not remove the overlay");
        assert!(facets.overlay_opaque);
    }

    #[test]
    fn test_resize_while_closed_is_noop() {
        let mut h = Harness::new(NARROW);
        h.resize(WIDE);
        assert!(h.timers.is_empty());
        assert_eq!(h.facets(), PanelFacets::default());
    }

    #[test]
    fn test_resize_mobile_to_desktop_switches_strategy() {
        let mut h = Harness::new(NARROW);
        h.open();
        h.advance_ms(10);

        h.resize(WIDE);
        assert!(!h.panel.is_open(), "closes before re-evaluating");

        h.advance_ms(50);
        assert!(h.panel.is_open());
        h.settle();

        let facets = h.facets();
        assert_eq!(facets.content_offset_px, CONTENT_OFFSET_PX);
        assert!(!facets.scroll_locked);
        assert!(!facets.overlay_visible);
        assert!(!facets.overlay_opaque);
        assert!(facets.panel_on_screen);
    }

    #[test]
    fn test_resize_desktop_to_mobile_switches_strategy() {
        let mut h = Harness::new(WIDE);
        h.open();

        h.resize(NARROW);
        h.settle();

        let facets = h.facets();
        assert!(h.panel.is_open());
        assert_eq!(facets.content_offset_px, 0);
        assert!(facets.scroll_locked);
        assert!(facets.overlay_visible);
        assert!(facets.overlay_opaque);
    }

    #[test]
    fn test_close_during_relayout_wins() {
        let mut h = Harness::new(NARROW);
        h.open();
        h.resize(WIDE);
        h.advance_ms(20);
        // User reopens and closes before the scheduled reopen lands.
        h.open();
        h.close();
        h.settle();

        assert!(!h.panel.is_open());
        assert_eq!(h.facets(), PanelFacets::default());
    }

    #[test]
    fn test_timer_delays() {
        let mut panel = NavigationPanel::new();
        let timers = panel.open(NARROW);
        assert_eq!(timers[0].delay(), Duration::from_millis(10));

        let timers = panel.update_layout();
        let delays: Vec<_> = timers.iter().map(|t| (t.kind(), t.delay())).collect();
        assert_eq!(
            delays,
            vec![
                (TimerKind::HideOverlay, Duration::from_millis(300)),
                (TimerKind::Reopen, Duration::from_millis(50)),
            ]
        );
    }
}
