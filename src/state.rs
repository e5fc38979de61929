//! View-state controller for the phone screen.
//!
//! `PhoneState` owns every piece of mutable UI state and is only changed
//! through its transition methods. Delayed transitions (closing an app,
//! hiding the shade) are returned as [`Effect`]s carrying a [`TimerToken`];
//! the caller schedules the delay and feeds the token back. Tokens that were
//! cancelled or superseded in the meantime are ignored.

use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use iced::Point;

use crate::animation::{displayed_offset, Snap};
use crate::clock::Clock;
use crate::data::{AppItem, Chat};
use crate::gesture::{
    self, DragTracker, GesturePolicy, Release, OVERLAY_REST, SHADE_HIDDEN, SHADE_SHOWN,
};

/// Identifies one scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TimerToken(u64);

/// At most one pending timer; arming again supersedes the previous one.
#[derive(Debug, Default)]
pub(crate) struct TimerSlot {
    generation: u64,
    pending: Option<TimerToken>,
}

impl TimerSlot {
    pub(crate) fn arm(&mut self) -> TimerToken {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.pending = Some(token);
        token
    }

    pub(crate) fn cancel(&mut self) -> Option<TimerToken> {
        self.pending.take()
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes the pending timer if `token` is the one in flight.
    pub(crate) fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// Work the caller must schedule after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Effect {
    None,
    /// Call [`PhoneState::close_elapsed`] with the token after the close delay.
    CloseAfterDelay(TimerToken),
    /// Call [`PhoneState::shade_hide_elapsed`] after the snap window.
    HideShadeAfterDelay(TimerToken),
}

/// Which full-screen overlay is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overlay {
    Home,
    App(&'static AppItem),
    ChatList,
    ChatThread(&'static Chat),
}

/// Which tracker owns the finger currently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragTarget {
    None,
    AppOverlay,
    /// Shade drag that began at the given offset (hidden or shown).
    Shade { base: f32 },
}

/// Everything the app overlay draws from, sampled at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OverlayVisual {
    pub(crate) offset: f32,
    pub(crate) scale: f32,
    pub(crate) opacity: f32,
    /// 0..=1 through the exit animation, `None` when not closing.
    pub(crate) closing: Option<f32>,
}

#[derive(Debug)]
pub(crate) struct PhoneState {
    policy: GesturePolicy,
    close_delay: Duration,
    snap_duration: Duration,
    viewport_height: f32,

    clock: Clock,
    opened_app: Option<&'static AppItem>,
    selected_chat: Option<&'static Chat>,
    swipe_offset_app_overlay: f32,
    swipe_offset_notification: f32,
    notifications_visible: bool,

    close_timer: TimerSlot,
    closing_since: Option<Instant>,
    shade_timer: TimerSlot,

    tracker: DragTracker,
    target: DragTarget,
    app_snap: Option<Snap>,
    shade_snap: Option<Snap>,
}

impl PhoneState {
    pub(crate) fn new(
        policy: GesturePolicy,
        close_delay: Duration,
        snap_duration: Duration,
        now: NaiveDateTime,
        viewport_height: f32,
    ) -> Self {
        Self {
            policy,
            close_delay,
            snap_duration,
            viewport_height,
            clock: Clock::new(now),
            opened_app: None,
            selected_chat: None,
            swipe_offset_app_overlay: OVERLAY_REST,
            swipe_offset_notification: SHADE_HIDDEN,
            notifications_visible: false,
            close_timer: TimerSlot::default(),
            closing_since: None,
            shade_timer: TimerSlot::default(),
            tracker: DragTracker::default(),
            target: DragTarget::None,
            app_snap: None,
            shade_snap: None,
        }
    }

    // --- Accessors ---

    pub(crate) fn clock(&self) -> &Clock {
        &self.clock
    }

    pub(crate) fn opened_app(&self) -> Option<&'static AppItem> {
        self.opened_app
    }

    #[cfg(test)]
    pub(crate) fn selected_chat(&self) -> Option<&'static Chat> {
        self.selected_chat
    }

    #[cfg(test)]
    pub(crate) fn app_offset(&self) -> f32 {
        self.swipe_offset_app_overlay
    }

    #[cfg(test)]
    pub(crate) fn shade_offset(&self) -> f32 {
        self.swipe_offset_notification
    }

    pub(crate) fn notifications_visible(&self) -> bool {
        self.notifications_visible
    }

    pub(crate) fn is_closing(&self) -> bool {
        self.close_timer.is_pending()
    }

    /// A finger (or held mouse button) is being tracked.
    pub(crate) fn is_dragging(&self) -> bool {
        self.tracker.is_armed()
    }

    pub(crate) fn close_delay(&self) -> Duration {
        self.close_delay
    }

    pub(crate) fn overlay(&self) -> Overlay {
        match (self.opened_app, self.selected_chat) {
            (None, _) => Overlay::Home,
            (Some(app), Some(chat)) if app.is_messaging() => Overlay::ChatThread(chat),
            (Some(app), _) if app.is_messaging() => Overlay::ChatList,
            (Some(app), _) => Overlay::App(app),
        }
    }

    // --- Clock ---

    pub(crate) fn tick(&mut self, now: NaiveDateTime) {
        self.clock.tick(now);
    }

    pub(crate) fn set_viewport_height(&mut self, height: f32) {
        if height > 0.0 {
            self.viewport_height = height;
        }
    }

    pub(crate) fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    // --- Overlay state machine ---

    /// Bring `app` to the foreground with its drag offset at rest.
    ///
    /// A close still pending from a previous app is cancelled so its timer
    /// cannot tear down the newly opened screen.
    pub(crate) fn open_app(&mut self, app: &'static AppItem) {
        if let Some(token) = self.close_timer.cancel() {
            tracing::info!(?token, "open during close: pending close cancelled");
        }
        self.closing_since = None;

        let same_app = self.opened_app.is_some_and(|current| current.id == app.id);
        if !same_app {
            self.selected_chat = None;
        }
        self.opened_app = Some(app);
        self.reset_app_drag();
        tracing::info!(app = app.id, reselected = same_app, "app opened");
    }

    pub(crate) fn select_chat(&mut self, chat: &'static Chat) -> bool {
        let messaging_open = self.opened_app.is_some_and(AppItem::is_messaging);
        if !messaging_open || self.is_closing() {
            tracing::debug!(chat = chat.id, "chat selection ignored: messaging not in foreground");
            return false;
        }
        self.selected_chat = Some(chat);
        tracing::info!(chat = chat.id, "chat thread opened");
        true
    }

    pub(crate) fn back_to_chats(&mut self) {
        if self.selected_chat.take().is_some() {
            tracing::info!("back to chat list");
        }
    }

    /// Start the exit animation. The app is discarded once the returned
    /// timer fires; a second close while one is pending does nothing.
    pub(crate) fn close_app(&mut self, now: Instant) -> Effect {
        let Some(app) = self.opened_app else {
            return Effect::None;
        };
        if self.close_timer.is_pending() {
            tracing::debug!(app = app.id, "close ignored: already closing");
            return Effect::None;
        }
        self.closing_since = Some(now);
        self.target = DragTarget::None;
        self.tracker.reset();
        let token = self.close_timer.arm();
        tracing::info!(app = app.id, ?token, "app closing");
        Effect::CloseAfterDelay(token)
    }

    pub(crate) fn close_elapsed(&mut self, token: TimerToken) -> bool {
        if !self.close_timer.fire(token) {
            tracing::debug!(?token, "stale close timer ignored");
            return false;
        }
        let closed = self.opened_app.take();
        self.selected_chat = None;
        self.closing_since = None;
        self.reset_app_drag();
        tracing::info!(app = closed.map(|a| a.id), "back to home");
        true
    }

    fn reset_app_drag(&mut self) {
        self.swipe_offset_app_overlay = OVERLAY_REST;
        self.app_snap = None;
        if self.target == DragTarget::AppOverlay {
            self.target = DragTarget::None;
            self.tracker.reset();
        }
    }

    // --- Notification shade ---

    /// Animate the shade back to hidden and stop rendering it afterwards.
    pub(crate) fn hide_notifications(&mut self, now: Instant) -> Effect {
        if !self.notifications_visible || self.shade_timer.is_pending() {
            return Effect::None;
        }
        if matches!(self.target, DragTarget::Shade { .. }) {
            self.target = DragTarget::None;
            self.tracker.reset();
        }
        self.shade_snap_to(SHADE_HIDDEN, now);
        let token = self.shade_timer.arm();
        tracing::info!(?token, "notification shade hiding");
        Effect::HideShadeAfterDelay(token)
    }

    pub(crate) fn shade_hide_elapsed(&mut self, token: TimerToken) -> bool {
        if !self.shade_timer.fire(token) {
            return false;
        }
        self.notifications_visible = false;
        self.swipe_offset_notification = SHADE_HIDDEN;
        self.shade_snap = None;
        tracing::debug!("notification shade removed");
        true
    }

    fn shade_is_shown(&self) -> bool {
        self.notifications_visible && !self.shade_timer.is_pending()
    }

    fn shade_snap_to(&mut self, rest: f32, now: Instant) {
        let from = self.displayed_shade_offset(now);
        self.swipe_offset_notification = rest;
        self.shade_snap = Some(Snap::new(from, rest, now, self.snap_duration));
    }

    // --- Gestures ---

    /// Route a new touch to the tracker that owns its region.
    ///
    /// Only the start point is recorded; a snap still in flight keeps
    /// running until a move sample actually changes the offset.
    pub(crate) fn touch_start(&mut self, at: Point) {
        if self.is_closing() {
            self.target = DragTarget::None;
            return;
        }
        if self.opened_app.is_some() {
            self.target = DragTarget::AppOverlay;
        } else if self.shade_is_shown() {
            self.target = DragTarget::Shade { base: SHADE_SHOWN };
        } else if at.y < self.policy.shade_arm_band {
            if let Some(token) = self.shade_timer.cancel() {
                tracing::debug!(?token, "shade hide superseded by new pull");
            }
            if self.swipe_offset_notification != SHADE_HIDDEN {
                self.swipe_offset_notification = SHADE_HIDDEN;
                self.shade_snap = None;
            }
            self.target = DragTarget::Shade { base: SHADE_HIDDEN };
        } else {
            self.target = DragTarget::None;
            self.tracker.reset();
            return;
        }
        self.tracker.start(at);
    }

    /// Apply a move sample. Returns whether any offset changed.
    pub(crate) fn touch_move(&mut self, at: Point) -> bool {
        let Some(delta) = self.tracker.vertical_delta(at, &self.policy) else {
            return false;
        };
        match self.target {
            DragTarget::None => false,
            DragTarget::AppOverlay => match gesture::overlay_offset(delta) {
                Some(offset) if offset != self.swipe_offset_app_overlay => {
                    self.swipe_offset_app_overlay = offset;
                    self.app_snap = None;
                    true
                }
                _ => false,
            },
            DragTarget::Shade { base } => {
                let offset = gesture::shade_offset(base, delta, self.viewport_height);
                let moved = offset != self.swipe_offset_notification;
                if moved {
                    self.swipe_offset_notification = offset;
                    self.shade_snap = None;
                }
                if !self.notifications_visible && gesture::shade_revealed(offset, &self.policy) {
                    self.notifications_visible = true;
                    tracing::debug!(offset, "notification shade revealed");
                    return true;
                }
                moved
            }
        }
    }

    /// Decide commit or cancel for the gesture in progress.
    pub(crate) fn touch_end(&mut self, now: Instant) -> Effect {
        let target = std::mem::replace(&mut self.target, DragTarget::None);
        if !self.tracker.finish() {
            return Effect::None;
        }
        match target {
            DragTarget::None => Effect::None,
            DragTarget::AppOverlay => {
                let offset = self.swipe_offset_app_overlay;
                match gesture::overlay_release(offset, &self.policy) {
                    Release::Commit => {
                        tracing::debug!(offset, "overlay swipe committed");
                        self.close_app(now)
                    }
                    Release::Cancel => {
                        if offset != OVERLAY_REST {
                            self.app_snap =
                                Some(Snap::new(offset, OVERLAY_REST, now, self.snap_duration));
                        }
                        self.swipe_offset_app_overlay = OVERLAY_REST;
                        Effect::None
                    }
                }
            }
            DragTarget::Shade { .. } => {
                let offset = self.swipe_offset_notification;
                match gesture::shade_release(offset, &self.policy) {
                    Release::Commit => {
                        tracing::debug!(offset, "shade kept open");
                        self.notifications_visible = true;
                        self.shade_snap_to(SHADE_SHOWN, now);
                        Effect::None
                    }
                    Release::Cancel if self.notifications_visible => {
                        tracing::debug!(offset, "shade released below commit point");
                        self.hide_notifications(now)
                    }
                    Release::Cancel => {
                        self.swipe_offset_notification = SHADE_HIDDEN;
                        self.shade_snap = None;
                        Effect::None
                    }
                }
            }
        }
    }

    // --- Rendering helpers ---

    pub(crate) fn displayed_app_offset(&self, now: Instant) -> f32 {
        displayed_offset(self.swipe_offset_app_overlay, self.app_snap.as_ref(), now)
    }

    pub(crate) fn displayed_shade_offset(&self, now: Instant) -> f32 {
        displayed_offset(self.swipe_offset_notification, self.shade_snap.as_ref(), now)
    }

    pub(crate) fn overlay_visual(&self, now: Instant) -> OverlayVisual {
        let offset = self.displayed_app_offset(now);
        let closing = self.closing_since.map(|since| {
            if self.close_delay.is_zero() {
                1.0
            } else {
                let elapsed = now.saturating_duration_since(since);
                (elapsed.as_secs_f32() / self.close_delay.as_secs_f32()).min(1.0)
            }
        });
        OverlayVisual {
            offset,
            scale: gesture::overlay_scale(offset),
            opacity: gesture::overlay_opacity(offset),
            closing,
        }
    }

    /// Whether something on screen is moving and needs frame ticks.
    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        let snapping = |snap: &Option<Snap>| snap.is_some_and(|s| !s.is_finished(now));
        self.is_closing() || snapping(&self.app_snap) || snapping(&self.shade_snap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{find_app, messaging_app, CHATS};
    use chrono::NaiveDate;

    const DELAY: Duration = Duration::from_millis(300);
    const HEIGHT: f32 = 800.0;

    fn start_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap()
    }

    fn phone() -> PhoneState {
        PhoneState::new(GesturePolicy::default(), DELAY, DELAY, start_time(), HEIGHT)
    }

    fn app(id: &str) -> &'static AppItem {
        find_app(id).unwrap()
    }

    fn drag(state: &mut PhoneState, from: (f32, f32), to: (f32, f32), now: Instant) -> Effect {
        state.touch_start(Point::new(from.0, from.1));
        state.touch_move(Point::new(to.0, to.1));
        state.touch_end(now)
    }

    fn assert_invariants(state: &PhoneState) {
        if state.selected_chat().is_some() {
            assert!(state.opened_app().is_some_and(AppItem::is_messaging));
        }
        if state.is_closing() {
            assert!(state.opened_app().is_some());
        }
        if state.opened_app().is_none() {
            assert_eq!(state.app_offset(), OVERLAY_REST);
        }
        if !state.notifications_visible() {
            assert_eq!(state.shade_offset(), SHADE_HIDDEN);
        }
    }

    // -----------------------------------------------------------------------
    // TimerSlot
    // -----------------------------------------------------------------------

    #[test]
    fn timer_slot_fires_once() {
        let mut slot = TimerSlot::default();
        let token = slot.arm();
        assert!(slot.is_pending());
        assert!(slot.fire(token));
        assert!(!slot.fire(token));
        assert!(!slot.is_pending());
    }

    #[test]
    fn timer_slot_rearm_supersedes() {
        let mut slot = TimerSlot::default();
        let first = slot.arm();
        let second = slot.arm();
        assert_ne!(first, second);
        assert!(!slot.fire(first));
        assert!(slot.fire(second));
    }

    #[test]
    fn timer_slot_cancel() {
        let mut slot = TimerSlot::default();
        let token = slot.arm();
        assert_eq!(slot.cancel(), Some(token));
        assert!(!slot.fire(token));
        assert_eq!(slot.cancel(), None);
    }

    // -----------------------------------------------------------------------
    // Overlay state machine
    // -----------------------------------------------------------------------

    #[test]
    fn starts_at_home() {
        let state = phone();
        assert_eq!(state.overlay(), Overlay::Home);
        assert!(!state.is_closing());
        assert!(!state.notifications_visible());
        assert_eq!(state.shade_offset(), SHADE_HIDDEN);
        assert_invariants(&state);
    }

    #[test]
    fn open_then_open_other_replaces() {
        let mut state = phone();
        state.open_app(app("camera"));
        assert_eq!(state.overlay(), Overlay::App(app("camera")));
        state.open_app(app("mail"));
        assert_eq!(state.overlay(), Overlay::App(app("mail")));
        assert_eq!(state.app_offset(), 0.0);
        assert_invariants(&state);
    }

    #[test]
    fn open_resets_drag_offset() {
        let mut state = phone();
        state.open_app(app("camera"));
        state.touch_start(Point::new(200.0, 300.0));
        state.touch_move(Point::new(200.0, 400.0));
        assert_eq!(state.app_offset(), 100.0);
        state.open_app(app("camera"));
        assert_eq!(state.app_offset(), 0.0);
        assert_eq!(state.overlay(), Overlay::App(app("camera")));
    }

    #[test]
    fn messaging_opens_chat_list() {
        let mut state = phone();
        state.open_app(messaging_app());
        assert_eq!(state.overlay(), Overlay::ChatList);
    }

    #[test]
    fn select_chat_and_back() {
        let mut state = phone();
        state.open_app(messaging_app());
        assert!(state.select_chat(&CHATS[0]));
        assert_eq!(state.selected_chat(), Some(&CHATS[0]));
        assert_eq!(state.overlay(), Overlay::ChatThread(&CHATS[0]));
        assert_invariants(&state);

        state.back_to_chats();
        assert_eq!(state.selected_chat(), None);
        assert_eq!(state.opened_app(), Some(messaging_app()));
        assert_eq!(state.overlay(), Overlay::ChatList);
    }

    #[test]
    fn select_chat_outside_messaging_ignored() {
        let mut state = phone();
        assert!(!state.select_chat(&CHATS[0]));
        state.open_app(app("music"));
        assert!(!state.select_chat(&CHATS[0]));
        assert_eq!(state.selected_chat(), None);
        assert_invariants(&state);
    }

    #[test]
    fn reselecting_messaging_keeps_thread() {
        let mut state = phone();
        state.open_app(messaging_app());
        state.select_chat(&CHATS[2]);
        state.open_app(messaging_app());
        assert_eq!(state.selected_chat(), Some(&CHATS[2]));
    }

    #[test]
    fn switching_app_drops_thread() {
        let mut state = phone();
        state.open_app(messaging_app());
        state.select_chat(&CHATS[2]);
        state.open_app(app("phone"));
        assert_eq!(state.selected_chat(), None);
        assert_invariants(&state);
    }

    #[test]
    fn close_goes_through_closing_to_home() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("settings"));
        let Effect::CloseAfterDelay(token) = state.close_app(t0) else {
            panic!("close should schedule a timer");
        };
        assert!(state.is_closing());
        assert_eq!(state.opened_app(), Some(app("settings")));
        assert_invariants(&state);

        assert!(state.close_elapsed(token));
        assert_eq!(state.overlay(), Overlay::Home);
        assert!(!state.is_closing());
        assert_invariants(&state);
    }

    #[test]
    fn close_clears_selected_chat() {
        let mut state = phone();
        state.open_app(messaging_app());
        state.select_chat(&CHATS[1]);
        let Effect::CloseAfterDelay(token) = state.close_app(Instant::now()) else {
            panic!("close should schedule a timer");
        };
        state.close_elapsed(token);
        assert_eq!(state.opened_app(), None);
        assert_eq!(state.selected_chat(), None);

        state.open_app(messaging_app());
        assert_eq!(state.overlay(), Overlay::ChatList);
    }

    #[test]
    fn double_close_schedules_one_timer() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("maps"));
        let first = state.close_app(t0);
        let second = state.close_app(t0);
        assert!(matches!(first, Effect::CloseAfterDelay(_)));
        assert_eq!(second, Effect::None);
    }

    #[test]
    fn close_at_home_is_noop() {
        let mut state = phone();
        assert_eq!(state.close_app(Instant::now()), Effect::None);
        assert_eq!(state.overlay(), Overlay::Home);
    }

    #[test]
    fn reopen_during_close_cancels_pending_close() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("camera"));
        let Effect::CloseAfterDelay(stale) = state.close_app(t0) else {
            panic!("close should schedule a timer");
        };
        state.open_app(app("music"));
        assert!(!state.is_closing());

        assert!(!state.close_elapsed(stale));
        assert_eq!(state.overlay(), Overlay::App(app("music")));
        assert_invariants(&state);
    }

    #[test]
    fn chat_selection_ignored_while_closing() {
        let mut state = phone();
        state.open_app(messaging_app());
        state.close_app(Instant::now());
        assert!(!state.select_chat(&CHATS[0]));
        assert_invariants(&state);
    }

    // -----------------------------------------------------------------------
    // App overlay gesture
    // -----------------------------------------------------------------------

    #[test]
    fn long_swipe_closes_app() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("browser"));
        let effect = drag(&mut state, (200.0, 300.0), (200.0, 500.0), t0);
        let Effect::CloseAfterDelay(token) = effect else {
            panic!("200px swipe should commit, got {effect:?}");
        };
        assert!(state.is_closing());
        assert!(state.close_elapsed(token));
        assert_eq!(state.overlay(), Overlay::Home);
        assert_eq!(state.app_offset(), 0.0);
    }

    #[test]
    fn short_swipe_snaps_back() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("browser"));
        let effect = drag(&mut state, (200.0, 300.0), (200.0, 400.0), t0);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.app_offset(), 0.0);
        assert_eq!(state.overlay(), Overlay::App(app("browser")));
        assert!(!state.is_closing());

        // The release eases back from 100 over the snap window.
        assert_eq!(state.displayed_app_offset(t0), 100.0);
        assert!(state.is_animating(t0));
        assert_eq!(state.displayed_app_offset(t0 + DELAY), 0.0);
        assert!(!state.is_animating(t0 + DELAY));
    }

    #[test]
    fn restart_mid_snap_keeps_easing() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("camera"));
        drag(&mut state, (200.0, 300.0), (200.0, 420.0), t0);
        let mid = t0 + Duration::from_millis(50);
        let before = state.displayed_app_offset(mid);
        assert!(before > 0.0 && before < 120.0);

        // A bare touch only records the start point.
        state.touch_start(Point::new(200.0, 500.0));
        assert_eq!(state.displayed_app_offset(mid), before);
        assert!(state.is_animating(mid));

        // A sample that moves the overlay takes over from the snap.
        assert!(state.touch_move(Point::new(200.0, 530.0)));
        assert_eq!(state.displayed_app_offset(mid), 30.0);
        assert!(!state.is_animating(mid));
    }

    #[test]
    fn restart_mid_shade_snap_keeps_easing() {
        let mut state = phone();
        let t0 = Instant::now();
        drag(&mut state, (200.0, 50.0), (200.0, 600.0), t0);
        assert!(state.notifications_visible());
        let mid = t0 + Duration::from_millis(50);
        let before = state.displayed_shade_offset(mid);
        assert!(before < SHADE_SHOWN);

        state.touch_start(Point::new(200.0, 400.0));
        assert_eq!(state.displayed_shade_offset(mid), before);

        // Zero vertical travel leaves the offset alone.
        assert!(!state.touch_move(Point::new(210.0, 400.0)));
        assert_eq!(state.displayed_shade_offset(mid), before);
    }

    #[test]
    fn upward_drag_does_not_move_overlay() {
        let mut state = phone();
        state.open_app(app("browser"));
        state.touch_start(Point::new(200.0, 500.0));
        assert!(!state.touch_move(Point::new(200.0, 300.0)));
        assert_eq!(state.app_offset(), 0.0);
    }

    #[test]
    fn sideways_samples_ignored() {
        let mut state = phone();
        state.open_app(app("browser"));
        state.touch_start(Point::new(100.0, 300.0));
        assert!(state.touch_move(Point::new(110.0, 360.0)));
        assert!(!state.touch_move(Point::new(190.0, 600.0)));
        assert_eq!(state.app_offset(), 60.0);
        assert_eq!(state.touch_end(Instant::now()), Effect::None);
        assert_eq!(state.app_offset(), 0.0);
    }

    #[test]
    fn move_without_start_is_noop() {
        let mut state = phone();
        state.open_app(app("browser"));
        assert!(!state.touch_move(Point::new(10.0, 900.0)));
        assert_eq!(state.touch_end(Instant::now()), Effect::None);
        assert_eq!(state.app_offset(), 0.0);
    }

    #[test]
    fn dragging_draws_live_offset_and_formulas() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("browser"));
        state.touch_start(Point::new(200.0, 300.0));
        state.touch_move(Point::new(200.0, 400.0));
        let visual = state.overlay_visual(t0);
        assert_eq!(visual.offset, 100.0);
        assert!((visual.scale - 0.9).abs() < 1e-6);
        assert!((visual.opacity - 0.8).abs() < 1e-6);
        assert_eq!(visual.closing, None);
    }

    #[test]
    fn closing_progress_reported() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("browser"));
        state.close_app(t0);
        let half = state.overlay_visual(t0 + Duration::from_millis(150));
        assert!((half.closing.unwrap() - 0.5).abs() < 1e-3);
        assert_eq!(state.overlay_visual(t0 + DELAY * 2).closing, Some(1.0));
        assert!(state.is_animating(t0 + DELAY * 2));
    }

    #[test]
    fn touches_ignored_while_closing() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("browser"));
        state.close_app(t0);
        assert_eq!(drag(&mut state, (200.0, 300.0), (200.0, 700.0), t0), Effect::None);
        assert_eq!(state.app_offset(), 0.0);
    }

    // -----------------------------------------------------------------------
    // Notification shade gesture
    // -----------------------------------------------------------------------

    #[test]
    fn shade_pull_past_half_stays_open() {
        let mut state = phone();
        let t0 = Instant::now();
        // 60% of 800 is 480.
        let effect = drag(&mut state, (200.0, 50.0), (200.0, 530.0), t0);
        assert_eq!(effect, Effect::None);
        assert!(state.notifications_visible());
        assert_eq!(state.shade_offset(), SHADE_SHOWN);
        assert_invariants(&state);
    }

    #[test]
    fn shade_short_pull_stays_hidden() {
        let mut state = phone();
        let t0 = Instant::now();
        // 5% of 800 is 40.
        let effect = drag(&mut state, (200.0, 50.0), (200.0, 90.0), t0);
        assert_eq!(effect, Effect::None);
        assert!(!state.notifications_visible());
        assert_eq!(state.shade_offset(), SHADE_HIDDEN);
        assert_invariants(&state);
    }

    #[test]
    fn shade_not_armed_below_band() {
        let mut state = phone();
        let t0 = Instant::now();
        drag(&mut state, (200.0, 150.0), (200.0, 700.0), t0);
        assert!(!state.notifications_visible());
        assert_eq!(state.shade_offset(), SHADE_HIDDEN);
    }

    #[test]
    fn shade_reveals_mid_drag() {
        let mut state = phone();
        state.touch_start(Point::new(200.0, 20.0));
        state.touch_move(Point::new(200.0, 60.0));
        assert!(!state.notifications_visible());
        state.touch_move(Point::new(200.0, 120.0));
        assert!(state.notifications_visible());
        assert!((state.shade_offset() - -87.5).abs() < 1e-4);
    }

    #[test]
    fn shade_released_after_reveal_hides_then_unrenders() {
        let mut state = phone();
        let t0 = Instant::now();
        // 30%: revealed, but under the commit point.
        let effect = drag(&mut state, (200.0, 20.0), (200.0, 260.0), t0);
        let Effect::HideShadeAfterDelay(token) = effect else {
            panic!("expected hide timer, got {effect:?}");
        };
        assert!(state.notifications_visible());
        assert_eq!(state.shade_offset(), SHADE_HIDDEN);
        assert!(state.displayed_shade_offset(t0) > SHADE_HIDDEN);

        assert!(state.shade_hide_elapsed(token));
        assert!(!state.notifications_visible());
        assert_invariants(&state);
    }

    #[test]
    fn open_shade_dismissed_by_upward_swipe() {
        let mut state = phone();
        let t0 = Instant::now();
        drag(&mut state, (200.0, 50.0), (200.0, 700.0), t0);
        assert_eq!(state.shade_offset(), SHADE_SHOWN);

        // 60% upward from anywhere on the open shade.
        let effect = drag(&mut state, (200.0, 600.0), (200.0, 120.0), t0);
        let Effect::HideShadeAfterDelay(token) = effect else {
            panic!("expected hide timer, got {effect:?}");
        };
        assert!(state.shade_hide_elapsed(token));
        assert!(!state.notifications_visible());
    }

    #[test]
    fn open_shade_small_upward_swipe_stays() {
        let mut state = phone();
        let t0 = Instant::now();
        drag(&mut state, (200.0, 50.0), (200.0, 700.0), t0);
        let effect = drag(&mut state, (200.0, 600.0), (200.0, 440.0), t0);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.shade_offset(), SHADE_SHOWN);
        assert!(state.notifications_visible());
    }

    #[test]
    fn hide_notifications_is_guarded() {
        let mut state = phone();
        let t0 = Instant::now();
        assert_eq!(state.hide_notifications(t0), Effect::None);
        drag(&mut state, (200.0, 50.0), (200.0, 700.0), t0);
        let first = state.hide_notifications(t0);
        assert!(matches!(first, Effect::HideShadeAfterDelay(_)));
        assert_eq!(state.hide_notifications(t0), Effect::None);
    }

    #[test]
    fn new_pull_supersedes_pending_hide() {
        let mut state = phone();
        let t0 = Instant::now();
        drag(&mut state, (200.0, 50.0), (200.0, 700.0), t0);
        let Effect::HideShadeAfterDelay(stale) = state.hide_notifications(t0) else {
            panic!("expected hide timer");
        };
        drag(&mut state, (200.0, 30.0), (200.0, 700.0), t0);
        assert!(!state.shade_hide_elapsed(stale));
        assert!(state.notifications_visible());
        assert_eq!(state.shade_offset(), SHADE_SHOWN);
    }

    #[test]
    fn viewport_height_normalises_progress() {
        let mut state = phone();
        state.set_viewport_height(400.0);
        state.set_viewport_height(0.0);
        assert_eq!(state.viewport_height(), 400.0);
        state.touch_start(Point::new(100.0, 10.0));
        state.touch_move(Point::new(100.0, 210.0));
        assert!((state.shade_offset() - -50.0).abs() < 1e-4);
    }

    #[test]
    fn app_overlay_takes_touches_from_top_band() {
        let mut state = phone();
        let t0 = Instant::now();
        state.open_app(app("camera"));
        drag(&mut state, (200.0, 20.0), (200.0, 120.0), t0);
        assert!(!state.notifications_visible());
        assert_eq!(state.shade_offset(), SHADE_HIDDEN);
    }

    #[test]
    fn tick_replaces_time() {
        let mut state = phone();
        let later = start_time() + chrono::Duration::minutes(61);
        state.tick(later);
        assert_eq!(state.clock().time_label(), "15:31");
    }
}
