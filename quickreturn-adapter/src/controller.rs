use quickreturn::{AnimatableView, QuickReturnBehavior, QuickReturnOptions, ScrollAxes};

use crate::footer::TweenFooter;

/// Owns a behavior plus its footer view and exposes gesture-shaped entry points.
///
/// Hosts drive it with the usual nested-scroll triple:
/// - [`start_nested_scroll`](Self::start_nested_scroll) when a scroll gesture begins
/// - [`on_nested_pre_scroll`](Self::on_nested_pre_scroll) for each delta of an accepted gesture
/// - [`stop_nested_scroll`](Self::stop_nested_scroll) when the gesture ends
///
/// With a [`TweenFooter`] view, also call [`tick`](Self::tick) each frame to advance slides.
#[derive(Debug)]
pub struct QuickReturnController<V> {
    behavior: QuickReturnBehavior,
    view: V,
    gesture_active: bool,
}

impl<V: AnimatableView> QuickReturnController<V> {
    pub fn new(view: V, options: QuickReturnOptions) -> Self {
        Self::from_parts(QuickReturnBehavior::new(options), view)
    }

    pub fn from_parts(behavior: QuickReturnBehavior, view: V) -> Self {
        Self {
            behavior,
            view,
            gesture_active: false,
        }
    }

    pub fn behavior(&self) -> &QuickReturnBehavior {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut QuickReturnBehavior {
        &mut self.behavior
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Call when the host reports a new scroll gesture. Returns whether the gesture was
    /// accepted; deltas of unaccepted gestures are ignored.
    pub fn start_nested_scroll(&mut self, axes: ScrollAxes) -> bool {
        self.gesture_active = self.behavior.accepts_scroll(axes);
        qrtrace!(?axes, accepted = self.gesture_active, "start_nested_scroll");
        self.gesture_active
    }

    /// Feeds one vertical delta of the current gesture (positive = content scrolled down).
    pub fn on_nested_pre_scroll(&mut self, dy: i32) {
        if !self.gesture_active {
            return;
        }
        self.behavior.on_scroll_delta(&mut self.view, dy);
    }

    /// Call when the host reports the end of the current gesture.
    pub fn stop_nested_scroll(&mut self) {
        self.gesture_active = false;
    }

    pub fn is_or_will_be_hidden(&self) -> bool {
        self.behavior.is_or_will_be_hidden(&self.view)
    }

    pub fn is_or_will_be_shown(&self) -> bool {
        self.behavior.is_or_will_be_shown(&self.view)
    }

    /// Requests the hide slide directly, outside any gesture.
    pub fn hide(&mut self) {
        self.behavior.hide(&mut self.view);
    }

    /// Requests the show slide directly, outside any gesture.
    pub fn show(&mut self) {
        self.behavior.show(&mut self.view);
    }
}

impl QuickReturnController<TweenFooter> {
    /// Advances the footer's active slide; see [`TweenFooter::tick`].
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        self.view.tick(now_ms)
    }
}
