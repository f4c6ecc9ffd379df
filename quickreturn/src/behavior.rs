use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::callbacks::AnimationCallbacks;
use crate::easing::Easing;
use crate::options::{QuickReturnOptions, StateChangeCallback};
use crate::state::BehaviorState;
use crate::types::{AnimationState, ScrollAxes, Visibility};
use crate::view::AnimatableView;

fn set_state(state: &AtomicU8, observer: Option<&StateChangeCallback>, next: AnimationState) {
    state.store(next.to_bits(), Ordering::Relaxed);
    if let Some(cb) = observer {
        cb(next);
    }
}

/// A quick-return behavior for footer views: scrolling down hides the footer, scrolling up
/// brings it back.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; hosts pass the footer into each call.
/// - Scroll detection works on raw vertical deltas from the host's scroll events.
/// - Animation runs through the [`AnimatableView`] capability, so the host owns the actual
///   animator (or uses `quickreturn-adapter`'s tick-driven `TweenFooter`).
///
/// Scrolling is accumulated per direction: reversing direction restarts the count. A hide
/// triggers once the accumulated downward distance exceeds the footer's own height; a show
/// triggers on any net upward movement. The gap between the two thresholds is what keeps small
/// jitters from toggling the footer.
///
/// Calls are expected on the host's UI thread. The shared atomics exist only so the lifecycle
/// callbacks of an in-flight animation can update the behavior's state after the originating
/// call has returned; they make no cross-thread claim.
pub struct QuickReturnBehavior {
    options: QuickReturnOptions,
    dy_since_direction_change: i64,
    anim_state: Arc<AtomicU8>,
}

impl QuickReturnBehavior {
    pub fn new(options: QuickReturnOptions) -> Self {
        qrdebug!(
            duration_ms = options.duration_ms,
            "QuickReturnBehavior::new"
        );
        Self {
            options,
            dy_since_direction_change: 0,
            anim_state: Arc::new(AtomicU8::new(AnimationState::Idle.to_bits())),
        }
    }

    pub fn options(&self) -> &QuickReturnOptions {
        &self.options
    }

    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.options.duration_ms = duration_ms;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.options.easing = easing;
    }

    pub fn set_on_state_change(
        &mut self,
        on_state_change: Option<impl Fn(AnimationState) + Send + Sync + 'static>,
    ) {
        self.options.on_state_change = on_state_change.map(|f| Arc::new(f) as _);
    }

    /// The signed scroll distance accumulated since the last direction reversal.
    ///
    /// Positive means net downward scrolling, negative net upward.
    pub fn dy_since_direction_change(&self) -> i64 {
        self.dy_since_direction_change
    }

    pub fn animation_state(&self) -> AnimationState {
        AnimationState::from_bits(self.anim_state.load(Ordering::Relaxed))
    }

    /// Whether this behavior wants the deltas of a gesture scrolling along `axes`.
    ///
    /// Pure predicate: hosts consult it when a nested scroll starts and forward deltas only for
    /// accepted gestures.
    pub fn accepts_scroll(&self, axes: ScrollAxes) -> bool {
        axes.intersects(ScrollAxes::VERTICAL)
    }

    /// Feeds one vertical scroll delta (positive = content scrolled down).
    ///
    /// The delta is accumulated (restarting on direction reversal); crossing the footer's height
    /// downward triggers [`hide`](Self::hide), any net upward movement triggers
    /// [`show`](Self::show). Redundant requests are suppressed via the
    /// `is_or_will_be_*` predicates, so an already-hiding footer is not re-hidden.
    pub fn on_scroll_delta<V: AnimatableView + ?Sized>(&mut self, view: &mut V, dy: i32) {
        let dy = i64::from(dy);
        if (dy > 0 && self.dy_since_direction_change < 0)
            || (dy < 0 && self.dy_since_direction_change > 0)
        {
            // Direction change: restart the cumulative delta.
            self.dy_since_direction_change = 0;
        }
        self.dy_since_direction_change = self.dy_since_direction_change.saturating_add(dy);
        qrtrace!(dy, acc = self.dy_since_direction_change, "on_scroll_delta");

        if self.dy_since_direction_change > i64::from(view.height())
            && !self.is_or_will_be_hidden(view)
        {
            self.hide(view);
        } else if self.dy_since_direction_change < 0 && !self.is_or_will_be_shown(view) {
            self.show(view);
        }
    }

    /// True when the footer is not visible, or a hide animation is in flight.
    pub fn is_or_will_be_hidden<V: AnimatableView + ?Sized>(&self, view: &V) -> bool {
        if view.visibility().is_visible() {
            self.animation_state() == AnimationState::Hiding
        } else {
            self.animation_state() != AnimationState::Showing
        }
    }

    /// True when the footer is visible, or a show animation is in flight.
    pub fn is_or_will_be_shown<V: AnimatableView + ?Sized>(&self, view: &V) -> bool {
        if view.visibility().is_visible() {
            self.animation_state() != AnimationState::Hiding
        } else {
            self.animation_state() == AnimationState::Showing
        }
    }

    /// Slides the footer down past its own height and makes it invisible once the slide
    /// completes.
    ///
    /// Any in-flight animation is canceled first (its cancel and end callbacks run before the
    /// new animation starts). A hide that is itself canceled later leaves visibility untouched,
    /// so a footer interrupted mid-hide stays visible for the next show.
    pub fn hide<V: AnimatableView + ?Sized>(&mut self, view: &mut V) {
        view.cancel_animation();
        let target = i64::from(view.height());
        qrdebug!(target, "hide");

        let canceled = Arc::new(AtomicBool::new(false));
        let state = Arc::clone(&self.anim_state);
        let observer = self.options.on_state_change.clone();

        let callbacks = AnimationCallbacks::new()
            .with_on_start({
                let canceled = Arc::clone(&canceled);
                let state = Arc::clone(&state);
                let observer = observer.clone();
                move |view: &mut dyn AnimatableView| {
                    set_state(&state, observer.as_ref(), AnimationState::Hiding);
                    canceled.store(false, Ordering::Relaxed);
                    view.set_visibility(Visibility::Visible);
                }
            })
            .with_on_cancel({
                let canceled = Arc::clone(&canceled);
                move |_: &mut dyn AnimatableView| {
                    canceled.store(true, Ordering::Relaxed);
                }
            })
            .with_on_end(move |view: &mut dyn AnimatableView| {
                set_state(&state, observer.as_ref(), AnimationState::Idle);
                if !canceled.load(Ordering::Relaxed) {
                    view.set_visibility(Visibility::Invisible);
                }
            });

        view.animate_translation_y(
            target,
            self.options.duration_ms,
            self.options.easing,
            callbacks,
        );
    }

    /// Slides the footer back to its resting position, making it visible as the slide starts.
    ///
    /// Any in-flight animation is canceled first (its cancel and end callbacks run before the
    /// new animation starts).
    pub fn show<V: AnimatableView + ?Sized>(&mut self, view: &mut V) {
        view.cancel_animation();
        qrdebug!("show");

        let state = Arc::clone(&self.anim_state);
        let observer = self.options.on_state_change.clone();

        let callbacks = AnimationCallbacks::new()
            .with_on_start({
                let state = Arc::clone(&state);
                let observer = observer.clone();
                move |view: &mut dyn AnimatableView| {
                    set_state(&state, observer.as_ref(), AnimationState::Showing);
                    view.set_visibility(Visibility::Visible);
                }
            })
            .with_on_end(move |_: &mut dyn AnimatableView| {
                set_state(&state, observer.as_ref(), AnimationState::Idle);
            });

        view.animate_translation_y(
            0,
            self.options.duration_ms,
            self.options.easing,
            callbacks,
        );
    }

    /// Captures the durable part of the behavior for session restore.
    ///
    /// In-flight animations are transient and not part of the snapshot.
    pub fn behavior_state(&self) -> BehaviorState {
        BehaviorState {
            dy_since_direction_change: self.dy_since_direction_change,
        }
    }

    /// Restores a previously captured [`BehaviorState`] and resets the animation state to
    /// `Idle`.
    pub fn restore_behavior_state(&mut self, state: BehaviorState) {
        let prev = AnimationState::from_bits(
            self.anim_state
                .swap(AnimationState::Idle.to_bits(), Ordering::Relaxed),
        );
        if prev.is_animating() {
            qrwarn!(?prev, "restore_behavior_state while an animation is in flight");
            if let Some(cb) = &self.options.on_state_change {
                cb(AnimationState::Idle);
            }
        }
        self.dy_since_direction_change = state.dy_since_direction_change;
    }
}

impl Default for QuickReturnBehavior {
    fn default() -> Self {
        Self::new(QuickReturnOptions::default())
    }
}

impl core::fmt::Debug for QuickReturnBehavior {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuickReturnBehavior")
            .field("options", &self.options)
            .field("dy_since_direction_change", &self.dy_since_direction_change)
            .field("animation_state", &self.animation_state())
            .finish()
    }
}
