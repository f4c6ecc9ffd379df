use crate::callbacks::AnimationCallbacks;
use crate::easing::Easing;
use crate::types::Visibility;

/// The view capability the behavior drives.
///
/// The behavior never holds the view; hosts pass it into each call. Implementations own the
/// actual animation machinery: a toolkit animator, a frame-loop tween like
/// `quickreturn-adapter`'s `TweenFooter`, or a test double.
///
/// Contract for animation drivers:
/// - `animate_translation_y` delivers `on_start` before returning.
/// - Frames move `translation_y` toward the target; the final frame lands exactly on it.
/// - Every animation is terminated by exactly one `on_end`.
/// - `cancel_animation` synchronously delivers the in-flight animation's `on_cancel`, then its
///   `on_end`, before returning. With nothing in flight it is a no-op.
/// - Lifecycle callbacks must not start new animations on the view they receive.
pub trait AnimatableView {
    /// The footer's laid-out height, which doubles as the hide threshold and the hide target
    /// translation.
    fn height(&self) -> u32;

    /// Current vertical offset from the resting position (positive = downward).
    fn translation_y(&self) -> i64;

    fn visibility(&self) -> Visibility;

    fn set_visibility(&mut self, visibility: Visibility);

    /// Cancels the in-flight animation, if any, delivering its `on_cancel` and `on_end`.
    fn cancel_animation(&mut self);

    /// Starts an eased translation animation toward `target`.
    fn animate_translation_y(
        &mut self,
        target: i64,
        duration_ms: u64,
        easing: Easing,
        callbacks: AnimationCallbacks,
    );
}
