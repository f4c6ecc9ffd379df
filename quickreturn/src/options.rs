use alloc::sync::Arc;

use crate::easing::Easing;
use crate::types::AnimationState;

/// A callback fired when the behavior's animation state changes.
pub type StateChangeCallback = Arc<dyn Fn(AnimationState) + Send + Sync>;

/// Configuration for [`crate::QuickReturnBehavior`].
///
/// Cheap to clone: the observer callback is stored in an `Arc`.
#[derive(Clone)]
pub struct QuickReturnOptions {
    /// Slide duration for both the hide and the show animation.
    pub duration_ms: u64,
    pub easing: Easing,
    /// Optional observer fired whenever an animation start or end changes the state.
    pub on_state_change: Option<StateChangeCallback>,
}

impl QuickReturnOptions {
    /// Creates the stock configuration: a 200 ms ease-in-out slide, no observer.
    pub fn new() -> Self {
        Self {
            duration_ms: 200,
            easing: Easing::default(),
            on_state_change: None,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_on_state_change(
        mut self,
        on_state_change: Option<impl Fn(AnimationState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_state_change = on_state_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for QuickReturnOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for QuickReturnOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuickReturnOptions")
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
