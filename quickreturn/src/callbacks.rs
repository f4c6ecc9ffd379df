use alloc::boxed::Box;

use crate::view::AnimatableView;

/// A single animation lifecycle callback.
///
/// Receives the view the animation runs on, so callbacks can adjust visibility or read geometry
/// without capturing the view themselves.
pub type LifecycleCallback = Box<dyn FnMut(&mut dyn AnimatableView) + Send>;

/// The tagged callback set passed to [`AnimatableView::animate_translation_y`].
///
/// Drivers deliver the slots in a fixed order per animation: `on_start` once, then either
/// `on_end` alone (completion) or `on_cancel` followed by `on_end` (cancellation). Empty slots
/// are skipped; the `notify_*` helpers below are what drivers call.
#[derive(Default)]
pub struct AnimationCallbacks {
    on_start: Option<LifecycleCallback>,
    on_cancel: Option<LifecycleCallback>,
    on_end: Option<LifecycleCallback>,
}

impl AnimationCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_start(
        mut self,
        f: impl FnMut(&mut dyn AnimatableView) + Send + 'static,
    ) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn with_on_cancel(
        mut self,
        f: impl FnMut(&mut dyn AnimatableView) + Send + 'static,
    ) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    pub fn with_on_end(mut self, f: impl FnMut(&mut dyn AnimatableView) + Send + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    /// Delivers `on_start`. Drivers call this exactly once, as the animation starts.
    pub fn notify_start(&mut self, view: &mut dyn AnimatableView) {
        if let Some(f) = self.on_start.as_mut() {
            f(view);
        }
    }

    /// Delivers `on_cancel`. Drivers call this at most once, always before the final
    /// [`notify_end`](Self::notify_end).
    pub fn notify_cancel(&mut self, view: &mut dyn AnimatableView) {
        if let Some(f) = self.on_cancel.as_mut() {
            f(view);
        }
    }

    /// Delivers `on_end`. Drivers call this exactly once, when the animation settles or is
    /// canceled.
    pub fn notify_end(&mut self, view: &mut dyn AnimatableView) {
        if let Some(f) = self.on_end.as_mut() {
            f(view);
        }
    }
}

impl core::fmt::Debug for AnimationCallbacks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnimationCallbacks")
            .field("on_start", &self.on_start.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}
