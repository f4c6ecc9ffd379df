use quickreturn::{AnimatableView, AnimationCallbacks, Easing, Visibility};

use crate::tween::Tween;

#[derive(Debug)]
struct ActiveSlide {
    target: i64,
    duration_ms: u64,
    easing: Easing,
    /// Stamped on the first tick after the request; the trait surface carries no clock.
    tween: Option<Tween>,
    callbacks: AnimationCallbacks,
}

/// A tick-driven footer: a concrete [`AnimatableView`] for hosts without a native animator.
///
/// The behavior starts slides through `animate_translation_y`; the host advances them by
/// calling [`tick`](Self::tick) from its frame loop or timer.
///
/// Lifecycle callbacks are delivered per the [`AnimatableView`] contract: `on_start`
/// synchronously inside `animate_translation_y`, `on_end` from the completing tick, and
/// `on_cancel` followed by `on_end` synchronously from `cancel_animation`.
#[derive(Debug)]
pub struct TweenFooter {
    height: u32,
    translation_y: i64,
    visibility: Visibility,
    active: Option<ActiveSlide>,
}

impl TweenFooter {
    /// Creates a footer at rest: visible, translation 0.
    pub fn new(height: u32) -> Self {
        Self {
            height,
            translation_y: 0,
            visibility: Visibility::Visible,
            active: None,
        }
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Advances the active slide.
    ///
    /// Returns the new translation while a slide is running, `None` otherwise. The completing
    /// tick lands exactly on the target and delivers `on_end`.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        let mut active = self.active.take()?;

        let tween = match active.tween {
            Some(tween) => tween,
            None => {
                let tween = Tween::new(
                    self.translation_y,
                    active.target,
                    now_ms,
                    active.duration_ms,
                    active.easing,
                );
                active.tween = Some(tween);
                tween
            }
        };

        self.translation_y = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.translation_y = active.target;
            qrtrace!(translation_y = self.translation_y, "slide settled");
            active.callbacks.notify_end(self);
        } else {
            self.active = Some(active);
        }
        Some(self.translation_y)
    }

    /// Captures the footer's durable state. Active slides are transient and not captured.
    pub fn footer_state(&self) -> FooterState {
        FooterState {
            height: self.height,
            translation_y: self.translation_y,
            visibility: self.visibility,
        }
    }

    /// Restores a previously captured [`FooterState`], canceling any active slide first.
    pub fn restore_footer_state(&mut self, state: FooterState) {
        self.cancel_animation();
        self.height = state.height;
        self.translation_y = state.translation_y;
        self.visibility = state.visibility;
    }
}

impl AnimatableView for TweenFooter {
    fn height(&self) -> u32 {
        self.height
    }

    fn translation_y(&self) -> i64 {
        self.translation_y
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn cancel_animation(&mut self) {
        if let Some(mut active) = self.active.take() {
            qrtrace!(translation_y = self.translation_y, "slide canceled");
            active.callbacks.notify_cancel(self);
            active.callbacks.notify_end(self);
        }
    }

    fn animate_translation_y(
        &mut self,
        target: i64,
        duration_ms: u64,
        easing: Easing,
        mut callbacks: AnimationCallbacks,
    ) {
        self.cancel_animation();
        qrdebug!(target, duration_ms, "slide started");
        callbacks.notify_start(self);
        self.active = Some(ActiveSlide {
            target,
            duration_ms,
            easing,
            tween: None,
            callbacks,
        });
    }
}

/// A lightweight snapshot of the footer's durable fields.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FooterState {
    pub height: u32,
    pub translation_y: i64,
    pub visibility: Visibility,
}
