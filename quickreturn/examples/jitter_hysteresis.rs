// Example: small scroll jitters never toggle the footer; a real fling does.
use quickreturn::{
    AnimatableView, AnimationCallbacks, Easing, QuickReturnBehavior, Visibility,
};

struct InstantFooter {
    height: u32,
    translation_y: i64,
    visibility: Visibility,
}

impl AnimatableView for InstantFooter {
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

    fn cancel_animation(&mut self) {}

    fn animate_translation_y(
        &mut self,
        target: i64,
        _duration_ms: u64,
        _easing: Easing,
        mut callbacks: AnimationCallbacks,
    ) {
        callbacks.notify_start(self);
        self.translation_y = target;
        callbacks.notify_end(self);
    }
}

fn main() {
    let mut footer = InstantFooter {
        height: 64,
        translation_y: 0,
        visibility: Visibility::Visible,
    };
    let mut behavior = QuickReturnBehavior::default();

    // Jitter: alternating small deltas keep resetting the accumulator, so the
    // footer never moves even though 30 * 8 px of motion went by.
    for _ in 0..30 {
        behavior.on_scroll_delta(&mut footer, 8);
        behavior.on_scroll_delta(&mut footer, -8);
    }
    println!(
        "after jitter: visibility={:?} acc={}",
        footer.visibility(),
        behavior.dy_since_direction_change()
    );

    // A deliberate fling crosses the footer's height and hides it.
    for dy in [30, 30, 30] {
        behavior.on_scroll_delta(&mut footer, dy);
    }
    println!(
        "after fling: visibility={:?} translation_y={}",
        footer.visibility(),
        footer.translation_y()
    );

    // Any net upward movement brings it back.
    behavior.on_scroll_delta(&mut footer, -4);
    println!(
        "after pull-up: visibility={:?} translation_y={}",
        footer.visibility(),
        footer.translation_y()
    );
}
