// Example: feeding scroll deltas to the behavior with a minimal host view.
use quickreturn::{
    AnimatableView, AnimationCallbacks, AnimationState, Easing, QuickReturnBehavior,
    QuickReturnOptions, ScrollAxes, Visibility,
};

/// A toy footer whose animations complete instantly.
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

    fn cancel_animation(&mut self) {
        // Nothing is ever in flight: animations complete inside animate_translation_y.
    }

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
        height: 96,
        translation_y: 0,
        visibility: Visibility::Visible,
    };
    let mut behavior = QuickReturnBehavior::new(QuickReturnOptions::new().with_on_state_change(
        Some(|s: AnimationState| {
            println!("  state -> {s:?}");
        }),
    ));

    println!(
        "accepts vertical gesture: {}",
        behavior.accepts_scroll(ScrollAxes::VERTICAL)
    );
    println!(
        "accepts horizontal gesture: {}",
        behavior.accepts_scroll(ScrollAxes::HORIZONTAL)
    );

    // A fling down past the footer height, then a small pull back up.
    for dy in [40, 40, 40, -12] {
        behavior.on_scroll_delta(&mut footer, dy);
        println!(
            "dy={dy:+} acc={} visibility={:?} translation_y={}",
            behavior.dy_since_direction_change(),
            footer.visibility(),
            footer.translation_y(),
        );
    }
}
