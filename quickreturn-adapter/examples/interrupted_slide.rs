use quickreturn::{AnimatableView, AnimationState, QuickReturnOptions, ScrollAxes};
use quickreturn_adapter::{QuickReturnController, TweenFooter};

fn main() {
    // Example: reversing scroll direction mid-slide. The hide is canceled before the show
    // starts, and the show tween picks up from the translation the cancel froze.
    let options = QuickReturnOptions::new().with_on_state_change(Some(|state: AnimationState| {
        println!("state -> {state:?}");
    }));
    let mut c = QuickReturnController::new(TweenFooter::new(64), options);

    c.start_nested_scroll(ScrollAxes::VERTICAL);
    c.on_nested_pre_scroll(70);

    // Let the hide run for ~120 ms, then flick upward.
    let mut now_ms = 0u64;
    while now_ms < 120 {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!(
        "reversing at t={now_ms} translation_y={}",
        c.view().translation_y()
    );

    c.on_nested_pre_scroll(-6);
    println!(
        "after reversal: translation_y={} (unchanged)",
        c.view().translation_y()
    );

    loop {
        now_ms += 16;
        if c.tick(now_ms).is_none() {
            break;
        }
    }
    println!(
        "settled: visibility={:?} translation_y={}",
        c.view().visibility(),
        c.view().translation_y()
    );
}
