use quickreturn::{AnimatableView, QuickReturnOptions, ScrollAxes};
use quickreturn_adapter::{QuickReturnController, TweenFooter};

fn main() {
    // Example: a frame loop driving a quick-return footer without holding any UI objects.
    //
    // A host would:
    // - forward its scroll container's gesture callbacks to the controller
    // - call tick(now_ms) in a frame loop / timer
    // - draw the footer at the returned translation (and skip drawing when Invisible)
    let mut c = QuickReturnController::new(TweenFooter::new(48), QuickReturnOptions::default());

    println!("accepted={}", c.start_nested_scroll(ScrollAxes::VERTICAL));
    for dy in [20, 20, 20] {
        c.on_nested_pre_scroll(dy);
    }
    c.stop_nested_scroll();
    println!("hiding={}", c.is_or_will_be_hidden());

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        if let Some(ty) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} translation_y={ty}");
            }
        } else {
            break;
        }
    }
    println!(
        "hidden: visibility={:?} translation_y={}",
        c.view().visibility(),
        c.view().translation_y()
    );

    // One upward flick brings it back.
    c.start_nested_scroll(ScrollAxes::VERTICAL);
    c.on_nested_pre_scroll(-8);
    c.stop_nested_scroll();
    loop {
        now_ms += 16;
        if c.tick(now_ms).is_none() {
            break;
        }
    }
    println!(
        "shown: visibility={:?} translation_y={}",
        c.view().visibility(),
        c.view().translation_y()
    );
}
