use crate::*;

use quickreturn::{
    AnimatableView, AnimationCallbacks, AnimationState, QuickReturnBehavior, QuickReturnOptions,
    ScrollAxes, Visibility,
};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

fn logging_callbacks(log: &Arc<Mutex<Vec<&'static str>>>) -> AnimationCallbacks {
    AnimationCallbacks::new()
        .with_on_start({
            let log = Arc::clone(log);
            move |_: &mut dyn AnimatableView| log.lock().unwrap().push("start")
        })
        .with_on_cancel({
            let log = Arc::clone(log);
            move |_: &mut dyn AnimatableView| log.lock().unwrap().push("cancel")
        })
        .with_on_end({
            let log = Arc::clone(log);
            move |_: &mut dyn AnimatableView| log.lock().unwrap().push("end")
        })
}

#[test]
fn tween_samples_monotonically_and_lands_exactly() {
    let tw = Tween::new(0, 100, 0, 200, Easing::EaseInOutCubic);

    let mut last = 0i64;
    for now_ms in (0..=200).step_by(16) {
        let v = tw.sample(now_ms);
        assert!(v >= last);
        last = v;
    }

    assert!(!tw.is_done(199));
    assert!(tw.is_done(200));
    assert_eq!(tw.sample(200), 100);
    // Late samples stay parked on the target.
    assert_eq!(tw.sample(10_000), 100);
}

#[test]
fn tween_interpolates_signed_endpoints() {
    let tw = Tween::new(100, 0, 0, 100, Easing::Linear);
    assert_eq!(tw.sample(0), 100);
    assert_eq!(tw.sample(50), 50);
    assert_eq!(tw.sample(100), 0);

    // Slides can pass through negative translations.
    let tw = Tween::new(-40, 40, 0, 100, Easing::Linear);
    assert_eq!(tw.sample(0), -40);
    assert_eq!(tw.sample(50), 0);
    assert_eq!(tw.sample(100), 40);
}

#[test]
fn tween_retarget_restarts_from_current_value() {
    let mut tw = Tween::new(0, 100, 0, 100, Easing::Linear);
    tw.retarget(50, 0, 100);

    assert_eq!(tw.from, 50);
    assert_eq!(tw.to, 0);
    assert_eq!(tw.start_ms, 50);
    assert_eq!(tw.sample(100), 25);
}

#[test]
fn zero_duration_slides_complete_on_first_tick() {
    let tw = Tween::new(0, 10, 5, 0, Easing::Linear);
    assert_eq!(tw.duration_ms, 1);
    assert!(tw.is_done(6));
    assert_eq!(tw.sample(6), 10);
}

#[test]
fn footer_delivers_lifecycle_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut footer = TweenFooter::new(50);

    footer.animate_translation_y(50, 100, Easing::Linear, logging_callbacks(&log));
    // on_start is synchronous, before the first tick.
    assert_eq!(*log.lock().unwrap(), ["start"]);
    assert!(footer.is_animating());

    footer.tick(0);
    footer.tick(50);
    assert_eq!(footer.translation_y(), 25);

    assert_eq!(footer.tick(100), Some(50));
    assert!(!footer.is_animating());
    assert_eq!(*log.lock().unwrap(), ["start", "end"]);

    // Ticks with nothing in flight are no-ops.
    assert_eq!(footer.tick(150), None);
    assert_eq!(*log.lock().unwrap(), ["start", "end"]);
}

#[test]
fn footer_cancel_freezes_translation_mid_slide() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut footer = TweenFooter::new(100);

    footer.animate_translation_y(100, 100, Easing::Linear, logging_callbacks(&log));
    footer.tick(0);
    footer.tick(40);
    assert_eq!(footer.translation_y(), 40);

    footer.cancel_animation();
    assert_eq!(*log.lock().unwrap(), ["start", "cancel", "end"]);
    assert_eq!(footer.translation_y(), 40);
    assert!(!footer.is_animating());
    assert_eq!(footer.tick(60), None);
}

#[test]
fn footer_restart_tweens_from_current_position() {
    let mut footer = TweenFooter::new(100);

    footer.animate_translation_y(100, 100, Easing::Linear, AnimationCallbacks::new());
    footer.tick(0);
    footer.tick(60);
    assert_eq!(footer.translation_y(), 60);

    // A new request replaces the slide; the next tick stamps it at the current translation.
    footer.animate_translation_y(0, 100, Easing::Linear, AnimationCallbacks::new());
    footer.tick(100);
    assert_eq!(footer.translation_y(), 60);
    footer.tick(150);
    assert_eq!(footer.translation_y(), 30);
}

#[test]
fn footer_state_roundtrip() {
    let mut f1 = TweenFooter::new(80);
    f1.animate_translation_y(80, 100, Easing::Linear, AnimationCallbacks::new());
    f1.tick(0);
    f1.tick(50);

    let state = f1.footer_state();
    assert_eq!(state.height, 80);
    assert_eq!(state.translation_y, 40);
    assert_eq!(state.visibility, Visibility::Visible);

    let mut f2 = TweenFooter::new(0);
    f2.restore_footer_state(state);
    assert_eq!(f2.height(), 80);
    assert_eq!(f2.translation_y(), 40);
    assert!(!f2.is_animating());

    // Restoring over an active slide cancels it first.
    let mut f3 = TweenFooter::new(10);
    f3.animate_translation_y(10, 100, Easing::Linear, AnimationCallbacks::new());
    assert!(f3.is_animating());
    f3.restore_footer_state(state);
    assert!(!f3.is_animating());
    assert_eq!(f3.translation_y(), 40);
}

#[test]
fn controller_end_to_end_hide_then_show() {
    let mut c = QuickReturnController::new(TweenFooter::new(100), QuickReturnOptions::default());
    assert!(c.start_nested_scroll(ScrollAxes::VERTICAL));

    for dy in [30, 30, 30, 30] {
        c.on_nested_pre_scroll(dy);
    }
    assert_eq!(c.behavior().animation_state(), AnimationState::Hiding);

    // Drive the 200 ms slide at ~60 fps.
    let mut now_ms = 0u64;
    let mut last = 0i64;
    while c.view().is_animating() {
        now_ms += 16;
        if let Some(ty) = c.tick(now_ms) {
            assert!(ty >= last);
            last = ty;
        }
    }
    assert_eq!(c.view().translation_y(), 100);
    assert_eq!(c.view().visibility(), Visibility::Invisible);
    assert_eq!(c.behavior().animation_state(), AnimationState::Idle);

    // Any upward motion brings the footer back.
    c.on_nested_pre_scroll(-5);
    assert_eq!(c.behavior().animation_state(), AnimationState::Showing);
    assert_eq!(c.view().visibility(), Visibility::Visible);

    while c.view().is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    assert_eq!(c.view().translation_y(), 0);
    assert_eq!(c.behavior().animation_state(), AnimationState::Idle);
}

#[test]
fn controller_ignores_unaccepted_gestures() {
    let mut c = QuickReturnController::new(TweenFooter::new(40), QuickReturnOptions::default());

    // No gesture started yet.
    c.on_nested_pre_scroll(10);
    assert_eq!(c.behavior().dy_since_direction_change(), 0);

    // Horizontal gestures are declined and their deltas dropped.
    assert!(!c.start_nested_scroll(ScrollAxes::HORIZONTAL));
    c.on_nested_pre_scroll(500);
    assert_eq!(c.behavior().dy_since_direction_change(), 0);
    assert!(!c.view().is_animating());

    // A gesture with a vertical component flows through.
    assert!(c.start_nested_scroll(ScrollAxes::VERTICAL | ScrollAxes::HORIZONTAL));
    c.on_nested_pre_scroll(41);
    assert_eq!(c.behavior().dy_since_direction_change(), 41);
    assert_eq!(c.behavior().animation_state(), AnimationState::Hiding);

    // stop_nested_scroll disarms until the next accepted start.
    c.stop_nested_scroll();
    c.on_nested_pre_scroll(-100);
    assert_eq!(c.behavior().dy_since_direction_change(), 41);
}

#[test]
fn controller_mid_slide_reversal_is_smooth() {
    let mut c = QuickReturnController::new(TweenFooter::new(100), QuickReturnOptions::default());
    assert!(c.start_nested_scroll(ScrollAxes::VERTICAL));

    c.on_nested_pre_scroll(101);
    c.tick(0);
    let mid = c.tick(100).unwrap();
    assert!(mid > 0 && mid < 100);

    // Reversing mid-slide cancels the hide (footer stays visible) and the show picks up
    // from the frozen translation, no jump.
    c.on_nested_pre_scroll(-10);
    assert_eq!(c.view().visibility(), Visibility::Visible);
    assert_eq!(c.view().translation_y(), mid);
    assert_eq!(c.behavior().animation_state(), AnimationState::Showing);

    c.tick(120);
    assert_eq!(c.view().translation_y(), mid);

    let mut last = mid;
    for now_ms in [140u64, 180, 220, 260, 320, 340] {
        if let Some(ty) = c.tick(now_ms) {
            assert!(ty <= last);
            last = ty;
        }
    }
    assert_eq!(c.view().translation_y(), 0);
    assert_eq!(c.view().visibility(), Visibility::Visible);
    assert_eq!(c.behavior().animation_state(), AnimationState::Idle);
}

#[test]
fn controller_direct_hide_and_show() {
    let behavior = QuickReturnBehavior::new(QuickReturnOptions::new().with_duration_ms(40));
    let mut c = QuickReturnController::from_parts(behavior, TweenFooter::new(25));

    c.hide();
    assert!(c.is_or_will_be_hidden());
    c.tick(0);
    c.tick(40);
    assert_eq!(c.view().visibility(), Visibility::Invisible);
    assert_eq!(c.view().translation_y(), 25);

    c.show();
    assert!(c.is_or_will_be_shown());
    c.tick(50);
    c.tick(90);
    assert_eq!(c.view().visibility(), Visibility::Visible);
    assert_eq!(c.view().translation_y(), 0);
}

#[test]
fn footer_height_feeds_the_behavior_threshold() {
    let mut c = QuickReturnController::new(TweenFooter::new(100), QuickReturnOptions::default());
    assert!(c.start_nested_scroll(ScrollAxes::VERTICAL));

    c.view_mut().set_height(30);
    c.on_nested_pre_scroll(31);
    assert_eq!(c.behavior().animation_state(), AnimationState::Hiding);
}
