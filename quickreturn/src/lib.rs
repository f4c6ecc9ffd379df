//! A headless quick-return scroll behavior.
//!
//! When the content scrolls down, the footer slides out below the screen; when the content
//! scrolls back up, the footer slides back in. This crate implements the detection and animation
//! state machine behind that pattern: per-direction delta accumulation, hide/show thresholds
//! with hysteresis, and cancel-before-start animation handoff that keeps rapid direction
//! reversals from fighting each other.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - vertical scroll deltas (and the gesture's scroll axes, if it has gestures)
//! - a footer view implementing [`AnimatableView`]: height, visibility, and an eased
//!   translation animation with lifecycle callbacks
//!
//! For a ready-made tick-driven footer and nested-scroll plumbing, see the
//! `quickreturn-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod behavior;
mod callbacks;
mod easing;
mod options;
mod state;
mod types;
mod view;


pub use behavior::QuickReturnBehavior;
pub use callbacks::{AnimationCallbacks, LifecycleCallback};
pub use easing::Easing;
pub use options::{QuickReturnOptions, StateChangeCallback};
pub use state::BehaviorState;
pub use types::{AnimationState, ScrollAxes, Visibility};
pub use view::AnimatableView;
