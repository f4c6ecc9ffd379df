//! Adapter utilities for the `quickreturn` crate.
//!
//! The `quickreturn` crate is UI-agnostic and focuses on the scroll accounting and animation
//! state machine. This crate provides small, framework-neutral helpers commonly needed by
//! hosts:
//!
//! - [`TweenFooter`]: a tick-driven footer view for hosts without a native animator
//!   (TUIs, immediate-mode UIs, simulations)
//! - [`QuickReturnController`]: nested-scroll gesture plumbing around a behavior/view pair
//! - [`Tween`]: the underlying time-based interpolation helper
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod footer;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::QuickReturnController;
pub use footer::{FooterState, TweenFooter};
pub use quickreturn::Easing;
pub use tween::Tween;
