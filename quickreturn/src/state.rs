/// A lightweight, serializable snapshot of the behavior's durable state.
///
/// In-flight animations are transient and deliberately absent: restoring a snapshot resets the
/// animation state to `Idle`. With `feature = "serde"`, this type implements
/// `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorState {
    pub dy_since_direction_change: i64,
}
