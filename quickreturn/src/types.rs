/// A bitmask of scroll axes, as reported by nested-scroll hosts.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAxes(u8);

impl ScrollAxes {
    pub const NONE: Self = Self(0);
    pub const HORIZONTAL: Self = Self(1 << 0);
    pub const VERTICAL: Self = Self(1 << 1);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a mask from raw bits, ignoring bits outside the known axes.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & (Self::HORIZONTAL.0 | Self::VERTICAL.0))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl core::ops::BitOr for ScrollAxes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for ScrollAxes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl core::ops::BitAnd for ScrollAxes {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl core::fmt::Debug for ScrollAxes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return f.write_str("ScrollAxes(NONE)");
        }
        f.write_str("ScrollAxes(")?;
        let mut first = true;
        for (axis, name) in [(Self::HORIZONTAL, "HORIZONTAL"), (Self::VERTICAL, "VERTICAL")] {
            if self.contains(axis) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

/// The footer view's visibility, mirroring the usual toolkit tri-state.
///
/// The behavior only ever writes `Visible` and `Invisible`; `Gone` exists so views that hosts
/// lay out away entirely are still representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    #[default]
    Visible,
    /// Hidden, but still occupying layout space.
    Invisible,
    /// Hidden and excluded from layout.
    Gone,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// What the behavior believes the footer is currently doing.
///
/// Set when an animation starts and reset to `Idle` when it ends, whether the animation completed
/// or was canceled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationState {
    #[default]
    Idle,
    Hiding,
    Showing,
}

impl AnimationState {
    pub fn is_animating(self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub(crate) fn to_bits(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Hiding => 1,
            Self::Showing => 2,
        }
    }

    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Self::Hiding,
            2 => Self::Showing,
            _ => Self::Idle,
        }
    }
}
