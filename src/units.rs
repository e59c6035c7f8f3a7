use derive_more::{Display, From, Into};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A horizontal distance on screen, measured in whole pixels. All glyph and
/// control code widths, as well as the width of a text box, are expressed in
/// pixels.
///
/// Addition saturates at [Px::MAX] rather than overflowing, so measuring text
/// never fails no matter how wide the configured glyphs are.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into,
)]
#[display("{_0}px")]
pub struct Px(pub u32);

impl Px {
    /// A width of zero pixels, used whenever a width cannot be resolved
    pub const ZERO: Px = Px(0);

    /// The widest representable width
    pub const MAX: Px = Px(u32::MAX);
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Px) -> Px {
        Px(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Px) {
        *self = *self + rhs;
    }
}

impl Sum for Px {
    fn sum<I: Iterator<Item = Px>>(iter: I) -> Px {
        iter.fold(Px::ZERO, Add::add)
    }
}
