//! Strongly typed identifier wrappers.
//!
//! Ids are `Copy + Ord + Hash` so they work as map keys and sort keys without
//! ceremony.  The inner integer is `pub` so loaders can build them directly
//! from parsed CSV fields.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<i64> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: i64) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A hero (routing agent).  Valid submissions use ids `1..=100`.
    pub struct HeroId(u32);
}

typed_id! {
    /// A map location.  `0` is the depot (castle); objects use `1..=700`.
    pub struct ObjectId(u32);
}

impl ObjectId {
    /// The common start location of every hero.
    pub const DEPOT: ObjectId = ObjectId(0);

    #[inline(always)]
    pub fn is_depot(self) -> bool {
        self == Self::DEPOT
    }
}
