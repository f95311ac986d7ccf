//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Each ID displays with the short
//! prefix operators use on rosters (`R1`, `E12`) and parses back from it.

use std::fmt;
use std::str::FromStr;

use crate::RosterError;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) = $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Display prefix, e.g. `"R"` for routes.
            pub const PREFIX: &'static str = $prefix;

            /// The bare numeric part.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = RosterError;

            /// Accepts both the prefixed form (`R7`) and a bare integer (`7`).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let digits = s.strip_prefix($prefix).unwrap_or(s);
                digits.parse::<$inner>().map($name).map_err(|_| {
                    RosterError::Parse(format!(
                        "invalid {} {s:?}: expected \"{}<n>\" or a bare integer",
                        stringify!($name),
                        $prefix,
                    ))
                })
            }
        }
    };
}

typed_id! {
    /// Identifier of a transit route.
    pub struct RouteId(u32) = "R";
}

typed_id! {
    /// Identifier of a crew member.
    pub struct EmployeeId(u32) = "E";
}
