//! Day labels used to name puzzle files

use std::fmt;

/// Label identifying which day's files to locate
///
/// Built from an integer (`5` → `day_5.txt`) or from a string for
/// per-part fixtures (`"1_2"` → `day_1_2_example.txt`). The label is only
/// ever formatted into a file name; no range check is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Day(String);

impl Day {
    /// The label as it appears inside file names
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! day_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Day {
                fn from(day: $ty) -> Self {
                    Day(day.to_string())
                }
            }
        )*
    };
}

day_from_int!(u8, u16, u32, u64, usize, i32, i64);

impl From<&str> for Day {
    fn from(day: &str) -> Self {
        Day(day.to_owned())
    }
}

impl From<String> for Day {
    fn from(day: String) -> Self {
        Day(day)
    }
}

impl From<&Day> for Day {
    fn from(day: &Day) -> Self {
        day.clone()
    }
}
