//! Weekday vocabulary used by package recurrence days.
//!
//! ## Summary
//! Packages store their recurrence days by their Indonesian names
//! (`Senin` .. `Minggu`). This enum is the closed set of those names with a
//! total mapping onto calendar weekdays, so an unknown name is rejected at
//! parse time instead of silently matching nothing.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayName {
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
    Minggu,
}

impl DayName {
    /// All day names in calendar order, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Senin,
        Self::Selasa,
        Self::Rabu,
        Self::Kamis,
        Self::Jumat,
        Self::Sabtu,
        Self::Minggu,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Senin => "Senin",
            Self::Selasa => "Selasa",
            Self::Rabu => "Rabu",
            Self::Kamis => "Kamis",
            Self::Jumat => "Jumat",
            Self::Sabtu => "Sabtu",
            Self::Minggu => "Minggu",
        }
    }

    /// ## Summary
    /// Parses a stored day name. Matching ignores ASCII case and surrounding
    /// whitespace.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` if the name is not one of the seven days.
    pub fn from_name(name: &str) -> CoreResult<Self> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown day name: {name:?}")))
    }

    /// Day-of-week index with Sunday = 0 through Saturday = 6.
    #[must_use]
    pub fn weekday_index(self) -> u32 {
        self.to_weekday().num_days_from_sunday()
    }

    #[must_use]
    pub const fn to_weekday(self) -> Weekday {
        match self {
            Self::Senin => Weekday::Mon,
            Self::Selasa => Weekday::Tue,
            Self::Rabu => Weekday::Wed,
            Self::Kamis => Weekday::Thu,
            Self::Jumat => Weekday::Fri,
            Self::Sabtu => Weekday::Sat,
            Self::Minggu => Weekday::Sun,
        }
    }

    #[must_use]
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Senin,
            Weekday::Tue => Self::Selasa,
            Weekday::Wed => Self::Rabu,
            Weekday::Thu => Self::Kamis,
            Weekday::Fri => Self::Jumat,
            Weekday::Sat => Self::Sabtu,
            Weekday::Sun => Self::Minggu,
        }
    }
}

impl FromStr for DayName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
