use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Zone the banner timestamp is rendered in; system local time unless
/// `--timezone` names another one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

fn pin<Z: TimeZone>(utc: DateTime<Utc>, zone: &Z) -> DateTime<FixedOffset> {
    let shifted = utc.with_timezone(zone);
    let offset = shifted.offset().fix();
    shifted.with_timezone(&offset)
}

impl Timezone {
    /// Wall-clock time of `utc` in this zone
    pub(crate) fn at(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => pin(utc, &Local),
            Timezone::Named(tz) => pin(utc, &tz),
        }
    }

    pub(crate) fn now(self) -> DateTime<FixedOffset> {
        self.at(Utc::now())
    }
}

impl FromStr for Timezone {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("local") {
            Ok(Timezone::Local)
        } else if name.eq_ignore_ascii_case("utc") || name.eq_ignore_ascii_case("z") {
            Ok(Timezone::Named(chrono_tz::UTC))
        } else {
            name.parse::<Tz>()
                .map(Timezone::Named)
                .map_err(|_| AppError::InvalidTimezone {
                    input: name.to_string(),
                })
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timezone::Local => f.write_str("local"),
            Timezone::Named(tz) => f.write_str(tz.name()),
        }
    }
}
