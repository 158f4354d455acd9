// SPDX-License-Identifier: AGPL-3.0-or-later

//! Epoch-based instant value type.
//!
//! [`Timestamp`] wraps an absolute instant normalized to UTC and encodes it
//! as a signed count of elapsed units since the Unix epoch
//! (1970-01-01T00:00:00 UTC).  The unit size is selected per call with
//! [`SubsecondDigits`]: `SECONDS` encodes whole seconds, `MILLISECONDS`
//! milliseconds, up to `TICKS` — 100-nanosecond ticks, the finest unit the
//! encoding carries.
//!
//! Construction from calendar time goes through [`CalendarTime`] so that the
//! zone interpretation is always explicit; parsing from integers and strings
//! is `Option`-valued because malformed or out-of-range input is an expected
//! condition, not a contract violation.

use chrono::{DateTime, Local, TimeZone, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::{CalendarTime, Zone, ZoneError, ZoneTag};
use crate::digits::SubsecondDigits;

/// 100-nanosecond ticks per second.
const TICKS_PER_SECOND: i64 = 10_000_000;

/// Nanoseconds per 100-nanosecond tick.
const NANOS_PER_TICK: i64 = 100;

/// Tick count of 10000-01-01T00:00:00 UTC, one second past the last
/// encodable calendar year.  Parsing rejects tick counts at or above this.
const TICKS_AT_YEAR_10000: i64 = 2_534_023_008_000_000_000;

/// An absolute instant, stored in UTC, encodable as a Unix timestamp.
///
/// The value is immutable: every operation either reads it or builds a new
/// one.  Equality, ordering, and hashing derive solely from the UTC instant,
/// so two timestamps built from the same instant through different zones
/// compare equal.  Absent-value comparisons use `Option<Timestamp>`, whose
/// derived equality treats `None == None` as true and `None == Some(_)` as
/// false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    utc: DateTime<Utc>,
}

impl Timestamp {
    /// The Unix epoch, 1970-01-01T00:00:00 UTC — encoded value 0.
    pub const EPOCH: Self = Self {
        utc: DateTime::UNIX_EPOCH,
    };

    // ── construction ──────────────────────────────────────────────────

    /// Store a UTC instant directly.
    #[inline]
    pub const fn from_utc(utc: DateTime<Utc>) -> Self {
        Self { utc }
    }

    /// Normalize an instant expressed in the host's local zone to UTC.
    #[inline]
    pub fn from_local(local: DateTime<Local>) -> Self {
        Self {
            utc: local.with_timezone(&Utc),
        }
    }

    /// Convert a zone-tagged calendar value to a timestamp.
    ///
    /// A `Utc` tag stores the reading directly; a `Local` tag converts it
    /// through the host's current offset rules, DST included.  An
    /// `Unspecified` tag fails with [`ZoneError::UnspecifiedZone`] rather
    /// than guessing — route such values through [`Self::from_calendar_in`]
    /// with an explicit zone instead.
    pub fn from_calendar(cal: CalendarTime) -> Result<Self, ZoneError> {
        match cal.tag() {
            ZoneTag::Utc => Ok(Self::from_utc(Utc.from_utc_datetime(&cal.naive()))),
            ZoneTag::Local => Zone::Local.to_utc(cal.naive()).map(Self::from_utc),
            ZoneTag::Unspecified => Err(ZoneError::UnspecifiedZone),
        }
    }

    /// Convert a calendar value interpreted in an explicitly chosen zone.
    ///
    /// Fails with [`ZoneError::ZoneMismatch`] when the value's own tag
    /// contradicts `zone` (a `Local`-tagged reading with [`Zone::Utc`], or a
    /// `Utc`-tagged reading with [`Zone::Local`]).  An `Unspecified` tag is
    /// accepted here: the explicit zone disambiguates it.
    pub fn from_calendar_in(cal: CalendarTime, zone: Zone) -> Result<Self, ZoneError> {
        match (cal.tag(), zone) {
            (ZoneTag::Local, Zone::Utc) | (ZoneTag::Utc, Zone::Local) => {
                Err(ZoneError::ZoneMismatch {
                    tag: cal.tag(),
                    zone,
                })
            }
            _ => zone.to_utc(cal.naive()).map(Self::from_utc),
        }
    }

    /// The current instant, read from the system clock.
    #[inline]
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// The current instant serialized at the given precision.
    pub fn now_string(digits: SubsecondDigits) -> String {
        Self::now().to_decimal_string(digits)
    }

    // ── parsing ───────────────────────────────────────────────────────

    /// Parse an integer count of `10^-digits`-second units since the epoch.
    ///
    /// Returns `None` when the instant reaches 10000-01-01T00:00:00 UTC or
    /// otherwise falls outside the representable range.  The bound is only
    /// checked upward; negative counts are limited by the representation
    /// alone.
    pub fn parse(value: i64, digits: SubsecondDigits) -> Option<Self> {
        let ticks = value.checked_mul(digits.ticks_per_unit())?;
        if ticks >= TICKS_AT_YEAR_10000 {
            return None;
        }
        Self::from_ticks(ticks)
    }

    /// Parse a base-10 signed integer string, then the integer form.
    ///
    /// The whole string must be a plain decimal integer (optional sign, no
    /// separators, no surrounding whitespace); anything else returns `None`.
    pub fn parse_str(value: &str, digits: SubsecondDigits) -> Option<Self> {
        let value: i64 = value.parse().ok()?;
        Self::parse(value, digits)
    }

    /// [`Self::parse`] at whole-second precision.
    #[inline]
    pub fn parse_seconds(value: i64) -> Option<Self> {
        Self::parse(value, SubsecondDigits::SECONDS)
    }

    /// [`Self::parse_str`] at whole-second precision.
    #[inline]
    pub fn parse_str_seconds(value: &str) -> Option<Self> {
        Self::parse_str(value, SubsecondDigits::SECONDS)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The instant in UTC.
    #[inline]
    pub const fn utc_time(&self) -> DateTime<Utc> {
        self.utc
    }

    /// The instant in the host's local zone.
    ///
    /// Recomputed from the process-wide zone configuration on every call,
    /// never cached: if the host zone changes between calls, so does the
    /// result.  Callers needing a stable zone should convert the UTC value
    /// themselves.
    #[inline]
    pub fn local_time(&self) -> DateTime<Local> {
        self.utc.with_timezone(&Local)
    }

    // ── serialization ─────────────────────────────────────────────────

    /// Elapsed units since the epoch at the given precision.
    ///
    /// Divides the tick count by `10^(7 − digits)` with truncation toward
    /// zero — fractional units are dropped, not rounded, for instants on
    /// either side of the epoch.
    pub fn to_value(&self, digits: SubsecondDigits) -> i64 {
        self.ticks() / digits.ticks_per_unit()
    }

    /// Decimal string form of [`Self::to_value`].
    ///
    /// Plain base-10, locale-invariant: a leading `-` for pre-epoch
    /// instants and nothing else besides digits.
    pub fn to_decimal_string(&self, digits: SubsecondDigits) -> String {
        self.to_value(digits).to_string()
    }

    // ── tick representation ───────────────────────────────────────────

    /// 100-nanosecond ticks since the epoch.
    ///
    /// Instants beyond the ±29 000-year span an `i64` tick count covers
    /// saturate; every instant a parse can produce is well inside it.
    fn ticks(&self) -> i64 {
        let subsec_ticks = (self.utc.timestamp_subsec_nanos() as i64) / NANOS_PER_TICK;
        self.utc
            .timestamp()
            .saturating_mul(TICKS_PER_SECOND)
            .saturating_add(subsec_ticks)
    }

    /// Rebuild from a tick count; `None` outside chrono's calendar range.
    fn from_ticks(ticks: i64) -> Option<Self> {
        let secs = ticks.div_euclid(TICKS_PER_SECOND);
        let nanos = (ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
        DateTime::from_timestamp(secs, nanos).map(Self::from_utc)
    }
}

impl std::fmt::Display for Timestamp {
    /// Whole-second decimal encoding.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_value(SubsecondDigits::SECONDS))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    #[inline]
    fn from(utc: DateTime<Utc>) -> Self {
        Self::from_utc(utc)
    }
}

impl From<DateTime<Local>> for Timestamp {
    #[inline]
    fn from(local: DateTime<Local>) -> Self {
        Self::from_local(local)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Timestamp {
    /// Serializes as the lossless scalar tick count.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.ticks())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::from_ticks(ticks).ok_or_else(|| {
            serde::de::Error::custom(format!("tick count {ticks} outside calendar range"))
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
