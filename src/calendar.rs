// SPDX-License-Identifier: AGPL-3.0-or-later

//! Zone-tagged calendar input.
//!
//! A bare [`NaiveDateTime`] is ambiguous: the same wall-clock reading names a
//! different instant in every zone.  [`CalendarTime`] pairs the reading with
//! a [`ZoneTag`] stating how it is meant to be interpreted, and the
//! [`Timestamp`](crate::Timestamp) constructors refuse to guess when the tag
//! is [`ZoneTag::Unspecified`].
//!
//! The host platform exposes two zone facilities through `chrono` —
//! [`Utc`] and the process-wide [`Local`] zone — and [`Zone`] selects
//! between them when a caller supplies the zone explicitly.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// How the wall-clock reading of a [`CalendarTime`] is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneTag {
    /// The reading is already UTC.
    Utc,
    /// The reading is in the host's current local zone.
    Local,
    /// No interpretation attached; the caller must disambiguate.
    Unspecified,
}

/// An explicitly selected host zone facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Coordinated Universal Time.
    Utc,
    /// The host's current local zone, offset rules (DST included) applied
    /// at conversion time.
    Local,
}

impl Zone {
    /// Interpret a wall-clock reading in this zone and normalize it to UTC.
    pub(crate) fn to_utc(self, naive: NaiveDateTime) -> Result<DateTime<Utc>, ZoneError> {
        match self {
            Zone::Utc => Ok(Utc.from_utc_datetime(&naive)),
            Zone::Local => match Local.from_local_datetime(&naive) {
                LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
                // A reading repeated by a backward DST shift maps to the
                // earlier of the two instants.
                LocalResult::Ambiguous(earlier, _) => Ok(earlier.with_timezone(&Utc)),
                LocalResult::None => Err(ZoneError::NonexistentLocalTime(naive)),
            },
        }
    }
}

/// A calendar date/time reading together with its zone interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarTime {
    naive: NaiveDateTime,
    tag: ZoneTag,
}

impl CalendarTime {
    /// Pair a wall-clock reading with a zone tag.
    #[inline]
    pub const fn new(naive: NaiveDateTime, tag: ZoneTag) -> Self {
        Self { naive, tag }
    }

    /// A reading already expressed in UTC.
    #[inline]
    pub const fn utc(naive: NaiveDateTime) -> Self {
        Self::new(naive, ZoneTag::Utc)
    }

    /// A reading expressed in the host's local zone.
    #[inline]
    pub const fn local(naive: NaiveDateTime) -> Self {
        Self::new(naive, ZoneTag::Local)
    }

    /// A reading with no zone interpretation attached.
    #[inline]
    pub const fn unspecified(naive: NaiveDateTime) -> Self {
        Self::new(naive, ZoneTag::Unspecified)
    }

    /// The wall-clock reading.
    #[inline]
    pub const fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    /// The zone interpretation.
    #[inline]
    pub const fn tag(&self) -> ZoneTag {
        self.tag
    }
}

impl From<DateTime<Utc>> for CalendarTime {
    #[inline]
    fn from(dt: DateTime<Utc>) -> Self {
        Self::utc(dt.naive_utc())
    }
}

impl From<DateTime<Local>> for CalendarTime {
    #[inline]
    fn from(dt: DateTime<Local>) -> Self {
        Self::local(dt.naive_local())
    }
}

/// Failure converting a [`CalendarTime`] to a UTC instant.
///
/// These are input-contract violations, not recoverable parse conditions:
/// the constructors never fall back to a guessed zone.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ZoneError {
    /// The calendar value carries [`ZoneTag::Unspecified`] and no explicit
    /// zone was supplied to disambiguate it.
    #[error("calendar time carries no zone tag; tag it utc or local, or supply an explicit zone")]
    UnspecifiedZone,

    /// The calendar value's tag contradicts the explicitly supplied zone.
    #[error("zone tag {tag:?} conflicts with explicit zone {zone:?}")]
    ZoneMismatch {
        /// Tag carried by the calendar value.
        tag: ZoneTag,
        /// Zone the caller supplied.
        zone: Zone,
    },

    /// The wall-clock reading falls inside a forward DST gap and names no
    /// instant in the local zone.
    #[error("local time {0} does not exist in the current time zone")]
    NonexistentLocalTime(NaiveDateTime),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn utc_zone_is_a_direct_reinterpretation() {
        let n = naive(1999, 9, 9, 9, 9, 9);
        let dt = Zone::Utc.to_utc(n).unwrap();
        assert_eq!(dt.naive_utc(), n);
        assert_eq!(dt.timestamp(), 936_868_149);
    }

    #[test]
    fn local_zone_roundtrips_through_chrono_local() {
        // Derive the naive reading from a known instant so the assertion
        // holds under any host zone configuration.
        let instant = DateTime::from_timestamp(992_606_400, 0).unwrap(); // 2001-06-15T12:00:00Z
        let reading = instant.with_timezone(&Local).naive_local();
        let back = Zone::Local.to_utc(reading).unwrap();
        assert_eq!(back, instant);
    }

    #[test]
    fn calendar_time_from_chrono_values_keeps_the_tag() {
        let utc = DateTime::from_timestamp(1, 0).unwrap();
        let cal = CalendarTime::from(utc);
        assert_eq!(cal.tag(), ZoneTag::Utc);
        assert_eq!(cal.naive(), utc.naive_utc());

        let local = utc.with_timezone(&Local);
        let cal = CalendarTime::from(local);
        assert_eq!(cal.tag(), ZoneTag::Local);
        assert_eq!(cal.naive(), local.naive_local());
    }

    #[test]
    fn constructors_attach_the_expected_tag() {
        let n = naive(1970, 1, 1, 0, 0, 1);
        assert_eq!(CalendarTime::utc(n).tag(), ZoneTag::Utc);
        assert_eq!(CalendarTime::local(n).tag(), ZoneTag::Local);
        assert_eq!(CalendarTime::unspecified(n).tag(), ZoneTag::Unspecified);
        assert_eq!(CalendarTime::new(n, ZoneTag::Utc), CalendarTime::utc(n));
    }

    #[test]
    fn zone_error_messages_name_the_conflict() {
        let err = ZoneError::ZoneMismatch {
            tag: ZoneTag::Local,
            zone: Zone::Utc,
        };
        let msg = err.to_string();
        assert!(msg.contains("Local"));
        assert!(msg.contains("Utc"));
    }
}
