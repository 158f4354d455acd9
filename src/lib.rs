// SPDX-License-Identifier: AGPL-3.0-or-later

//! Unix timestamp primitives.
//!
//! This crate provides [`Timestamp`], an immutable value wrapping an
//! absolute instant normalized to UTC, with conversions to and from
//! zone-tagged calendar time and a decimal integer/string encoding at
//! configurable sub-second precision.
//!
//! # Core types
//!
//! - [`Timestamp`] — an instant since the Unix epoch, stored in UTC.
//! - [`SubsecondDigits`] — validated precision of an encoding (`0` = whole
//!   seconds … `7` = 100-nanosecond ticks).
//! - [`CalendarTime`] — a wall-clock reading paired with a [`ZoneTag`].
//! - [`Zone`] — explicit selection of a host zone facility (UTC or local).
//! - [`ZoneError`] — construction failure for inconsistent zone input.
//!
//! # Encoding
//!
//! An encoded value counts elapsed units of `10^-digits` seconds since
//! 1970-01-01T00:00:00 UTC.  Parsing and serialization truncate toward
//! zero and round-trip exactly:
//!
//! ```
//! use epochstamp::{SubsecondDigits, Timestamp};
//!
//! let ts = Timestamp::parse_str("936868149", SubsecondDigits::SECONDS).unwrap();
//! assert_eq!(ts.to_decimal_string(SubsecondDigits::MILLISECONDS), "936868149000");
//! assert_eq!(ts.to_value(SubsecondDigits::SECONDS), 936_868_149);
//! ```
//!
//! # Zone discipline
//!
//! A [`CalendarTime`] with [`ZoneTag::Unspecified`] is rejected by
//! [`Timestamp::from_calendar`] rather than silently interpreted, and
//! [`Timestamp::from_calendar_in`] refuses a zone that contradicts the
//! value's own tag.  The host's local zone is process-wide state that is
//! re-read on every local-time operation, never cached.
//!
//! # Error contracts
//!
//! Zone validation failures are `Result`-signalled [`ZoneError`]s; parse
//! failures (malformed digits, out-of-range magnitude) are `Option::None`.
//! A failed parse never yields a partial or defaulted value.

mod calendar;
mod digits;
mod timestamp;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{CalendarTime, Zone, ZoneError, ZoneTag};
pub use digits::SubsecondDigits;
pub use timestamp::Timestamp;
