/*
 * timestamp.rs
 *
 * mwcompat-core - Read-only access to MediaWiki compatibility data
 * Copyright (C) 2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use crate::{Error, Result};
use chrono::prelude::*;

/// Length of a MediaWiki `YYYYMMDDHHMMSS` timestamp.
pub const TIMESTAMP_LENGTH: usize = 14;

/// Parses a stored timestamp such as `20230115143022`.
///
/// MediaWiki stores these in UTC without any zone information.
pub fn parse_timestamp(raw: &[u8]) -> Result<NaiveDateTime> {
    let invalid = || Error::InvalidTimestamp(String::from_utf8_lossy(raw).into_owned());

    if raw.len() != TIMESTAMP_LENGTH || !raw.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    let field = |start: usize, end: usize| {
        raw[start..end]
            .iter()
            .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
    };

    let year = field(0, 4) as i32;
    let month = field(4, 6);
    let day = field(6, 8);
    let hour = field(8, 10);
    let minute = field(10, 12);
    let second = field(12, 14);

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(invalid)
}

#[inline]
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y%m%d%H%M%S").to_string()
}

#[test]
fn test_parse_timestamp() {
    let timestamp = parse_timestamp(b"20230115143022").unwrap();
    assert_eq!(timestamp.year(), 2023);
    assert_eq!(timestamp.month(), 1);
    assert_eq!(timestamp.day(), 15);
    assert_eq!(timestamp.hour(), 14);
    assert_eq!(timestamp.minute(), 30);
    assert_eq!(timestamp.second(), 22);

    let timestamp = parse_timestamp(b"20081231235959").unwrap();
    assert_eq!(format_timestamp(timestamp), "20081231235959");
}

#[test]
fn test_invalid_timestamp() {
    macro_rules! check_err {
        ($input:expr) => {
            match parse_timestamp($input) {
                Err(Error::InvalidTimestamp(_)) => (),
                other => panic!("Unexpected result for {:?}: {:?}", $input, other),
            }
        };
    }

    check_err!(b"");
    check_err!(b"2023011514302");
    check_err!(b"202301151430220");
    check_err!(b"2023-01-15 14:");
    check_err!(b"20230230120000");
    check_err!(b"20231301120000");
    check_err!(b"20230115250000");
}
