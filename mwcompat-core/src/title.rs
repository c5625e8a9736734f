/*
 * title.rs
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

//! Conversions between the stored `page_title` form and what
//! readers see: display titles and links back into the wiki.

use crate::Result;
use cow_utils::CowUtils;
use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::str;

/// Rating templates live under this subpage prefix.
pub const RATINGS_PREFIX: &str = "Ratings/";

// Everything except alphanumerics and "_.-/" is escaped.
const TITLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'/');

#[inline]
pub fn strip_ratings_prefix(title: &[u8]) -> &[u8] {
    let prefix = RATINGS_PREFIX.as_bytes();

    if title.starts_with(prefix) {
        &title[prefix.len()..]
    } else {
        title
    }
}

/// Produces the human-readable form of a stored title.
pub fn normalize_title(raw: &[u8]) -> Result<String> {
    let title = str::from_utf8(raw)?.cow_replace("_", " ");
    let title = match title.strip_prefix(RATINGS_PREFIX) {
        Some(stripped) => str!(stripped),
        None => title.into_owned(),
    };

    Ok(title)
}

/// Converts a display title into the stored form.
#[inline]
pub fn title_to_key(title: &str) -> String {
    title.cow_replace(" ", "_").into_owned()
}

#[inline]
pub fn encode_title(raw: &[u8]) -> String {
    percent_encode(strip_ratings_prefix(raw), TITLE_ENCODE_SET).to_string()
}

/// Builds the link to a page. The base is used as-is, so it
/// should already end in a slash.
pub fn wiki_url(base: &str, raw: &[u8]) -> String {
    format!("{}index.php?title={}", base, encode_title(raw))
}

/// Smallest byte string which sorts after every string beginning with `prefix`.
///
/// Used to express a prefix match on binary columns as a range.
/// An empty result means there is no upper bound.
pub fn prefix_upper_bound(prefix: &[u8]) -> Vec<u8> {
    let mut bound = prefix.to_vec();

    while let Some(last) = bound.pop() {
        if last < u8::MAX {
            bound.push(last + 1);
            return bound;
        }
    }

    bound
}

#[test]
fn test_normalize_title() {
    assert_eq!(normalize_title(b"Ratings/Foo").unwrap(), "Foo");
    assert_eq!(normalize_title(b"Some_Page").unwrap(), "Some Page");
    assert_eq!(
        normalize_title(b"Ratings/Super_Mario_Galaxy").unwrap(),
        "Super Mario Galaxy",
    );
    assert_eq!(normalize_title(b"Main_Page/Ratings/X").unwrap(), "Main Page/Ratings/X");
    assert_eq!(normalize_title(b"").unwrap(), "");
    assert!(normalize_title(b"\xff\xfe").is_err());
}

#[test]
fn test_title_to_key() {
    assert_eq!(title_to_key("Some Page"), "Some_Page");
    assert_eq!(title_to_key("Ratings/Foo"), "Ratings/Foo");
}

#[test]
fn test_wiki_url() {
    let base = "https://wiki.example.org/";

    assert_eq!(
        wiki_url(base, b"Ratings/Metroid_Prime"),
        "https://wiki.example.org/index.php?title=Metroid_Prime",
    );
    assert_eq!(
        wiki_url(base, b"Pok\xc3\xa9mon_Colosseum"),
        "https://wiki.example.org/index.php?title=Pok%C3%A9mon_Colosseum",
    );
    assert_eq!(
        wiki_url(base, b"Zelda:_Four_Swords_&_More/Notes"),
        "https://wiki.example.org/index.php?title=Zelda%3A_Four_Swords_%26_More/Notes",
    );
    assert_eq!(encode_title(b"a b?c"), "a%20b%3Fc");
}

#[test]
fn test_prefix_upper_bound() {
    assert_eq!(prefix_upper_bound(b"Ratings/"), b"Ratings0".to_vec());
    assert_eq!(prefix_upper_bound(b"a\xff"), b"b".to_vec());
    assert_eq!(prefix_upper_bound(b"\xff\xff"), Vec::<u8>::new());

    let lower = RATINGS_PREFIX.as_bytes();
    let upper = prefix_upper_bound(lower);
    for title in &[&b"Ratings/"[..], &b"Ratings/Foo"[..], &b"Ratings/\xff\xff"[..]] {
        assert!(*title >= lower && *title < &upper[..]);
    }

    for title in &[&b"Ratings"[..], &b"Ratings0"[..], &b"RatingsX"[..], &b"Other"[..]] {
        assert!(!(*title >= lower && *title < &upper[..]));
    }
}
