/*
 * models/revision.rs
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

use super::prelude::*;
use crate::timestamp::parse_timestamp;

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    rev_id: RevisionId,
    rev_page: PageId,
    rev_text_id: TextId,
    rev_timestamp: Vec<u8>,
}

impl Revision {
    #[inline]
    pub fn id(&self) -> RevisionId {
        self.rev_id
    }

    #[inline]
    pub fn page_id(&self) -> PageId {
        self.rev_page
    }

    #[inline]
    pub fn text_id(&self) -> TextId {
        self.rev_text_id
    }

    #[inline]
    pub fn timestamp_raw(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.rev_timestamp)
    }

    #[inline]
    pub fn timestamp(&self) -> Result<NaiveDateTime> {
        parse_timestamp(&self.rev_timestamp)
    }
}

impl Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} for page {}", self.timestamp_raw(), self.rev_page)
    }
}

#[cfg(test)]
impl Revision {
    pub fn new(id: i64, page_id: i64, text_id: i64, timestamp: &str) -> Self {
        Revision {
            rev_id: RevisionId::from_raw(id),
            rev_page: PageId::from_raw(page_id),
            rev_text_id: TextId::from_raw(text_id),
            rev_timestamp: timestamp.as_bytes().to_vec(),
        }
    }
}

#[test]
fn test_revision() {
    let revision = Revision::new(20, 3, 40, "20230115143022");
    assert_eq!(revision.page_id().to_i64(), 3);
    assert_eq!(revision.text_id().to_i64(), 40);
    assert_eq!(revision.to_string(), "20230115143022 for page 3");

    let timestamp = revision.timestamp().unwrap();
    assert_eq!(timestamp.date(), NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    assert_eq!(timestamp.time(), NaiveTime::from_hms_opt(14, 30, 22).unwrap());

    let revision = Revision::new(21, 3, 41, "not a timestamp");
    assert!(revision.timestamp().is_err());
}
