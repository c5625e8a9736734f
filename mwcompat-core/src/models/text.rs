/*
 * models/text.rs
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

/// Number of characters shown when displaying a blob.
const PREVIEW_LENGTH: usize = 100;

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Text {
    old_id: TextId,
    old_text: Vec<u8>,
}

impl Text {
    #[inline]
    pub fn id(&self) -> TextId {
        self.old_id
    }

    #[inline]
    pub fn data_raw(&self) -> &[u8] {
        &self.old_text
    }

    #[inline]
    pub fn data(&self) -> Result<&str> {
        let data = str::from_utf8(&self.old_text)?;
        Ok(data)
    }

    #[inline]
    pub fn data_lossy(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.old_text)
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let preview = self.data_lossy();
        let preview = match preview.char_indices().nth(PREVIEW_LENGTH) {
            Some((index, _)) => &preview[..index],
            None => &preview[..],
        };

        write!(f, "Blob {}: {}", self.old_id, preview)
    }
}

#[cfg(test)]
impl Text {
    pub fn new(id: i64, data: &[u8]) -> Self {
        Text {
            old_id: TextId::from_raw(id),
            old_text: data.to_vec(),
        }
    }
}

#[test]
fn test_text() {
    let text = Text::new(7, b"3");
    assert_eq!(text.id().to_i64(), 7);
    assert_eq!(text.data().unwrap(), "3");
    assert_eq!(text.to_string(), "Blob 7: 3");

    let long = "x".repeat(150);
    let text = Text::new(8, long.as_bytes());
    assert_eq!(text.to_string(), format!("Blob 8: {}", "x".repeat(100)));

    let text = Text::new(9, b"caf\xc3\xa9 \xff");
    assert!(text.data().is_err());
    assert_eq!(text.data_lossy(), "caf\u{e9} \u{fffd}");
}
