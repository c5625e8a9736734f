/*
 * models/page.rs
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
use crate::title::{self, RATINGS_PREFIX};
use std::convert::TryFrom;

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Page {
    page_id: PageId,
    page_namespace: i32,
    page_title: Vec<u8>,
    page_len: i64,
    page_latest: RevisionId,
    page_is_redirect: bool,
}

impl Page {
    #[inline]
    pub fn id(&self) -> PageId {
        self.page_id
    }

    /// Returns `None` for namespaces added by wiki configuration.
    #[inline]
    pub fn namespace(&self) -> Option<Namespace> {
        Namespace::try_from(self.page_namespace).ok()
    }

    #[inline]
    pub fn namespace_id(&self) -> i32 {
        self.page_namespace
    }

    /// The title as stored, with underscores instead of spaces.
    #[inline]
    pub fn title_url(&self) -> &[u8] {
        &self.page_title
    }

    #[inline]
    pub fn title(&self) -> Result<String> {
        title::normalize_title(&self.page_title)
    }

    #[inline]
    pub fn wiki_url(&self, base: &str) -> String {
        title::wiki_url(base, &self.page_title)
    }

    #[inline]
    pub fn len(&self) -> i64 {
        self.page_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_len == 0
    }

    #[inline]
    pub fn latest(&self) -> RevisionId {
        self.page_latest
    }

    #[inline]
    pub fn is_redirect(&self) -> bool {
        self.page_is_redirect
    }

    pub fn is_rating(&self) -> bool {
        self.page_namespace == Namespace::Template.id()
            && self.page_title.starts_with(RATINGS_PREFIX.as_bytes())
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.title() {
            Ok(title) => write!(f, "{}", title),
            Err(_) => {
                let raw = String::from_utf8_lossy(&self.page_title);
                let lossy = title::normalize_title(raw.as_bytes()).unwrap_or_default();
                write!(f, "{}", lossy)
            }
        }
    }
}

#[cfg(test)]
impl Page {
    pub fn new(id: i64, namespace: Namespace, title: &str, latest: i64) -> Self {
        Page {
            page_id: PageId::from_raw(id),
            page_namespace: namespace.id(),
            page_title: title.as_bytes().to_vec(),
            page_len: 1,
            page_latest: RevisionId::from_raw(latest),
            page_is_redirect: false,
        }
    }
}

#[test]
fn test_page() {
    let page = Page::new(1, Namespace::Template, "Ratings/Super_Mario_Sunshine", 10);
    assert_eq!(page.namespace(), Some(Namespace::Template));
    assert_eq!(page.title().unwrap(), "Super Mario Sunshine");
    assert_eq!(page.to_string(), "Super Mario Sunshine");
    assert_eq!(
        page.wiki_url("https://wiki.example.org/"),
        "https://wiki.example.org/index.php?title=Super_Mario_Sunshine",
    );
    assert!(page.is_rating());
    assert_eq!(page.latest().to_i64(), 10);

    let page = Page::new(2, Namespace::Main, "Ratings/Super_Mario_Sunshine", 11);
    assert!(!page.is_rating());

    let page = Page {
        page_namespace: 100,
        ..Page::new(3, Namespace::Main, "Some_Page", 12)
    };
    assert_eq!(page.namespace(), None);
    assert_eq!(page.namespace_id(), 100);
    assert_eq!(page.title().unwrap(), "Some Page");
}
