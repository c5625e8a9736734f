/*
 * models/category.rs
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

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    cat_id: CategoryId,
    cat_title: Vec<u8>,
}

impl Category {
    #[inline]
    pub fn id(&self) -> CategoryId {
        self.cat_id
    }

    #[inline]
    pub fn title_raw(&self) -> &[u8] {
        &self.cat_title
    }

    #[inline]
    pub fn title(&self) -> Result<&str> {
        let title = str::from_utf8(&self.cat_title)?;
        Ok(title)
    }
}

impl Display for Category {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.cat_title))
    }
}

/// A row of `mw_categorylinks`.
///
/// The table has no surrogate id. Rows are identified by
/// (`cl_from`, `cl_to`), and the sort key is only data.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    cl_from: PageId,
    cl_to: Vec<u8>,
    cl_sortkey: Vec<u8>,
}

impl CategoryLink {
    #[inline]
    pub fn page_id(&self) -> PageId {
        self.cl_from
    }

    #[inline]
    pub fn category_raw(&self) -> &[u8] {
        &self.cl_to
    }

    #[inline]
    pub fn category(&self) -> Result<&str> {
        let category = str::from_utf8(&self.cl_to)?;
        Ok(category)
    }

    #[inline]
    pub fn sort_key(&self) -> &[u8] {
        &self.cl_sortkey
    }
}

impl Display for CategoryLink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Link from page {} to {}",
            self.cl_from,
            String::from_utf8_lossy(&self.cl_to),
        )
    }
}

#[test]
fn test_category_link() {
    let link = CategoryLink {
        cl_from: PageId::from_raw(4),
        cl_to: b"Nintendo_GameCube".to_vec(),
        cl_sortkey: b"SUPER MARIO".to_vec(),
    };

    assert_eq!(link.page_id().to_i64(), 4);
    assert_eq!(link.category().unwrap(), "Nintendo_GameCube");
    assert_eq!(link.sort_key(), b"SUPER MARIO");
    assert_eq!(link.to_string(), "Link from page 4 to Nintendo_GameCube");

    let category = Category {
        cat_id: CategoryId::from_raw(2),
        cat_title: b"Wii".to_vec(),
    };

    assert_eq!(category.title().unwrap(), "Wii");
    assert_eq!(category.to_string(), "Wii");
}
