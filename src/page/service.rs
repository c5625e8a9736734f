/*
 * page/service.rs
 *
 * mwcompat - Read-only access to MediaWiki compatibility data
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

use crate::service_prelude::*;
use mwcompat_core::title::{prefix_upper_bound, RATINGS_PREFIX};

pub struct PageService {
    conn: Rc<SqliteConnection>,
}

impl PageService {
    #[inline]
    pub fn new(conn: &Rc<SqliteConnection>) -> Self {
        let conn = Rc::clone(conn);

        PageService { conn }
    }

    pub fn get(&self, id: PageId) -> Result<Option<Page>> {
        debug!("Getting page for ID {}", id);

        let page = mw_page::table
            .find(id.to_i64())
            .first::<Page>(&*self.conn)
            .optional()?;

        Ok(page)
    }

    /// Looks up a page by its stored title, with underscores.
    pub fn get_by_title(&self, namespace: Namespace, title: &str) -> Result<Option<Page>> {
        debug!("Getting page '{}' in namespace {}", title, namespace);

        let page = mw_page::table
            .filter(mw_page::page_namespace.eq(namespace.id()))
            .filter(mw_page::page_title.eq(title.as_bytes()))
            .first::<Page>(&*self.conn)
            .optional()?;

        Ok(page)
    }

    pub fn list(&self, namespace: Namespace) -> Result<Vec<Page>> {
        info!("Listing all pages in namespace {}", namespace);

        let pages = mw_page::table
            .filter(mw_page::page_namespace.eq(namespace.id()))
            .order((mw_page::page_namespace.asc(), mw_page::page_title.asc()))
            .load::<Page>(&*self.conn)?;

        Ok(pages)
    }

    /// Rating templates whose current text is exactly `rating`.
    pub fn rating_pages(&self, rating: i64) -> Result<Vec<Page>> {
        info!("Getting rating pages with value {}", rating);

        let value = rating.to_string();
        let lower = RATINGS_PREFIX.as_bytes();
        let upper = prefix_upper_bound(lower);

        let pages = mw_page::table
            .inner_join(mw_revision::table.inner_join(mw_text::table))
            .filter(mw_page::page_namespace.eq(Namespace::Template.id()))
            .filter(mw_page::page_title.ge(lower))
            .filter(mw_page::page_title.lt(&upper[..]))
            .filter(mw_text::old_text.eq(value.as_bytes()))
            .select(mw_page::all_columns)
            .order((mw_page::page_namespace.asc(), mw_page::page_title.asc()))
            .load::<Page>(&*self.conn)?;

        Ok(pages)
    }

    pub fn count_rating_pages(&self, rating: i64) -> Result<i64> {
        debug!("Counting rating pages with value {}", rating);

        let value = rating.to_string();
        let lower = RATINGS_PREFIX.as_bytes();
        let upper = prefix_upper_bound(lower);

        let count = mw_page::table
            .inner_join(mw_revision::table.inner_join(mw_text::table))
            .filter(mw_page::page_namespace.eq(Namespace::Template.id()))
            .filter(mw_page::page_title.ge(lower))
            .filter(mw_page::page_title.lt(&upper[..]))
            .filter(mw_text::old_text.eq(value.as_bytes()))
            .count()
            .get_result::<i64>(&*self.conn)?;

        trace!("Found {} pages with rating {}", count, rating);
        Ok(count)
    }
}

impl Debug for PageService {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PageService")
            .field("conn", &"SqliteConnection { .. }")
            .finish()
    }
}
