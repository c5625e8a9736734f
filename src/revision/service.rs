/*
 * revision/service.rs
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

pub struct RevisionService {
    conn: Rc<SqliteConnection>,
}

impl RevisionService {
    #[inline]
    pub fn new(conn: &Rc<SqliteConnection>) -> Self {
        let conn = Rc::clone(conn);

        RevisionService { conn }
    }

    pub fn get(&self, id: RevisionId) -> Result<Option<Revision>> {
        debug!("Getting revision for ID {}", id);

        let revision = mw_revision::table
            .find(id.to_i64())
            .first::<Revision>(&*self.conn)
            .optional()?;

        Ok(revision)
    }

    #[inline]
    pub fn latest(&self, page: &Page) -> Result<Option<Revision>> {
        self.get(page.latest())
    }

    /// All revisions of a page, newest first.
    pub fn history(&self, page_id: PageId) -> Result<Vec<Revision>> {
        info!("Getting revision history for page ID {}", page_id);

        let revisions = mw_revision::table
            .filter(mw_revision::rev_page.eq(page_id.to_i64()))
            .order((mw_revision::rev_timestamp.desc(), mw_revision::rev_id.desc()))
            .load::<Revision>(&*self.conn)?;

        Ok(revisions)
    }

    pub fn page(&self, revision: &Revision) -> Result<Option<Page>> {
        debug!("Getting page for revision ID {}", revision.id());

        let page = mw_page::table
            .find(revision.page_id().to_i64())
            .first::<Page>(&*self.conn)
            .optional()?;

        Ok(page)
    }

    pub fn text(&self, revision: &Revision) -> Result<Option<Text>> {
        debug!(
            "Getting text ID {} for revision ID {}",
            revision.text_id(),
            revision.id(),
        );

        let text = mw_text::table
            .find(revision.text_id().to_i64())
            .first::<Text>(&*self.conn)
            .optional()?;

        Ok(text)
    }

    /// Text of the page's current revision, in one query.
    pub fn latest_text(&self, page: &Page) -> Result<Option<Text>> {
        debug!("Getting latest text for page ID {}", page.id());

        let text = mw_revision::table
            .inner_join(mw_text::table)
            .filter(mw_revision::rev_id.eq(page.latest().to_i64()))
            .select(mw_text::all_columns)
            .first::<Text>(&*self.conn)
            .optional()?;

        Ok(text)
    }
}

impl Debug for RevisionService {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RevisionService")
            .field("conn", &"SqliteConnection { .. }")
            .finish()
    }
}
