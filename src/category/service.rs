/*
 * category/service.rs
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

pub struct CategoryService {
    conn: Rc<SqliteConnection>,
}

impl CategoryService {
    #[inline]
    pub fn new(conn: &Rc<SqliteConnection>) -> Self {
        let conn = Rc::clone(conn);

        CategoryService { conn }
    }

    /// Finds a category by its exact stored title.
    pub fn get_by_title(&self, name: &str) -> Result<Option<Category>> {
        debug!("Getting category with title '{}'", name);

        let category = mw_category::table
            .filter(mw_category::cat_title.eq(name.as_bytes()))
            .first::<Category>(&*self.conn)
            .optional()?;

        Ok(category)
    }

    pub fn list(&self) -> Result<Vec<Category>> {
        info!("Listing all categories");

        let categories = mw_category::table
            .order(mw_category::cat_title.asc())
            .load::<Category>(&*self.conn)?;

        Ok(categories)
    }

    pub fn links_for_page(&self, page_id: PageId) -> Result<Vec<CategoryLink>> {
        debug!("Getting category links for page ID {}", page_id);

        let links = mw_categorylinks::table
            .filter(mw_categorylinks::cl_from.eq(page_id.to_i64()))
            .order((mw_categorylinks::cl_to.asc(), mw_categorylinks::cl_from.asc()))
            .load::<CategoryLink>(&*self.conn)?;

        Ok(links)
    }

    /// Pages linked to a category, in page order.
    pub fn pages_in(&self, name: &str) -> Result<Vec<Page>> {
        info!("Getting pages in category '{}'", name);

        let pages = mw_page::table
            .inner_join(mw_categorylinks::table)
            .filter(mw_categorylinks::cl_to.eq(name.as_bytes()))
            .select(mw_page::all_columns)
            .order((mw_page::page_namespace.asc(), mw_page::page_title.asc()))
            .load::<Page>(&*self.conn)?;

        Ok(pages)
    }
}

impl Debug for CategoryService {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CategoryService")
            .field("conn", &"SqliteConnection { .. }")
            .finish()
    }
}
