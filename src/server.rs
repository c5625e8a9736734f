/*
 * server.rs
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

use crate::cache::{Cache, MemoryCache};
use crate::category::CategoryService;
use crate::page::PageService;
use crate::prelude::*;
use crate::revision::RevisionService;
use crate::Result;
use diesel::{Connection, SqliteConnection};
use std::fmt::{self, Debug};
use std::rc::Rc;
use std::time::Duration;

/// Lowest value a rating template can hold.
pub const MIN_RATING: i64 = 1;

/// Highest value a rating template can hold.
pub const MAX_RATING: i64 = 5;

/// How long a computed rating count is reused.
pub const RATING_COUNT_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct Config<'a> {
    pub database_url: &'a str,

    /// Base of generated page links, such as `https://wiki.example.org/`.
    pub wiki_url: &'a str,
}

pub struct Server {
    cache: Rc<dyn Cache>,
    wiki_url: String,
    category: CategoryService,
    page: PageService,
    revision: RevisionService,
}

impl Server {
    #[inline]
    pub fn new(config: Config) -> Result<Self> {
        Self::with_cache(config, Rc::new(MemoryCache::new()))
    }

    pub fn with_cache(config: Config, cache: Rc<dyn Cache>) -> Result<Self> {
        info!("Creating mwcompat::Server, establishing connection to the wiki database");

        let Config {
            database_url,
            wiki_url,
        } = config;

        let conn = match SqliteConnection::establish(database_url) {
            Ok(conn) => Rc::new(conn),
            Err(error) => {
                error!("Error establishing database connection: {}", error);

                return Err(Error::DatabaseConnection(error));
            }
        };

        let category = CategoryService::new(&conn);
        let page = PageService::new(&conn);
        let revision = RevisionService::new(&conn);

        Ok(Server {
            cache,
            wiki_url: str!(wiki_url),
            category,
            page,
            revision,
        })
    }

    // Cached lookups

    /// Number of rating templates currently set to `rating`.
    ///
    /// Values outside of 1 to 5 always count as zero and are not cached.
    pub fn get_rating_count(&self, rating: i64) -> Result<i64> {
        if rating < MIN_RATING || rating > MAX_RATING {
            debug!("Rating {} is out of range, returning zero", rating);
            return Ok(0);
        }

        let key = rating_cache_key(rating);
        if let Some(count) = self.cache.get(&key) {
            debug!("Cache hit for '{}'", key);
            return Ok(count);
        }

        debug!("Cache miss for '{}', counting rating pages", key);
        let count = self.page.count_rating_pages(rating)?;
        self.cache.set(&key, count, Some(RATING_COUNT_TTL));

        Ok(count)
    }

    /// Returns the ID of the named category, or zero if there is none.
    ///
    /// Found IDs are cached indefinitely, misses are not cached.
    pub fn get_category_id(&self, name: &str) -> Result<i64> {
        let key = category_cache_key(name);
        if let Some(id) = self.cache.get(&key) {
            debug!("Cache hit for '{}'", key);
            return Ok(id);
        }

        debug!("Cache miss for '{}', querying category", key);
        match self.category.get_by_title(name)? {
            Some(category) => {
                let id = category.id().to_i64();
                self.cache.set(&key, id, None);

                Ok(id)
            }
            None => {
                debug!("No category named '{}'", name);

                Ok(0)
            }
        }
    }

    /// Drops every cached rating count, so the next read recounts.
    pub fn invalidate_rating_counts(&self) {
        info!("Invalidating cached rating counts");

        for rating in MIN_RATING..=MAX_RATING {
            self.cache.delete(&rating_cache_key(rating));
        }
    }

    // Pages

    #[inline]
    pub fn get_page(&self, id: PageId) -> Result<Option<Page>> {
        self.page.get(id)
    }

    /// Looks up a page by display title (spaces or underscores).
    #[inline]
    pub fn get_page_by_title(&self, namespace: Namespace, title: &str) -> Result<Option<Page>> {
        let key = title::title_to_key(title);

        self.page.get_by_title(namespace, &key)
    }

    #[inline]
    pub fn get_pages(&self, namespace: Namespace) -> Result<Vec<Page>> {
        self.page.list(namespace)
    }

    #[inline]
    pub fn get_rating_pages(&self, rating: i64) -> Result<Vec<Page>> {
        self.page.rating_pages(rating)
    }

    #[inline]
    pub fn page_url(&self, page: &Page) -> String {
        page.wiki_url(&self.wiki_url)
    }

    #[inline]
    pub fn wiki_url(&self) -> &str {
        &self.wiki_url
    }

    // Revisions

    #[inline]
    pub fn get_revision(&self, id: RevisionId) -> Result<Option<Revision>> {
        self.revision.get(id)
    }

    #[inline]
    pub fn get_latest_revision(&self, page: &Page) -> Result<Option<Revision>> {
        self.revision.latest(page)
    }

    #[inline]
    pub fn get_revision_page(&self, revision: &Revision) -> Result<Option<Page>> {
        self.revision.page(revision)
    }

    #[inline]
    pub fn get_page_history(&self, page_id: PageId) -> Result<Vec<Revision>> {
        self.revision.history(page_id)
    }

    #[inline]
    pub fn get_text(&self, revision: &Revision) -> Result<Option<Text>> {
        self.revision.text(revision)
    }

    #[inline]
    pub fn get_page_text(&self, page: &Page) -> Result<Option<Text>> {
        self.revision.latest_text(page)
    }

    // Categories

    #[inline]
    pub fn get_category(&self, name: &str) -> Result<Option<Category>> {
        self.category.get_by_title(name)
    }

    #[inline]
    pub fn get_categories(&self) -> Result<Vec<Category>> {
        self.category.list()
    }

    #[inline]
    pub fn get_page_categories(&self, page_id: PageId) -> Result<Vec<CategoryLink>> {
        self.category.links_for_page(page_id)
    }

    #[inline]
    pub fn get_category_pages(&self, name: &str) -> Result<Vec<Page>> {
        self.category.pages_in(name)
    }
}

impl Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("mwcompat::Server")
            .field("cache", &self.cache)
            .field("wiki_url", &self.wiki_url)
            .field("category", &self.category)
            .field("page", &self.page)
            .field("revision", &self.revision)
            .finish()
    }
}

#[inline]
fn rating_cache_key(rating: i64) -> String {
    format!("rating_count_{}", rating)
}

#[inline]
fn category_cache_key(name: &str) -> String {
    format!("category_name_{}", name)
}

#[test]
fn test_cache_keys() {
    assert_eq!(rating_cache_key(3), "rating_count_3");
    assert_eq!(category_cache_key("Wii"), "category_name_Wii");
}
