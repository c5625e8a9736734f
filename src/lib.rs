/*
 * lib.rs
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

//! Read-only models over the tables of an existing MediaWiki database,
//! along with the cached rating and category lookups built on them.

#![deny(missing_debug_implementations)]

#[macro_use]
extern crate diesel;
extern crate libsqlite3_sys;

#[macro_use]
extern crate log;
extern crate mwcompat_core;
extern crate parking_lot;

#[macro_use]
extern crate str_macro;

mod cache;
mod category;
mod page;
mod revision;
mod schema;
mod server;

#[cfg(test)]
mod test;

mod service_prelude {
    pub use crate::schema::*;
    pub use crate::Result;
    pub use diesel::prelude::*;
    pub use diesel::sqlite::SqliteConnection;
    pub use mwcompat_core::prelude::*;
    pub use std::fmt::{self, Debug};
    pub use std::rc::Rc;
}

pub mod prelude {
    pub use super::cache::{Cache, MemoryCache};
    pub use super::server::{Config, Server, MAX_RATING, MIN_RATING, RATING_COUNT_TTL};
    pub use mwcompat_core::prelude::*;
    pub use mwcompat_core::{timestamp, title};
}

pub use self::prelude::*;

pub type StdResult<T, E> = std::result::Result<T, E>;
pub type Result<T> = StdResult<T, Error>;
