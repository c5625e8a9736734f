/*
 * lib.rs
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

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]

extern crate chrono;
extern crate cow_utils;

#[macro_use]
extern crate diesel;

#[macro_use]
extern crate log;
extern crate percent_encoding;

#[macro_use]
extern crate serde;

#[macro_use]
extern crate str_macro;

#[macro_use]
extern crate thiserror;

#[macro_use]
mod macros;

pub mod error;
pub mod models;
pub mod timestamp;
pub mod title;
pub mod types;

pub mod prelude {
    pub use super::error::Error;
    pub use super::models::*;
    pub use super::types::*;
}

pub use self::prelude::*;

pub type StdResult<T, E> = std::result::Result<T, E>;
pub type Result<T> = StdResult<T, Error>;
