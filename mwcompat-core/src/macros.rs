/*
 * macros.rs
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

/// Declares integer row ID newtypes that diesel can load straight from a
/// `BigInt` column, so a `PageId` can't be passed where a `RevisionId` belongs.
macro_rules! make_id_types {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(
                Serialize, Deserialize, Debug, Copy, Clone, Hash, PartialOrd, Ord, PartialEq, Eq,
            )]
            #[serde(transparent)]
            pub struct $name(i64);

            impl $name {
                #[inline]
                pub fn to_i64(self) -> i64 {
                    self.0
                }

                #[inline]
                pub fn from_raw(value: i64) -> Self {
                    trace!("Creating raw {} with value {}", stringify!($name), value);

                    $name(value)
                }
            }

            impl From<$name> for i64 {
                #[inline]
                fn from(id: $name) -> i64 {
                    id.0
                }
            }

            impl std::fmt::Display for $name {
                #[inline]
                fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl diesel::deserialize::Queryable<diesel::sql_types::BigInt, diesel::sqlite::Sqlite>
                for $name
            {
                type Row = i64;

                #[inline]
                fn build(row: i64) -> Self {
                    $name(row)
                }
            }

            impl diesel::deserialize::FromSql<diesel::sql_types::BigInt, diesel::sqlite::Sqlite>
                for $name
            {
                fn from_sql(
                    value: Option<&<diesel::sqlite::Sqlite as diesel::backend::Backend>::RawValue>,
                ) -> diesel::deserialize::Result<Self> {
                    <i64 as diesel::deserialize::FromSql<
                        diesel::sql_types::BigInt,
                        diesel::sqlite::Sqlite,
                    >>::from_sql(value)
                    .map($name)
                }
            }
        )+
    };
}
