/*
 * schema.rs
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

// The tables and columns belong to MediaWiki and must not be renamed.
// Column order here is the field order of the models in mwcompat-core.

table! {
    mw_category (cat_id) {
        cat_id -> BigInt,
        cat_title -> Binary,
    }
}

table! {
    mw_categorylinks (cl_from, cl_to) {
        cl_from -> BigInt,
        cl_to -> Binary,
        cl_sortkey -> Binary,
    }
}

table! {
    mw_page (page_id) {
        page_id -> BigInt,
        page_namespace -> Integer,
        page_title -> Binary,
        page_len -> BigInt,
        page_latest -> BigInt,
        page_is_redirect -> Bool,
    }
}

table! {
    mw_revision (rev_id) {
        rev_id -> BigInt,
        rev_page -> BigInt,
        rev_text_id -> BigInt,
        rev_timestamp -> Binary,
    }
}

table! {
    mw_text (old_id) {
        old_id -> BigInt,
        old_text -> Binary,
    }
}

joinable!(mw_categorylinks -> mw_page (cl_from));
joinable!(mw_page -> mw_revision (page_latest));
joinable!(mw_revision -> mw_text (rev_text_id));

allow_tables_to_appear_in_same_query!(
    mw_category,
    mw_categorylinks,
    mw_page,
    mw_revision,
    mw_text,
);
