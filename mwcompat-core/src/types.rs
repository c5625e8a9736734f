/*
 * types.rs
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

use crate::{Error, StdResult};
use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::str::FromStr;

make_id_types! {
    /// `old_id` of a text blob.
    TextId;

    /// `rev_id` of a revision.
    RevisionId;
    PageId;
    CategoryId;
}

/// The built-in MediaWiki namespaces.
///
/// Odd ids are the discussion ("talk") namespace paired with the
/// subject namespace one below it.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Hash, PartialOrd, Ord, PartialEq, Eq)]
pub enum Namespace {
    Main,
    Talk,
    User,
    UserTalk,
    Project,
    ProjectTalk,
    File,
    FileTalk,
    /// The `MediaWiki:` namespace, holding interface messages.
    Interface,
    InterfaceTalk,
    Template,
    TemplateTalk,
    Help,
    HelpTalk,
    Category,
    CategoryTalk,
}

const ALL_NAMESPACES: [Namespace; 16] = [
    Namespace::Main,
    Namespace::Talk,
    Namespace::User,
    Namespace::UserTalk,
    Namespace::Project,
    Namespace::ProjectTalk,
    Namespace::File,
    Namespace::FileTalk,
    Namespace::Interface,
    Namespace::InterfaceTalk,
    Namespace::Template,
    Namespace::TemplateTalk,
    Namespace::Help,
    Namespace::HelpTalk,
    Namespace::Category,
    Namespace::CategoryTalk,
];

impl Namespace {
    /// The value stored in `page_namespace`.
    #[inline]
    pub fn id(self) -> i32 {
        use self::Namespace::*;

        match self {
            Main => 0,
            Talk => 1,
            User => 2,
            UserTalk => 3,
            Project => 4,
            ProjectTalk => 5,
            File => 6,
            FileTalk => 7,
            Interface => 8,
            InterfaceTalk => 9,
            Template => 10,
            TemplateTalk => 11,
            Help => 12,
            HelpTalk => 13,
            Category => 14,
            CategoryTalk => 15,
        }
    }

    pub fn fixed_name(self) -> &'static str {
        use self::Namespace::*;

        match self {
            Main => "main",
            Talk => "talk",
            User => "user",
            UserTalk => "user-talk",
            Project => "project",
            ProjectTalk => "project-talk",
            File => "file",
            FileTalk => "file-talk",
            Interface => "interface",
            InterfaceTalk => "interface-talk",
            Template => "template",
            TemplateTalk => "template-talk",
            Help => "help",
            HelpTalk => "help-talk",
            Category => "category",
            CategoryTalk => "category-talk",
        }
    }

    #[inline]
    pub fn is_talk(self) -> bool {
        self.id() % 2 == 1
    }

    #[inline]
    pub fn subject(self) -> Self {
        ALL_NAMESPACES[(self.id() & !1) as usize]
    }

    #[inline]
    pub fn talk(self) -> Self {
        ALL_NAMESPACES[(self.id() | 1) as usize]
    }

    #[inline]
    pub fn all() -> &'static [Namespace] {
        &ALL_NAMESPACES
    }
}

impl TryFrom<i32> for Namespace {
    type Error = Error;

    fn try_from(id: i32) -> StdResult<Self, Error> {
        if id < 0 || id as usize >= ALL_NAMESPACES.len() {
            return Err(Error::InvalidNamespace(id));
        }

        Ok(ALL_NAMESPACES[id as usize])
    }
}

impl FromStr for Namespace {
    type Err = Error;

    fn from_str(value: &str) -> StdResult<Self, Error> {
        ALL_NAMESPACES
            .iter()
            .copied()
            .find(|namespace| namespace.fixed_name() == value)
            .ok_or_else(|| Error::UnknownNamespace(str!(value)))
    }
}

impl Display for Namespace {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fixed_name())
    }
}

#[test]
fn test_namespace_ids() {
    for (index, namespace) in Namespace::all().iter().enumerate() {
        assert_eq!(namespace.id(), index as i32);
        assert_eq!(Namespace::try_from(index as i32).unwrap(), *namespace);
    }

    assert_eq!(Namespace::Template.id(), 10);
    assert_eq!(Namespace::Interface.id(), 8);

    match Namespace::try_from(16) {
        Err(Error::InvalidNamespace(16)) => (),
        other => panic!("Unexpected result: {:?}", other),
    }

    match Namespace::try_from(-1) {
        Err(Error::InvalidNamespace(-1)) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_namespace_talk() {
    assert!(!Namespace::Main.is_talk());
    assert!(Namespace::TemplateTalk.is_talk());
    assert_eq!(Namespace::Template.talk(), Namespace::TemplateTalk);
    assert_eq!(Namespace::TemplateTalk.talk(), Namespace::TemplateTalk);
    assert_eq!(Namespace::CategoryTalk.subject(), Namespace::Category);
    assert_eq!(Namespace::User.subject(), Namespace::User);
}

#[test]
fn test_namespace_names() {
    for namespace in Namespace::all() {
        let parsed: Namespace = namespace.fixed_name().parse().unwrap();
        assert_eq!(parsed, *namespace);
    }

    assert_eq!(Namespace::UserTalk.to_string(), "user-talk");
    assert!("Template".parse::<Namespace>().is_err());
}

#[test]
fn test_id_types() {
    let id = PageId::from_raw(42);
    assert_eq!(id.to_i64(), 42);
    assert_eq!(i64::from(id), 42);
    assert_eq!(id.to_string(), "42");
    assert!(RevisionId::from_raw(1) < RevisionId::from_raw(2));
}
