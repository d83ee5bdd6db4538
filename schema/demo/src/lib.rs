//! Pet-registry demo fixtures.
//!
//! A small domain exercising every shape the tree builder handles: plain
//! terminal fields, nested relations, a mutual cycle (`Person` ↔ `Dog`), a
//! diamond (two `Person` fields sharing the `Dog` target), and a relation
//! whose target is not in the registry (`Cat.shelter`).

use fieldpath_schema::{
    node::{Class, Def, Field, FieldList},
    registry::Registry,
};

pub const MODULE: &str = "demo::pets";

/// Build the full demo registry.
#[must_use]
pub fn registry() -> Registry {
    [person(), dog(), cat(), best_friend()].into_iter().collect()
}

///
/// Person
/// `favorite_dog` and `first_dog` form the diamond; `Dog.owner` closes the
/// cycle back to `Person`.
///

#[must_use]
pub fn person() -> Class {
    class(
        "Person",
        [
            Field::terminal("name"),
            Field::terminal("age"),
            Field::relation("favorite_dog", "demo::pets::Dog"),
            Field::relation("first_dog", "demo::pets::Dog"),
        ],
    )
}

///
/// Dog
///

#[must_use]
pub fn dog() -> Class {
    class(
        "Dog",
        [
            Field::terminal("name"),
            Field::terminal("age"),
            Field::relation("owner", "demo::pets::Person"),
            Field::relation("best_friend", "demo::pets::BestFriend"),
        ],
    )
}

///
/// Cat
/// The shelter registry is maintained elsewhere, so `shelter` never
/// resolves here and degrades to a terminal constant.
///

#[must_use]
pub fn cat() -> Class {
    class(
        "Cat",
        [
            Field::terminal("name"),
            Field::relation("shelter", "demo::shelters::Shelter"),
        ],
    )
}

///
/// BestFriend
///

#[must_use]
pub fn best_friend() -> Class {
    class("BestFriend", [Field::terminal("name")])
}

fn class(ident: &str, fields: impl IntoIterator<Item = Field>) -> Class {
    Class::with_fields(
        Def::new(MODULE, ident),
        fields.into_iter().collect::<FieldList>(),
    )
}

///
/// TESTS
///
