//! Roles a person can hold on a film work.
//!
//! The string values must match the `person_film_work.role` CHECK constraint
//! in `20240101000000_create_catalog_tables.sql`.

pub const ROLE_ACTOR: &str = "actor";
pub const ROLE_DIRECTOR: &str = "director";
pub const ROLE_WRITER: &str = "writer";

/// Relationship between a person and a film work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Actor,
    Director,
    Writer,
}

impl Role {
    /// Every role, in the order the projected record lists them.
    pub const ALL: [Role; 3] = [Role::Actor, Role::Director, Role::Writer];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Actor => ROLE_ACTOR,
            Role::Director => ROLE_DIRECTOR,
            Role::Writer => ROLE_WRITER,
        }
    }

    /// Name of the projected column holding the people with this role.
    pub fn column(self) -> &'static str {
        match self {
            Role::Actor => "actors",
            Role::Director => "directors",
            Role::Writer => "writers",
        }
    }
}
