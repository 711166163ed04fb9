//! Domain building blocks for the movie catalog read API.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! depend on these types and pure functions.

pub mod error;
pub mod film_work;
pub mod pagination;
pub mod roles;
pub mod types;
