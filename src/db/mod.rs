//! Database module: row models, schema introspection and the user store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring the `user` and `auth` rows
//! - `schema.rs`: introspection of the externally owned OpenWebUI schema
//! - `sqlite.rs`: the single-connection store performing reads and fixes

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{AuthCredentials, DbUser};
pub use schema::UserSchema;
pub use sqlite::UserStore;
