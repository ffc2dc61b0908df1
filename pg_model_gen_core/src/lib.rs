//! Row decoding used by pg_model_gen to read the PostgreSQL catalog
//!
//! Catalog queries are paired with a plain struct deriving [`TryFromRow`], which reads each field by position
//!
//! [`TryFromRow`]: ./trait.TryFromRow.html

// lets the derive macro name this crate by its absolute path from inside the crate too
extern crate self as pg_model_gen_core;

pub use postgres::{
	Row,
	Error as SqlError,
};

pub use pg_model_gen_derive::TryFromRow;

/// The `TryFromRow` trait
mod try_from_row;
pub use try_from_row::TryFromRow;
