use super::{Row, SqlError};


/// Converts from a [`postgres::Row`]. Implement it with `#[derive(TryFromRow)]` on a struct with named fields
///
/// [`postgres::Row`]: https://docs.rs/postgres/0.19/postgres/row/struct.Row.html
pub trait TryFromRow: Sized {
	fn from_row(row: &Row) -> Result<Self, SqlError>;
}
