//! Select statments into information_schema and corresponding return types
use pg_model_gen_core::*;

use crate::{
	error::{GenError, GenResult},
	sql_tree::ColumnDescriptor,
};


pub const GET_TABLES: &str = "SELECT table_name::text
FROM information_schema.tables
WHERE table_schema = $1::text AND
	table_type = 'BASE TABLE'
ORDER BY table_name ASC";
#[derive(Debug, TryFromRow)]
pub struct GetTables {
	pub name: String,
}

pub const GET_COLUMNS: &str = "SELECT column_name::text,
	data_type::text,
	is_nullable::text
FROM information_schema.columns
WHERE table_schema = $1::text AND
	table_name = $2::text
ORDER BY ordinal_position ASC";
#[derive(Debug, TryFromRow)]
pub struct GetColumns {
	pub name: String,
	pub data_type: String,
	pub is_nullable: String,
}

impl GetColumns {
	/// `is_nullable` is the catalog's `yes_or_no` domain, anything else is a malformed row
	pub fn into_descriptor(self) -> GenResult<ColumnDescriptor> {
		let nullable = match self.is_nullable.as_str() {
			"YES" => true,
			"NO" => false,
			other => {
				return Err(GenError::scan(
					format!("reading column `{}`", self.name),
					format!("unexpected is_nullable value `{}`", other),
				))
			},
		};
		Ok(ColumnDescriptor {
			name: self.name,
			data_type: self.data_type,
			nullable,
		})
	}
}
