//! Maps catalog column types to Rust type names
//!
//! The table is keyed on a parsed [`DbType`] and the column's nullability.
//! A pair that is not in the table is an error, never an empty type.

use std::collections::HashMap;

use crate::error::{GenError, GenResult};

/// The catalog `data_type` names the generator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbType {
	Boolean,
	SmallInt,
	Integer,
	BigInt,
	Real,
	DoublePrecision,
	CharacterVarying,
	Character,
	Text,
	Json,
	Jsonb,
	Uuid,
	Bytea,
	Date,
	TimestampWithoutTimeZone,
	TimestampWithTimeZone,
}

impl DbType {
	pub const ALL: [DbType; 16] = [
		DbType::Boolean,
		DbType::SmallInt,
		DbType::Integer,
		DbType::BigInt,
		DbType::Real,
		DbType::DoublePrecision,
		DbType::CharacterVarying,
		DbType::Character,
		DbType::Text,
		DbType::Json,
		DbType::Jsonb,
		DbType::Uuid,
		DbType::Bytea,
		DbType::Date,
		DbType::TimestampWithoutTimeZone,
		DbType::TimestampWithTimeZone,
	];

	/// Parses the name reported in `information_schema.columns.data_type`
	pub fn from_catalog_name(name: &str) -> Option<DbType> {
		use DbType::*;
		Some(match name {
			"boolean" => Boolean,
			"smallint" => SmallInt,
			"integer" => Integer,
			"bigint" => BigInt,
			"real" => Real,
			"double precision" => DoublePrecision,
			"character varying" => CharacterVarying,
			"character" => Character,
			"text" => Text,
			"json" => Json,
			"jsonb" => Jsonb,
			"uuid" => Uuid,
			"bytea" => Bytea,
			"date" => Date,
			"timestamp without time zone" => TimestampWithoutTimeZone,
			"timestamp with time zone" => TimestampWithTimeZone,
			_ => return None,
		})
	}

	pub fn catalog_name(self) -> &'static str {
		use DbType::*;
		match self {
			Boolean => "boolean",
			SmallInt => "smallint",
			Integer => "integer",
			BigInt => "bigint",
			Real => "real",
			DoublePrecision => "double precision",
			CharacterVarying => "character varying",
			Character => "character",
			Text => "text",
			Json => "json",
			Jsonb => "jsonb",
			Uuid => "uuid",
			Bytea => "bytea",
			Date => "date",
			TimestampWithoutTimeZone => "timestamp without time zone",
			TimestampWithTimeZone => "timestamp with time zone",
		}
	}

	/// The Rust type for a non-null column
	fn rust_base(self) -> &'static str {
		use DbType::*;
		match self {
			Boolean => "bool",
			SmallInt => "i16",
			Integer => "i32",
			BigInt => "i64",
			Real => "f32",
			DoublePrecision => "f64",
			CharacterVarying | Character | Text => "String",
			Json | Jsonb => JSON_MAP,
			Uuid => "Uuid",
			Bytea => "Vec<u8>",
			Date => "NaiveDate",
			TimestampWithoutTimeZone => "NaiveDateTime",
			TimestampWithTimeZone => "DateTime<Utc>",
		}
	}
}

/// JSON objects are mapped to a bare map whether or not the column is nullable
const JSON_MAP: &str = "Map<String, Value>";

/// Immutable lookup from `(DbType, nullable)` to a Rust type name
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
	entries: HashMap<(DbType, bool), String>,
}

impl TypeMap {
	pub fn empty() -> TypeMap {
		TypeMap::default()
	}

	/// Every [`DbType`] in both nullabilities. Nullable scalars become `Option<T>`
	pub fn standard() -> TypeMap {
		DbType::ALL.iter().fold(TypeMap::empty(), |map, &db_type| {
			let base = db_type.rust_base();
			let nullable = match db_type {
				DbType::Json | DbType::Jsonb => base.to_owned(),
				_ => format!("Option<{}>", base),
			};
			map.with(db_type, false, base).with(db_type, true, nullable)
		})
	}

	/// Returns a copy of the table with one entry added or replaced
	pub fn with(mut self, db_type: DbType, nullable: bool, rust_type: impl Into<String>) -> TypeMap {
		self.entries.insert((db_type, nullable), rust_type.into());
		self
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, db_type: DbType, nullable: bool) -> Option<&str> {
		self.entries.get(&(db_type, nullable)).map(String::as_str)
	}

	/// Looks up the Rust type for a catalog type name and nullability
	pub fn map_type(&self, data_type: &str, nullable: bool) -> GenResult<&str> {
		DbType::from_catalog_name(data_type)
			.and_then(|db_type| self.get(db_type, nullable))
			.ok_or_else(|| GenError::UnsupportedType {
				data_type: data_type.to_owned(),
				nullable,
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn standard_covers_every_type_both_ways() {
		let map = TypeMap::standard();
		assert_eq!(map.len(), DbType::ALL.len() * 2);
		for db_type in DbType::ALL {
			for nullable in [false, true] {
				let rust = map.map_type(db_type.catalog_name(), nullable).unwrap();
				assert!(!rust.is_empty());
				syn::parse_str::<syn::Type>(rust)
					.unwrap_or_else(|e| panic!("`{}` is not a type: {}", rust, e));
			}
		}
	}

	#[test]
	fn catalog_names_round_trip() {
		for db_type in DbType::ALL {
			assert_eq!(DbType::from_catalog_name(db_type.catalog_name()), Some(db_type));
		}
	}

	#[test]
	fn required_pairs() {
		let map = TypeMap::standard();
		let cases = [
			("boolean", false, "bool"),
			("boolean", true, "Option<bool>"),
			("integer", false, "i32"),
			("integer", true, "Option<i32>"),
			("character varying", false, "String"),
			("character varying", true, "Option<String>"),
			("text", false, "String"),
			("text", true, "Option<String>"),
			("json", false, "Map<String, Value>"),
			("json", true, "Map<String, Value>"),
			("timestamp without time zone", false, "NaiveDateTime"),
			("timestamp without time zone", true, "Option<NaiveDateTime>"),
		];
		for (data_type, nullable, expected) in cases {
			assert_eq!(map.map_type(data_type, nullable).unwrap(), expected, "{} {}", data_type, nullable);
		}
	}

	#[test]
	fn unknown_type_is_an_error() {
		let err = TypeMap::standard().map_type("money", true).unwrap_err();
		match err {
			GenError::UnsupportedType { data_type, nullable } => {
				assert_eq!(data_type, "money");
				assert!(nullable);
			},
			other => panic!("unexpected error {:?}", other),
		}
	}

	#[test]
	fn missing_pair_in_reduced_table_is_an_error() {
		let map = TypeMap::empty().with(DbType::Integer, false, "i64");
		assert_eq!(map.map_type("integer", false).unwrap(), "i64");
		assert!(matches!(
			map.map_type("integer", true),
			Err(GenError::UnsupportedType { nullable: true, .. })
		));
	}

	#[test]
	fn with_replaces_entries() {
		let map = TypeMap::standard().with(DbType::Uuid, false, "String");
		assert_eq!(map.map_type("uuid", false).unwrap(), "String");
		assert_eq!(map.map_type("uuid", true).unwrap(), "Option<Uuid>");
	}
}
