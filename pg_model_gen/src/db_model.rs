//! Assembles the generated Rust source as plain text
//!
//! The output is not guaranteed to be valid Rust until it has been through [`crate::format`].
pub use super::sql_tree::*;

use std::collections::HashSet;

use tracing::warn;

use super::{
	error::GenResult,
	ident::{lower_camel, rust_ident, snake_to_upper_camel},
	type_map::TypeMap,
};

/// Imports and lints at the top of every generated file
pub const HEADER: &str =
r#"#![allow(non_snake_case)]
#![allow(unused_imports)]
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
"#;

/// Struct names that would shadow something the header imports or a mapped field type uses
const RESERVED_TYPE_NAMES: [&str; 12] = [
	"DateTime",
	"NaiveDate",
	"NaiveDateTime",
	"Utc",
	"Deserialize",
	"Serialize",
	"Map",
	"Value",
	"Uuid",
	"Option",
	"String",
	"Vec",
];

/// Identifiers already used in one scope (the file for structs, a struct for fields)
#[derive(Debug, Default)]
struct UniqueNames {
	taken: HashSet<String>,
}

impl UniqueNames {
	fn reserving(names: &[&str]) -> UniqueNames {
		UniqueNames {
			taken: names.iter().map(|&n| n.to_owned()).collect(),
		}
	}

	/// Suffix that makes `name` unique here: empty the first time, then `_2`, `_3`...
	fn claim(&mut self, name: &str) -> String {
		if self.taken.insert(name.to_owned()) {
			return String::new();
		}
		(2..)
			.map(|n| format!("_{}", n))
			.find(|suffix| self.taken.insert(format!("{}{}", name, suffix)))
			.unwrap_or_default()
	}
}

pub trait ConvertToRust {
	fn as_rust_string(&self, types: &TypeMap) -> GenResult<String>;
}

/// Builds the whole document: the header followed by one struct per table, in the order given
///
/// Catalog names that convert to the same identifier are told apart with a `_2`, `_3`... suffix,
/// applied to both the Rust name and its serde tag
pub fn emit(types: &TypeMap, tables: &[TableSchema]) -> GenResult<String> {
	tables.as_rust_string(types)
}

impl ConvertToRust for [TableSchema] {
	fn as_rust_string(&self, types: &TypeMap) -> GenResult<String> {
		let mut ret = String::from(HEADER);
		let mut structs = UniqueNames::reserving(&RESERVED_TYPE_NAMES);
		for table in self {
			let ident = rust_ident(&snake_to_upper_camel(&table.name));
			let suffix = structs.claim(&ident);
			let struct_name = format!("{}{}", ident, suffix);
			if !suffix.is_empty() {
				warn!(table = %table.name, renamed = %struct_name, "struct name already taken");
			}
			ret += &table.as_rust_struct(&struct_name, types)?;
		}
		Ok(ret)
	}
}

impl TableSchema {
	fn as_rust_struct(&self, struct_name: &str, types: &TypeMap) -> GenResult<String> {
		let mut names = UniqueNames::default();
		let mut fields = String::new();
		for col in &self.columns {
			let rust_type = types.map_type(&col.data_type, col.nullable)?;
			let upper = snake_to_upper_camel(&col.name);
			let ident = rust_ident(&upper);
			let suffix = names.claim(&ident);
			let field = format!("{}{}", ident, suffix);
			if !suffix.is_empty() {
				warn!(table = %self.name, column = %col.name, renamed = %field, "field name already taken");
			}
			let tag = format!("{}{}", lower_camel(&upper), suffix);
			fields += &format!("\n\t#[serde(rename = {:?})]\n\tpub {}: {},", tag, field, rust_type);
		}

		Ok(format!(
			"\n#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\npub struct {} {{{}\n}}\n",
			struct_name,
			fields,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::GenError;

	fn users() -> TableSchema {
		let mut table = TableSchema::new("users");
		table.append_columns(vec![
			ColumnDescriptor::new("id", "integer", false),
			ColumnDescriptor::new("email", "character varying", true),
		]);
		table
	}

	#[test]
	fn no_tables_is_just_the_header() {
		assert_eq!(emit(&TypeMap::standard(), &[]).unwrap(), HEADER);
	}

	#[test]
	fn users_table() {
		let out = emit(&TypeMap::standard(), &[users()]).unwrap();
		let expected = format!("{}{}", HEADER, r#"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Users {
	#[serde(rename = "id")]
	pub Id: i32,
	#[serde(rename = "email")]
	pub Email: Option<String>,
}
"#);
		assert_eq!(out, expected);
	}

	#[test]
	fn tag_is_lower_camel_of_field() {
		let mut table = TableSchema::new("user_account");
		table.append_columns(vec![ColumnDescriptor::new("created_at", "timestamp without time zone", true)]);
		let out = emit(&TypeMap::standard(), &[table]).unwrap();
		assert!(out.contains("pub struct UserAccount {"));
		assert!(out.contains("#[serde(rename = \"createdAt\")]\n\tpub CreatedAt: Option<NaiveDateTime>,"));
	}

	#[test]
	fn input_order_is_kept() {
		let mut zeta = TableSchema::new("zeta");
		zeta.append_columns(vec![
			ColumnDescriptor::new("b", "text", false),
			ColumnDescriptor::new("a", "text", false),
		]);
		let alpha = TableSchema::new("alpha");
		let out = emit(&TypeMap::standard(), &[zeta, alpha]).unwrap();
		assert!(out.find("pub struct Zeta").unwrap() < out.find("pub struct Alpha").unwrap());
		assert!(out.find("pub B:").unwrap() < out.find("pub A:").unwrap());
	}

	#[test]
	fn unsupported_column_fails_the_whole_document() {
		let mut table = users();
		table.append_columns(vec![ColumnDescriptor::new("balance", "money", false)]);
		let err = emit(&TypeMap::standard(), &[table]).unwrap_err();
		assert!(matches!(err, GenError::UnsupportedType { ref data_type, nullable: false } if data_type == "money"));
	}

	#[test]
	fn colliding_column_names_get_suffixes() {
		let mut table = TableSchema::new("users");
		table.append_columns(vec![
			ColumnDescriptor::new("user_id", "integer", false),
			ColumnDescriptor::new("user__id", "text", false),
			ColumnDescriptor::new("_user_id_", "bigint", true),
		]);
		let out = emit(&TypeMap::standard(), &[table]).unwrap();
		assert!(out.contains("#[serde(rename = \"userId\")]\n\tpub UserId: i32,"), "{}", out);
		assert!(out.contains("#[serde(rename = \"userId_2\")]\n\tpub UserId_2: String,"), "{}", out);
		assert!(out.contains("#[serde(rename = \"userId_3\")]\n\tpub UserId_3: Option<i64>,"), "{}", out);
	}

	#[test]
	fn escaped_keyword_collision_gets_suffix() {
		let mut table = TableSchema::new("things");
		table.append_columns(vec![
			ColumnDescriptor::new("self", "text", false),
			ColumnDescriptor::new("self_", "text", true),
		]);
		let out = emit(&TypeMap::standard(), &[table]).unwrap();
		assert!(out.contains("#[serde(rename = \"self\")]\n\tpub Self_: String,"), "{}", out);
		assert!(out.contains("#[serde(rename = \"self_2\")]\n\tpub Self__2: Option<String>,"), "{}", out);
	}

	#[test]
	fn colliding_table_names_get_suffixes() {
		let out = emit(&TypeMap::standard(), &[TableSchema::new("Users"), TableSchema::new("users")]).unwrap();
		assert!(out.contains("pub struct Users {"), "{}", out);
		assert!(out.contains("pub struct Users_2 {"), "{}", out);
	}

	#[test]
	fn tables_do_not_shadow_imports() {
		let out = emit(&TypeMap::standard(), &[TableSchema::new("value"), TableSchema::new("string")]).unwrap();
		assert!(out.contains("pub struct Value_2 {"), "{}", out);
		assert!(out.contains("pub struct String_2 {"), "{}", out);
		assert!(!out.contains("pub struct Value {"));
	}

	#[test]
	fn same_column_name_in_different_tables_is_fine() {
		let mut a = TableSchema::new("a");
		a.append_columns(vec![ColumnDescriptor::new("id", "integer", false)]);
		let mut b = TableSchema::new("b");
		b.append_columns(vec![ColumnDescriptor::new("id", "integer", false)]);
		let out = emit(&TypeMap::standard(), &[a, b]).unwrap();
		assert_eq!(out.matches("pub Id: i32,").count(), 2);
		assert!(!out.contains("Id_2"));
	}
}
