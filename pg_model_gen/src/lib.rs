//! Connects to a PostgreSQL database and generates a Rust struct for every table in a schema
//!
//! The pipeline is linear: list tables, list each table's columns, map every column to a Rust type,
//! emit the source text and format it. The first error aborts the run and nothing is printed.
//!
//! ```ignore
//! #![allow(non_snake_case)]
//! #![allow(unused_imports)]
//! use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
//! use serde::{Deserialize, Serialize};
//! use serde_json::{Map, Value};
//! use uuid::Uuid;
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! pub struct Users {
//!     #[serde(rename = "id")]
//!     pub Id: i32,
//!     #[serde(rename = "email")]
//!     pub Email: Option<String>,
//! }
//! ```

pub mod connection;

pub mod db_model;

pub mod error;

pub mod format;

pub mod ident;

pub mod logging;

mod pg_select_types;

mod sql_tree;

pub mod type_map;

use structopt::StructOpt;
use tracing::info;

pub use connection::{CatalogClient, SchemaSource};
pub use db_model::{emit, ColumnDescriptor, TableSchema};
pub use error::{GenError, GenResult};
pub use format::{format_rust, FormatStyle};
pub use type_map::{DbType, TypeMap};

#[derive(Debug, StructOpt)]
#[structopt(name = "pg_model_gen")]
/// Generates serde-ready Rust structs from the tables of a PostgreSQL schema
///
/// The generated code is printed to stdout. It needs chrono, serde, serde_json and uuid to compile
pub struct Opt {
	/// String to connect to database, either `key=value` pairs or a postgres:// URL
	pub conn_string: String,

	/// Schema whose tables are generated
	#[structopt(long, default_value = "public")]
	pub schema: String,

	/// Pipe the output through rustfmt instead of the built in formatter
	#[structopt(long, conflicts_with = "ugly")]
	pub rustfmt: bool,

	/// Skip formatting; the output is still checked to be valid Rust
	#[structopt(short, long)]
	pub ugly: bool,

	/// Log progress to stderr, repeat for more detail
	#[structopt(short, long, parse(from_occurrences))]
	pub verbose: u8,
}

impl Opt {
	pub fn format_style(&self) -> FormatStyle {
		if self.ugly {
			FormatStyle::Ugly
		} else if self.rustfmt {
			FormatStyle::Rustfmt
		} else {
			FormatStyle::Pretty
		}
	}

	pub fn get_client(&self) -> GenResult<CatalogClient> {
		CatalogClient::connect(&self.conn_string, &self.schema)
	}

	/// Connects, generates and returns the formatted source. The connection is closed before returning
	pub fn run(&self) -> GenResult<String> {
		let mut client = self.get_client()?;
		generate(&mut client, &TypeMap::standard(), self.format_style())
	}
}

/// The usage block printed when the connection string is missing
pub fn usage(program: &str) -> String {
	format!(
		"usage:\n\t{0} <connection_string>\n\nexample:\n\t{0} 'dbname=example sslmode=disable'\n",
		program
	)
}

/// Runs the whole pipeline against `source`
pub fn generate<S: SchemaSource + ?Sized>(source: &mut S, types: &TypeMap, style: FormatStyle) -> GenResult<String> {
	let tables = source.get_all()?;
	let text = emit(types, &tables)?;
	let formatted = format_rust(&text, style)?;
	info!(tables = tables.len(), bytes = formatted.len(), "generated");
	Ok(formatted)
}
