//! Error taxonomy for a generator run
//!
//! Every stage returns a [`GenError`]. Nothing is retried; the binary turns the
//! variant into a process exit code with [`GenError::exit_code`].

use pg_model_gen_core::SqlError;
use thiserror::Error;

/// Exit code used when the command line could not be parsed
pub const USAGE_EXIT_CODE: i32 = 1;

/// Exit code used when the generated source could not be written to stdout
pub const OUTPUT_EXIT_CODE: i32 = 7;

#[derive(Debug, Error)]
pub enum GenError {
	/// The database could not be reached or refused the credentials
	#[error("could not connect to {target}")]
	Connection {
		target: String,
		#[source]
		source: SqlError,
	},

	/// A catalog query failed to prepare or execute
	#[error("catalog query failed while {context}")]
	Query {
		context: String,
		#[source]
		source: SqlError,
	},

	/// A catalog row did not have the expected shape
	#[error("could not decode catalog row while {context}")]
	Scan {
		context: String,
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},

	#[error("no Rust type mapping for data type `{data_type}` (nullable: {nullable})")]
	UnsupportedType {
		data_type: String,
		nullable: bool,
	},

	/// The assembled source did not parse or the formatter rejected it
	#[error("generated source could not be formatted: {message}")]
	Format {
		message: String,
	},
}

impl GenError {
	pub fn exit_code(&self) -> i32 {
		match self {
			GenError::Connection { .. } => 2,
			GenError::Query { .. } => 3,
			GenError::Scan { .. } => 4,
			GenError::UnsupportedType { .. } => 5,
			GenError::Format { .. } => 6,
		}
	}

	pub(crate) fn query(context: impl Into<String>, source: SqlError) -> Self {
		GenError::Query { context: context.into(), source }
	}

	pub(crate) fn scan(context: impl Into<String>, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		GenError::Scan { context: context.into(), source: source.into() }
	}

	pub(crate) fn format(message: impl Into<String>) -> Self {
		GenError::Format { message: message.into() }
	}
}

pub type GenResult<T> = Result<T, GenError>;

/// Renders an error and its source chain on one line
pub fn error_chain(err: &dyn std::error::Error) -> String {
	let mut ret = err.to_string();
	let mut source = err.source();
	while let Some(e) = source {
		ret += ": ";
		ret += &e.to_string();
		source = e.source();
	}
	ret
}
