use super::{
	error::{GenError, GenResult},
	pg_select_types::*,
	sql_tree::*,
};
use postgres::{
	config::Host,
	Client,
	Config,
	NoTls,
	Statement,
};
use pg_model_gen_core::*;
use tracing::{debug, info};


/// Where the generator reads tables and columns from
///
/// [`CatalogClient`] is the live implementation; tests substitute an in-memory catalog
pub trait SchemaSource {
	/// All table names, ascending
	fn list_tables(&mut self) -> GenResult<Vec<String>>;
	/// Columns of `table` in catalog order. A table that does not exist has no columns
	fn list_columns(&mut self, table: &str) -> GenResult<Vec<ColumnDescriptor>>;

	/// Reads every table along with its columns
	fn get_all(&mut self) -> GenResult<Vec<TableSchema>> {
		let names = self.list_tables()?;
		info!(tables = names.len(), "found tables");

		let mut tables = Vec::with_capacity(names.len());
		for name in names {
			let mut table = TableSchema::new(name);
			let columns = self.list_columns(&table.name)?;
			debug!(table = %table.name, columns = columns.len(), "read columns");
			table.append_columns(columns);
			tables.push(table);
		}
		Ok(tables)
	}
}

/// A single connection to the database with the catalog statements already prepared
///
/// The connection closes when this is dropped
pub struct CatalogClient {
	client: Client,
	schema: String,
	tables_stmt : Statement,
	columns_stmt : Statement,
}

impl CatalogClient {
	pub fn connect(connection_string: &str, schema: &str) -> GenResult<CatalogClient> {
		let target = redact_connection_string(connection_string);
		debug!(%target, "connecting");
		let client = Client::connect(connection_string, NoTls)
			.map_err(|source| GenError::Connection { target, source })?;
		CatalogClient::new(client, schema)
	}

	pub fn new(mut client: Client, schema: &str) -> GenResult<CatalogClient> {
		Ok(CatalogClient {
			tables_stmt : client.prepare(GET_TABLES).map_err(|e| GenError::query("preparing the table query", e))?,
			columns_stmt : client.prepare(GET_COLUMNS).map_err(|e| GenError::query("preparing the column query", e))?,
			schema: schema.to_owned(),
			client,
		})
	}
}

impl SchemaSource for CatalogClient {
	fn list_tables(&mut self) -> GenResult<Vec<String>> {
		Ok(self.get_tables()?.into_iter().map(|v| v.name).collect())
	}

	fn list_columns(&mut self, table: &str) -> GenResult<Vec<ColumnDescriptor>> {
		self.get_columns(table)?
			.into_iter()
			.map(GetColumns::into_descriptor)
			.collect()
	}
}

/// Wrappers on SQL select statements
impl CatalogClient {
	fn get_tables(&mut self) -> GenResult<Vec<GetTables>> {
		let context = format!("listing tables in schema `{}`", self.schema);
		self.client
			.query(&self.tables_stmt, &[&self.schema])
			.map_err(|e| GenError::query(context.as_str(), e))?
			.iter()
			.map(|row| GetTables::from_row(row).map_err(|e| GenError::scan(context.as_str(), e)))
			.collect()
	}
	fn get_columns(&mut self, table: &str) -> GenResult<Vec<GetColumns>> {
		let context = format!("listing columns of `{}.{}`", self.schema, table);
		self.client
			.query(&self.columns_stmt, &[&self.schema, &table])
			.map_err(|e| GenError::query(context.as_str(), e))?
			.iter()
			.map(|row| GetColumns::from_row(row).map_err(|e| GenError::scan(context.as_str(), e)))
			.collect()
	}
}

/// Describes where a connection string points without ever including its password
///
/// The string is parsed the same way the client parses it, so both the `key=value` and the
/// `postgres://` URL forms are understood. A string the client cannot parse is not echoed at all
pub fn redact_connection_string(connection_string: &str) -> String {
	let config = match connection_string.parse::<Config>() {
		Ok(config) => config,
		Err(_) => return "<redacted>".to_owned(),
	};

	let hosts : Vec<String> = config.get_hosts()
		.iter()
		.map(|host| match host {
			Host::Tcp(name) => name.clone(),
			#[cfg(unix)]
			Host::Unix(path) => path.display().to_string(),
		})
		.collect();
	let ports : Vec<String> = config.get_ports().iter().map(u16::to_string).collect();

	let mut parts = Vec::new();
	if !hosts.is_empty() {
		parts.push(format!("host={}", hosts.join(",")));
	}
	if !ports.is_empty() {
		parts.push(format!("port={}", ports.join(",")));
	}
	if let Some(user) = config.get_user() {
		parts.push(format!("user={}", user));
	}
	if let Some(dbname) = config.get_dbname() {
		parts.push(format!("dbname={}", dbname));
	}

	if parts.is_empty() {
		"<default server>".to_owned()
	} else {
		parts.join(" ")
	}
}
