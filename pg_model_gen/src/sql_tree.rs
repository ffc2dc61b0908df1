//! The slice of a PostgreSQL schema the generator cares about

/// One column as reported by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
	pub name: String,
	/// database-native type name, e.g. `character varying`
	pub data_type: String,
	pub nullable: bool,
}

impl ColumnDescriptor {
	pub fn new(name: impl Into<String>, data_type: impl Into<String>, nullable: bool) -> ColumnDescriptor {
		ColumnDescriptor {
			name: name.into(),
			data_type: data_type.into(),
			nullable,
		}
	}
}

/// A table and its columns in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
	pub name: String,
	pub columns: Vec<ColumnDescriptor>,
}

impl TableSchema {
	pub fn new(name: impl Into<String>) -> TableSchema {
		TableSchema {
			name: name.into(),
			columns: Vec::new(),
		}
	}

	pub fn append_columns(&mut self, mut columns: Vec<ColumnDescriptor>) {
		self.columns.append(&mut columns);
	}
}
