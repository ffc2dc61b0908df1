//! Case conversion from snake_case database names to Rust names
use heck::ToUpperCamelCase;

/// `some_column_name` becomes `SomeColumnName`
///
/// Stray underscores are dropped, so `__id_` becomes `Id`
pub fn snake_to_upper_camel(s: &str) -> String {
	s.to_upper_camel_case()
}

/// Lower-cases only the first character, so `UserAccount` becomes `userAccount`
pub fn lower_camel(upper: &str) -> String {
	let mut chars = upper.chars();
	match chars.next() {
		Some(first) => first.to_lowercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Turns an upper camel name into something that can stand as a Rust identifier
pub fn rust_ident(upper: &str) -> String {
	match upper.chars().next() {
		None => "Unnamed".to_owned(),
		Some(c) if c.is_ascii_digit() => format!("_{}", upper),
		// the only keyword that survives upper camel casing
		Some(_) if upper == "Self" => format!("{}_", upper),
		Some(_) => upper.to_owned(),
	}
}
