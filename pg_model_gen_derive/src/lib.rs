//! Contains a derive macro for [`TryFromRow`] which converts from a postgres Row
//!
//! [`TryFromRow`]: ../pg_model_gen_core/trait.TryFromRow.html

extern crate proc_macro;

use proc_macro2::{
	Span,
	TokenStream,
};

use quote::quote;

use syn::{
	parse_macro_input,
	DeriveInput,
};

#[proc_macro_derive(TryFromRow)]
/// A derive macro for [`TryFromRow`] which converts from a postgres Row
///
/// Fields are read by position, so the field order of the struct must match the column order of the query
///
/// [`TryFromRow`]: ../pg_model_gen_core/trait.TryFromRow.html
pub fn try_from_postgres_row(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	// get the name of the type we want to implement the trait for
	let name = &input.ident;
	let generics = &input.generics;
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

	let fields = match &input.data {
		syn::Data::Struct(syn::DataStruct { fields: syn::Fields::Named(x), .. }) => &x.named,
		syn::Data::Struct(_) => {
			return syn::Error::new(Span::call_site(), "TryFromRow needs a struct with named fields")
				.to_compile_error()
				.into();
		},
		syn::Data::Enum(_) | syn::Data::Union(_) => {
			return syn::Error::new(Span::call_site(), "TryFromRow can only be derived for structs")
				.to_compile_error()
				.into();
		},
	};

	let from_row_code : TokenStream = fields
		.iter()
		.filter_map(|v| v.ident.as_ref())
		.enumerate()
		.map(|(i,v)| {
			quote!{ #v : row.try_get(#i)?, }
		}).collect();

	let expanded = quote! {
		impl #impl_generics ::pg_model_gen_core::TryFromRow for #name #ty_generics #where_clause {
			fn from_row(row: &::pg_model_gen_core::Row) -> ::core::result::Result<Self, ::pg_model_gen_core::SqlError> {
				::core::result::Result::Ok(Self { #from_row_code })
			}
		}
	};

	expanded.into()
}
