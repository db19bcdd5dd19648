use std::fmt::{Display, Formatter};

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use string_cache::DefaultAtom;
use syn::Ident;

use crate::generator::naming::identifiers::{to_rust_field_name, to_rust_type_name};

/// Emits an identifier, honouring the `r#` prefix produced for keywords.
fn ident(name: &str) -> Ident {
  match name.strip_prefix("r#") {
    Some(raw) => Ident::new_raw(raw, Span::call_site()),
    None => Ident::new(name, Span::call_site()),
  }
}

/// A struct, enum or variant name.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeToken(pub DefaultAtom);

impl TypeToken {
  pub fn from_wire(name: &str) -> Self {
    Self(DefaultAtom::from(to_rust_type_name(name)))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for TypeToken {
  fn from(s: &str) -> Self {
    Self(DefaultAtom::from(s))
  }
}

impl Display for TypeToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for TypeToken {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident(&self.0).to_tokens(tokens);
  }
}

/// A struct field or function parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldToken(pub DefaultAtom);

impl FieldToken {
  pub fn from_wire(name: &str) -> Self {
    Self(DefaultAtom::from(to_rust_field_name(name)))
  }

  #[cfg(test)]
  pub(crate) fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for FieldToken {
  fn from(s: &str) -> Self {
    Self(DefaultAtom::from(s))
  }
}

impl Display for FieldToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for FieldToken {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident(&self.0).to_tokens(tokens);
  }
}

/// A generated method name.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodToken(pub DefaultAtom);

impl From<&str> for MethodToken {
  fn from(s: &str) -> Self {
    Self(DefaultAtom::from(s))
  }
}

impl Display for MethodToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for MethodToken {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident(&self.0).to_tokens(tokens);
  }
}
