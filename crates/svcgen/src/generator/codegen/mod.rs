use std::collections::{BTreeMap, HashSet};

use anyhow::Context;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use strum::Display;

use crate::generator::ast::{FieldDef, ResourceDef, ShapeItem, TypeRef, TypeToken};

pub(crate) mod enums;
pub(crate) mod header;
pub(crate) mod resources;
pub(crate) mod structs;
pub(crate) mod types;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  /// Visible inside the generated module only.
  File,
}

impl Visibility {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "public" => Some(Visibility::Public),
      "crate" => Some(Visibility::Crate),
      "file" => Some(Visibility::File),
      _ => None,
    }
  }

  /// Visibility of items inside `shapes.rs` and `resources.rs`. `File`
  /// still has to reach the sibling file.
  pub(crate) fn to_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
      Visibility::File => quote! { pub(super) },
    }
  }

  /// Visibility of the `mod` declarations in `mod.rs`.
  pub(crate) fn module_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
      Visibility::File => quote! {},
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum GeneratedFileType {
  #[strum(to_string = "shapes.rs")]
  Shapes,
  #[strum(to_string = "resources.rs")]
  Resources,
  #[strum(to_string = "mod.rs")]
  Module,
}

/// Formatted source per output file.
#[derive(Debug, Clone, Default)]
pub struct GeneratedCode {
  files: BTreeMap<GeneratedFileType, String>,
}

impl GeneratedCode {
  pub(crate) fn insert(&mut self, file_type: GeneratedFileType, code: String) {
    self.files.insert(file_type, code);
  }

  #[cfg(test)]
  pub(crate) fn code(&self, file_type: GeneratedFileType) -> Option<&str> {
    self.files.get(&file_type).map(String::as_str)
  }

  pub fn files(&self) -> impl Iterator<Item = (GeneratedFileType, &str)> {
    self.files.iter().map(|(file_type, code)| (*file_type, code.as_str()))
  }
}

/// Everything the renderers need besides the definitions themselves.
#[derive(Clone)]
pub(crate) struct RenderContext {
  pub(crate) visibility: Visibility,
  support: syn::Path,
  /// Shape names hidden by a resource of the same name in `resources.rs`.
  shadowed: HashSet<String>,
}

impl RenderContext {
  pub(crate) fn new(visibility: Visibility, support_crate: &str) -> anyhow::Result<Self> {
    let path = if ["crate", "self", "super", "::"].iter().any(|p| support_crate.starts_with(p)) {
      support_crate.to_string()
    } else {
      format!("::{support_crate}")
    };
    let support = syn::parse_str::<syn::Path>(&path).with_context(|| format!("invalid support crate path '{path}'"))?;

    Ok(Self {
      visibility,
      support,
      shadowed: HashSet::new(),
    })
  }

  /// The context for `resources.rs`, where resource structs shadow shapes
  /// of the same name.
  #[must_use]
  pub(crate) fn for_resources(&self, resources: &[ResourceDef]) -> Self {
    Self {
      shadowed: resources.iter().map(|resource| resource.name.to_string()).collect(),
      ..self.clone()
    }
  }

  pub(crate) fn vis(&self) -> TokenStream {
    self.visibility.to_tokens()
  }

  pub(crate) fn support(&self) -> TokenStream {
    self.support.to_token_stream()
  }

  /// The support path as a string for `#[serde(crate = "...")]` and
  /// `skip_serializing_if`.
  pub(crate) fn support_str(&self) -> String {
    self.support.to_token_stream().to_string().replace(' ', "")
  }

  pub(crate) fn named(&self, name: &TypeToken) -> TokenStream {
    if self.shadowed.contains(name.as_str()) {
      quote! { super::shapes::#name }
    } else {
      quote! { #name }
    }
  }

  pub(crate) fn type_tokens(&self, type_ref: &TypeRef) -> TokenStream {
    types::type_tokens(type_ref, self)
  }

  /// The declared type of a field: optional fields are wrapped in `Field`.
  pub(crate) fn field_type(&self, field: &FieldDef) -> TokenStream {
    self.maybe_wrapped(&field.type_ref, field.required)
  }

  pub(crate) fn maybe_wrapped(&self, type_ref: &TypeRef, required: bool) -> TokenStream {
    let ty = self.type_tokens(type_ref);
    if required {
      ty
    } else {
      let support = self.support();
      quote! { #support::Field<#ty> }
    }
  }

  /// Serde derive paths routed through the support crate.
  pub(crate) fn serde_derives(&self) -> (TokenStream, TokenStream, String) {
    let support = self.support();
    (
      quote! { #support::serde::Serialize },
      quote! { #support::serde::Deserialize },
      format!("{}::serde", self.support_str()),
    )
  }
}

pub(crate) fn generate_shapes(items: &[ShapeItem], ctx: &RenderContext) -> TokenStream {
  let items = items.iter().map(|item| match item {
    ShapeItem::Struct(def) => structs::generate_struct(def, ctx),
    ShapeItem::Enum(def) => enums::generate_enum(def, ctx),
  });

  quote! { #(#items)* }
}

pub(crate) fn generate_resources(resources: &[ResourceDef], ctx: &RenderContext) -> TokenStream {
  if resources.is_empty() {
    return quote! {};
  }

  let ctx = ctx.for_resources(resources);
  let resources = resources.iter().map(|resource| resources::generate_resource(resource, &ctx));

  quote! {
    #[allow(unused_imports)]
    use super::shapes::*;

    #(#resources)*
  }
}

pub(crate) fn generate_module(visibility: Visibility) -> TokenStream {
  let vis = visibility.module_tokens();
  quote! {
    #vis mod resources;
    #vis mod shapes;
  }
}

pub(crate) fn format_tokens(tokens: TokenStream) -> anyhow::Result<String> {
  let syntax_tree: syn::File = syn::parse2(tokens).context("generated code is not valid Rust")?;
  Ok(prettyplease::unparse(&syntax_tree))
}
