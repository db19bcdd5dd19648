use proc_macro2::TokenStream;
use quote::quote;

use super::RenderContext;
use crate::generator::ast::{EnumDef, TypeToken};

/// Renders an enum shape. Values the model does not list deserialize into
/// the fallback variant and keep their wire value.
pub(crate) fn generate_enum(def: &EnumDef, ctx: &RenderContext) -> TokenStream {
  let name = &def.name;
  let docs = &def.docs;
  let vis = ctx.vis();
  let support = ctx.support();
  let fallback = TypeToken::from(EnumDef::FALLBACK_VARIANT);

  let variants = def.variants.iter().map(|variant| &variant.name);

  let arms = def.variants.iter().map(|variant| {
    let variant_name = &variant.name;
    let wire = &variant.wire_value;
    quote! { Self::#variant_name => #wire }
  });

  let match_arms = def.variants.iter().map(|variant| {
    let variant_name = &variant.name;
    let wire = &variant.wire_value;
    quote! { #wire => Self::#variant_name }
  });

  quote! {
    #docs
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #vis enum #name {
      #(#variants,)*
      /// A value this model does not list.
      #fallback(String),
    }

    impl #name {
      /// The wire value.
      #vis fn as_str(&self) -> &str {
        match self {
          #(#arms,)*
          Self::#fallback(value) => value.as_str(),
        }
      }
    }

    impl ::std::fmt::Display for #name {
      fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl #support::serde::Serialize for #name {
      fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
      where
        S: #support::serde::Serializer,
      {
        serializer.serialize_str(self.as_str())
      }
    }

    impl<'de> #support::serde::Deserialize<'de> for #name {
      fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
      where
        D: #support::serde::Deserializer<'de>,
      {
        let value = <String as #support::serde::Deserialize>::deserialize(deserializer)?;
        Ok(match value.as_str() {
          #(#match_arms,)*
          _ => Self::#fallback(value),
        })
      }
    }
  }
}
