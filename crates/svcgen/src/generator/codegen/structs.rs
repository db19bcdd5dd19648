use proc_macro2::TokenStream;
use quote::quote;

use super::RenderContext;
use crate::generator::ast::{ClassDef, FieldDef};

pub(crate) fn generate_struct(def: &ClassDef, ctx: &RenderContext) -> TokenStream {
  let name = &def.name;
  let docs = &def.docs;
  let vis = ctx.vis();
  let support = ctx.support();
  let (serialize, deserialize, serde_crate) = ctx.serde_derives();
  let fields = def.fields.iter().map(|field| generate_field(field, ctx, true));

  quote! {
    #docs
    #[derive(Debug, Clone, PartialEq, #serialize, #deserialize, #support::bon::Builder)]
    #[serde(crate = #serde_crate)]
    #[builder(crate = #support::bon)]
    #vis struct #name {
      #(#fields),*
    }

    impl #support::Serializable for #name {}
  }
}

/// A serde-mapped field. Optional fields default to the unassigned sentinel
/// and are skipped on serialization while they hold it.
pub(crate) fn generate_field(field: &FieldDef, ctx: &RenderContext, with_builder: bool) -> TokenStream {
  let name = &field.name;
  let docs = &field.docs;
  let vis = ctx.vis();
  let wire = &field.wire_name;
  let ty = ctx.field_type(field);

  if field.required {
    return quote! {
      #docs
      #[serde(rename = #wire)]
      #vis #name: #ty
    };
  }

  let skip = format!("{}::Field::is_unassigned", ctx.support_str());
  let builder = with_builder.then(|| quote! { #[builder(default, into)] });
  quote! {
    #docs
    #[serde(rename = #wire, default, skip_serializing_if = #skip)]
    #builder
    #vis #name: #ty
  }
}
