use proc_macro2::TokenStream;
use quote::quote;

use super::RenderContext;
use crate::generator::ast::{RustPrimitive, TypeRef};

pub(crate) fn type_tokens(type_ref: &TypeRef, ctx: &RenderContext) -> TokenStream {
  match type_ref {
    TypeRef::Primitive(primitive) => primitive_tokens(*primitive, ctx),
    TypeRef::Named(name) => ctx.named(name),
    TypeRef::List(inner) => {
      let inner = type_tokens(inner, ctx);
      quote! { Vec<#inner> }
    }
    TypeRef::Map(key, value) => {
      let key = type_tokens(key, ctx);
      let value = type_tokens(value, ctx);
      quote! { ::std::collections::BTreeMap<#key, #value> }
    }
    TypeRef::Boxed(inner) => {
      let inner = type_tokens(inner, ctx);
      quote! { Box<#inner> }
    }
  }
}

fn primitive_tokens(primitive: RustPrimitive, ctx: &RenderContext) -> TokenStream {
  match primitive {
    RustPrimitive::String => quote! { String },
    RustPrimitive::I32 => quote! { i32 },
    RustPrimitive::I64 => quote! { i64 },
    RustPrimitive::Bool => quote! { bool },
    RustPrimitive::F32 => quote! { f32 },
    RustPrimitive::F64 => quote! { f64 },
    RustPrimitive::Timestamp => {
      let support = ctx.support();
      quote! { #support::Timestamp }
    }
    RustPrimitive::Blob => {
      let support = ctx.support();
      quote! { #support::Blob }
    }
  }
}
