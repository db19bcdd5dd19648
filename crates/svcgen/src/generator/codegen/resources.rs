use proc_macro2::TokenStream;
use quote::quote;

use super::{RenderContext, structs::generate_field};
use crate::generator::ast::{
  IdentifierSource, InputBinding, InputSource, MethodDef, MethodKind, ParamDef, ResourceDef, StatusBinding,
};

pub(crate) fn generate_resource(def: &ResourceDef, ctx: &RenderContext) -> TokenStream {
  let name = &def.name;
  let docs = &def.docs;
  let vis = ctx.vis();
  let support = ctx.support();
  let resource_type = &def.resource_type;
  let (serialize, deserialize, serde_crate) = ctx.serde_derives();

  let fields = def.fields.iter().map(|field| generate_field(field, ctx, false));

  let terminal_states = (!def.terminal_states.is_empty()).then(|| {
    let states = &def.terminal_states;
    quote! {
      /// Statuses `wait` stops at.
      #vis const TERMINAL_STATES: &'static [&'static str] = &[#(#states),*];
    }
  });

  let methods = def.methods.iter().map(|method| generate_method(def, method, ctx));
  let status_impl = def.status.as_ref().map(|status| generate_status_impl(def, status, ctx));

  quote! {
    #docs
    #[derive(Debug, Clone, #serialize, #deserialize)]
    #[serde(crate = #serde_crate)]
    #vis struct #name {
      #(#fields,)*
      #[serde(skip)]
      client: #support::ClientHandle,
    }

    impl #name {
      #vis const RESOURCE_TYPE: &'static str = #resource_type;
      #terminal_states

      #(#methods)*
    }

    impl #support::Resource for #name {
      const RESOURCE_TYPE: &'static str = #resource_type;

      fn refresh(&mut self) -> Result<(), #support::ResourceError> {
        #name::refresh(self)?;
        Ok(())
      }
    }

    #status_impl

    impl #support::Serializable for #name {}
  }
}

fn generate_method(def: &ResourceDef, method: &MethodDef, ctx: &RenderContext) -> TokenStream {
  let name = &method.name;
  let docs = &method.docs;
  let vis = ctx.vis();
  let support = ctx.support();
  let operation = &method.operation;

  match &method.kind {
    MethodKind::Get { params } => {
      let signature = param_list(params, ctx);
      let request = request_from_params(params, ctx);
      quote! {
        #docs
        #vis fn #name(client: &#support::SharedClient, #(#signature),*) -> Result<Self, #support::ResourceError> {
          #request
          let handle = #support::ClientHandle::bound(client);
          let response = handle.invoke(Self::RESOURCE_TYPE, #operation, request)?;
          let mut resource: Self = #support::from_response(#operation, response)?;
          resource.client = handle;
          Ok(resource)
        }
      }
    }
    MethodKind::Create { params, get_args } => {
      let signature = param_list(params, ctx);
      let request = request_from_params(params, ctx);
      let args = get_args.iter().map(|arg| identifier_tokens(arg, operation, ctx));
      let invoke = quote! { #support::ClientHandle::bound(client).invoke(Self::RESOURCE_TYPE, #operation, request)? };
      let invoke = if get_args.iter().any(IdentifierSource::reads_response) {
        quote! { let response = #invoke; }
      } else {
        quote! { #invoke; }
      };
      quote! {
        #docs
        #vis fn #name(client: &#support::SharedClient, #(#signature),*) -> Result<Self, #support::ResourceError> {
          #request
          #invoke
          Self::get(client, #(#args),*)
        }
      }
    }
    MethodKind::Refresh { inputs } => {
      let request = request_from_inputs(inputs, ctx);
      quote! {
        #docs
        #vis fn #name(&mut self) -> Result<&mut Self, #support::ResourceError> {
          #request
          let response = self.client.invoke(Self::RESOURCE_TYPE, #operation, request)?;
          let client = self.client.clone();
          *self = #support::merge_response(&*self, #operation, response)?;
          self.client = client;
          Ok(self)
        }
      }
    }
    MethodKind::Action { inputs, params } => {
      let signature = param_list(params, ctx);
      let request = request_from_inputs(inputs, ctx);
      quote! {
        #docs
        #vis fn #name(&self, #(#signature),*) -> Result<(), #support::ResourceError> {
          #request
          self.client.invoke(Self::RESOURCE_TYPE, #operation, request)?;
          Ok(())
        }
      }
    }
    MethodKind::Update { inputs, params } => {
      let signature = param_list(params, ctx);
      let request = request_from_inputs(inputs, ctx);
      quote! {
        #docs
        #vis fn #name(&mut self, #(#signature),*) -> Result<&mut Self, #support::ResourceError> {
          #request
          self.client.invoke(Self::RESOURCE_TYPE, #operation, request)?;
          self.refresh()
        }
      }
    }
    MethodKind::WaitForStatus => {
      let (status_type, status_str) = match def.status.as_ref().and_then(|status| status.enum_type.as_ref()) {
        Some(enum_type) => (ctx.type_tokens(enum_type), quote! { status.as_str() }),
        None => (quote! { &str }, quote! { status }),
      };
      quote! {
        #docs
        #vis fn #name(&mut self, status: #status_type, config: &#support::WaitConfig) -> Result<(), #support::ResourceError> {
          #support::wait_for_status(self, #status_str, config)
        }
      }
    }
    MethodKind::Wait => quote! {
      #docs
      #vis fn #name(&mut self, config: &#support::WaitConfig) -> Result<(), #support::ResourceError> {
        #support::wait_until_terminal(self, Self::TERMINAL_STATES, config)
      }
    },
  }
}

fn generate_status_impl(def: &ResourceDef, status: &StatusBinding, ctx: &RenderContext) -> TokenStream {
  let name = &def.name;
  let support = ctx.support();
  let field = &status.field;

  let body = if status.required {
    quote! { Some(self.#field.as_str()) }
  } else {
    quote! { self.#field.as_value().map(|status| status.as_str()) }
  };

  quote! {
    impl #support::StatusResource for #name {
      fn current_status(&self) -> Option<&str> {
        #body
      }
    }
  }
}

fn param_list(params: &[ParamDef], ctx: &RenderContext) -> Vec<TokenStream> {
  params
    .iter()
    .map(|param| {
      let name = &param.name;
      let ty = ctx.maybe_wrapped(&param.type_ref, param.required);
      quote! { #name: #ty }
    })
    .collect()
}

fn request_from_params(params: &[ParamDef], ctx: &RenderContext) -> TokenStream {
  let inserts: Vec<TokenStream> = params
    .iter()
    .map(|param| {
      let name = &param.name;
      insert(&param.wire_name, quote! { &#name }, !param.required)
    })
    .collect();
  request(inserts, ctx)
}

fn request_from_inputs(inputs: &[InputBinding], ctx: &RenderContext) -> TokenStream {
  let inserts: Vec<TokenStream> = inputs
    .iter()
    .map(|input| match &input.source {
      InputSource::Attribute { field, optional } => insert(&input.wire_name, quote! { &self.#field }, *optional),
      InputSource::Param { field, optional } => insert(&input.wire_name, quote! { &#field }, *optional),
    })
    .collect();
  request(inserts, ctx)
}

fn insert(wire_name: &str, value: TokenStream, optional: bool) -> TokenStream {
  if optional {
    quote! { request.insert_field(#wire_name, #value)?; }
  } else {
    quote! { request.insert(#wire_name, #value)?; }
  }
}

fn request(inserts: Vec<TokenStream>, ctx: &RenderContext) -> TokenStream {
  let support = ctx.support();
  if inserts.is_empty() {
    return quote! { let request = #support::RequestBody::new(); };
  }
  quote! {
    let mut request = #support::RequestBody::new();
    #(#inserts)*
  }
}

fn identifier_tokens(source: &IdentifierSource, operation: &str, ctx: &RenderContext) -> TokenStream {
  let support = ctx.support();
  match source {
    IdentifierSource::Param(name) => quote! { #name },
    IdentifierSource::WrappedParam(name) => quote! { #support::Field::Value(#name) },
    IdentifierSource::Response { wire_name, type_ref } => {
      let ty = ctx.type_tokens(type_ref);
      quote! { #support::response_field::<#ty>(&response, #operation, #wire_name)? }
    }
    IdentifierSource::Unassigned => quote! { #support::Field::Unassigned },
  }
}
