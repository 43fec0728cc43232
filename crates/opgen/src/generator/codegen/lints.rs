use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintAllow {
  ClippyMissingErrorsDoc,
  ClippyTooManyLines,
  ClippyNeedlessPassByRefMut,
  DeadCode,
  NonSnakeCase,
  UnusedVariables,
}

impl ToTokens for LintAllow {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let attr = match self {
      Self::ClippyMissingErrorsDoc => quote! { #![allow(clippy::missing_errors_doc)] },
      Self::ClippyTooManyLines => quote! { #![allow(clippy::too_many_lines)] },
      Self::ClippyNeedlessPassByRefMut => quote! { #![allow(clippy::needless_pass_by_ref_mut)] },
      Self::DeadCode => quote! { #![allow(dead_code)] },
      Self::NonSnakeCase => quote! { #![allow(non_snake_case)] },
      Self::UnusedVariables => quote! { #![allow(unused_variables)] },
    };
    tokens.extend(attr);
  }
}

/// Inner `allow` attributes placed at the top of every generated unit.
#[derive(Debug, Clone)]
pub struct LintConfig {
  pub allows: Vec<LintAllow>,
}

impl Default for LintConfig {
  fn default() -> Self {
    Self {
      allows: vec![
        LintAllow::ClippyMissingErrorsDoc,
        LintAllow::ClippyTooManyLines,
        LintAllow::ClippyNeedlessPassByRefMut,
        // `check_api_response` is unused when no handler makes a checked call.
        LintAllow::DeadCode,
        // Bindings keep the schema's spelling, e.g. `userID`.
        LintAllow::NonSnakeCase,
        // Parameters only validated, never forwarded.
        LintAllow::UnusedVariables,
      ],
    }
  }
}

impl ToTokens for LintConfig {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    for allow in &self.allows {
      allow.to_tokens(tokens);
    }
  }
}
