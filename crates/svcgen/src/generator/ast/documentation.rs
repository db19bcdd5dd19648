use std::sync::LazyLock;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use regex::Regex;

static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?p\s*>").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?code\s*>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());
static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  /// Converts the HTML fragments used in service models into doc lines.
  ///
  /// Paragraphs become blank-line separated blocks, `<code>` becomes
  /// backticks and every other tag is dropped.
  #[must_use]
  pub fn from_html(input: &str) -> Self {
    let text = PARAGRAPH_RE.replace_all(input, "\n\n");
    let text = CODE_RE.replace_all(&text, "`");
    let text = TAG_RE.replace_all(&text, "");

    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
      let line = SPACES_RE.replace_all(line.trim(), " ").into_owned();
      if line.is_empty() && lines.last().is_none_or(String::is_empty) {
        continue;
      }
      lines.push(line);
    }
    while lines.last().is_some_and(String::is_empty) {
      lines.pop();
    }

    Self { lines }
  }

  #[must_use]
  pub fn from_optional(input: Option<&str>) -> Self {
    input.map_or_else(Self::default, Self::from_html)
  }

  #[must_use]
  pub fn from_lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      lines: lines.into_iter().map(Into::into).collect(),
    }
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  pub fn push(&mut self, line: impl Into<String>) {
    self.lines.push(line.into());
  }
}

impl ToTokens for Documentation {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    if self.is_empty() {
      return;
    }
    let doc_lines: Vec<TokenStream> = self
      .lines
      .iter()
      .map(|line| {
        let line = if line.is_empty() { String::new() } else { format!(" {line}") };
        quote! { #[doc = #line] }
      })
      .collect();
    quote! { #(#doc_lines)* }.to_tokens(tokens);
  }
}
