use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for declaration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the manifest content and filename so validation code does not
/// have to thread them through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::ParseJson {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` when it occurs in the source.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_span(needle),
            message: message.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: self.find_span(&name),
            name,
            context: context.into(),
        })
    }

    /// Create a reserved class name error.
    pub fn reserved_name_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        Box::new(Error::ReservedName {
            src: self.named_source(),
            span: self.find_span(&name),
            name,
        })
    }

    /// Create a duplicate entity error.
    pub fn duplicate_entity_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        let spans = find_all_quoted(&self.src, &name);
        Box::new(Error::DuplicateEntity {
            src: self.named_source(),
            first_span: spans.first().copied(),
            second_span: spans.get(1).copied(),
            name,
        })
    }

    /// Find the span of a quoted value in the source.
    fn find_span(&self, needle: &str) -> Option<SourceSpan> {
        find_all_quoted(&self.src, needle).into_iter().next()
    }
}

/// Locate every `"needle"` or `'needle'` occurrence, spanning the unquoted text.
fn find_all_quoted(src: &str, needle: &str) -> Vec<SourceSpan> {
    if needle.is_empty() {
        return Vec::new();
    }

    // Basic strings escape namespace separators (`"App\\Foo"`), literal strings don't.
    let escaped = needle.replace('\\', "\\\\");
    let mut spans = Vec::new();
    for (quote, text) in [('"', needle), ('"', escaped.as_str()), ('\'', needle)] {
        let pattern = format!("{quote}{text}{quote}");
        spans.extend(
            src.match_indices(&pattern)
                .map(|(pos, _)| SourceSpan::from((pos + 1, text.len()))),
        );
    }
    spans.sort_by_key(|span| span.offset());
    spans.dedup_by_key(|span| span.offset());
    spans
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'builders init' to create a starter builders.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse declaration manifest")]
    #[diagnostic(code(builders::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON declarations")]
    #[diagnostic(code(builders::parse_error))]
    ParseJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(builders::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(builders::invalid_identifier),
        help("PHP names start with a letter or underscore, followed by letters, digits or underscores")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("'{name}' is reserved and cannot be used as a class name")]
    #[diagnostic(code(builders::reserved_name))]
    ReservedName {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved name used here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("entity '{name}' is declared more than once")]
    #[diagnostic(
        code(builders::duplicate_entity),
        help("merge the declarations into a single [[entities]] entry")
    )]
    DuplicateEntity {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },
}
