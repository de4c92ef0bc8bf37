//! # flexlayout
//!
//! Compiles human-friendly time-format templates into layout strings for a
//! time library.
//!
//! ## What is a template?
//!
//! A template spells date and time fields with short tokens (`YYYY`, `MM`,
//! `DD`, `hh`, `mm`, `ss`, `A`, ...) and may mark parts as optional with
//! square brackets. One template stands for every layout its optional parts
//! allow:
//!
//! ```text
//! YYYY[-MM[-DD]]   =>   2006, 2006-01, 2006-01-02
//! ```
//!
//! ## Key Features
//!
//! - **Optional segments**: `[...]` groups nest to any depth; an inner group
//!   is only available together with its enclosing group
//! - **Two escapes**: `\x` escapes one character and `'quoted text'` escapes
//!   a whole block, including brackets and token letters
//! - **Two dialects**: reference-date layouts (`2006-01-02`) and `chrono`
//!   strftime layouts (`%Y-%m-%d`)
//! - **No recursion on input**: nesting is handled with explicit stacks and
//!   bounded by [`CompileOptions`]
//!
//! ## Quick Start
//!
//! ```rust
//! use flexlayout::{compile, compile_all};
//!
//! assert_eq!(compile("YYYY-MM-DD hh:mm:ss A").unwrap(), "2006-01-02 03:04:05 PM");
//!
//! let layouts = compile_all("YYYY-MM-DD[ HH:mm[:ss]]").unwrap();
//! assert_eq!(layouts.len(), 3);
//! assert!(layouts.contains("2006-01-02 15:04:05"));
//! ```
//!
//! ### Escaping
//!
//! ```rust
//! use flexlayout::compile;
//!
//! // `\T` and `'at'` are literal text, not tokens.
//! assert_eq!(compile(r"YYYY-MM-DD\THH:mm").unwrap(), "2006-01-02T15:04");
//! assert_eq!(compile("hh:mm 'at' YYYY").unwrap(), "03:04 at 2006");
//! ```
//!
//! ### Strftime output
//!
//! ```rust
//! use flexlayout::{compile_with_options, CompileOptions, Dialect};
//!
//! let options = CompileOptions::new().with_dialect(Dialect::Strftime);
//! let layout = compile_with_options("YYYY-MM-DD hh:mm:ss A", &options).unwrap();
//! assert_eq!(layout, "%Y-%m-%d %I:%M:%S %p");
//! ```
//!
//! ## Pipeline
//!
//! 1. [`grammar`] parses brackets, quotes and escapes into a [`Template`]
//! 2. [`tree`] decodes it into an [`ExpansionTree`] and flattens that into
//!    every concrete [`TaggedSeq`]
//! 3. [`lexer`] finds tokens in the plain runs of each sequence
//! 4. [`translate`](mod@translate) swaps each token for its [`Dialect`] spelling
//!
//! See the [`syntax`] module for the full template reference.
//!
//! ## Logging
//!
//! With the `logging` feature enabled, compile steps emit `log` records at
//! `debug` and `trace` level.

#[macro_use]
mod logging;

pub mod error;
pub mod grammar;
pub mod layouts;
pub mod lexer;
pub mod options;
pub mod run;
pub mod syntax;
pub mod token;
pub mod translate;
pub mod tree;

pub use error::{Error, Result};
pub use grammar::Template;
pub use layouts::Layouts;
pub use options::{CompileOptions, Dialect};
pub use run::{LiteralRun, Origin, TaggedSeq};
pub use token::Token;
pub use translate::Translator;
pub use tree::ExpansionTree;

use indexmap::IndexSet;

/// Expands `template` into every concrete variant it denotes.
///
/// Variants are deduplicated and returned in first-seen order. Runs keep
/// their escaping origin, so `Y` and `\Y` produce different sequences.
///
/// # Examples
///
/// ```rust
/// use flexlayout::expand;
///
/// let variants = expand("abc[def]").unwrap();
/// let rendered: Vec<String> = variants.iter().map(|v| v.render()).collect();
/// assert_eq!(rendered, ["abc", "abcdef"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] when brackets or quotes are unbalanced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn expand(template: &str) -> Result<Vec<TaggedSeq>> {
    expand_with_options(template, &CompileOptions::default())
}

/// Expands `template` using custom limits.
///
/// # Errors
///
/// Returns [`Error::Syntax`], [`Error::NestingTooDeep`] or
/// [`Error::TooManyVariants`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn expand_with_options(template: &str, options: &CompileOptions) -> Result<Vec<TaggedSeq>> {
    let parsed = grammar::parse(template, options).map_err(|err| {
        debug!("failed to parse template {:?}: {}", template, err);
        err
    })?;
    let variants = ExpansionTree::decode(&parsed).flatten(options.max_variants)?;
    debug!(
        "expanded {:?} ({} groups) into {} variants",
        template,
        parsed.group_count(),
        variants.len()
    );
    Ok(variants)
}

/// Expands `template` and renders each variant to a plain string.
///
/// Variants that render identically collapse into one entry, in first-seen
/// order.
///
/// # Examples
///
/// ```rust
/// use flexlayout::expand_strings;
///
/// assert_eq!(expand_strings("a[b[c]]").unwrap(), ["a", "ab", "abc"]);
/// assert_eq!(expand_strings(r"\Y'[x]'").unwrap(), ["Y[x]"]);
/// ```
///
/// # Errors
///
/// Same as [`expand`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn expand_strings(template: &str) -> Result<Vec<String>> {
    let rendered: IndexSet<String> = expand(template)?.iter().map(render).collect();
    Ok(rendered.into_iter().collect())
}

/// Renders a tagged sequence to plain text, ignoring escaping origins.
#[must_use]
pub fn render(seq: &TaggedSeq) -> String {
    seq.render()
}

/// Translates one concrete sequence into a reference-date layout.
///
/// # Examples
///
/// ```rust
/// use flexlayout::{translate, LiteralRun, Origin, TaggedSeq};
///
/// let seq: TaggedSeq = vec![
///     LiteralRun::plain("YYYY-MM-DD "),
///     LiteralRun::new("Y", Origin::SlashEscaped),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(translate(&seq).unwrap(), "2006-01-02 Y");
/// ```
///
/// # Errors
///
/// Returns [`Error::Token`] for malformed tokens such as `YYY`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn translate(seq: &TaggedSeq) -> Result<String> {
    translate_with_options(seq, &CompileOptions::default())
}

/// Translates one concrete sequence into the dialect chosen by `options`.
///
/// # Errors
///
/// Returns [`Error::Token`], [`Error::Unsupported`] or
/// [`Error::InvalidLayout`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn translate_with_options(seq: &TaggedSeq, options: &CompileOptions) -> Result<String> {
    let mut translator = Translator::new(options.clone());
    translator.write_seq(seq)?;
    translator.finish()
}

/// Translates token text that has no optional groups.
///
/// `\x` and `'quoted'` text stay literal, as in a template; `[` and `]` are
/// ordinary characters.
///
/// # Examples
///
/// ```rust
/// use flexlayout::translate_str;
///
/// assert_eq!(translate_str("HH:mm:ss.SSS").unwrap(), "15:04:05.000");
/// assert_eq!(translate_str("hh 'at' mm").unwrap(), "03 at 04");
/// assert!(translate_str("YYY").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Token`] for malformed tokens and [`Error::Syntax`] for an
/// unterminated quote or a trailing `\`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn translate_str(text: &str) -> Result<String> {
    let seq = grammar::parse_literals(text)?;
    translate(&seq)
}

/// Compiles a template that has exactly one variant.
///
/// # Errors
///
/// Returns [`Error::MultipleVariants`] when optional groups make the template
/// expand to more than one distinct layout; use [`compile_all`] for those.
/// Otherwise fails like [`compile_all`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn compile(template: &str) -> Result<String> {
    compile_with_options(template, &CompileOptions::default())
}

/// Compiles a template that has exactly one variant, using custom options.
///
/// # Errors
///
/// See [`compile`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn compile_with_options(template: &str, options: &CompileOptions) -> Result<String> {
    let layouts = compile_all_with_options(template, options)?;
    match layouts.len() {
        1 => Ok(layouts.into_iter().next().unwrap_or_default()),
        count => Err(Error::MultipleVariants { count }),
    }
}

/// Compiles every variant of `template` into a reference-date layout.
///
/// # Examples
///
/// ```rust
/// use flexlayout::compile_all;
///
/// let layouts = compile_all("HH:mm[:ss[.SSS]]").unwrap();
/// let all: Vec<String> = layouts.into();
/// assert_eq!(all, ["15:04", "15:04:05", "15:04:05.000"]);
/// ```
///
/// # Errors
///
/// Returns the first error from expansion or translation; no partial result
/// is produced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn compile_all(template: &str) -> Result<Layouts> {
    compile_all_with_options(template, &CompileOptions::default())
}

/// Compiles every variant of `template` using custom options.
///
/// # Errors
///
/// See [`compile_all`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn compile_all_with_options(template: &str, options: &CompileOptions) -> Result<Layouts> {
    let variants = expand_with_options(template, options)?;
    let mut layouts = Layouts::with_capacity(variants.len());
    for variant in &variants {
        let layout = translate_with_options(variant, options).map_err(|err| {
            debug!("failed to translate variant {:?}: {}", variant.render(), err);
            err
        })?;
        trace!("{:?} => {:?}", variant.render(), layout);
        layouts.insert(layout);
    }
    Ok(layouts)
}
