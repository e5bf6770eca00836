//! The glossary document model.
//!
//! On disk a glossary is JSON with `$`-prefixed reserved fields, so that a
//! translation may itself be named `version` without colliding with
//! `$version`:
//!
//! ```json
//! {
//!   "$version": "1.0.0",
//!   "$locale": "en-US",
//!   "$translations": {
//!     "app": { "title": "Welcome" },
//!     "greeting": {
//!       "$template": "Hello {name}",
//!       "$params": { "name": { "$default": "User" } }
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use bon::Builder;
use icu_locale_core::{Locale, ParseError as LocaleParseError};

use super::{FormatSpec, Key};
use crate::parser::{ParseError, parse_version};
use crate::path::resolve;

/// Nested translations keyed by identifier.
pub type TranslationMap = BTreeMap<String, TranslationNode>;

/// Nested parameter specs keyed by identifier.
pub type ParamMap = BTreeMap<String, ParamNode>;

/// A `major.minor.patch` glossary version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A BCP-47 locale tag, kept as written alongside its parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    tag: String,
    locale: Locale,
}

impl LocaleTag {
    /// Parse a locale tag such as `en-US`.
    pub fn parse(tag: &str) -> Result<LocaleTag, LocaleParseError> {
        let locale = tag.parse::<Locale>()?;
        Ok(LocaleTag {
            tag: tag.to_string(),
            locale,
        })
    }

    /// The tag as written in the glossary.
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// The parsed locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The language subtag, e.g. `en` for `en-US`.
    pub fn language(&self) -> &str {
        self.locale.id.language.as_str()
    }
}

impl From<Locale> for LocaleTag {
    fn from(locale: Locale) -> Self {
        LocaleTag {
            tag: locale.to_string(),
            locale,
        }
    }
}

impl Display for LocaleTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.tag)
    }
}

/// A node of the translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// A nested group of translations.
    Group(TranslationMap),
    /// A plain translation string, returned as is.
    Text(String),
    /// A template with parameter tokens.
    Template(Template),
}

/// A translation with `{param}` tokens.
///
/// # Example
///
/// ```
/// use glossa::{ParamNode, ParamSpec, Template};
///
/// let template = Template::builder()
///     .text("Hello {name}")
///     .params([(
///         "name".to_string(),
///         ParamNode::Spec(ParamSpec::builder().default("User").build()),
///     )].into())
///     .build();
///
/// assert_eq!(template.text, "Hello {name}");
/// assert!(template.param("name").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Template {
    /// The `$template` text.
    pub text: String,

    /// The `$params` tree; empty when absent.
    #[builder(default)]
    pub params: ParamMap,
}

impl Template {
    /// Look up the spec for a parameter by (possibly dotted) name.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        match resolve(&self.params, name, ".") {
            Some(ParamNode::Spec(spec)) => Some(spec),
            Some(ParamNode::Group(_)) | None => None,
        }
    }
}

/// A node of a template's `$params` tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamNode {
    Spec(ParamSpec),
    Group(ParamMap),
}

/// How a template parameter is read and rendered.
///
/// A spec with no `format` substitutes the argument as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct ParamSpec {
    /// Argument name to read instead of the parameter's own name.
    pub alias: Option<Key>,

    /// Text used verbatim when the argument is absent.
    #[builder(into)]
    pub default: Option<String>,

    pub format: Option<FormatSpec>,
}

impl ParamSpec {
    /// A spec with no alias, default or format.
    pub const EMPTY: ParamSpec = ParamSpec {
        alias: None,
        default: None,
        format: None,
    };
}

/// A validated, immutable set of translations for one locale.
///
/// Glossaries are usually loaded from JSON with
/// [`Glossary::from_json_str`] or [`Glossary::load`]; the builder is handy
/// for constructing one in code.
///
/// ```
/// use glossa::{Glossary, LocaleTag, TranslationNode};
///
/// let glossary = Glossary::builder()
///     .locale(LocaleTag::parse("en-US").unwrap())
///     .translations([(
///         "title".to_string(),
///         TranslationNode::Text("Welcome".to_string()),
///     )].into())
///     .build();
///
/// assert_eq!(glossary.locale().as_str(), "en-US");
/// assert_eq!(glossary.keys(), vec!["title"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Glossary {
    version: Option<Version>,

    #[builder(into)]
    locale: LocaleTag,

    #[builder(default)]
    translations: TranslationMap,
}

impl Glossary {
    /// The glossary's `$version`, if declared.
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// The glossary's locale. All formatting uses this locale.
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// The root of the translation tree.
    pub fn translations(&self) -> &TranslationMap {
        &self.translations
    }

    /// Resolve a dotted key to a node of the translation tree.
    pub fn get(&self, key: &str) -> Option<&TranslationNode> {
        resolve(&self.translations, key, ".")
    }

    /// All leaf translations with their full dotted keys, in tree order.
    pub fn entries(&self) -> Vec<(String, &TranslationNode)> {
        let mut out = Vec::new();
        collect_entries(&self.translations, "", &mut out);
        out
    }

    /// All leaf keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries().into_iter().map(|(key, _)| key).collect();
        keys.sort();
        keys
    }
}

fn collect_entries<'a>(
    map: &'a TranslationMap,
    prefix: &str,
    out: &mut Vec<(String, &'a TranslationNode)>,
) {
    for (name, node) in map {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match node {
            TranslationNode::Group(children) => collect_entries(children, &key, out),
            TranslationNode::Text(_) | TranslationNode::Template(_) => out.push((key, node)),
        }
    }
}
