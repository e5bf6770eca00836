//! Glossary lookup and locale-aware template rendering.
//!
//! A [`Glossary`] maps dotted keys to plain strings or templates. Templates
//! contain `{param}` tokens that are filled from runtime [`Args`], optionally
//! formatted as dates, numbers, lists, plural categories or relative times for
//! the glossary's locale. Resolution never fails: problems are reported as
//! [`Issue`]s next to a best-effort result string.
//!
//! ```
//! use glossa::{Glossary, args};
//!
//! let glossary = Glossary::from_json_str(r#"{
//!     "$locale": "en-US",
//!     "$translations": {
//!         "greeting": {
//!             "$template": "Hello {name}!",
//!             "$params": { "name": { "$default": "User" } }
//!         }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(glossary.translate("greeting", &args! {}).result, "Hello User!");
//! assert_eq!(glossary.translate("greeting", &args! { "name" => "Ada" }).result, "Hello Ada!");
//! ```

pub mod format;
pub mod interpreter;
pub mod parser;
pub mod path;
pub mod schema;
pub mod types;

pub use format::{FormatError, IcuFormatter, LocaleFormatter};
pub use interpreter::{
    LintWarning, LoadError, compute_suggestions, lint_glossary, translate, translate_with,
};
pub use schema::SchemaError;
pub use types::{
    Args, FormatKind, FormatSpec, Glossary, Issue, Key, LocaleTag, ParamNode, ParamSpec, Template,
    Translated, TranslationNode, Value, Version,
};

/// Creates an [`Args`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings,
/// booleans and nested [`Value`]s can be passed directly.
///
/// ```
/// use glossa::{Value, args};
///
/// let a = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["count"].as_number(), Some(3));
/// assert_eq!(a["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
