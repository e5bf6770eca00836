//! Core data types: the glossary model, runtime values and resolution results.

mod format_spec;
mod glossary;
mod issue;
mod key;
mod value;

pub use format_spec::{
    DateTimeOptions, DateTimeStyle, FormatKind, FormatSpec, ListOptions, ListStyle, ListType,
    NumberOptions, NumberStyle, Numeric, PluralOptions, PluralType, RelativeTimeOptions,
};
pub use glossary::{
    Glossary, LocaleTag, ParamMap, ParamNode, ParamSpec, Template, TranslationMap,
    TranslationNode, Version,
};
pub use issue::{Issue, Translated};
pub use key::Key;
pub use value::{Args, Value};
