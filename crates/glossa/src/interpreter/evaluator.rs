//! Template evaluation.
//!
//! A template is scanned once into literal text and `{param}` tokens. Each
//! token is resolved against its parameter spec and the caller's arguments.
//! When a plural parameter selects a `$plural` message variant, the variant
//! replaces the template body before tokens are resolved.

use icu_locale_core::Locale;

use super::context::TranslateContext;
use crate::format::{IcuFormatter, LocaleFormatter, format_value, select_plural};
use crate::parser::{Message, Segment, parse_template};
use crate::schema::input::NumberInput;
use crate::types::{
    Args, FormatSpec, Glossary, Issue, NumberOptions, ParamSpec, Template, Translated,
    TranslationNode, Value,
};

static EMPTY_SPEC: ParamSpec = ParamSpec::EMPTY;

/// Resolve `key` in `glossary` and render it with `args`.
///
/// Never fails: unknown keys, missing arguments and invalid values are
/// reported as [`Issue`]s alongside a best-effort result.
///
/// ```
/// use glossa::{Glossary, Issue, args, translate};
///
/// let glossary = Glossary::from_json_str(r#"{
///     "$locale": "en-US",
///     "$translations": { "title": "Welcome" }
/// }"#).unwrap();
///
/// assert_eq!(translate(&glossary, "title", &args! {}).result, "Welcome");
///
/// let missing = translate(&glossary, "nope", &args! {});
/// assert_eq!(missing.result, "nope");
/// assert_eq!(missing.issues(), [Issue::UnknownKey { key: "nope".to_string() }]);
/// ```
pub fn translate(glossary: &Glossary, key: &str, args: &Args) -> Translated {
    translate_with(&IcuFormatter, glossary, key, args)
}

/// Like [`translate`], formatting values with a custom [`LocaleFormatter`].
pub fn translate_with(
    formatter: &dyn LocaleFormatter,
    glossary: &Glossary,
    key: &str,
    args: &Args,
) -> Translated {
    let template = match glossary.get(key) {
        Some(TranslationNode::Text(text)) => return Translated::clean(text.clone()),
        Some(TranslationNode::Template(template)) => template,
        Some(TranslationNode::Group(_)) | None => {
            tracing::debug!(key, "unknown translation key");
            return Translated::unknown_key(key);
        }
    };

    let renderer = Renderer {
        formatter,
        locale: glossary.locale().locale(),
        template,
    };
    let mut ctx = TranslateContext::new(key, args);
    let message = parse_template(&template.text);
    let result = match renderer.select_variant(&message, &ctx) {
        Some(variant) => {
            tracing::trace!(key, param = variant.param, "plural variant selected");
            let body = parse_template(variant.body);
            renderer.render(&body, &mut ctx, Some(&variant))
        }
        None => renderer.render(&message, &mut ctx, None),
    };
    ctx.finish(result)
}

impl Glossary {
    /// Resolve `key` and render it with `args` using ICU formatting.
    ///
    /// See [`translate`].
    pub fn translate(&self, key: &str, args: &Args) -> Translated {
        translate(self, key, args)
    }
}

/// A `$plural` message variant chosen by a parameter's value.
struct Variant<'a> {
    param: &'a str,
    body: &'a str,
    value: f64,
}

struct Renderer<'a> {
    formatter: &'a dyn LocaleFormatter,
    locale: &'a Locale,
    template: &'a Template,
}

impl<'a> Renderer<'a> {
    /// The spec for a parameter; undeclared parameters get an empty spec.
    fn param_spec(&self, param: &str) -> &'a ParamSpec {
        self.template.param(param).unwrap_or(&EMPTY_SPEC)
    }

    /// The argument name a parameter reads.
    fn lookup_name<'s>(spec: &'s ParamSpec, param: &'s str) -> &'s str {
        spec.alias.as_ref().map_or(param, |alias| alias.as_str())
    }

    /// Find the first plural token whose value selects a mapped variant.
    fn select_variant<'m>(
        &self,
        message: &'m Message,
        ctx: &TranslateContext<'_>,
    ) -> Option<Variant<'m>>
    where
        'a: 'm,
    {
        message.params().find_map(|param| {
            let spec = self.param_spec(param);
            let Some(FormatSpec::Plural {
                options,
                categories: Some(categories),
            }) = &spec.format
            else {
                return None;
            };
            let raw = ctx.arg(Self::lookup_name(spec, param))?;
            let selection =
                select_plural(self.formatter, self.locale, raw, options, Some(categories)).ok()?;
            Some(Variant {
                param,
                body: selection.variant?,
                value: selection.value,
            })
        })
    }

    fn render(
        &self,
        message: &Message,
        ctx: &mut TranslateContext<'_>,
        variant: Option<&Variant<'_>>,
    ) -> String {
        let mut out = String::new();
        for segment in &message.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(param) => match variant {
                    Some(variant) if variant.param == param.as_str() => {
                        out.push_str(&self.selected_count(variant));
                    }
                    _ => out.push_str(&self.resolve_param(param, ctx)),
                },
            }
        }
        out
    }

    /// The selecting parameter's value inside its own variant.
    fn selected_count(&self, variant: &Variant<'_>) -> String {
        let input = NumberInput::Finite(variant.value);
        self.formatter
            .format_number(self.locale, input, &NumberOptions::default())
            .unwrap_or_else(|_| Value::Float(variant.value).to_string())
    }

    fn resolve_param(&self, param: &str, ctx: &mut TranslateContext<'_>) -> String {
        let spec = self.param_spec(param);
        let name = Self::lookup_name(spec, param);

        let Some(value) = ctx.arg(name) else {
            if let Some(default) = &spec.default {
                return default.clone();
            }
            tracing::debug!(key = ctx.key(), param, "missing template parameter");
            ctx.add_issue(Issue::MissingParam {
                key: ctx.key().to_string(),
                param: param.to_string(),
            });
            return param.to_string();
        };

        let Some(format) = &spec.format else {
            return value.to_string();
        };
        match format_value(self.formatter, self.locale, value, format) {
            Ok(text) => {
                tracing::trace!(key = ctx.key(), param, format = %format.kind(), "formatted parameter");
                text
            }
            Err(error) => {
                tracing::debug!(key = ctx.key(), param, %error, "invalid parameter value");
                ctx.add_issue(Issue::InvalidFormat {
                    key: ctx.key().to_string(),
                    param: param.to_string(),
                    value: value.clone(),
                    error,
                });
                value.to_string()
            }
        }
    }
}
