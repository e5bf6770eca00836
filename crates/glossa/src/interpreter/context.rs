//! Per-call state for resolving one translation.

use std::mem;

use crate::path::resolve;
use crate::types::{Args, Issue, Translated, Value};

/// State carried through rendering a single `translate` call.
///
/// The context tracks the key being translated, the caller's arguments and
/// the issues recorded so far.
pub struct TranslateContext<'a> {
    key: &'a str,
    args: &'a Args,
    issues: Vec<Issue>,
}

impl<'a> TranslateContext<'a> {
    pub fn new(key: &'a str, args: &'a Args) -> Self {
        Self {
            key,
            args,
            issues: Vec::new(),
        }
    }

    /// The translation key being resolved.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Look up an argument by name.
    ///
    /// A name absent from the top level that contains dots is resolved as a
    /// path into nested map and list arguments, so `user.name` finds
    /// `args["user"]["name"]`.
    pub fn arg(&self, name: &str) -> Option<&'a Value> {
        self.args.get(name).or_else(|| {
            if name.contains('.') {
                resolve(self.args, name, ".")
            } else {
                None
            }
        })
    }

    /// Record an issue. Every offending token gets its own entry.
    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Issues recorded so far.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Finish with the rendered result.
    pub fn finish(&mut self, result: String) -> Translated {
        let issues = mem::take(&mut self.issues);
        Translated {
            result,
            issues: if issues.is_empty() { None } else { Some(issues) },
        }
    }
}
