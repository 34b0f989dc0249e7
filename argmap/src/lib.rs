//! Command-line argument table with typed lookup.
//!
//! `ArgMap::parse` walks an already-tokenized argument list (program name
//! excluded), splits each `-key[=value]` token, collapses `--key` to `-key`,
//! and records both the last value per key and every value per key. A
//! `-noXXX` key synthesizes a negated `-XXX` entry unless `-XXX` was given
//! explicitly. The typed accessors are total: an absent key falls back to the
//! caller's default, a present but unparsable value reads as zero.
//!
//! ```
//! use argmap::ArgMap;
//!
//! let map = ArgMap::from_tokens(["-port=3389", "-v", "-nodetach"]);
//! assert_eq!(map.get_int("-port", 389), 3389);
//! assert!(map.get_bool("-v"));
//! assert!(!map.get_bool_or("-detach", true));
//! ```

use std::collections::HashMap;

// ============================================================================
// Value interpretation
// ============================================================================

/// Base-10 integer reading of a raw option value. Anything that does not
/// parse in full (the empty string of a bare flag included) reads as 0.
fn int_of(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}

/// Boolean reading of a raw option value: a bare flag (`""`) is true,
/// otherwise the integer reading compared against zero.
fn bool_of(value: &str) -> bool {
    value.is_empty() || int_of(value) != 0
}

// ============================================================================
// ArgMap
// ============================================================================

/// Parsed invocation arguments: option table, multi-value record, and the
/// positional tail. Built once by [`ArgMap::parse`], then read-only; share
/// freely across threads after construction.
#[derive(Debug, Clone, Default)]
pub struct ArgMap {
    /// Last value seen per normalized key, or a synthesized negation value.
    args: HashMap<String, String>,
    /// Every value seen per key, in argument order.
    multi_args: HashMap<String, Vec<String>>,
    /// Tokens from the first non-option onward.
    positional: Vec<String>,
}

impl ArgMap {
    /// Empty table; every accessor falls back to its default.
    pub fn new() -> ArgMap {
        ArgMap::default()
    }

    /// Parse a fresh table from a token list.
    pub fn from_tokens<I, S>(tokens: I) -> ArgMap
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = ArgMap::new();
        map.parse(tokens);
        map
    }

    /// (Re)build the table from a token list. Previously parsed state is
    /// discarded first, so a second call never leaves stale entries behind.
    ///
    /// Option scanning stops at the first token whose key part does not
    /// start with `-`; that token and everything after it is recorded as
    /// positional, letting options share a token stream with trailing
    /// non-option arguments.
    pub fn parse<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.clear();
        self.multi_args.clear();
        self.positional.clear();

        let mut tokens = tokens.into_iter();
        for token in &mut tokens {
            let token = token.as_ref();
            let (key, value) = match token.find('=') {
                Some(pos) => (&token[..pos], &token[pos + 1..]),
                None => (token, ""),
            };
            if !key.starts_with('-') {
                self.positional.push(token.to_string());
                break;
            }
            // --key and -key name the same option.
            let key = if key.starts_with("--") { &key[1..] } else { key };
            self.args.insert(key.to_string(), value.to_string());
            self.multi_args
                .entry(key.to_string())
                .or_default()
                .push(value.to_string());
        }
        self.positional
            .extend(tokens.map(|t| t.as_ref().to_string()));

        self.interpret_negated();
    }

    /// Synthesize `-foo` from `-nofoo`: plain `-nofoo` reads as `-foo=0`,
    /// `-nofoo=0` as `-foo=1`. An explicit `-foo` entry always outranks the
    /// synthesized one, regardless of token order.
    fn interpret_negated(&mut self) {
        // Snapshot the candidates first; entries added below must not
        // themselves be resolved in the same pass.
        let negations: Vec<(String, bool)> = self
            .args
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix("-no")
                    .map(|rest| (format!("-{}", rest), !bool_of(value)))
            })
            .collect();

        for (positive, on) in negations {
            if self.args.contains_key(&positive) {
                continue;
            }
            let rendered = if on { "1" } else { "0" };
            self.args.insert(positive.clone(), rendered.to_string());
            self.multi_args
                .entry(positive)
                .or_default()
                .push(rendered.to_string());
        }
    }

    // ------------------------------------------------------------------
    // Typed accessors
    // ------------------------------------------------------------------

    /// String value of `name`, or `default` if `name` was never given.
    /// Presence decides, not content: a bare flag yields `""` here.
    pub fn get_str(&self, name: &str, default: &str) -> String {
        match self.args.get(name) {
            Some(value) => value.clone(),
            None => default.to_string(),
        }
    }

    /// Integer value of `name`. An absent key yields `default`; a present
    /// but unparsable value (a bare flag included) yields 0, not `default`.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.args.get(name) {
            Some(value) => int_of(value),
            None => default,
        }
    }

    /// Boolean value of `name`, false when absent.
    pub fn get_bool(&self, name: &str) -> bool {
        self.get_bool_or(name, false)
    }

    /// Boolean value of `name`, `default` when absent.
    pub fn get_bool_or(&self, name: &str, default: bool) -> bool {
        match self.args.get(name) {
            Some(value) => bool_of(value),
            None => default,
        }
    }

    /// Every value supplied for `name`, in argument order. Empty if the key
    /// was never given.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.multi_args.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `name` has an entry, explicit or synthesized.
    pub fn contains(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// All keys present in the table, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.args.keys().map(String::as_str)
    }

    /// Tokens from the first non-option onward.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    // ------------------------------------------------------------------
    // Soft defaults
    // ------------------------------------------------------------------

    /// Set `name` to `value` unless it already has an entry. Returns whether
    /// the value was inserted. Lets callers wire in fallback settings
    /// without overriding anything the user supplied.
    pub fn soft_set(&mut self, name: &str, value: &str) -> bool {
        if self.args.contains_key(name) {
            return false;
        }
        self.args.insert(name.to_string(), value.to_string());
        self.multi_args
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
        true
    }

    /// Set `name` to `"1"` or `"0"` unless it already has an entry.
    pub fn soft_set_bool(&mut self, name: &str, value: bool) -> bool {
        self.soft_set(name, if value { "1" } else { "0" })
    }
}
