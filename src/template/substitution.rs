//! Literal placeholder substitution

pub const SALUTATION: &str = "[[Salutation]]";
pub const BODY: &str = "[[Body]]";
pub const REQUEST_TYPE: &str = "[[REQUEST-TYPE]]";
pub const WORK_TYPE: &str = "__WORKTYPE__";
pub const DEVELOPER_NAME: &str = "__DEVELOPERNAME__";
pub const DATE: &str = "__DATE__";
pub const NO_OF_DAYS: &str = "__NOOFDAYS__";
pub const STATUS: &str = "__STATUS__";
pub const STATUS_COLOR: &str = "__STATUSCOLOR__";
pub const MESSAGE: &str = "__MESSAGE__";
pub const MOBILE_NO: &str = "__MOBILENO__";
pub const COMPANY_NAME: &str = "__COMPANYNAME__";
pub const ENCLOSING_STATEMENT: &str = "__ENCLOSINGSTATEMENT__";

/// Every token the attendance markup may carry.
pub const ALL_TOKENS: [&str; 13] = [
    SALUTATION,
    BODY,
    REQUEST_TYPE,
    WORK_TYPE,
    DEVELOPER_NAME,
    DATE,
    NO_OF_DAYS,
    STATUS,
    STATUS_COLOR,
    MESSAGE,
    MOBILE_NO,
    COMPANY_NAME,
    ENCLOSING_STATEMENT,
];

/// Ordered set of literal token replacements.
///
/// Tokens are disjoint literals, so the order only matters if a replacement
/// value itself contains a later token. Values are applied in insertion
/// order and each token is replaced everywhere it occurs.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    entries: Vec<(&'static str, String)>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a replacement. Re-binding a token overwrites the earlier value.
    pub fn bind(mut self, token: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((token, value)),
        }
        self
    }

    /// Bind an optional value; `None` substitutes the empty string.
    pub fn bind_opt(self, token: &'static str, value: Option<&str>) -> Self {
        self.bind(token, value.unwrap_or_default())
    }

    /// Produce a new string with every bound token replaced.
    /// Unbound tokens are left verbatim.
    pub fn apply(&self, markup: &str) -> String {
        self.entries
            .iter()
            .fold(markup.to_string(), |acc, (token, value)| {
                acc.replace(token, value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_every_occurrence() {
        let tokens = TokenSet::new().bind(DEVELOPER_NAME, "Jane");
        let out = tokens.apply("__DEVELOPERNAME__ / __DEVELOPERNAME__");
        assert_eq!(out, "Jane / Jane");
    }

    #[test]
    fn test_unbound_tokens_are_left_verbatim() {
        let tokens = TokenSet::new().bind(STATUS, "approved");
        let out = tokens.apply("__STATUS__ __MOBILENO__ __UNKNOWN__");
        assert_eq!(out, "approved __MOBILENO__ __UNKNOWN__");
    }

    #[test]
    fn test_bind_opt_none_is_empty() {
        let tokens = TokenSet::new().bind_opt(WORK_TYPE, None);
        assert_eq!(tokens.apply("[__WORKTYPE__]"), "[]");
    }

    #[test]
    fn test_rebind_overwrites() {
        let tokens = TokenSet::new().bind(STATUS, "a").bind(STATUS, "b");
        assert_eq!(tokens.apply("__STATUS__ __STATUS__"), "b b");
    }

    #[test]
    fn test_apply_does_not_touch_input() {
        let markup = String::from("Hello [[Salutation]]");
        let out = TokenSet::new().bind(SALUTATION, "Team").apply(&markup);
        assert_eq!(markup, "Hello [[Salutation]]");
        assert_eq!(out, "Hello Team");
    }

    #[test]
    fn test_empty_set_is_identity() {
        let tokens = TokenSet::new();
        assert_eq!(tokens.apply("__DATE__"), "__DATE__");
    }
}
