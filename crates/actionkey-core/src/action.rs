use crate::error::{ActionKeyError, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Separators
// ---------------------------------------------------------------------------

/// Joins a namespace and an action type: `my-app/todos`.
pub const NAMESPACE_SEPARATOR: &str = "/";

/// Joins an action name and a sub-action suffix: `my-app/todos_LOADING`.
pub const SUBACTION_SEPARATOR: &str = "_";

// ---------------------------------------------------------------------------
// Namespace
// ---------------------------------------------------------------------------

/// Where an action is scoped. Either a plain prefix or a previously built
/// token, whose canonical name becomes the prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Namespace<'a> {
    #[default]
    None,
    Str(Cow<'a, str>),
    Token(&'a ActionToken),
}

impl Namespace<'_> {
    /// The prefix this namespace contributes, or `None` when it is absent.
    /// An empty string counts as absent.
    pub fn prefix(&self) -> Option<&str> {
        match self {
            Namespace::None => None,
            Namespace::Str(s) if s.is_empty() => None,
            Namespace::Str(s) => Some(s.as_ref()),
            Namespace::Token(token) => Some(token.name()),
        }
    }
}

impl<'a> From<&'a str> for Namespace<'a> {
    fn from(s: &'a str) -> Self {
        Namespace::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Namespace<'a> {
    fn from(s: &'a String) -> Self {
        Namespace::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Namespace<'_> {
    fn from(s: String) -> Self {
        Namespace::Str(Cow::Owned(s))
    }
}

impl<'a> From<&'a ActionToken> for Namespace<'a> {
    fn from(token: &'a ActionToken) -> Self {
        Namespace::Token(token)
    }
}

impl<'a, T: Into<Namespace<'a>>> From<Option<T>> for Namespace<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Subactions
// ---------------------------------------------------------------------------

/// The second argument of [`define_action`].
///
/// A list of suffixes is the common case. Passing something namespace-shaped
/// (a string or a token) instead moves it into the namespace slot, so
/// `define_action("todos", "my-app", Namespace::None)` scopes `todos` under
/// `my-app` with no sub-actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Subactions<'a> {
    #[default]
    None,
    List(Vec<String>),
    Namespace(Namespace<'a>),
}

impl From<Vec<String>> for Subactions<'_> {
    fn from(list: Vec<String>) -> Self {
        Subactions::List(list)
    }
}

impl From<Vec<&str>> for Subactions<'_> {
    fn from(list: Vec<&str>) -> Self {
        Subactions::List(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Subactions<'_> {
    fn from(list: &[&str]) -> Self {
        Subactions::List(list.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for Subactions<'_> {
    fn from(list: &[String]) -> Self {
        Subactions::List(list.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Subactions<'_> {
    fn from(list: [&str; N]) -> Self {
        Subactions::List(list.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<&[&str; N]> for Subactions<'_> {
    fn from(list: &[&str; N]) -> Self {
        Subactions::List(list.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a> From<&'a str> for Subactions<'a> {
    fn from(s: &'a str) -> Self {
        Subactions::Namespace(s.into())
    }
}

impl From<String> for Subactions<'_> {
    fn from(s: String) -> Self {
        Subactions::Namespace(s.into())
    }
}

impl<'a> From<&'a ActionToken> for Subactions<'a> {
    fn from(token: &'a ActionToken) -> Self {
        Subactions::Namespace(Namespace::Token(token))
    }
}

impl<'a> From<Namespace<'a>> for Subactions<'a> {
    /// An absent namespace is not namespace-shaped: it becomes an empty list
    /// and leaves the separate namespace argument in effect.
    fn from(ns: Namespace<'a>) -> Self {
        match ns {
            Namespace::None => Subactions::None,
            ns => Subactions::Namespace(ns),
        }
    }
}

impl<'a, T: Into<Subactions<'a>>> From<Option<T>> for Subactions<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// ActionToken
// ---------------------------------------------------------------------------

/// A namespaced action type plus its sub-action variants.
///
/// Tokens are plain values: two built from the same inputs compare equal,
/// and nothing is shared between them. Sub-actions belong to the token that
/// declared them and are never inherited by tokens derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActionToken {
    name: String,
    subactions: BTreeMap<String, String>,
}

impl ActionToken {
    /// A bare action with no namespace and no sub-actions.
    pub fn new(action_type: &str) -> Result<Self> {
        define_action(action_type, Subactions::None, Namespace::None)
    }

    /// An action with sub-actions and no namespace.
    pub fn with_subactions<'a>(
        action_type: &str,
        subactions: impl Into<Subactions<'a>>,
    ) -> Result<Self> {
        define_action(action_type, subactions, Namespace::None)
    }

    /// Build a child action scoped under this one.
    ///
    /// Same as calling [`define_action`] with this token's name as the
    /// namespace, including the rule that a namespace-shaped second argument
    /// takes the namespace slot.
    pub fn define_action<'a>(
        &self,
        action_type: &str,
        subactions: impl Into<Subactions<'a>>,
    ) -> Result<ActionToken> {
        let subactions: Subactions<'a> = subactions.into();
        define_action(action_type, subactions, Namespace::Token(self))
    }

    /// Fully-qualified name, e.g. `my-app/todos/CREATE`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base action key. Always equal to [`name`](Self::name) and never
    /// shadowed by a sub-action.
    pub fn action(&self) -> &str {
        &self.name
    }

    /// Fully-qualified sub-action key for `suffix`, if it was declared.
    pub fn get(&self, suffix: &str) -> Option<&str> {
        self.subactions.get(suffix).map(String::as_str)
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.subactions.contains_key(suffix)
    }

    /// `(suffix, key)` pairs in suffix order.
    pub fn subactions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.subactions
            .iter()
            .map(|(suffix, key)| (suffix.as_str(), key.as_str()))
    }

    pub fn len(&self) -> usize {
        self.subactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subactions.is_empty()
    }

    /// Every dispatch key this token contributes: the name, then each
    /// sub-action key.
    pub fn keys(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.subactions.values().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for ActionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for ActionToken {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<ActionToken> for String {
    fn from(token: ActionToken) -> Self {
        token.name
    }
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Build an [`ActionToken`].
///
/// The name is `namespace/action_type`, or just `action_type` when the
/// namespace is absent or empty. Each suffix `S` becomes `name_S`. When
/// `subactions` is namespace-shaped it replaces `namespace`, which is then
/// ignored.
///
/// Fails with [`ActionKeyError::InvalidArgument`] if `action_type` is empty
/// or whitespace-only, or if a suffix is empty.
pub fn define_action<'a>(
    action_type: &str,
    subactions: impl Into<Subactions<'a>>,
    namespace: impl Into<Namespace<'a>>,
) -> Result<ActionToken> {
    let subactions: Subactions<'a> = subactions.into();
    let namespace: Namespace<'a> = namespace.into();
    match subactions {
        Subactions::Namespace(shifted) => build(action_type, Vec::new(), shifted.prefix()),
        Subactions::List(list) => build(action_type, list, namespace.prefix()),
        Subactions::None => build(action_type, Vec::new(), namespace.prefix()),
    }
}

fn build(action_type: &str, suffixes: Vec<String>, prefix: Option<&str>) -> Result<ActionToken> {
    if action_type.trim().is_empty() {
        return Err(ActionKeyError::InvalidArgument(
            "action type must be a non-empty string".to_string(),
        ));
    }

    let name = match prefix {
        Some(prefix) => format!("{prefix}{NAMESPACE_SEPARATOR}{action_type}"),
        None => action_type.to_string(),
    };

    let mut subactions = BTreeMap::new();
    for suffix in suffixes {
        if suffix.is_empty() {
            return Err(ActionKeyError::InvalidArgument(format!(
                "empty sub-action suffix on '{name}'"
            )));
        }
        let key = format!("{name}{SUBACTION_SEPARATOR}{suffix}");
        subactions.insert(suffix, key);
    }

    Ok(ActionToken { name, subactions })
}
