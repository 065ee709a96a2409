//! Team name derivation from a loosely typed member list
//!
//! Member lists come from untyped sources (JSON, user input), so members are
//! modelled as a tagged [`Value`]. Only string members contribute a letter.

/// Dynamically typed input value
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Text member, the only kind that contributes to the name
    String(String),
    /// Numeric member
    Number(f64),
    /// Boolean member
    Boolean(bool),
    /// Missing member
    Null,
    /// A list; the only valid top-level input
    Array(Vec<Value>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::String(s) => Self::String(s),
            // f64 covers every JSON number the team builder could see
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            // An object member is never a string; treat it like any other skipped value
            serde_json::Value::Object(_) => Self::Null,
        }
    }
}

/// Build the team name, or `None` when `input` is not a list
pub fn create_dream_team(input: &Value) -> Option<String> {
    match input {
        Value::Array(members) => Some(team_name_from_members(members)),
        _ => None,
    }
}

/// Build the team name from a member list
///
/// 1. For each string member, trim it and take the first word (split on `' '`)
/// 2. Uppercase the first character of that word
/// 3. Sort the collected characters ascending and join them
///
/// Non-string members and whitespace-only strings contribute nothing.
pub fn team_name_from_members(members: &[Value]) -> String {
    let mut initials: Vec<char> = members
        .iter()
        .filter_map(|member| match member {
            Value::String(name) => initial_of(name),
            _ => None,
        })
        .flat_map(char::to_uppercase)
        .collect();

    initials.sort_unstable();
    initials.into_iter().collect()
}

/// First character of the first word of a trimmed name
fn initial_of(name: &str) -> Option<char> {
    name.trim().split(' ').next().and_then(|word| word.chars().next())
}
