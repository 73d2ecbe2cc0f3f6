use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Abbreviation to expansion mapping, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Triggers(BTreeMap<String, String>);

impl Triggers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, short: &str) -> Option<&str> {
        self.0.get(short).map(String::as_str)
    }

    pub fn insert(&mut self, short: String, expansion: String) -> Option<String> {
        self.0.insert(short, expansion)
    }

    pub fn remove(&mut self, short: &str) -> Option<String> {
        self.0.remove(short)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Triggers {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Triggers(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_object() {
        let triggers: Triggers = [
            ("gc".to_string(), "git commit".to_string()),
            ("gp".to_string(), "git push".to_string()),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string_pretty(&triggers).unwrap();
        assert_eq!(json, "{\n  \"gc\": \"git commit\",\n  \"gp\": \"git push\"\n}");
    }

    #[test]
    fn insert_replaces_previous_value() {
        let mut triggers = Triggers::new();
        assert_eq!(triggers.insert("gc".into(), "git commit".into()), None);
        assert_eq!(
            triggers.insert("gc".into(), "git checkout".into()),
            Some("git commit".to_string())
        );
        assert_eq!(triggers.get("gc"), Some("git checkout"));
        assert_eq!(triggers.len(), 1);
    }
}
