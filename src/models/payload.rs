use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{MigrateError, MigrateResult};

/// Creation payload for one target issue. Serializes to the body of
/// `POST /repos/{org}/{repo}/issues`; `closed` is not part of the wire
/// format and drives the follow-up state patch instead.
#[derive(Debug, Serialize, Clone)]
pub struct IssuePayload {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    #[serde(skip)]
    pub closed: bool,
}

/// Creation payload for one target comment. The original author survives
/// only textually, inside the body.
#[derive(Debug, Serialize, Clone)]
pub struct CommentPayload {
    pub body: String,
}

/// Immutable map from fix-version name to target milestone number. Built
/// once by the provisioner before any replay begins, then only read.
#[derive(Debug, Default, Clone)]
pub struct MilestoneMap {
    entries: BTreeMap<String, u64>,
}

impl MilestoneMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, number: u64) {
        self.entries.insert(name, number);
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.get(name).copied()
    }

    /// Lookup that treats an absent entry as the precondition violation it
    /// is: the map must cover every fix version before mapping starts.
    pub fn resolve(&self, name: &str) -> MigrateResult<u64> {
        self.get(name)
            .ok_or_else(|| MigrateError::MissingMilestone(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_payload_wire_format() {
        let payload = IssuePayload {
            title: "[TW-1] A bug".to_string(),
            body: "_alice says:_ \n\n broken".to_string(),
            labels: vec!["bug".to_string(), "fixed".to_string()],
            milestone: Some(3),
            closed: true,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["title"], "[TW-1] A bug");
        assert_eq!(json["milestone"], 3);
        assert_eq!(json["labels"].as_array().unwrap().len(), 2);
        // closed drives the state patch, never the create body
        assert!(json.get("closed").is_none());
        assert!(json.get("state").is_none());
    }

    #[test]
    fn test_issue_payload_omits_absent_milestone() {
        let payload = IssuePayload {
            title: "t".to_string(),
            body: "b".to_string(),
            labels: Vec::new(),
            milestone: None,
            closed: false,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("milestone").is_none());
    }

    #[test]
    fn test_milestone_map_resolve() {
        let mut map = MilestoneMap::new();
        map.insert("Backlog".to_string(), 1);
        map.insert("2.4.0".to_string(), 2);

        assert_eq!(map.resolve("2.4.0").unwrap(), 2);
        assert!(matches!(
            map.resolve("2.5.0"),
            Err(crate::error::MigrateError::MissingMilestone(name)) if name == "2.5.0"
        ));
    }
}
