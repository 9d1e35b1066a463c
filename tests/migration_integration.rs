use jira2gh_cli::formatting::reformat_markup;
use jira2gh_cli::migration::{distinct_fix_versions, map_issue, meta_comment};
use jira2gh_cli::models::{sort_by_key_sequence, Comment, MilestoneMap, SourceIssue};

fn issue(key: &str, summary: &str) -> SourceIssue {
    SourceIssue {
        key: key.to_string(),
        summary: summary.to_string(),
        description: Some("plain description".to_string()),
        status: "Open".to_string(),
        resolution: None,
        issue_type: "Bug".to_string(),
        creator: "alice".to_string(),
        fix_version: None,
        created: "2010-03-01T10:00:00.000+0000".to_string(),
        updated: "2010-04-01T10:00:00.000+0000".to_string(),
        comments: Vec::new(),
        attachments: Vec::new(),
    }
}

fn backlog_map() -> MilestoneMap {
    let mut map = MilestoneMap::new();
    map.insert("Backlog".to_string(), 1);
    map
}

#[test]
fn test_mapped_title_is_bracketed_key_then_summary() {
    let issues = vec![
        issue("TW-1", "first"),
        issue("TW-88", "second"),
        issue("OTHER-1307", "third"),
    ];
    let map = backlog_map();

    for i in &issues {
        let (payload, _) = map_issue(i, &map).unwrap();
        assert_eq!(payload.title, format!("[{}] {}", i.key, i.summary));
    }
}

#[test]
fn test_comment_count_is_source_count_plus_meta() {
    for n in 0..4 {
        let mut i = issue("TW-5", "comments");
        for k in 0..n {
            i.comments.push(Comment {
                author: format!("user{}", k),
                body: format!("comment {}", k),
                created: "2010-03-02T10:00:00.000+0000".to_string(),
            });
        }

        let (_, comments) = map_issue(&i, &backlog_map()).unwrap();
        let replayed = comments.len() + 1; // meta comment is always posted first
        assert_eq!(replayed, n + 1);
        assert!(!meta_comment(&i).body.is_empty());
    }
}

#[test]
fn test_markup_each_delimiter_replaced_exactly_once() {
    let text = "{quote}a{quote} {{b}} {code}c{code} {noformat}d{noformat}";
    let reformatted = reformat_markup(text);

    assert!(!reformatted.contains("{quote}"));
    assert!(!reformatted.contains("{{"));
    assert!(!reformatted.contains("{code}"));
    assert!(!reformatted.contains("{noformat}"));
    // A second pass finds nothing left to rewrite.
    assert_eq!(reformat_markup(&reformatted), reformatted);
}

#[test]
fn test_markup_idempotent_on_plain_text() {
    let plain = "already **markdown**, with `code` and > quotes";
    assert_eq!(reformat_markup(plain), plain);
}

#[test]
fn test_milestone_set_has_one_entry_per_distinct_value() {
    let mut issues = vec![issue("TW-1", "a"), issue("TW-2", "b"), issue("TW-3", "c"), issue("TW-4", "d")];
    issues[0].fix_version = Some("2.4.0".to_string());
    issues[1].fix_version = Some("2.4.0".to_string());
    issues[2].fix_version = Some("2.3.0".to_string());
    // issues[3] has none, so the sentinel joins the set

    let names = distinct_fix_versions(&issues);
    assert_eq!(names.len(), 3);
    assert!(names.contains("2.3.0"));
    assert!(names.contains("2.4.0"));
    assert!(names.contains("Backlog"));
}

#[test]
fn test_replay_order_is_numeric_for_any_input_order() {
    let orderings: Vec<Vec<&str>> = vec![
        vec!["TW-3", "TW-20", "TW-1", "TW-100"],
        vec!["TW-100", "TW-20", "TW-3", "TW-1"],
        vec!["TW-1", "TW-3", "TW-20", "TW-100"],
        vec!["TW-20", "TW-100", "TW-1", "TW-3"],
    ];

    for keys in orderings {
        let mut issues: Vec<SourceIssue> = keys.iter().map(|k| issue(k, "s")).collect();
        sort_by_key_sequence(&mut issues);

        let sequences: Vec<u64> = issues.iter().map(|i| i.sequence()).collect();
        assert_eq!(sequences, vec![1, 3, 20, 100]);
    }
}

// Source issue TW-42, status Resolved, no fix version, one comment.
#[test]
fn test_resolved_issue_without_fix_version() {
    let mut tw42 = issue("TW-42", "Recurring tasks duplicate");
    tw42.status = "Resolved".to_string();
    tw42.comments.push(Comment {
        author: "Bob".to_string(),
        body: "confirmed".to_string(),
        created: "2010-03-02T10:00:00.000+0000".to_string(),
    });

    let map = backlog_map();
    let (payload, comments) = map_issue(&tw42, &map).unwrap();

    assert!(payload.closed);
    assert_eq!(payload.milestone, map.get("Backlog"));
    // no resolution present, so the label list is the issue type alone
    assert_eq!(payload.labels, vec!["bug".to_string()]);
    // meta + the one real comment
    assert_eq!(comments.len() + 1, 2);
}
