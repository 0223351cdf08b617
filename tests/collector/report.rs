use anyhow::Result;
use issue_collector::{
    config::Config,
    issues::{Issue, RESOLUTION_FIXED, RuleType, STATUS_CLOSED, STATUS_OPEN},
    summary::IssueSummary,
};
use pretty_assertions::assert_eq;

use crate::{Engine, Node};

fn decorated_project() -> Engine {
    Engine::new(Node::project(vec![Node::directory(
        "src",
        vec![
            Node::file(
                "src/a.rs",
                vec![
                    Issue::new("I1", RuleType::Bug)
                        .with_status(STATUS_OPEN)
                        .with_severity("MAJOR")
                        .with_effort_in_minutes(15),
                    Issue::new("I2", RuleType::CodeSmell)
                        .with_status(STATUS_OPEN)
                        .with_severity("MINOR")
                        .with_effort_in_minutes(5),
                ],
            ),
            Node::directory(
                "src/generated",
                vec![Node::file(
                    "src/generated/api.rs",
                    vec![
                        Issue::new("I3", RuleType::CodeSmell)
                            .with_status(STATUS_OPEN)
                            .with_severity("MINOR")
                            .with_effort_in_minutes(2),
                    ],
                )],
            ),
            Node::file(
                "src/c.rs",
                vec![
                    Issue::new("I4", RuleType::Vulnerability)
                        .with_status(STATUS_CLOSED)
                        .with_severity("CRITICAL")
                        .with_resolution(RESOLUTION_FIXED)
                        .with_effort_in_minutes(30),
                ],
            ),
        ],
    )]))
}

#[test]
fn test_serialized_snapshots() -> Result<()> {
    let engine = Engine::new(Node::project(vec![Node::file(
        "src/a.rs",
        vec![
            Issue::new("I1", RuleType::Bug)
                .with_status(STATUS_OPEN)
                .with_severity("MAJOR")
                .with_line(10)
                .with_message("Null pointer dereference")
                .with_effort_in_minutes(15),
        ],
    )]));
    let collector = engine.collect();
    let json = serde_json::to_string_pretty(collector.issues())?;

    insta::assert_snapshot!(json, @r#"
    [
      {
        "component": {
          "uuid": "u-src/a.rs",
          "key": "shop:src/a.rs",
          "componentType": "FILE",
          "name": "a.rs",
          "path": "src/a.rs"
        },
        "type": "BUG",
        "status": "OPEN",
        "severity": "MAJOR",
        "key": "I1",
        "line": 10,
        "message": "Null pointer dereference",
        "resolution": null,
        "effortInMinutes": 15
      }
    ]
    "#);

    Ok(())
}

#[test]
fn test_summary_with_excluded_components() -> Result<()> {
    let config = Config::from_json_str(r#"{ "excludedComponents": ["**/generated/**"] }"#)?;
    let collector = decorated_project().collect();
    let summary = collector.summarize(&config);

    insta::assert_snapshot!(serde_json::to_string_pretty(&summary)?, @r#"
    {
      "total": 3,
      "open": 2,
      "byType": {
        "CODE_SMELL": 1,
        "BUG": 1
      },
      "bySeverity": {
        "MAJOR": 1,
        "MINOR": 1
      },
      "effortInMinutes": 20
    }
    "#);

    Ok(())
}

#[test]
fn test_summary_leaves_collected_issues_untouched() -> Result<()> {
    let config = Config::from_json_str(r#"{ "excludedComponents": ["**/generated/**"] }"#)?;
    let collector = decorated_project().collect();
    let before = collector.issues().to_vec();

    let summary = collector.summarize(&config);

    assert_eq!(summary.total, 3);
    assert_eq!(collector.len(), 4);
    assert_eq!(collector.issues(), before.as_slice());

    Ok(())
}

#[test]
fn test_summary_matches_direct_computation() -> Result<()> {
    let config = Config::default();
    let collector = decorated_project().collect();

    let summary = collector.summarize(&config);

    assert_eq!(
        summary,
        IssueSummary::from_snapshots(collector.issues(), &config)
    );
    assert_eq!(summary.total, 4);
    assert_eq!(summary.open, 3);
    assert_eq!(summary.count_of(RuleType::CodeSmell), 2);
    assert_eq!(summary.effort_in_minutes, 22);

    Ok(())
}
