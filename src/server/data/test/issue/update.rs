use super::*;
use crate::model::issue::UpdateIssueDto;

/// Tests a partial issue update.
///
/// Verifies that priority is sent in its canonical upper-case form under `changes`.
///
/// Expected: payload `{ "id", "changes": { "priority": "HIGHEST" } }`
#[tokio::test]
async fn sends_only_changed_fields() -> Result<(), TestError> {
    let record = IssueFactory::new()
        .id(8)
        .priority(IssuePriority::Highest)
        .build();
    let (test, client) =
        data_client(Script::new().on(Command::EditIssue, Step::found(&record))).await?;

    let repo = IssueRepository::new(&client);
    let params = UpdateIssueParams::from_dto(
        8,
        UpdateIssueDto {
            priority: Some(IssuePriority::Highest),
            ..Default::default()
        },
    );
    let issue = repo.update(params).await.unwrap().unwrap();

    assert_eq!(issue.priority, IssuePriority::Highest);
    assert_eq!(
        test.data()?.received()[0].payload,
        json!({ "id": 8, "changes": { "priority": "HIGHEST" } })
    );

    Ok(())
}

/// Tests updating an issue that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_issue() -> Result<(), TestError> {
    let (_test, client) =
        data_client(Script::new().on(Command::EditIssue, Step::not_found())).await?;

    let repo = IssueRepository::new(&client);
    let params = UpdateIssueParams::from_dto(
        404,
        UpdateIssueDto {
            title: Some("Renamed".to_string()),
            ..Default::default()
        },
    );

    assert!(repo.update(params).await.unwrap().is_none());

    Ok(())
}
