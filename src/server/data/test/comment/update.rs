use super::*;

/// Tests editing a comment body.
///
/// Expected: Ok(Some(Comment)) with the new body
#[tokio::test]
async fn updates_body() -> Result<(), TestError> {
    let record = CommentFactory::new().id(6).body("Edited").build();
    let (test, client) =
        data_client(Script::new().on(Command::EditComment, Step::found(&record))).await?;

    let repo = CommentRepository::new(&client);
    let comment = repo
        .update(UpdateCommentParams {
            id: 6,
            body: Some("Edited".to_string()),
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(comment.body, "Edited");
    assert_eq!(
        test.data()?.received()[0].payload,
        json!({ "id": 6, "changes": { "body": "Edited" } })
    );

    Ok(())
}

/// Tests editing a comment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_comment() -> Result<(), TestError> {
    let (_test, client) =
        data_client(Script::new().on(Command::EditComment, Step::not_found())).await?;

    let repo = CommentRepository::new(&client);
    let result = repo
        .update(UpdateCommentParams {
            id: 404,
            body: Some("Edited".to_string()),
        })
        .await
        .unwrap();

    assert!(result.is_none());

    Ok(())
}
