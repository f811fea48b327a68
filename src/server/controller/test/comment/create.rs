use super::*;

/// Tests posting a comment.
///
/// Expected: 201 with the created comment
#[tokio::test]
async fn creates_comment() -> Result<(), TestError> {
    let record = CommentFactory::new().issue_id(3).build();
    let (_test, app) =
        data_gateway(Script::new().on(Command::CreateComment, Step::found(&record))).await?;

    let (status, body) = send(&app, Method::POST, "/comments", Some(request::create_comment(3, 1))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["issueId"], 3);

    Ok(())
}

/// Tests an empty comment body.
///
/// Expected: 400 and no command sent
#[tokio::test]
async fn rejects_blank_body() -> Result<(), TestError> {
    let (test, app) = data_gateway(Script::new()).await?;

    let (status, _) = send(
        &app,
        Method::POST,
        "/comments",
        Some(json!({ "body": "  ", "issueId": 3, "userId": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(test.data()?.received().is_empty());

    Ok(())
}
