use super::*;

/// Tests retrieving a comment.
///
/// Expected: 200 with the comment body
#[tokio::test]
async fn gets_comment() -> Result<(), TestError> {
    let record = CommentFactory::new().id(9).body("Looks good").build();
    let (test, app) =
        data_gateway(Script::new().on(Command::FindComment, Step::found(&record))).await?;

    let (status, body) = send(&app, Method::GET, "/comments/9", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"], "Looks good");
    assert_eq!(test.data()?.received()[0].payload, json!(9));

    Ok(())
}

/// Tests retrieving an unknown comment.
///
/// Expected: 404 with "Comment not found"
#[tokio::test]
async fn unknown_comment_is_not_found() -> Result<(), TestError> {
    let (_test, app) =
        data_gateway(Script::new().on(Command::FindComment, Step::not_found())).await?;

    let (status, body) = send(&app, Method::GET, "/comments/9", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Comment not found");

    Ok(())
}
