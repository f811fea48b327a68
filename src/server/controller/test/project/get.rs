use super::*;

/// Tests retrieving a project by id.
///
/// Expected: 200 with the project
#[tokio::test]
async fn gets_project() -> Result<(), TestError> {
    let record = create_project();
    let (_test, app) =
        data_gateway(Script::new().on(Command::FindProject, Step::found(&record))).await?;

    let (status, body) = send(&app, Method::GET, &format!("/projects/{}", record.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], record.id);

    Ok(())
}

/// Tests ids that cannot address a project.
///
/// Expected: 400 for a non-numeric and a non-positive id, no command sent
#[tokio::test]
async fn rejects_invalid_id() -> Result<(), TestError> {
    let (test, app) = data_gateway(Script::new()).await?;

    for uri in ["/projects/abc", "/projects/0", "/projects/-3"] {
        let (status, _) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", uri);
    }
    assert!(test.data()?.received().is_empty());

    Ok(())
}

/// Tests retrieving an unknown project.
///
/// Expected: 404 with "Project not found"
#[tokio::test]
async fn unknown_project_is_not_found() -> Result<(), TestError> {
    let (_test, app) =
        data_gateway(Script::new().on(Command::FindProject, Step::not_found())).await?;

    let (status, body) = send(&app, Method::GET, "/projects/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Project not found");

    Ok(())
}
