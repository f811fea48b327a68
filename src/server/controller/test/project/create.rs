use super::*;

/// Tests creating a project.
///
/// Expected: 201 with the created project
#[tokio::test]
async fn creates_project() -> Result<(), TestError> {
    let record = ProjectFactory::new().name("Analytical Engine").build();
    let (test, app) =
        data_gateway(Script::new().on(Command::CreateProject, Step::found(&record))).await?;

    let (status, body) = send(&app, Method::POST, "/projects", Some(request::create_project())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Analytical Engine");
    assert_eq!(test.data()?.received()[0].payload["category"], "SOFTWARE");

    Ok(())
}

/// Tests an unknown project category.
///
/// Expected: 400 and no command sent
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), TestError> {
    let (test, app) = data_gateway(Script::new()).await?;

    let mut body = request::create_project();
    body["category"] = json!("GAMES");
    let (status, _) = send(&app, Method::POST, "/projects", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(test.data()?.received().is_empty());

    Ok(())
}
