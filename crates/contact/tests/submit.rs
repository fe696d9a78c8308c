use portfolio_contact::{Command, ContactError, Query, SubmitFormInput};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn submit_stores_and_echoes_the_record() -> anyhow::Result<()> {
    let pool = helpers::setup_pool().await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let record = command
        .submit_form(SubmitFormInput {
            name: Some("Jo".to_owned()),
            email: Some("jo@example.com".to_owned()),
            subject: Some("Hi there".to_owned()),
            message: Some("This is long enough.".to_owned()),
            source_address: "203.0.113.7".to_owned(),
        })
        .await?;

    assert_eq!(record.name, "Jo");
    assert_eq!(record.email, "jo@example.com");
    assert_eq!(record.subject.as_deref(), Some("Hi there"));
    assert_eq!(record.source_address, "203.0.113.7");
    assert!(record.created_at > 0);

    let row = query.find(&record.id).await?.expect("stored row");
    assert_eq!(row.name, "Jo");
    assert_eq!(row.message, "This is long enough.");
    assert_eq!(row.created_at, record.created_at);
    assert_eq!(query.count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn each_missing_required_field_is_rejected() -> anyhow::Result<()> {
    let pool = helpers::setup_pool().await?;
    let command = Command(pool.clone());

    let missing = [
        SubmitFormInput {
            name: None,
            ..helpers::submission("Jo", "jo@example.com", "This is long enough.")
        },
        SubmitFormInput {
            email: None,
            ..helpers::submission("Jo", "jo@example.com", "This is long enough.")
        },
        SubmitFormInput {
            message: None,
            ..helpers::submission("Jo", "jo@example.com", "This is long enough.")
        },
    ];

    for input in missing {
        let err = command.submit_form(input).await.unwrap_err();
        assert!(matches!(err, ContactError::MissingFields));
        assert_eq!(err.to_string(), "Missing required fields");
    }

    // Nothing was appended along the way.
    assert_eq!(Query(pool).count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn subject_is_not_required_by_the_endpoint() -> anyhow::Result<()> {
    let pool = helpers::setup_pool().await?;
    let command = Command(pool.clone());

    let record = command
        .submit_form(helpers::submission(
            "Jo",
            "jo@example.com",
            "This is long enough.",
        ))
        .await?;
    assert_eq!(record.subject, None);

    let row = Query(pool).find(&record.id).await?.expect("stored row");
    assert_eq!(row.subject, None);

    Ok(())
}

#[tokio::test]
async fn bad_email_is_rejected_before_storage() -> anyhow::Result<()> {
    let pool = helpers::setup_pool().await?;
    let command = Command(pool.clone());

    for email in ["not-an-email", "", "jo@"] {
        let err = command
            .submit_form(helpers::submission("Jo", email, "This is long enough."))
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::InvalidEmail), "{email:?}");
        assert_eq!(err.to_string(), "Invalid email address");
    }

    assert_eq!(Query(pool).count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn markup_is_escaped_before_it_reaches_the_log() -> anyhow::Result<()> {
    let pool = helpers::setup_pool().await?;
    let command = Command(pool.clone());

    let record = command
        .submit_form(helpers::submission(
            "<b>Jo</b>",
            "jo@example.com",
            "Hello <script>alert('hi')</script> world",
        ))
        .await?;

    assert_eq!(record.name, "&lt;b&gt;Jo&lt;/b&gt;");

    let row = Query(pool).find(&record.id).await?.expect("stored row");
    assert!(!row.message.contains('<'));
    assert!(row.message.contains("&lt;script&gt;"));

    Ok(())
}

#[tokio::test]
async fn duplicates_append_as_separate_records_in_order() -> anyhow::Result<()> {
    let pool = helpers::setup_pool().await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let mut ids = Vec::new();
    for _ in 0..3 {
        let record = command
            .submit_form(helpers::submission(
                "Jo",
                "jo@example.com",
                "Same message every time.",
            ))
            .await?;
        ids.push(record.id);
    }

    let rows = query.list().await?;
    assert_eq!(rows.len(), 3);
    let listed: Vec<_> = rows.into_iter().map(|r| r.id).collect();
    assert_eq!(listed, ids);

    Ok(())
}

#[tokio::test]
async fn the_log_survives_a_reconnect() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("submissions.sqlite3");

    {
        let pool = helpers::setup_file_pool(&path).await?;
        Command(pool.clone())
            .submit_form(helpers::submission(
                "Jo",
                "jo@example.com",
                "This one should persist.",
            ))
            .await?;
        pool.close().await;
    }

    let pool = helpers::setup_file_pool(&path).await?;
    let rows = Query(pool).list().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].message, "This one should persist.");

    Ok(())
}
