//! Unit tests for the forum crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use auth::AuthenticatedUser;

    use crate::application::*;
    use crate::domain::repository::PostRepository;
    use crate::error::ForumError;
    use crate::infra::memory::InMemoryForumRepository;

    fn user(name: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_name: name.to_string(),
            expires_at: None,
        }
    }

    fn input(title: &str, link: Option<&str>) -> CreatePostInput {
        CreatePostInput {
            title: Some(title.to_string()),
            link: link.map(str::to_string),
        }
    }

    async fn seeded() -> (Arc<InMemoryForumRepository>, String) {
        let repo = Arc::new(InMemoryForumRepository::new());
        let post = CreatePostUseCase::new(repo.clone())
            .execute(&user("alice"), input("Hello", Some("https://example.com")))
            .await
            .unwrap();
        (repo, post.id.to_string())
    }

    #[tokio::test]
    async fn test_create_post_defaults() {
        let repo = Arc::new(InMemoryForumRepository::new());
        let post = CreatePostUseCase::new(repo.clone())
            .execute(&user("alice"), input("Hello", None))
            .await
            .unwrap();

        assert_eq!(post.author, "alice");
        assert_eq!(post.upvotes, 1);
        assert!(post.link.is_none());
        assert!(post.comment_ids.is_empty());

        let listed = ListPostsUseCase::new(repo).execute().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, post.id);
    }

    #[tokio::test]
    async fn test_create_post_without_title_stores_nothing() {
        let repo = Arc::new(InMemoryForumRepository::new());
        let use_case = CreatePostUseCase::new(repo.clone());

        for title in [None, Some(""), Some("   ")] {
            let err = use_case
                .execute(
                    &user("alice"),
                    CreatePostInput {
                        title: title.map(str::to_string),
                        link: Some("https://example.com".into()),
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err, ForumError::Validation(_)));
        }

        assert!(repo.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sequential_upvotes() {
        let (repo, post_id) = seeded().await;
        let use_case = UpvotePostUseCase::new(repo);

        let mut last = 0;
        for _ in 0..5 {
            last = use_case.execute(&post_id).await.unwrap().upvotes;
        }
        assert_eq!(last, 1 + 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_upvotes_are_not_lost() {
        let (repo, post_id) = seeded().await;
        let use_case = Arc::new(UpvotePostUseCase::new(repo.clone()));

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let use_case = use_case.clone();
                let post_id = post_id.clone();
                tokio::spawn(async move { use_case.execute(&post_id).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let post = GetPostUseCase::new(repo).execute(&post_id).await.unwrap();
        assert_eq!(post.post.upvotes, 51);
    }

    #[tokio::test]
    async fn test_concurrent_comment_upvotes_are_not_lost() {
        let (repo, post_id) = seeded().await;
        let comment = AddCommentUseCase::new(repo.clone())
            .execute(&user("bob"), &post_id, Some("nice"))
            .await
            .unwrap();
        let comment_id = comment.id.to_string();
        let use_case = Arc::new(UpvoteCommentUseCase::new(repo.clone()));

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let use_case = use_case.clone();
                let post_id = post_id.clone();
                let comment_id = comment_id.clone();
                tokio::spawn(async move { use_case.execute(&post_id, &comment_id).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let post = GetPostUseCase::new(repo).execute(&post_id).await.unwrap();
        assert_eq!(post.comments[0].upvotes, 51);
        assert_eq!(post.post.upvotes, 1);
    }

    #[tokio::test]
    async fn test_concurrent_comments_are_all_appended() {
        let (repo, post_id) = seeded().await;
        let use_case = Arc::new(AddCommentUseCase::new(repo.clone()));

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let use_case = use_case.clone();
                let post_id = post_id.clone();
                tokio::spawn(async move {
                    let body = format!("comment {i}");
                    use_case.execute(&user("bob"), &post_id, Some(body.as_str())).await
                })
            })
            .collect();
        let mut created = Vec::new();
        for handle in handles {
            created.push(handle.await.unwrap().unwrap().id);
        }

        let post = GetPostUseCase::new(repo).execute(&post_id).await.unwrap();
        assert_eq!(post.post.comment_ids.len(), 20);
        let mut listed: Vec<_> = post.comments.iter().map(|c| c.id).collect();
        assert_eq!(listed, post.post.comment_ids);
        listed.sort_by_key(|id| id.to_string());
        created.sort_by_key(|id| id.to_string());
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn test_unknown_and_unparseable_post_ids() {
        let (repo, _) = seeded().await;

        for id in ["not-a-uuid", "00000000-0000-0000-0000-000000000000"] {
            let err = GetPostUseCase::new(repo.clone()).execute(id).await.unwrap_err();
            assert!(matches!(err, ForumError::PostNotFound));

            let err = UpvotePostUseCase::new(repo.clone()).execute(id).await.unwrap_err();
            assert!(matches!(err, ForumError::PostNotFound));

            let err = AddCommentUseCase::new(repo.clone())
                .execute(&user("bob"), id, Some("hi"))
                .await
                .unwrap_err();
            assert!(matches!(err, ForumError::PostNotFound));
        }
    }

    #[tokio::test]
    async fn test_comments_in_append_order() {
        let (repo, post_id) = seeded().await;
        let add = AddCommentUseCase::new(repo.clone());

        let first = add.execute(&user("bob"), &post_id, Some("first")).await.unwrap();
        let second = add.execute(&user("carol"), &post_id, Some("second")).await.unwrap();
        assert_eq!(first.upvotes, 1);
        assert_eq!(first.post_id.to_string(), post_id);

        let detail = GetPostUseCase::new(repo).execute(&post_id).await.unwrap();
        assert_eq!(detail.post.comment_ids, vec![first.id, second.id]);
        let bodies: Vec<_> = detail.comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second"]);
        assert_eq!(detail.comments[1].author, "carol");
    }

    #[tokio::test]
    async fn test_blank_comment_rejected() {
        let (repo, post_id) = seeded().await;

        let err = AddCommentUseCase::new(repo.clone())
            .execute(&user("bob"), &post_id, Some("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, ForumError::Validation(_)));

        let detail = GetPostUseCase::new(repo).execute(&post_id).await.unwrap();
        assert!(detail.comments.is_empty());
    }

    #[tokio::test]
    async fn test_upvote_comment() {
        let (repo, post_id) = seeded().await;
        let comment = AddCommentUseCase::new(repo.clone())
            .execute(&user("bob"), &post_id, Some("nice"))
            .await
            .unwrap();
        let use_case = UpvoteCommentUseCase::new(repo.clone());
        let comment_id = comment.id.to_string();

        // Repeat votes by the same user are counted
        use_case.execute(&post_id, &comment_id).await.unwrap();
        let upvoted = use_case.execute(&post_id, &comment_id).await.unwrap();
        assert_eq!(upvoted.upvotes, 3);

        let err = use_case.execute(&post_id, "garbage").await.unwrap_err();
        assert!(matches!(err, ForumError::CommentNotFound));
    }

    #[tokio::test]
    async fn test_upvote_comment_on_wrong_post() {
        let (repo, post_id) = seeded().await;
        let other = CreatePostUseCase::new(repo.clone())
            .execute(&user("alice"), input("Other", None))
            .await
            .unwrap();
        let comment = AddCommentUseCase::new(repo.clone())
            .execute(&user("bob"), &post_id, Some("nice"))
            .await
            .unwrap();

        let err = UpvoteCommentUseCase::new(repo)
            .execute(&other.id.to_string(), &comment.id.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ForumError::CommentNotFound));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use auth::TokenService;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryForumRepository;
    use crate::presentation::router::forum_router_generic;

    fn app() -> (Router, String) {
        let tokens = Arc::new(TokenService::new(vec![5u8; 32], Duration::from_secs(600)));
        let token = tokens.issue("alice").unwrap();
        (
            forum_router_generic(InMemoryForumRepository::new(), tokens),
            token,
        )
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_reads_are_public_writes_are_not() {
        let (app, _) = app();

        let (status, body) = send(&app, request("GET", "/posts", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));

        let (status, body) = send(
            &app,
            request("POST", "/posts", None, Some(r#"{"title":"t","link":"l"}"#)),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "UNAUTHORIZED");

        let (_, body) = send(&app, request("GET", "/posts", None, None)).await;
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_post_lifecycle() {
        let (app, token) = app();

        let (status, post) = send(
            &app,
            request(
                "POST",
                "/posts",
                Some(&token),
                Some(r#"{"title":"Rust","link":"https://rust-lang.org"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(post["author"], "alice");
        assert_eq!(post["upvotes"], 1);
        let id = post["id"].as_str().unwrap().to_string();

        let (status, post) = send(
            &app,
            request("PUT", &format!("/posts/{id}/upvote"), Some(&token), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(post["upvotes"], 2);

        let (status, comment) = send(
            &app,
            request(
                "POST",
                &format!("/posts/{id}/comments"),
                Some(&token),
                Some(r#"{"body":"great"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(comment["post"], id.as_str());
        let comment_id = comment["id"].as_str().unwrap().to_string();

        let (status, comment) = send(
            &app,
            request(
                "PUT",
                &format!("/posts/{id}/comments/{comment_id}/upvote"),
                Some(&token),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(comment["upvotes"], 2);

        let (status, detail) = send(&app, request("GET", &format!("/posts/{id}"), None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["comments"][0]["body"], "great");
        assert_eq!(detail["comments"][0]["upvotes"], 2);

        let (_, list) = send(&app, request("GET", "/posts", None, None)).await;
        assert_eq!(list[0]["comments"][0], comment_id.as_str());
    }

    #[tokio::test]
    async fn test_missing_title_is_bad_request() {
        let (app, token) = app();

        let (status, body) = send(
            &app,
            request("POST", "/posts", Some(&token), Some(r#"{"link":"https://x.y"}"#)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (_, list) = send(&app, request("GET", "/posts", None, None)).await;
        assert_eq!(list, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let (app, token) = app();

        let (status, body) = send(&app, request("GET", "/posts/nope", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");

        let missing = uuid::Uuid::new_v4();
        let (status, _) = send(
            &app,
            request("PUT", &format!("/posts/{missing}/upvote"), Some(&token), None),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            request(
                "POST",
                &format!("/posts/{missing}/comments"),
                Some(&token),
                Some(r#"{"body":"hi"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
