mod common;

use common::{article_json, feature_json, service_json};
use serde_json::json;
use site_core::{
    models::{Homepage, Service},
    AppError, CmsClient, CmsConfig, ContentQuery, ContentService, ContentSource,
};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn service_for(server: &MockServer) -> ContentService {
    ContentService::new(CmsClient::new(CmsConfig::new(server.uri())).unwrap())
}

#[tokio::test]
async fn test_features_sorted_by_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/features"))
        .and(query_param("populate", "*"))
        .and(query_param("sort[0]", "order:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [feature_json(1, "Never pack walk", 1), feature_json(2, "Family business", 2)],
            "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 2 } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let features = service_for(&server).features().await.unwrap();
    assert_eq!(features.data.len(), 2);
    assert_eq!(features.data[0].title, "Never pack walk");
    assert_eq!(features.pagination().unwrap().total, 2);

    let requests = server.received_requests().await.unwrap();
    let sort_params: Vec<_> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k.starts_with("sort"))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(sort_params, vec![("sort[0]".to_string(), "order:asc".to_string())]);
}

#[tokio::test]
async fn test_bearer_token_attached_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/services"))
        .and(header("authorization", "Bearer s3cret"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let config = CmsConfig::new(server.uri()).with_api_token("s3cret");
    let service = ContentService::new(CmsClient::new(config).unwrap());

    let services = service.services().await.unwrap();
    assert!(services.data.is_empty());
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/homepage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null, "meta": {} })))
        .mount(&server)
        .await;

    let homepage = service_for(&server).homepage().await.unwrap();
    assert!(homepage.data.is_none());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_error_status_names_path_and_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service_for(&server).services().await.unwrap_err();
    match &err {
        AppError::Fetch { path, status, .. } => {
            assert_eq!(path, "/services");
            assert_eq!(*status, 500);
        }
        other => panic!("expected fetch error, got {:?}", other),
    }
    assert!(err.to_string().contains("/services"));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_not_found_status_is_an_error_for_collections() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/global"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = service_for(&server).global().await.unwrap_err();
    assert_eq!(err.upstream_status(), Some(404));
}

#[tokio::test]
async fn test_transport_failure() {
    let config = CmsConfig::new("http://127.0.0.1:1");
    let service = ContentService::new(CmsClient::new(config).unwrap());

    let err = service.homepage().await.unwrap_err();
    assert!(matches!(err, AppError::Transport { ref path, .. } if path == "/homepage"));
}

#[tokio::test]
async fn test_shape_mismatch_is_invalid_content() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 1, "title": "Dog Walking" }]
        })))
        .mount(&server)
        .await;

    let err = service_for(&server).services().await.unwrap_err();
    assert!(matches!(err, AppError::InvalidContent { ref path, .. } if path == "/services"));
}

#[tokio::test]
async fn test_rule_violation_is_invalid_content() {
    let server = MockServer::start().await;

    let mut bad = service_json(2, "pop in visits", "Pop-in Visits", 2);
    bad["title"] = json!("Pop-in Visits");

    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [service_json(1, "dog-walking", "Dog Walking", 1), bad]
        })))
        .mount(&server)
        .await;

    let err = service_for(&server).services().await.unwrap_err();
    match err {
        AppError::InvalidContent { message, .. } => assert!(message.starts_with("entry 1")),
        other => panic!("expected invalid content, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slug_lookup_returns_match_or_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/services"))
        .and(query_param("filters[slug][$eq]", "dog-walking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [service_json(1, "dog-walking", "Dog Walking", 1)]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/services"))
        .and(query_param("filters[slug][$eq]", "pet-taxi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let source = service_for(&server);

    let found: Option<Service> = source.service_by_slug("dog-walking").await.unwrap();
    assert_eq!(found.unwrap().slug, "dog-walking");

    let missing = source.service_by_slug("pet-taxi").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_article_preview_requests_drafts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("filters[slug][$eq]", "first-walk"))
        .and(query_param("status", "draft"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [article_json(4, "first-walk")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let article = service_for(&server)
        .article_by_slug("first-walk", true)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(article.id, 4);
    assert_eq!(article.blocks.as_ref().unwrap().len(), 3);
    assert!(!article.blocks.as_ref().unwrap()[2].is_supported());
}

#[tokio::test]
async fn test_articles_pagination_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("sort[0]", "createdAt:desc"))
        .and(query_param("pagination[page]", "2"))
        .and(query_param("pagination[pageSize]", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [article_json(6, "rainy-days")],
            "meta": { "pagination": { "page": 2, "pageSize": 5, "pageCount": 2, "total": 6 } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let articles = service_for(&server).articles(2, 5).await.unwrap();
    assert_eq!(articles.data[0].slug, "rainy-days");
    assert_eq!(articles.pagination().unwrap().page_count, 2);
}

#[tokio::test]
async fn test_generic_fetch_with_custom_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/homepage"))
        .and(query_param("populate", "heroImage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "heroTitle": "Hello" }
        })))
        .mount(&server)
        .await;

    let client = CmsClient::new(CmsConfig::new(server.uri())).unwrap();
    let query = ContentQuery::new().with_populate("heroImage");
    let homepage = client
        .fetch_entry::<Homepage>("homepage", &query)
        .await
        .unwrap();

    assert_eq!(homepage.data.unwrap().hero_title, "Hello");
}
