#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use site_core::{
    models::{Article, Category, Envelope, Feature, Global, Homepage, Service},
    AppError, ContentSource, MediaResolver, Result,
};

pub const CMS_ORIGIN: &str = "http://cms.test";

#[derive(Clone)]
pub enum Stub<T> {
    Live(T),
    Status(u16),
}

impl<T: Clone> Stub<T> {
    fn get(&self, path: &str) -> Result<T> {
        match self {
            Stub::Live(value) => Ok(value.clone()),
            Stub::Status(status) => Err(AppError::Fetch {
                path: path.to_string(),
                status: *status,
                reason: "Stubbed".to_string(),
            }),
        }
    }
}

/// In-memory content source for renderer and route tests.
#[derive(Clone)]
pub struct StubSource {
    pub homepage: Stub<Option<Homepage>>,
    pub services: Stub<Vec<Service>>,
    pub features: Stub<Vec<Feature>>,
    pub articles: Stub<Vec<Article>>,
    pub categories: Stub<Vec<Category>>,
    pub global: Stub<Option<Global>>,
    pub media: MediaResolver,
}

impl Default for StubSource {
    fn default() -> Self {
        Self {
            homepage: Stub::Live(None),
            services: Stub::Live(Vec::new()),
            features: Stub::Live(Vec::new()),
            articles: Stub::Live(Vec::new()),
            categories: Stub::Live(Vec::new()),
            global: Stub::Live(None),
            media: MediaResolver::new(CMS_ORIGIN),
        }
    }
}

impl StubSource {
    pub fn unreachable() -> Self {
        Self {
            homepage: Stub::Status(503),
            services: Stub::Status(503),
            features: Stub::Status(503),
            articles: Stub::Status(503),
            categories: Stub::Status(503),
            global: Stub::Status(503),
            media: MediaResolver::new(CMS_ORIGIN),
        }
    }
}

#[async_trait]
impl ContentSource for StubSource {
    async fn articles(&self, _page: u32, _page_size: u32) -> Result<Envelope<Vec<Article>>> {
        self.articles.get("/articles").map(Envelope::new)
    }

    async fn article_by_slug(&self, slug: &str, _preview: bool) -> Result<Option<Article>> {
        let articles = self.articles.get("/articles")?;
        Ok(articles.into_iter().find(|a| a.slug == slug))
    }

    async fn categories(&self) -> Result<Envelope<Vec<Category>>> {
        self.categories.get("/categories").map(Envelope::new)
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let categories = self.categories.get("/categories")?;
        Ok(categories.into_iter().find(|c| c.slug == slug))
    }

    async fn global(&self) -> Result<Envelope<Option<Global>>> {
        self.global.get("/global").map(Envelope::new)
    }

    async fn homepage(&self) -> Result<Envelope<Option<Homepage>>> {
        self.homepage.get("/homepage").map(Envelope::new)
    }

    async fn services(&self) -> Result<Envelope<Vec<Service>>> {
        self.services.get("/services").map(Envelope::new)
    }

    async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>> {
        let services = self.services.get("/services")?;
        Ok(services.into_iter().find(|s| s.slug == slug))
    }

    async fn features(&self) -> Result<Envelope<Vec<Feature>>> {
        self.features.get("/features").map(Envelope::new)
    }

    fn media(&self) -> &MediaResolver {
        &self.media
    }
}

pub fn service_json(id: u64, slug: &str, title: &str, order: i32) -> Value {
    json!({
        "id": id,
        "documentId": format!("svc-{}", id),
        "title": title,
        "slug": slug,
        "shortDescription": format!("{} from the CMS", title),
        "order": order
    })
}

pub fn feature_json(id: u64, title: &str, order: i32) -> Value {
    json!({
        "id": id,
        "documentId": format!("feat-{}", id),
        "title": title,
        "description": "Live feature",
        "order": order
    })
}

pub fn article_json(id: u64, slug: &str) -> Value {
    json!({
        "id": id,
        "documentId": format!("art-{}", id),
        "title": format!("Article {}", id),
        "description": "A story about dogs",
        "slug": slug,
        "cover": { "url": "/uploads/cover.jpg", "alternativeText": "A happy dog" },
        "author": { "id": 1, "documentId": "auth-1", "name": "Jo" },
        "category": { "id": 2, "documentId": "cat-2", "name": "Dogs", "slug": "dogs" },
        "blocks": [
            { "__component": "shared.rich-text", "id": 1, "body": "<p>Walkies</p>" },
            { "__component": "shared.media", "id": 2, "file": { "url": "/uploads/walk.png" } },
            { "__component": "shared.video-embed", "id": 3 }
        ],
        "createdAt": "2024-05-01T08:00:00.000Z",
        "updatedAt": "2024-05-02T08:00:00.000Z",
        "publishedAt": "2024-05-02T09:00:00.000Z"
    })
}

pub fn service(id: u64, slug: &str, title: &str, order: i32) -> Service {
    serde_json::from_value(service_json(id, slug, title, order)).expect("valid service")
}

pub fn feature(id: u64, title: &str, order: i32) -> Feature {
    serde_json::from_value(feature_json(id, title, order)).expect("valid feature")
}

pub fn article(id: u64, slug: &str) -> Article {
    serde_json::from_value(article_json(id, slug)).expect("valid article")
}

pub fn live_homepage() -> Homepage {
    serde_json::from_value(json!({
        "heroTitle": "Live hero",
        "heroSubtitle": "Live subtitle",
        "servicesTitle": "Live services"
    }))
    .expect("valid homepage")
}
