//! Display models. Pure mappings from merged content to what a page shows.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::{
    cms::MediaResolver,
    models::{Article, Block, Category, Feature, Homepage, Image, Pagination, Service},
    render::{fallback::FALLBACK_BUTTON_TEXT, homepage::{ContentOrigins, HomepageContent}},
};

pub const DEFAULT_HERO_LINK: &str = "/branches";
pub const MEDIA_EYEBROW: &str = "What the media says";

const MEDIA_BLOCK_SIZE: (u32, u32) = (800, 600);
const SLIDER_IMAGE_SIZE: (u32, u32) = (400, 300);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageView {
    /// `None` when the image has no resolvable URL.
    fn resolve(media: &MediaResolver, image: Option<&Image>, default_alt: &str) -> Option<Self> {
        let image = image?;
        let url = media.resolve(Some(&image.url))?;
        Some(Self {
            url,
            alt: image
                .alternative_text
                .clone()
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| default_alt.to_string()),
            width: image.width,
            height: image.height,
        })
    }

    fn sized(mut self, (width, height): (u32, u32)) -> Self {
        self.width = self.width.filter(|w| *w > 0).or(Some(width));
        self.height = self.height.filter(|h| *h > 0).or(Some(height));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<LinkView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
}

impl HeroView {
    pub fn from_homepage(homepage: &Homepage, media: &MediaResolver) -> Self {
        Self {
            title: homepage.hero_title.clone(),
            subtitle: non_empty(&homepage.hero_subtitle),
            button: non_empty(&homepage.hero_button_text).map(|text| LinkView {
                text,
                href: non_empty(&homepage.hero_button_link)
                    .unwrap_or_else(|| DEFAULT_HERO_LINK.to_string()),
            }),
            image: ImageView::resolve(media, homepage.hero_image.as_ref(), &homepage.hero_title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionHeading {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
    pub button: LinkView,
}

impl ServiceCard {
    pub fn from_service(service: &Service, media: &MediaResolver) -> Self {
        Self {
            title: service.title.clone(),
            slug: service.slug.clone(),
            description: non_empty(&service.short_description),
            image: ImageView::resolve(media, service.image.as_ref(), &service.title),
            button: LinkView {
                text: non_empty(&service.button_text)
                    .unwrap_or_else(|| FALLBACK_BUTTON_TEXT.to_string()),
                href: non_empty(&service.button_link)
                    .unwrap_or_else(|| format!("/services/{}", service.slug)),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkView>,
}

impl FeatureCard {
    pub fn from_feature(feature: &Feature, media: &MediaResolver) -> Self {
        let link = match (non_empty(&feature.link_text), non_empty(&feature.link_url)) {
            (Some(text), Some(href)) => Some(LinkView { text, href }),
            _ => None,
        };

        Self {
            title: feature.title.clone(),
            description: non_empty(&feature.description),
            image: ImageView::resolve(media, feature.image.as_ref(), &feature.title),
            link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaSection {
    pub eyebrow: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePageView {
    pub hero: HeroView,
    pub services_heading: SectionHeading,
    pub services: Vec<ServiceCard>,
    pub media: MediaSection,
    pub features_heading: SectionHeading,
    pub features: Vec<FeatureCard>,
    pub origins: ContentOrigins,
}

impl HomePageView {
    pub fn from_content(content: &HomepageContent, media: &MediaResolver) -> Self {
        let homepage = &content.homepage;

        Self {
            hero: HeroView::from_homepage(homepage, media),
            services_heading: SectionHeading {
                title: non_empty(&homepage.services_title),
                subtitle: non_empty(&homepage.services_subtitle),
            },
            services: content
                .services
                .iter()
                .map(|service| ServiceCard::from_service(service, media))
                .collect(),
            media: MediaSection {
                eyebrow: MEDIA_EYEBROW.to_string(),
                title: non_empty(&homepage.media_subtitle),
                description: non_empty(&homepage.media_description),
                video_url: non_empty(&homepage.media_video_url),
            },
            features_heading: SectionHeading {
                title: non_empty(&homepage.why_choose_us_title),
                subtitle: None,
            },
            features: content
                .features
                .iter()
                .map(|feature| FeatureCard::from_feature(feature, media))
                .collect(),
            origins: content.origins,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockView {
    RichText {
        id: u64,
        html: String,
    },
    Media {
        id: u64,
        image: ImageView,
    },
    Quote {
        id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        body: String,
    },
    Slider {
        id: u64,
        images: Vec<ImageView>,
    },
}

/// Maps article blocks to display blocks. Media without a resolvable URL and
/// unsupported components produce nothing.
pub fn render_blocks(blocks: &[Block], media: &MediaResolver) -> Vec<BlockView> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::RichText(block) => Some(BlockView::RichText {
                id: block.id,
                html: block.body.clone(),
            }),
            Block::Media(block) => ImageView::resolve(media, block.file.as_ref(), "")
                .map(|image| BlockView::Media {
                    id: block.id,
                    image: image.sized(MEDIA_BLOCK_SIZE),
                }),
            Block::Quote(block) => Some(BlockView::Quote {
                id: block.id,
                title: non_empty(&block.title),
                body: block.body.clone(),
            }),
            Block::Slider(block) => Some(BlockView::Slider {
                id: block.id,
                images: block
                    .files
                    .iter()
                    .filter_map(|file| ImageView::resolve(media, Some(file), ""))
                    .map(|image| image.sized(SLIDER_IMAGE_SIZE))
                    .collect(),
            }),
            Block::Unsupported(block) => {
                debug!(component = %block.component, id = ?block.id, "Skipping unsupported block");
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
}

impl From<&Category> for CategoryRef {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCard {
    pub title: String,
    pub description: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorView>,
}

fn author_view(article: &Article, media: &MediaResolver) -> Option<AuthorView> {
    article.author.as_ref().map(|author| AuthorView {
        name: author.name.clone(),
        avatar: ImageView::resolve(media, author.avatar.as_ref(), &author.name),
    })
}

impl ArticleCard {
    pub fn from_article(article: &Article, media: &MediaResolver) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            href: format!("/article/{}", article.slug),
            cover: ImageView::resolve(media, article.cover.as_ref(), &article.title),
            category: article.category.as_ref().map(CategoryRef::from),
            author: author_view(article, media),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleListView {
    pub articles: Vec<ArticleCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    pub title: String,
    pub description: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    pub blocks: Vec<BlockView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleView {
    pub fn from_article(article: &Article, media: &MediaResolver) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            slug: article.slug.clone(),
            cover: ImageView::resolve(media, article.cover.as_ref(), &article.title),
            author: author_view(article, media),
            category: article.category.as_ref().map(CategoryRef::from),
            blocks: article
                .blocks
                .as_deref()
                .map(|blocks| render_blocks(blocks, media))
                .unwrap_or_default(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
