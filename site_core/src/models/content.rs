//! CMS content types

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::blocks::Block;

lazy_static! {
    /// Characters the CMS accepts in a UID field.
    pub static ref SLUG_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9\-_.~]+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: u64,
    pub document_id: String,
    #[validate(length(min = 1, message = "Author name is required"))]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub document_id: String,
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
    #[validate(regex(path = *SLUG_PATTERN, message = "Category slug contains invalid characters"))]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub document_id: String,
    #[validate(length(min = 1, message = "Article title is required"))]
    pub title: String,
    pub description: String,
    #[validate(regex(path = *SLUG_PATTERN, message = "Article slug contains invalid characters"))]
    pub slug: String,
    #[serde(default)]
    pub cover: Option<Image>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub blocks: Option<Vec<Block>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub share_image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Global {
    #[validate(length(min = 1, message = "Site name is required"))]
    pub site_name: String,
    pub site_description: String,
    #[serde(default)]
    pub favicon: Option<Image>,
    #[serde(default)]
    pub default_seo: Option<Seo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    #[validate(length(min = 1, message = "Hero title is required"))]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub hero_button_text: Option<String>,
    #[serde(default)]
    pub hero_button_link: Option<String>,
    #[serde(default)]
    pub hero_image: Option<Image>,
    #[serde(default)]
    pub services_title: Option<String>,
    #[serde(default)]
    pub services_subtitle: Option<String>,
    #[serde(default)]
    pub why_choose_us_title: Option<String>,
    #[serde(default)]
    pub media_title: Option<String>,
    #[serde(default)]
    pub media_subtitle: Option<String>,
    #[serde(default)]
    pub media_description: Option<String>,
    #[serde(default)]
    pub media_video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u64,
    pub document_id: String,
    #[validate(length(min = 1, message = "Service title is required"))]
    pub title: String,
    #[validate(regex(path = *SLUG_PATTERN, message = "Service slug contains invalid characters"))]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub icon: Option<String>,
    pub order: i32,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: u64,
    pub document_id: String,
    #[validate(length(min = 1, message = "Feature title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub link_text: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    pub order: i32,
}
