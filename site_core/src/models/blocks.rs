//! Article content blocks, dispatched on the CMS `__component` tag

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::content::Image;

pub const RICH_TEXT: &str = "shared.rich-text";
pub const MEDIA: &str = "shared.media";
pub const QUOTE: &str = "shared.quote";
pub const SLIDER: &str = "shared.slider";

const TAG: &str = "__component";

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    RichText(RichTextBlock),
    Media(MediaBlock),
    Quote(QuoteBlock),
    Slider(SliderBlock),
    /// A component this site has no display for. Kept so callers can log it.
    Unsupported(UnsupportedBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    pub id: u64,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaBlock {
    pub id: u64,
    #[serde(default)]
    pub file: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBlock {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderBlock {
    pub id: u64,
    #[serde(default)]
    pub files: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedBlock {
    pub component: String,
    pub id: Option<u64>,
    pub raw: Value,
}

impl Block {
    pub fn component(&self) -> &str {
        match self {
            Block::RichText(_) => RICH_TEXT,
            Block::Media(_) => MEDIA,
            Block::Quote(_) => QUOTE,
            Block::Slider(_) => SLIDER,
            Block::Unsupported(block) => &block.component,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Block::Unsupported(_))
    }
}

fn decode<T, E>(value: Value, component: &str) -> Result<T, E>
where
    T: de::DeserializeOwned,
    E: de::Error,
{
    serde_json::from_value(value)
        .map_err(|e| E::custom(format!("invalid {} block: {}", component, e)))
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        let component = value
            .get(TAG)
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field(TAG))?
            .to_string();

        let block = match component.as_str() {
            RICH_TEXT => Block::RichText(decode::<_, D::Error>(value, RICH_TEXT)?),
            MEDIA => Block::Media(decode::<_, D::Error>(value, MEDIA)?),
            QUOTE => Block::Quote(decode::<_, D::Error>(value, QUOTE)?),
            SLIDER => Block::Slider(decode::<_, D::Error>(value, SLIDER)?),
            _ => Block::Unsupported(UnsupportedBlock {
                id: value.get("id").and_then(Value::as_u64),
                component: component.clone(),
                raw: value,
            }),
        };

        Ok(block)
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut value = match self {
            Block::RichText(block) => serde_json::to_value(block),
            Block::Media(block) => serde_json::to_value(block),
            Block::Quote(block) => serde_json::to_value(block),
            Block::Slider(block) => serde_json::to_value(block),
            Block::Unsupported(block) => Ok(block.raw.clone()),
        }
        .map_err(ser::Error::custom)?;

        if let Value::Object(map) = &mut value {
            map.insert(TAG.to_string(), Value::String(self.component().to_string()));
        }

        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_components() {
        let blocks: Vec<Block> = serde_json::from_value(json!([
            { "__component": "shared.rich-text", "id": 1, "body": "<p>Hello</p>" },
            { "__component": "shared.media", "id": 2, "file": { "url": "/uploads/a.png" } },
            { "__component": "shared.quote", "id": 3, "body": "Woof" },
            { "__component": "shared.slider", "id": 4, "files": [{ "url": "/a.png" }, { "url": "/b.png" }] }
        ]))
        .unwrap();

        assert!(matches!(&blocks[0], Block::RichText(b) if b.body == "<p>Hello</p>"));
        assert!(matches!(&blocks[1], Block::Media(b) if b.file.as_ref().unwrap().url == "/uploads/a.png"));
        assert!(matches!(&blocks[2], Block::Quote(b) if b.title.is_none() && b.body == "Woof"));
        assert!(matches!(&blocks[3], Block::Slider(b) if b.files.len() == 2));
        assert!(blocks.iter().all(Block::is_supported));
    }

    #[test]
    fn test_unknown_component_is_unsupported() {
        let block: Block = serde_json::from_value(json!({
            "__component": "shared.video-embed", "id": 9, "url": "https://example.com/v"
        }))
        .unwrap();

        match &block {
            Block::Unsupported(b) => {
                assert_eq!(b.component, "shared.video-embed");
                assert_eq!(b.id, Some(9));
            }
            other => panic!("expected unsupported block, got {:?}", other),
        }
        assert_eq!(block.component(), "shared.video-embed");
    }

    #[test]
    fn test_missing_tag_is_an_error() {
        let result = serde_json::from_value::<Block>(json!({ "id": 1, "body": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_known_block_is_an_error() {
        let result = serde_json::from_value::<Block>(json!({ "__component": "shared.quote", "id": 1 }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("shared.quote"));
    }

    #[test]
    fn test_serialize_keeps_tag() {
        let block = Block::Quote(QuoteBlock {
            id: 5,
            title: Some("Ryan".to_string()),
            body: "Never pack walk".to_string(),
        });
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["__component"], "shared.quote");
        assert_eq!(value["title"], "Ryan");
    }
}
