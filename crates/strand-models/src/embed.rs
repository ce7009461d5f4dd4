use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{is_unset, Payload};

/// Rich message attachment. `color` and `fields` are always emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EmbedType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub color: u32,
    #[serde(skip_serializing_if = "is_unset")]
    pub footer: EmbedFooter,
    #[serde(skip_serializing_if = "is_unset")]
    pub image: EmbedImage,
    #[serde(skip_serializing_if = "is_unset")]
    pub thumbnail: EmbedThumbnail,
    #[serde(skip_serializing_if = "is_unset")]
    pub video: EmbedVideo,
    #[serde(skip_serializing_if = "is_unset")]
    pub provider: EmbedProvider,
    #[serde(skip_serializing_if = "is_unset")]
    pub author: EmbedAuthor,
    pub fields: Vec<EmbedField>,
}

impl Embed {
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField::new(name, value, inline));
        self
    }
}

impl Payload for Embed {
    fn is_valid(&self) -> bool {
        self.title.is_some()
            || self.kind.is_some()
            || self.description.is_some()
            || self.url.is_some()
            || self.timestamp.is_some()
            || self.color != 0
            || self.footer.is_valid()
            || self.image.is_valid()
            || self.thumbnail.is_valid()
            || self.video.is_valid()
            || self.provider.is_valid()
            || self.author.is_valid()
            || !self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedType {
    Rich,
    #[serde(rename = "image")]
    Img,
    #[serde(rename = "video")]
    Vid,
    Gifv,
    Article,
    Link,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

impl Payload for EmbedFooter {
    fn is_valid(&self) -> bool {
        self.text.is_some() || self.icon_url.is_some() || self.proxy_icon_url.is_some()
    }
}

/// Shared by the image, thumbnail and video slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbedImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

pub type EmbedThumbnail = EmbedImage;
pub type EmbedVideo = EmbedImage;

impl Payload for EmbedImage {
    fn is_valid(&self) -> bool {
        self.url.is_some()
            || self.proxy_url.is_some()
            || self.height.is_some()
            || self.width.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbedProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Payload for EmbedProvider {
    fn is_valid(&self) -> bool {
        self.name.is_some() || self.url.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbedAuthor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

impl Payload for EmbedAuthor {
    fn is_valid(&self) -> bool {
        self.name.is_some()
            || self.url.is_some()
            || self.icon_url.is_some()
            || self.proxy_icon_url.is_some()
    }
}

/// All three keys are always emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

impl Payload for EmbedField {
    fn is_valid(&self) -> bool {
        !self.name.is_empty() || !self.value.is_empty() || self.inline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    fn with(edit: impl FnOnce(&mut Embed)) -> Embed {
        let mut embed = Embed::default();
        edit(&mut embed);
        embed
    }

    fn check_rows(rows: Vec<(&str, Embed, Value)>) {
        for (label, embed, expected) in rows {
            assert!(embed.is_valid(), "{label} left the embed invalid");
            assert_eq!(embed.to_json().unwrap(), expected, "{label}");
        }
    }

    #[test]
    fn each_top_level_field_stands_alone() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        check_rows(vec![
            (
                "description",
                with(|e| e.description = Some("Fixes and features".into())),
                json!({"description": "Fixes and features", "color": 0, "fields": []}),
            ),
            (
                "url",
                with(|e| e.url = Some("https://strand.example/notes".into())),
                json!({"url": "https://strand.example/notes", "color": 0, "fields": []}),
            ),
            (
                "timestamp",
                with(|e| e.timestamp = Some(ts)),
                json!({
                    "timestamp": serde_json::to_value(ts).unwrap(),
                    "color": 0,
                    "fields": [],
                }),
            ),
        ]);
    }

    #[test]
    fn each_media_slot_field_stands_alone() {
        check_rows(vec![
            (
                "image.url",
                with(|e| e.image.url = Some("https://i.example/a.png".into())),
                json!({"color": 0, "image": {"url": "https://i.example/a.png"}, "fields": []}),
            ),
            (
                "image.proxy_url",
                with(|e| e.image.proxy_url = Some("https://p.example/a.png".into())),
                json!({
                    "color": 0,
                    "image": {"proxy_url": "https://p.example/a.png"},
                    "fields": [],
                }),
            ),
            (
                "image.height",
                with(|e| e.image.height = Some(0)),
                json!({"color": 0, "image": {"height": 0}, "fields": []}),
            ),
            (
                "image.width",
                with(|e| e.image.width = Some(128)),
                json!({"color": 0, "image": {"width": 128}, "fields": []}),
            ),
            (
                "video.url",
                with(|e| e.video.url = Some("https://v.example/a.mp4".into())),
                json!({"color": 0, "video": {"url": "https://v.example/a.mp4"}, "fields": []}),
            ),
            (
                "video.height",
                with(|e| e.video.height = Some(720)),
                json!({"color": 0, "video": {"height": 720}, "fields": []}),
            ),
            (
                "video.width",
                with(|e| e.video.width = Some(1280)),
                json!({"color": 0, "video": {"width": 1280}, "fields": []}),
            ),
        ]);
    }

    #[test]
    fn each_footer_and_provider_field_stands_alone() {
        check_rows(vec![
            (
                "footer.text",
                with(|e| e.footer.text = Some("v1.2.0".into())),
                json!({"color": 0, "footer": {"text": "v1.2.0"}, "fields": []}),
            ),
            (
                "footer.icon_url",
                with(|e| e.footer.icon_url = Some("https://f.example/i.png".into())),
                json!({
                    "color": 0,
                    "footer": {"icon_url": "https://f.example/i.png"},
                    "fields": [],
                }),
            ),
            (
                "provider.name",
                with(|e| e.provider.name = Some("Strand".into())),
                json!({"color": 0, "provider": {"name": "Strand"}, "fields": []}),
            ),
            (
                "provider.url",
                with(|e| e.provider.url = Some("https://strand.example".into())),
                json!({"color": 0, "provider": {"url": "https://strand.example"}, "fields": []}),
            ),
            (
                "provider.name empty",
                with(|e| e.provider.name = Some(String::new())),
                json!({"color": 0, "provider": {"name": ""}, "fields": []}),
            ),
        ]);
    }

    #[test]
    fn default_embed_has_only_color_and_fields() {
        let embed = Embed::default();
        assert!(!embed.is_valid());
        assert_eq!(embed.to_json().unwrap(), json!({"color": 0, "fields": []}));
    }

    #[test]
    fn default_substructures_are_invalid() {
        assert!(!EmbedFooter::default().is_valid());
        assert!(!EmbedImage::default().is_valid());
        assert!(!EmbedProvider::default().is_valid());
        assert!(!EmbedAuthor::default().is_valid());
        assert!(!EmbedField::default().is_valid());
    }

    #[test]
    fn single_top_level_field_flips_validity() {
        let embed = Embed {
            title: Some("Release notes".into()),
            ..Default::default()
        };
        assert!(embed.is_valid());
        assert_eq!(
            embed.to_json().unwrap(),
            json!({"title": "Release notes", "color": 0, "fields": []})
        );

        let embed = Embed {
            color: 0x5865F2,
            ..Default::default()
        };
        assert!(embed.is_valid());
        assert_eq!(embed.to_json().unwrap(), json!({"color": 0x5865F2, "fields": []}));
    }

    #[test]
    fn single_nested_field_emits_only_that_field() {
        let mut embed = Embed::default();
        embed.thumbnail.width = Some(64);
        assert_eq!(
            embed.to_json().unwrap(),
            json!({"color": 0, "thumbnail": {"width": 64}, "fields": []})
        );

        let mut embed = Embed::default();
        embed.footer.proxy_icon_url = Some("https://media.example/f.png".into());
        assert_eq!(
            embed.to_json().unwrap()["footer"],
            json!({"proxy_icon_url": "https://media.example/f.png"})
        );
    }

    #[test]
    fn author_keys_map_to_their_own_fields() {
        let mut embed = Embed::default();
        embed.author = EmbedAuthor {
            name: Some("strand".into()),
            url: Some("https://a.example".into()),
            icon_url: Some("https://a.example/icon.png".into()),
            proxy_icon_url: Some("https://proxy.example/icon.png".into()),
        };
        assert_eq!(
            embed.to_json().unwrap()["author"],
            json!({
                "name": "strand",
                "url": "https://a.example",
                "icon_url": "https://a.example/icon.png",
                "proxy_icon_url": "https://proxy.example/icon.png",
            })
        );
    }

    #[test]
    fn type_strings() {
        let cases = [
            (EmbedType::Rich, "rich"),
            (EmbedType::Img, "image"),
            (EmbedType::Vid, "video"),
            (EmbedType::Gifv, "gifv"),
            (EmbedType::Article, "article"),
            (EmbedType::Link, "link"),
        ];
        for (kind, expected) in cases {
            let embed = Embed {
                kind: Some(kind),
                ..Default::default()
            };
            assert_eq!(embed.to_json().unwrap()["type"], expected);
        }
    }

    #[test]
    fn fields_keep_order_and_all_keys() {
        let embed = Embed::default()
            .field("a", "1", false)
            .field("b", "", true);
        assert!(embed.is_valid());
        assert_eq!(
            embed.to_json().unwrap()["fields"],
            json!([
                {"name": "a", "value": "1", "inline": false},
                {"name": "b", "value": "", "inline": true},
            ])
        );
    }

    #[test]
    fn timestamp_is_iso8601() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let embed = Embed {
            timestamp: Some(ts),
            ..Default::default()
        };
        let json = embed.to_json().unwrap();
        let emitted = json["timestamp"].as_str().unwrap();
        assert!(emitted.starts_with("2024-01-02T03:04:05"));
        assert_eq!(DateTime::parse_from_rfc3339(emitted).unwrap(), ts);
    }

    #[test]
    fn serialization_does_not_mutate() {
        let mut embed = Embed::default().field("k", "v", false);
        embed.image.url = Some("https://i.example/x.png".into());
        let before = embed.clone();
        let first = embed.to_json().unwrap();
        let second = embed.to_json().unwrap();
        assert_eq!(first, second);
        assert_eq!(embed, before);
    }
}
