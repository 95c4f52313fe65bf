use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::AbortSignal;

use crate::config;
use crate::error::LookupError;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MetadataImage {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LinkMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<MetadataImage>,
}

impl LinkMetadata {
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|image| image.url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Deserialize, Debug)]
pub struct MetadataEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<LinkMetadata>,
}

impl MetadataEnvelope {
    pub fn into_metadata(self) -> Result<LinkMetadata, LookupError> {
        if self.status != "success" {
            return Err(LookupError::Unsuccessful(self.status));
        }
        Ok(self.data.unwrap_or_default())
    }
}

pub fn lookup_url(target: &str) -> String {
    format!("{}?url={}", config::METADATA_API_URL, urlencoding::encode(target))
}

/// Asks the unfurling service for the title, description and preview image
/// of `target`.
pub async fn lookup(target: &str, signal: Option<&AbortSignal>) -> Result<LinkMetadata, LookupError> {
    let response = Request::get(&lookup_url(target))
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LookupError::Status(response.status()));
    }

    response
        .json::<MetadataEnvelope>()
        .await
        .map_err(|e| LookupError::Decode(e.to_string()))?
        .into_metadata()
}

pub async fn lookup_image(
    target: &str,
    signal: Option<&AbortSignal>,
) -> Result<Option<String>, LookupError> {
    let metadata = lookup(target, signal).await?;
    Ok(metadata.image_url().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_percent_encoded() {
        assert_eq!(
            lookup_url("https://www.instagram.com/adathexplora?hl=en"),
            "https://api.microlink.io/?url=https%3A%2F%2Fwww.instagram.com%2Fadathexplora%3Fhl%3Den"
        );
    }

    #[test]
    fn successful_envelope_yields_metadata() {
        let raw = r#"{
            "status": "success",
            "data": {
                "title": "Ada (@adathexplora) • Instagram photos and videos",
                "description": "Food, travel and finds.",
                "image": { "url": "https://cdn.example/ada.jpg", "width": 150 }
            }
        }"#;
        let envelope: MetadataEnvelope = serde_json::from_str(raw).unwrap();
        let meta = envelope.into_metadata().unwrap();
        assert_eq!(meta.image_url(), Some("https://cdn.example/ada.jpg"));
        assert_eq!(meta.description.as_deref(), Some("Food, travel and finds."));
    }

    #[test]
    fn failed_envelope_is_an_error() {
        let raw = r#"{ "status": "fail", "data": { "url": "is not valid" } }"#;
        let envelope: MetadataEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(
            envelope.into_metadata(),
            Err(LookupError::Unsuccessful("fail".to_string()))
        );
    }

    #[test]
    fn missing_or_blank_image_has_no_url() {
        let meta = LinkMetadata {
            image: Some(MetadataImage { url: Some(" ".to_string()) }),
            ..LinkMetadata::default()
        };
        assert_eq!(meta.image_url(), None);
        assert_eq!(LinkMetadata::default().image_url(), None);
    }
}
