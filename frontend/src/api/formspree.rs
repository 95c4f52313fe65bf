use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;

use crate::config;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("form submission failed: {0}")]
    Network(String),
    #[error("form endpoint rejected the submission (status {0})")]
    Rejected(u16),
}

/// Message shown inline under the form for any failure.
pub const SUBMIT_FAILED_MESSAGE: &str = "Oops! There was a problem submitting your form";

pub const CATEGORIES: &[&str] = &[
    "The Aesthetic Home",
    "The Wellness Routine",
    "The Fit Check",
    "The Desk Setup",
    "The Pantry",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Application {
    pub name: String,
    pub email: String,
    pub social: String,
    pub location: String,
    pub categories: Vec<String>,
    pub video_link: String,
    pub rate_acceptance: String,
    pub usage_rights: String,
    pub dream_brand: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Name,
    Email,
    Social,
    Location,
    VideoLink,
    RateAcceptance,
    UsageRights,
    DreamBrand,
}

impl Application {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Social => &self.social,
            Field::Location => &self.location,
            Field::VideoLink => &self.video_link,
            Field::RateAcceptance => &self.rate_acceptance,
            Field::UsageRights => &self.usage_rights,
            Field::DreamBrand => &self.dream_brand,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Social => &mut self.social,
            Field::Location => &mut self.location,
            Field::VideoLink => &mut self.video_link,
            Field::RateAcceptance => &mut self.rate_acceptance,
            Field::UsageRights => &mut self.usage_rights,
            Field::DreamBrand => &mut self.dream_brand,
        };
        *slot = value;
    }

    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("social", self.social.as_str()),
            ("location", self.location.as_str()),
        ];
        fields.extend(self.categories.iter().map(|c| ("categories", c.as_str())));
        fields.extend([
            ("video_link", self.video_link.as_str()),
            ("rate_acceptance", self.rate_acceptance.as_str()),
            ("usage_rights", self.usage_rights.as_str()),
            ("dream_brand", self.dream_brand.as_str()),
        ]);
        fields
    }

    /// `application/x-www-form-urlencoded` body. Multi-select values repeat
    /// their key the way a browser form would.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields())
            .finish()
    }
}

pub async fn submit_application(application: &Application) -> Result<(), SubmitError> {
    let response = Request::post(config::APPLY_FORM_URL)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(application.encode())
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        warn!("Application form rejected with status {}", response.status());
        return Err(SubmitError::Rejected(response.status()));
    }
    info!("Creator application submitted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Application {
        Application {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            social: "tiktok.com/@jane".to_string(),
            location: "Toronto, ON".to_string(),
            categories: vec![],
            video_link: "tiktok.com/video/1".to_string(),
            rate_acceptance: "Yes".to_string(),
            usage_rights: "No".to_string(),
            dream_brand: String::new(),
        }
    }

    #[test]
    fn body_is_percent_encoded() {
        let body = jane().encode();
        assert!(body.starts_with("name=Jane+Doe&email=jane%40example.com&social=tiktok.com%2F%40jane"));
        assert!(body.contains("location=Toronto%2C+ON"));
        assert!(body.ends_with("dream_brand="));
    }

    #[test]
    fn categories_repeat_their_key() {
        let mut app = jane();
        app.toggle_category("The Pantry");
        app.toggle_category("The Fit Check");
        let body = app.encode();
        assert!(body.contains("categories=The+Pantry&categories=The+Fit+Check"));
    }

    #[test]
    fn set_writes_the_named_field() {
        let mut app = Application::default();
        app.set(Field::VideoLink, "tiktok.com/video/2".to_string());
        assert_eq!(app.get(Field::VideoLink), "tiktok.com/video/2");
        assert_eq!(app.get(Field::Social), "");
    }

    #[test]
    fn toggling_a_category_twice_removes_it() {
        let mut app = jane();
        app.toggle_category("The Desk Setup");
        app.toggle_category("The Desk Setup");
        assert!(app.categories.is_empty());
        assert!(!app.encode().contains("categories="));
    }
}
