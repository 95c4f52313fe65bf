use gloo_net::http::Request;
use log::{debug, info};
use web_sys::AbortSignal;

use crate::config;
use crate::error::StorefrontError;
use crate::storefront::models::CreatorProfile;

/// Single read of the creator directory. Not cached, not retried.
pub async fn fetch_directory(
    signal: Option<&AbortSignal>,
) -> Result<Vec<CreatorProfile>, StorefrontError> {
    let response = Request::get(config::DIRECTORY_URL)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| StorefrontError::Network(e.to_string()))?;

    check_status(response.status())?;

    response
        .json::<Vec<CreatorProfile>>()
        .await
        .map_err(|e| StorefrontError::Decode(e.to_string()))
}

/// Anything outside 2xx means the directory could not be read.
pub fn check_status(status: u16) -> Result<(), StorefrontError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(StorefrontError::Status(status))
    }
}

/// First creator whose id equals the slug or whose handle contains it,
/// both compared case-insensitively.
pub fn find_creator<'a>(
    creators: &'a [CreatorProfile],
    slug: &str,
) -> Result<&'a CreatorProfile, StorefrontError> {
    let slug = slug.to_lowercase();
    creators
        .iter()
        .find(|c| c.id.to_lowercase() == slug || c.handle.to_lowercase().contains(&slug))
        .ok_or(StorefrontError::NotFound(slug))
}

pub async fn load_creator(
    slug: &str,
    signal: Option<&AbortSignal>,
) -> Result<CreatorProfile, StorefrontError> {
    info!("Fetching data for creator: {}", slug);
    let creators = fetch_directory(signal).await?;
    debug!("Directory holds {} creators", creators.len());
    find_creator(&creators, slug).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::models::fixtures::ada;

    fn directory() -> Vec<CreatorProfile> {
        let mut bola = ada();
        bola.id = "creator_002".to_string();
        bola.name = "Bola".to_string();
        bola.handle = "@bolabakes".to_string();
        vec![ada(), bola]
    }

    #[test]
    fn matches_id_case_insensitively() {
        let creators = directory();
        let found = find_creator(&creators, "CREATOR_002").unwrap();
        assert_eq!(found.name, "Bola");
    }

    #[test]
    fn matches_handle_substring() {
        let creators = directory();
        assert_eq!(find_creator(&creators, "ada").unwrap().id, "creator_001");
        assert_eq!(find_creator(&creators, "Bakes").unwrap().id, "creator_002");
    }

    #[test]
    fn first_match_wins() {
        let creators = directory();
        // "creator_00" is in neither handle, but both ids start with it; only exact ids count.
        assert!(find_creator(&creators, "creator_00").is_err());
        // "@" is in every handle.
        assert_eq!(find_creator(&creators, "@").unwrap().id, "creator_001");
    }

    #[test]
    fn absent_slug_is_not_found() {
        let creators = directory();
        let err = find_creator(&creators, "zed").unwrap_err();
        assert_eq!(err, StorefrontError::NotFound("zed".to_string()));
        assert!(err.is_not_found());
        assert!(!err.is_fetch_failure());
    }

    #[test]
    fn non_success_status_is_a_fetch_failure() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        let err = check_status(500).unwrap_err();
        assert_eq!(err, StorefrontError::Status(500));
        assert!(err.is_fetch_failure());
        assert_eq!(check_status(404), Err(StorefrontError::Status(404)));
        assert_eq!(check_status(304), Err(StorefrontError::Status(304)));
    }

    #[test]
    fn empty_directory_is_not_found() {
        assert!(find_creator(&[], "ada").unwrap_err().is_not_found());
    }
}
