use std::rc::Rc;

use log::{debug, warn};
use web_sys::AbortSignal;
use yew::Reducible;

use crate::error::LookupError;
use crate::storefront::metadata::{self, LinkMetadata};
use crate::storefront::models::{CreatorProfile, SocialKind};

/// The social link whose preview metadata is used to refresh the header.
pub const ENRICH_FROM: SocialKind = SocialKind::Instagram;

// Instagram answers logged-out scrapers with its login page. These markers
// catch the variants seen so far; the list is not exhaustive.
const GENERIC_NAMES: &[&str] = &["Instagram"];
const GENERIC_NAME_PREFIXES: &[&str] = &["Login"];
const GENERIC_BIO_PHRASES: &[&str] = &["Welcome back to Instagram", "Create an account"];

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileCandidate {
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProfileCandidate {
    pub fn from_metadata(meta: &LinkMetadata, base: &CreatorProfile) -> Self {
        let title = non_empty(meta.title.as_deref()).unwrap_or(&base.name);
        // "Ada (@adathexplora) • Instagram photos and videos" -> "Ada"
        let name = match title.split_once('(') {
            Some((before, _)) => before.trim(),
            None => title.trim(),
        };

        Self {
            name: name.to_string(),
            bio: non_empty(meta.description.as_deref())
                .or(base.bio.as_deref())
                .map(str::to_string),
            avatar: meta
                .image_url()
                .or(base.avatar.as_deref())
                .map(str::to_string),
        }
    }

    pub fn is_generic(&self) -> bool {
        GENERIC_NAMES.iter().any(|n| self.name == *n)
            || GENERIC_NAME_PREFIXES.iter().any(|p| self.name.starts_with(p))
            || self
                .bio
                .as_deref()
                .map_or(false, |bio| GENERIC_BIO_PHRASES.iter().any(|p| bio.contains(p)))
    }
}

/// Looks up the creator's Instagram preview. `Ok(None)` means there was
/// nothing usable: no link, or the service handed back a login page.
pub async fn fetch_candidate(
    profile: &CreatorProfile,
    signal: Option<&AbortSignal>,
) -> Result<Option<ProfileCandidate>, LookupError> {
    let Some(link) = profile.socials.get(ENRICH_FROM) else {
        return Ok(None);
    };

    let meta = metadata::lookup(link, signal).await?;
    let candidate = ProfileCandidate::from_metadata(&meta, profile);
    if candidate.is_generic() {
        warn!("Detected generic Instagram metadata, keeping profile defaults");
        return Ok(None);
    }
    debug!("Enriching profile header for {}", profile.id);
    Ok(Some(candidate))
}

/// What the storefront header shows. Every write goes through `reduce`, so
/// the metadata overlay and the avatar error handler cannot interleave.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    avatar_failed: bool,
}

pub enum ProfileViewAction {
    Enrich(ProfileCandidate),
    /// The `<img>` for this URL fired `onerror`.
    AvatarFailed(String),
}

impl ProfileView {
    pub fn from_profile(profile: &CreatorProfile) -> Self {
        Self {
            name: profile.name.clone(),
            avatar: non_empty(profile.avatar.as_deref()).map(str::to_string),
            bio: profile.bio.clone(),
            avatar_failed: false,
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl Reducible for ProfileView {
    type Action = ProfileViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ProfileViewAction::Enrich(candidate) => {
                if candidate.is_generic() {
                    return self;
                }
                let mut next = (*self).clone();
                if !candidate.name.trim().is_empty() {
                    next.name = candidate.name;
                }
                if let Some(bio) = candidate.bio.filter(|b| !b.trim().is_empty()) {
                    next.bio = Some(bio);
                }
                // A load error is final for the avatar slot.
                if !next.avatar_failed {
                    if let Some(avatar) = candidate.avatar.filter(|a| !a.trim().is_empty()) {
                        next.avatar = Some(avatar);
                    }
                }
                Rc::new(next)
            }
            ProfileViewAction::AvatarFailed(url) => {
                if self.avatar.as_deref() != Some(url.as_str()) {
                    return self;
                }
                let mut next = (*self).clone();
                next.avatar = None;
                next.avatar_failed = true;
                Rc::new(next)
            }
        }
    }
}

pub fn initials(name: &str) -> String {
    if name.trim().is_empty() {
        return "SC".to_string();
    }
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::metadata::MetadataImage;
    use crate::storefront::models::fixtures::ada;

    fn meta(title: &str, description: &str, image: Option<&str>) -> LinkMetadata {
        LinkMetadata {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            image: image.map(|url| MetadataImage { url: Some(url.to_string()) }),
        }
    }

    fn view() -> Rc<ProfileView> {
        Rc::new(ProfileView::from_profile(&ada()))
    }

    #[test]
    fn name_is_cut_before_parenthesis() {
        let candidate = ProfileCandidate::from_metadata(
            &meta("Ada Obi (@adathexplora) • Instagram", "Finds", None),
            &ada(),
        );
        assert_eq!(candidate.name, "Ada Obi");
        assert_eq!(candidate.avatar.as_deref(), Some("/ada_profile.png"));
    }

    #[test]
    fn missing_fields_fall_back_to_profile() {
        let candidate = ProfileCandidate::from_metadata(&LinkMetadata::default(), &ada());
        assert_eq!(candidate.name, "Ada");
        assert_eq!(candidate.bio, ada().bio);
    }

    #[test]
    fn generic_instagram_pages_are_detected() {
        let base = ada();
        let cases = [
            meta("Instagram", "Photos", None),
            meta("Login • Instagram", "Photos", None),
            meta("Ada", "Welcome back to Instagram. Sign in to check out what your friends", None),
            meta("Ada", "Create an account or log in to Instagram", None),
        ];
        for case in &cases {
            assert!(ProfileCandidate::from_metadata(case, &base).is_generic(), "{case:?}");
        }
        assert!(!ProfileCandidate::from_metadata(&meta("Ada", "Cooking", None), &base).is_generic());
    }

    #[test]
    fn generic_candidate_leaves_view_unchanged() {
        let generic = ProfileCandidate {
            name: "Instagram".to_string(),
            bio: Some("Other".to_string()),
            avatar: Some("https://cdn.example/logo.png".to_string()),
        };
        let start = view();
        let once = start.clone().reduce(ProfileViewAction::Enrich(generic.clone()));
        let twice = once.clone().reduce(ProfileViewAction::Enrich(generic));
        assert_eq!(*once, *start);
        assert_eq!(*twice, *start);
    }

    #[test]
    fn overlay_replaces_only_non_empty_fields() {
        let candidate = ProfileCandidate {
            name: "Ada Obi".to_string(),
            bio: Some("".to_string()),
            avatar: Some("https://cdn.example/ada.jpg".to_string()),
        };
        let next = view().reduce(ProfileViewAction::Enrich(candidate));
        assert_eq!(next.name, "Ada Obi");
        assert_eq!(next.bio, ada().bio);
        assert_eq!(next.avatar.as_deref(), Some("https://cdn.example/ada.jpg"));
    }

    #[test]
    fn avatar_error_beats_late_metadata() {
        let failed = view().reduce(ProfileViewAction::AvatarFailed("/ada_profile.png".to_string()));
        assert_eq!(failed.avatar, None);

        let late = ProfileCandidate {
            name: "Ada Obi".to_string(),
            bio: None,
            avatar: Some("https://cdn.example/ada.jpg".to_string()),
        };
        let next = failed.reduce(ProfileViewAction::Enrich(late));
        assert_eq!(next.avatar, None);
        assert_eq!(next.name, "Ada Obi");
        assert_eq!(next.initials(), "AO");
    }

    #[test]
    fn stale_avatar_error_is_ignored() {
        let enriched = view().reduce(ProfileViewAction::Enrich(ProfileCandidate {
            name: "Ada".to_string(),
            bio: None,
            avatar: Some("https://cdn.example/ada.jpg".to_string()),
        }));
        let next = enriched.clone().reduce(ProfileViewAction::AvatarFailed("/ada_profile.png".to_string()));
        assert_eq!(next.avatar.as_deref(), Some("https://cdn.example/ada.jpg"));
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(initials("ada obi lagos"), "AO");
        assert_eq!(initials("Ada"), "A");
        assert_eq!(initials("   "), "SC");
    }
}
