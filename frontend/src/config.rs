
// Copied to the dist root by trunk, in dev and release alike.
pub const DIRECTORY_URL: &str = "/creators.json";

/// Slug used when neither the query nor the path names a creator.
#[cfg(debug_assertions)]
pub fn dev_fallback_slug() -> Option<&'static str> {
    Some("ada")
}

#[cfg(not(debug_assertions))]
pub fn dev_fallback_slug() -> Option<&'static str> {
    None
}

pub fn chat_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.is_empty())
}

pub const METADATA_API_URL: &str = "https://api.microlink.io/";
pub const APPLY_FORM_URL: &str = "https://formspree.io/f/xqarpnzb";
pub const CHECKOUT_URL: &str = "https://book.stripe.com/aFafZadjE3050Wh4Bq5Vu00";
pub const SHARE_BASE_URL: &str = "https://slice99.com";

pub const CHAT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const CHAT_MODEL: &str = "gemini-3-pro-preview";

pub const COPY_FEEDBACK_MS: u32 = 2_000;
pub const CHECKOUT_DELAY_MS: u32 = 1_000;
pub const SLOT_CHECKOUT_DELAY_MS: u32 = 800;

pub const CONTACT_EMAIL: &str = "hello@joincocreate.ca";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/joincocreate/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_is_served_from_site_root() {
        assert!(DIRECTORY_URL.starts_with('/'));
        assert!(DIRECTORY_URL.ends_with("creators.json"));
    }
}
