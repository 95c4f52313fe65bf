use std::borrow::Cow;

pub const CREATOR_QUERY_PARAM: &str = "creator";

/// Picks the creator slug out of the current location.
///
/// An explicit `?creator=` wins. Otherwise the last path segment that is not a
/// page file name is used, so `/ada`, `/ada/` and `/ada/index.html` all resolve to
/// `ada`. The result is always lowercase.
pub fn resolve_slug(path: &str, query: &str) -> Option<String> {
    query_slug(query)
        .or_else(|| path_slug(path))
        .map(|slug| slug.to_lowercase())
}

fn query_slug(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == CREATOR_QUERY_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn path_slug(path: &str) -> Option<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(decode_segment)
        .filter(|segment| !looks_like_file(segment))
        .last()
        .map(Cow::into_owned)
}

fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}

const PAGE_EXTENSIONS: [&str; 4] = ["html", "htm", "php", "json"];

fn looks_like_file(segment: &str) -> bool {
    match segment.rsplit_once('.') {
        Some((stem, ext)) => {
            !stem.is_empty() && PAGE_EXTENSIONS.iter().any(|page| ext.eq_ignore_ascii_case(page))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameter_takes_priority() {
        assert_eq!(
            resolve_slug("/creators/storefront.html", "?creator=Ada"),
            Some("ada".to_string())
        );
        assert_eq!(resolve_slug("/bola", "creator=ada&x=1"), Some("ada".to_string()));
    }

    #[test]
    fn empty_query_parameter_falls_back_to_path() {
        assert_eq!(resolve_slug("/bola/", "?creator="), Some("bola".to_string()));
    }

    #[test]
    fn path_is_lowercased() {
        assert_eq!(resolve_slug("/ADA", ""), Some("ada".to_string()));
        assert_eq!(resolve_slug("/ada/", ""), Some("ada".to_string()));
    }

    #[test]
    fn file_names_are_skipped() {
        assert_eq!(resolve_slug("/ada/index.html", ""), Some("ada".to_string()));
        assert_eq!(resolve_slug("/creators/storefront.html", ""), Some("creators".to_string()));
        assert_eq!(resolve_slug("/index.html", ""), None);
    }

    #[test]
    fn dotted_handles_are_not_file_names() {
        assert_eq!(
            resolve_slug("/ada.the.explorer", ""),
            Some("ada.the.explorer".to_string())
        );
        assert_eq!(resolve_slug("/jane.doe", ""), Some("jane.doe".to_string()));
        assert_eq!(resolve_slug("/ada.obi/", ""), Some("ada.obi".to_string()));
        assert_eq!(resolve_slug("/jane.doe/index.HTML", ""), Some("jane.doe".to_string()));
    }

    #[test]
    fn percent_encoded_segments_are_decoded() {
        assert_eq!(resolve_slug("/%40Ada", ""), Some("@ada".to_string()));
    }

    #[test]
    fn nothing_to_resolve() {
        assert_eq!(resolve_slug("/", ""), None);
        assert_eq!(resolve_slug("", "?other=1"), None);
    }
}
