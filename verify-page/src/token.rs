use url::Url;

/// Extracts the verification token from an inbound link URL.
///
/// The token is opaque to this page; structural validation is the server's
/// responsibility. Percent-encoding is decoded, the first `token` parameter
/// wins, and an empty value counts as absent.
#[must_use]
pub fn extract_token(link: &Url) -> Option<String> {
    link.query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(query: &str) -> Url {
        Url::parse(&format!("https://66daysprep.com/verify-email{query}")).unwrap()
    }

    #[test]
    fn test_extracts_token() {
        assert_eq!(
            extract_token(&link("?token=abc123")),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_missing_token() {
        assert_eq!(extract_token(&link("")), None);
        assert_eq!(extract_token(&link("?other=1")), None);
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        assert_eq!(extract_token(&link("?token=")), None);
    }

    #[test]
    fn test_percent_encoding_is_decoded() {
        assert_eq!(
            extract_token(&link("?token=a%2Bb%3Dc")),
            Some("a+b=c".to_string())
        );
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            extract_token(&link("?token=first&token=second")),
            Some("first".to_string())
        );
    }
}
