//! The API key secret.

/// An opaque API key.
///
/// Formatting never prints the secret, only a short preview.
///
/// # Examples
///
/// ```
/// use visionary_storage::Credential;
///
/// let key = Credential::new("AIzaSyABCDEFGHIJKLMNOP");
/// assert_eq!(key.to_string(), "AIza...MNOP");
/// assert!(!format!("{:?}", key).contains("ABCDEFG"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a secret. Callers trim before constructing.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw secret, for placing in a request header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First and last four characters, or `****` for short secrets.
    pub fn preview(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&self.preview()).finish()
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.preview())
    }
}
