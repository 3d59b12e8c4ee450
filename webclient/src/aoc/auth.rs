use std::fmt;

/// Value of the `session` cookie issued by the service after login.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub const COOKIE_NAME: &'static str = "session";

    /// Returns `None` for an empty (or whitespace only) token.
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let token = token.as_ref().trim();
        (!token.is_empty()).then(|| Self(token.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// never print the secret
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(***{} chars)", self.0.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("  \n").is_none());
        assert_eq!(SessionToken::new(" abc\n").unwrap().as_str(), "abc");
    }

    #[test]
    fn debug_does_not_leak() {
        let t = SessionToken::new("53616c7465645f5f").unwrap();
        assert!(!format!("{:?}", t).contains("5361"));
    }
}
