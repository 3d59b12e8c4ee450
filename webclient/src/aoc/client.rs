use ::async_trait::async_trait;
use ::cookie::Cookie;
use ::reqwest::cookie::CookieStore as _;
use ::std::time::Duration;

use super::{auth::SessionToken, urls::ROOT_URL};
use crate::{error::*, http, model::*, util};

pub struct AocClient {
    http: http::Client,
    root: Url,
}

impl AocClient {
    /// Minimum spacing between two requests to the service root.
    pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(600);

    pub fn new(root: Url, session: Option<SessionToken>) -> Result<Self> {
        Self::with_request_interval(root, session, Self::DEFAULT_REQUEST_INTERVAL)
    }

    /// Client for the public service at [`ROOT_URL`].
    pub fn public(session: Option<SessionToken>) -> Result<Self> {
        Self::new(ROOT_URL.clone(), session)
    }

    pub fn with_request_interval(
        root: Url,
        session: Option<SessionToken>,
        interval: Duration,
    ) -> Result<Self> {
        let pattern = format!("{}*", http::UrlGlob::escape(root.as_str()));
        let throttle = match http::UrlGlob::new(&pattern) {
            Ok(pat) => vec![(pat, interval)],
            Err(e) => {
                log::warn!("Request throttling disabled for {}: {}", root, e);
                vec![]
            }
        };
        let mut cli = Self {
            http: http::Client::new(throttle)?,
            root,
        };
        if let Some(token) = session {
            cli.set_session(&token);
        }
        Ok(cli)
    }

    /// Attach the session cookie, scoped to the root origin only.
    pub fn set_session(&mut self, token: &SessionToken) {
        let mut cookie = format!("{}={}; Path=/", SessionToken::COOKIE_NAME, token.as_str());
        if self.root.scheme() == "https" {
            cookie.push_str("; Secure");
        }
        self.http.cookie_jar.add_cookie_str(&cookie, &self.root);
    }

    pub fn has_session(&self) -> bool {
        let Some(raw_cookies) = self.http.cookie_jar.cookies(&self.root) else {
            return false;
        };
        let Ok(raw_cookies) = raw_cookies.to_str() else {
            return false;
        };
        Cookie::split_parse(raw_cookies).any(|c| {
            matches!(c, Ok(c) if c.name() == SessionToken::COOKIE_NAME && !c.value().is_empty())
        })
    }
}

#[async_trait]
impl Client for AocClient {
    fn root_url(&self) -> &Url {
        &self.root
    }

    async fn fetch(&self, url: &Url) -> Result<String> {
        util::fetch_text(&self.http, url).await
    }

    async fn submit(&self, url: &Url, payload: &AnswerPayload) -> Result<String> {
        let resp = self.http.post(url.clone()).form(payload).send().await?;
        util::read_ok_body(resp, url).await
    }
}
