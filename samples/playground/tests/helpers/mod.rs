//! In-process client for driving the playground router.

#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use linkline_playground::config::SessionConfig;
use linkline_playground::routes::create_router;
use linkline_playground::session::InMemorySessionStore;
use linkline_playground::state::AppState;
use tower::ServiceExt;

// =============================================================================
// TestResponse
// =============================================================================

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
    }

    /// Element texts of the rendered structure list, front to rear.
    pub fn elements(&self) -> Vec<String> {
        let Some(start) = self.body.find("<ol class=\"elements\">") else {
            return Vec::new();
        };
        let Some(length) = self.body[start..].find("</ol>") else {
            return Vec::new();
        };
        self.body[start..start + length]
            .split("<li>")
            .skip(1)
            .filter_map(|chunk| chunk.split_once("</li>"))
            .map(|(text, _)| text.to_string())
            .collect()
    }

    /// Text of the flash notice, if the page shows one.
    pub fn message(&self) -> Option<String> {
        let start = self.body.find("<p class=\"message\">")? + "<p class=\"message\">".len();
        let length = self.body[start..].find("</p>")?;
        Some(self.body[start..start + length].to_string())
    }
}

// =============================================================================
// TestClient
// =============================================================================

/// Sends requests to the router and carries the session cookie like a browser.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    pub fn new() -> Self {
        Self::with_session_config(SessionConfig {
            time_to_live: Duration::from_secs(3600),
            capacity: 64,
            ..SessionConfig::default()
        })
    }

    pub fn with_session_config(config: SessionConfig) -> Self {
        let store = InMemorySessionStore::from_config(&config);
        Self::from_router(create_router(AppState::new(store, config)))
    }

    pub fn from_router(router: Router) -> Self {
        Self {
            router,
            cookie: None,
        }
    }

    /// A second browser sharing the same server.
    pub fn fresh_browser(&self) -> Self {
        Self::from_router(self.router.clone())
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn set_cookie(&mut self, cookie: impl Into<String>) {
        self.cookie = Some(cookie.into());
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self.request(Method::GET, path).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(name, value)| format!("{}={}", form_encode(name), form_encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let request = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    /// Posts and follows the redirect, returning the rendered page.
    pub async fn submit(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let response = self.post(path, fields).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        let location = response.location().unwrap().to_string();
        self.get(&location).await
    }

    fn request(&self, method: Method, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);
        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        if let Some(value) = headers.get(SET_COOKIE).and_then(|value| value.to_str().ok())
            && let Some((pair, _)) = value.split_once(';')
        {
            self.cookie = Some(pair.to_string());
        }

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

fn form_encode(text: &str) -> String {
    text.bytes()
        .map(|byte| match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                (byte as char).to_string()
            }
            b' ' => "+".to_string(),
            other => format!("%{other:02X}"),
        })
        .collect()
}
