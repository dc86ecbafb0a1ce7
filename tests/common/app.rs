//! Request helpers for driving the app like a browser would.
#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{header, StatusCode};
use actix_web::test::{self, TestRequest};

/// Name of the session cookie set by `SessionMiddleware`.
pub const SESSION_COOKIE: &str = "id";

pub const BOUNDARY: &str = "lostfound-test-boundary";

/// Carries the session cookie from one request to the next.
#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the remembered session cookie, if any.
    pub fn request(&self, req: TestRequest) -> TestRequest {
        match &self.cookie {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }

    /// Remembers the session cookie the response set, if it set one.
    pub fn remember<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(cookie) = resp
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
        {
            self.cookie = Some(cookie.into_owned());
        }
    }

    pub fn has_session(&self) -> bool {
        self.cookie.is_some()
    }
}

/// `multipart/form-data` body with text fields and an optional `photo` part.
pub fn multipart_body(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some((filename, data)) = photo {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// POST /submit request carrying a multipart body.
pub fn submit_request(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> TestRequest {
    TestRequest::post()
        .uri("/submit")
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(multipart_body(fields, photo))
}

/// Urlencoded admin login request.
pub fn login_request(username: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/admin/login")
        .set_form([("username", username), ("password", password)])
}

/// Asserts a 303 and returns its `Location`.
pub fn assert_see_other<B>(resp: &ServiceResponse<B>) -> String {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect without Location")
        .to_str()
        .expect("non-ascii Location")
        .to_string()
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("response body is not utf-8")
}
