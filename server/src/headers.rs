use axum::{
    body::Body,
    extract::State,
    http::{
        Request, Response,
        header::{HeaderName, HeaderValue},
        request::Parts,
    },
    middleware::Next,
};
use leptos::{nonce::Nonce, prelude::*};

/// Content-Security-Policy for the hydrated app. `connect_src` lists the
/// origins the account menu may call; `nonce` admits the inline hydration
/// bootstrap of this response.
pub fn content_security_policy(connect_src: &str, nonce: &str) -> String {
    [
        "default-src 'self'".to_owned(),
        // WASM instantiation
        format!("script-src 'self' 'nonce-{nonce}' 'wasm-unsafe-eval'"),
        // Inline styles from the progress bar and wave loader
        "style-src 'self' 'unsafe-inline'".to_owned(),
        "img-src 'self' data: https:".to_owned(),
        "font-src 'self' data:".to_owned(),
        format!("connect-src {connect_src}"),
        "frame-ancestors 'none'".to_owned(),
        "base-uri 'self'".to_owned(),
        "form-action 'self'".to_owned(),
    ]
    .join("; ")
}

/// Re-provides the nonce minted by [`security_headers`] for this request, so
/// every inline script leptos renders carries the value named in the CSP.
/// Requests that bypassed the middleware keep the renderer's own nonce.
pub fn provide_request_nonce() {
    if let Some(nonce) =
        use_context::<Parts>().and_then(|parts| parts.extensions.get::<Nonce>().cloned())
    {
        provide_context(nonce);
    }
}

#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    connect_src: String,
}

impl SecurityHeaders {
    pub fn new(connect_src: &str) -> Self {
        Self {
            connect_src: connect_src.to_owned(),
        }
    }

    fn csp(&self, nonce: &Nonce) -> HeaderValue {
        HeaderValue::from_str(&content_security_policy(&self.connect_src, nonce))
            .unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'"))
    }

    fn apply(&self, response: &mut Response<Body>, nonce: &Nonce) {
        let headers = response.headers_mut();
        let fixed = [
            ("x-frame-options", "DENY"),
            ("x-content-type-options", "nosniff"),
            ("referrer-policy", "strict-origin-when-cross-origin"),
            ("strict-transport-security", "max-age=31536000; includeSubDomains"),
            // Fullscreen stays allowed for the image slider.
            (
                "permissions-policy",
                "geolocation=(), microphone=(), camera=(), payment=(), usb=(), fullscreen=(self)",
            ),
        ];
        for (name, value) in fixed {
            headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        }
        headers.insert(
            HeaderName::from_static("content-security-policy"),
            self.csp(nonce),
        );
    }
}

pub async fn security_headers(
    State(policy): State<SecurityHeaders>,
    mut req: Request<Body>,
    next: Next,
) -> Response<Body> {
    let nonce = Nonce::new();
    req.extensions_mut().insert(nonce.clone());
    let mut response = next.run(req).await;
    policy.apply(&mut response, &nonce);
    response
}
