use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Target of the permanent redirect for a `www.` host, if any.
pub fn www_redirect_target(host: &str, path_and_query: &str) -> Option<String> {
    let bare = host.strip_prefix("www.")?;
    Some(format!("https://{bare}{path_and_query}"))
}

pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let target = req
        .headers()
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .zip(req.uri().path_and_query())
        .and_then(|(host, path_query)| www_redirect_target(host, path_query.as_str()));

    if let Some(location) = target {
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_www_and_keeps_path() {
        assert_eq!(
            www_redirect_target("www.shop.example", "/products?page=2").as_deref(),
            Some("https://shop.example/products?page=2")
        );
    }

    #[test]
    fn bare_hosts_pass_through() {
        assert_eq!(www_redirect_target("shop.example", "/"), None);
        assert_eq!(www_redirect_target("wwwshop.example", "/"), None);
    }
}
