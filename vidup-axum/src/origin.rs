use axum::http::{header::HOST, uri::Authority, HeaderMap, Uri};
use vidup_core::Origin;

/// Origin of an inbound request.
///
/// Absolute request URIs (HTTP/2 `:authority`, proxies) win over the `Host`
/// header; `fallback` covers requests with neither.
pub fn request_origin(headers: &HeaderMap, uri: &Uri, fallback: &Origin) -> Origin {
    let authority = uri.authority().cloned().or_else(|| {
        headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Authority>().ok())
    });

    match authority {
        Some(authority) => Origin::new(authority.host(), authority.port_u16()),
        None => fallback.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn fallback() -> Origin {
        Origin::new("127.0.0.1", Some(8080))
    }

    #[test]
    fn host_header_with_port() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("localhost:9000"));
        let uri: Uri = "/video".parse().unwrap();

        let origin = request_origin(&headers, &uri, &fallback());
        assert_eq!(origin.base_url(), "http://localhost:9000");
    }

    #[test]
    fn host_header_without_port_omits_it() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("host"));
        let uri: Uri = "/video".parse().unwrap();

        assert_eq!(request_origin(&headers, &uri, &fallback()).data_url(2), "http://host/video/2/data");
    }

    #[test]
    fn absolute_uri_wins_over_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("internal:1234"));
        let uri: Uri = "http://public.example:80/video".parse().unwrap();

        assert_eq!(request_origin(&headers, &uri, &fallback()).base_url(), "http://public.example");
    }

    #[test]
    fn missing_host_uses_fallback() {
        let uri: Uri = "/video".parse().unwrap();
        assert_eq!(request_origin(&HeaderMap::new(), &uri, &fallback()), fallback());
    }

    #[test]
    fn unparseable_host_uses_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("bad host"));
        let uri: Uri = "/video".parse().unwrap();

        assert_eq!(request_origin(&headers, &uri, &fallback()), fallback());
    }
}
