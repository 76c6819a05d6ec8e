use std::fmt;

/// Port left out of generated URLs
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Network origin of an inbound request, supplied by the transport.
///
/// Data URLs are built from this on every registration, so the same video
/// registered through two different hosts gets two different URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    host: String,
    port: Option<u16>,
}

impl Origin {
    pub fn new<S: Into<String>>(host: S, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// `http://host[:port]`, port omitted when absent or 80
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) if port != DEFAULT_HTTP_PORT => format!("http://{}:{}", self.host, port),
            _ => format!("http://{}", self.host),
        }
    }

    /// `{base}/video/{id}/data`
    pub fn data_url(&self, id: u64) -> String {
        format!("{}/video/{}/data", self.base_url(), id)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url())
    }
}
