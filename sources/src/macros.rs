//! Define our own macro to simplify the code
//!

/// Call the HTTP client with the proper arguments
///
/// - unauth GET with the fixed browser-like header set the upstream expects
///
#[macro_export]
macro_rules! http_get {
    ($self:ident, $url:expr) => {
        $self
            .client
            .clone()
            .get($url)
            .header(
                "user-agent",
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            )
            .header("accept", "text/csv,application/octet-stream;q=0.9,*/*;q=0.8")
            .header("accept-language", "en-GB,en;q=0.9")
            .header("referer", "https://www.gov.uk/guidance/access-fuel-price-data")
            .header("cache-control", "no-cache")
            .header("pragma", "no-cache")
            .send()
    };
}
