use reqwest::Client;
use std::time::Duration;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client used for artifact and image downloads.
    ///
    /// Only the connect phase is bounded: a slow artifact download is left to
    /// finish. Requests are never retried; a failed download ends the session.
    pub fn create_client(connect_timeout: Duration) -> Client {
        Client::builder()
            .user_agent(concat!("hdb-forecast/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(2)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}
