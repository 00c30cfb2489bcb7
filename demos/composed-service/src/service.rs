use crate::config::ChainConfig;
use crate::http::{HttpResponse, StubClient};
use tandem_core::{BoxProducer, Chain, ChainError, Failure, Outcome, Producer, Traced};

/// A single endpoint. Producing it performs one stub request; the client's
/// error is captured into the outcome here, before it reaches a chain.
#[derive(Debug, Clone)]
pub struct Service {
    client: StubClient,
    url: String,
}

impl Service {
    pub fn new(client: StubClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl Producer for Service {
    type Value = HttpResponse;
    type Error = Failure;

    fn produce(&self) -> Outcome<HttpResponse, Failure> {
        Outcome::capture(|| self.client.get(&self.url))
    }
}

/// Build the traced service chain described by one config entry.
pub fn build_chain(
    client: &StubClient,
    config: &ChainConfig,
) -> Result<Chain<HttpResponse, Failure>, ChainError> {
    let producers = config.urls.iter().map(|url| {
        let service = Service::new(client.clone(), url.as_str());
        Box::new(Traced::new(service, url)) as BoxProducer<HttpResponse, Failure>
    });
    Chain::from_producers(&config.label, producers)
}

/// Render a finished chain the way the demo prints it: the composed body,
/// or the error's `Display` form.
pub fn render_outcome(outcome: Outcome<HttpResponse, Failure>) -> String {
    outcome.dispatch(|response| response.to_string(), |failure| failure.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    const GOOD: &str = "https://www.android.com";

    fn render(outcome: Outcome<HttpResponse, Failure>) -> Result<String, String> {
        outcome.dispatch(|resp| Ok(resp.to_string()), |err| Err(err.message().to_string()))
    }

    #[test]
    fn test_service_captures_client_error() {
        let client = StubClient::new("https://www.apple.com");
        let out = Service::new(client, "https://www.apple.com").produce();
        assert_eq!(
            out,
            Outcome::Fault(Failure::new("Exception for https://www.apple.com"))
        );
    }

    #[test]
    fn test_default_chains_match_reference_output() {
        let config = DemoConfig::default();
        let client = StubClient::new(config.secret_url.as_str());
        let rendered: Vec<_> = config
            .chains
            .iter()
            .map(|c| render(build_chain(&client, c).unwrap().evaluate()))
            .collect();

        let fault = Err("Exception for https://www.apple.com".to_string());
        let composed = vec![GOOD; 5].join(" composed with ");
        assert_eq!(
            rendered,
            vec![Ok(GOOD.to_string()), fault.clone(), fault, Ok(composed)]
        );
    }

    #[test]
    fn test_render_distinguishes_panics_from_failures() {
        let client = StubClient::new("https://www.apple.com");
        let refused = Service::new(client, "https://www.apple.com").produce();
        assert_eq!(render_outcome(refused), "Exception for https://www.apple.com");

        let panicked: Outcome<HttpResponse, Failure> =
            Outcome::capture(|| -> anyhow::Result<HttpResponse> { panic!("socket closed") });
        assert_eq!(render_outcome(panicked), "panicked: socket closed");

        let body = Outcome::success(HttpResponse::new("https://www.android.com"));
        assert_eq!(render_outcome(body), "https://www.android.com");
    }

    #[test]
    fn test_empty_chain_is_rejected() {
        let client = StubClient::new("x");
        let config = ChainConfig {
            label: "nothing".to_string(),
            urls: Vec::new(),
        };
        assert!(matches!(
            build_chain(&client, &config),
            Err(ChainError::Empty { .. })
        ));
    }
}
