use crate::client::config::Config;
use crate::client::consts::AUTHORIZATION_HEADER;
use secrecy::ExposeSecret;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;

pub fn build_request(config: &Config) -> tokio_tungstenite::tungstenite::Result<Request> {
    let mut request = format!("{}/call", config.base_url()).into_client_request()?;
    request.headers_mut().insert(
        AUTHORIZATION_HEADER,
        format!("Bearer {}", config.api_key().expose_secret())
            .as_str()
            .parse()?,
    );
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_targets_call_endpoint_with_bearer_auth() {
        let config = Config::builder()
            .with_base_url("wss://example.test/v1")
            .with_api_key("sk-test")
            .build();

        let request = build_request(&config).expect("valid request");
        assert_eq!(request.uri().to_string(), "wss://example.test/v1/call");
        assert_eq!(
            request.headers().get(AUTHORIZATION_HEADER).unwrap(),
            "Bearer sk-test"
        );
    }
}
