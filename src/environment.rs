use crate::consts::dashboard_consts::DEFAULT_API_URL;
use reqwest::Url;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the ProxyPool backend the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// ProxyPool running on this machine with its default port.
    #[default]
    Local,
    /// Any other ProxyPool deployment.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Host and port of the API, as shown in the dashboard header.
    ///
    /// The port falls back to the scheme's default when the URL omits it.
    pub fn host_and_port(&self) -> (String, String) {
        match Url::parse(&self.api_url()) {
            Ok(url) => {
                let host = url.host_str().unwrap_or("unknown").to_string();
                let port = url
                    .port_or_known_default()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string());
                (host, port)
            }
            Err(_) => ("unknown".to_string(), "-".to_string()),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        let is_http = Url::parse(s).is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
        if crate::utils::validate::is_valid_url(s) && is_http {
            Ok(Environment::Custom {
                api_url: s.trim_end_matches('/').to_string(),
            })
        } else {
            Err(format!("Invalid API URL: {}", s))
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "http://10.0.0.2:5555/".parse::<Environment>(),
            Ok(Environment::Custom {
                api_url: "http://10.0.0.2:5555".to_string()
            })
        );
        assert!("not a url".parse::<Environment>().is_err());
    }

    #[test]
    fn test_host_and_port() {
        assert_eq!(
            Environment::Local.host_and_port(),
            ("127.0.0.1".to_string(), "5555".to_string())
        );
        let env = Environment::Custom {
            api_url: "https://pool.example.com".to_string(),
        };
        assert_eq!(
            env.host_and_port(),
            ("pool.example.com".to_string(), "443".to_string())
        );
    }
}
