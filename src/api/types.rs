//! Wire types of the ProxyPool admin API.

use super::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /api/stats`. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub proxy_count: Option<u64>,
    #[serde(default)]
    pub crawler_count: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub avg_score: Option<f64>,
}

/// One entry of the proxy list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyRecord {
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub last_checked: Option<String>,
}

impl ProxyRecord {
    pub fn new(proxy: &str, score: f64, last_checked: &str) -> Self {
        Self {
            proxy: Some(proxy.to_string()),
            score: Some(score),
            last_checked: Some(last_checked.to_string()),
        }
    }

    /// Proxy address, or `N/A` when the server left it out.
    pub fn address(&self) -> &str {
        self.proxy
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("N/A")
    }

    pub fn score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }

    pub fn last_checked(&self) -> &str {
        self.last_checked
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("N/A")
    }
}

/// Body of `GET /api/proxies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyPage {
    pub proxies: Vec<ProxyRecord>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl ProxyPage {
    /// Validates and decodes a proxy page.
    ///
    /// The `proxies` field must be an array; anything else is malformed.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        match value.get("proxies") {
            Some(Value::Array(_)) => Ok(serde_json::from_value(value)?),
            _ => Err(ApiError::Malformed(
                "response has no proxies array".to_string(),
            )),
        }
    }

    pub fn total(&self) -> u64 {
        self.total.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proxy_page_requires_array() {
        let err = ProxyPage::from_value(json!({ "total": 3 })).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));

        let err = ProxyPage::from_value(json!({ "proxies": "nope" })).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));

        let page = ProxyPage::from_value(json!({ "proxies": [] })).unwrap();
        assert!(page.proxies.is_empty());
        assert_eq!(page.total(), 0);
    }

    #[test]
    fn test_record_defaults() {
        let page = ProxyPage::from_value(json!({
            "proxies": [{ "score": 42 }, { "proxy": "1.2.3.4:80", "last_checked": "" }],
            "total": 2
        }))
        .unwrap();
        assert_eq!(page.proxies[0].address(), "N/A");
        assert_eq!(page.proxies[0].score(), 42.0);
        assert_eq!(page.proxies[1].score(), 0.0);
        assert_eq!(page.proxies[1].last_checked(), "N/A");
    }
}
