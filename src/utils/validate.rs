//! Input validators for addresses and URLs

use reqwest::Url;

/// Dotted-quad IPv4 address with every part in `0..=255`.
pub fn is_valid_ip(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    parts.len() == 4
        && parts.iter().all(|part| {
            (1..=3).contains(&part.len())
                && part.chars().all(|c| c.is_ascii_digit())
                && part.parse::<u16>().is_ok_and(|n| n <= 255)
        })
}

pub fn is_valid_port(port: &str) -> bool {
    port.trim()
        .parse::<u32>()
        .is_ok_and(|p| p > 0 && p < 65536)
}

/// `IP:PORT`, surrounding whitespace ignored.
pub fn is_valid_proxy(proxy: &str) -> bool {
    let parts: Vec<&str> = proxy.trim().split(':').collect();
    if parts.len() != 2 {
        return false;
    }
    is_valid_ip(parts[0]) && is_valid_port(parts[1])
}

/// Absolute URL that parses without a base.
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}
