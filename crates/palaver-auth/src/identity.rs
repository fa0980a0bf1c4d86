//! Client identity resolution from proxy headers.

/// Header set by the edge platform with the real connecting IP.
pub const CONNECTING_IP_HEADER: &str = "cf-connecting-ip";

/// Generic proxy-forwarded client IP header.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Placeholder identity when no header resolves.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Resolved client identity attached to sessions and rate-limit keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    /// Client IP address, or `"unknown"`.
    pub ip: String,
    /// Client user-agent string, or `"unknown"`.
    pub user_agent: String,
}

impl ClientInfo {
    /// Resolves the client identity from the header preference chain:
    /// the platform connecting-IP header first, then the generic
    /// forwarded-for header, else the placeholder.
    pub fn resolve(
        connecting_ip: Option<&str>,
        forwarded_for: Option<&str>,
        user_agent: Option<&str>,
    ) -> Self {
        let ip = connecting_ip
            .filter(|v| !v.is_empty())
            .or(forwarded_for.filter(|v| !v.is_empty()))
            .unwrap_or(UNKNOWN_IDENTITY)
            .to_string();
        let user_agent = user_agent
            .filter(|v| !v.is_empty())
            .unwrap_or(UNKNOWN_IDENTITY)
            .to_string();

        Self { ip, user_agent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_connecting_ip() {
        let info = ClientInfo::resolve(Some("203.0.113.9"), Some("198.51.100.7"), None);
        assert_eq!(info.ip, "203.0.113.9");
    }

    #[test]
    fn falls_back_to_forwarded_for() {
        let info = ClientInfo::resolve(None, Some("198.51.100.7"), Some("test-agent"));
        assert_eq!(info.ip, "198.51.100.7");
        assert_eq!(info.user_agent, "test-agent");
    }

    #[test]
    fn unknown_when_no_headers() {
        let info = ClientInfo::resolve(None, None, None);
        assert_eq!(info.ip, "unknown");
        assert_eq!(info.user_agent, "unknown");
    }

    #[test]
    fn empty_header_counts_as_absent() {
        let info = ClientInfo::resolve(Some(""), None, Some(""));
        assert_eq!(info.ip, "unknown");
        assert_eq!(info.user_agent, "unknown");
    }

    #[test]
    fn empty_connecting_ip_falls_through() {
        let info = ClientInfo::resolve(Some(""), Some("198.51.100.7"), None);
        assert_eq!(info.ip, "198.51.100.7");
    }
}
