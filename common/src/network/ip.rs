use std::net::IpAddr;

/// RFC 1918 for IPv4, unique local (`fc00::/7`) for IPv6.
///
/// IPv4-mapped IPv6 addresses are judged by their IPv4 part.
pub fn is_private(ip_addr: &IpAddr) -> bool {
    match ip_addr.to_canonical() {
        IpAddr::V4(ipv4) => ipv4.is_private(),
        IpAddr::V6(ipv6) => ipv6.is_unique_local(),
    }
}

pub fn is_loopback(ip_addr: &IpAddr) -> bool {
    match ip_addr.to_canonical() {
        IpAddr::V4(ipv4) => ipv4.is_loopback(),
        IpAddr::V6(ipv6) => ipv6.is_loopback(),
    }
}

/// Addresses that are only probed when private targets are allowed.
pub fn is_restricted(ip_addr: &IpAddr) -> bool {
    is_private(ip_addr) || is_loopback(ip_addr)
}
