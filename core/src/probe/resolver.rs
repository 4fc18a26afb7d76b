use std::sync::Arc;

use async_trait::async_trait;
use probehost_common::config::AdmissionPolicy;
use probehost_common::network::ip;
use probehost_common::network::target::{HostKind, TargetToken};
use tracing::debug;

/// An admitted target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSpec {
    /// IP literal or a hostname that resolved at admission time.
    pub host: String,
    /// `0` means no port.
    pub port: u16,
}

/// Answers whether a hostname currently resolves.
#[async_trait]
pub trait NameLookup: Send + Sync {
    async fn resolves(&self, host: &str) -> bool;
}

/// Uses the system resolver through `tokio::net::lookup_host`.
pub struct SystemLookup;

#[async_trait]
impl NameLookup for SystemLookup {
    async fn resolves(&self, host: &str) -> bool {
        match tokio::net::lookup_host((host, 0)).await {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(e) => {
                debug!(host, error = %e, "name lookup failed");
                false
            }
        }
    }
}

pub struct TargetResolver {
    policy: AdmissionPolicy,
    lookup: Arc<dyn NameLookup>,
}

impl TargetResolver {
    pub fn new(policy: AdmissionPolicy, lookup: Arc<dyn NameLookup>) -> Self {
        Self { policy, lookup }
    }

    /// Admits tokens one by one, in order. Rejected tokens leave no trace in
    /// the result.
    pub async fn resolve<'a, I>(&self, tokens: I) -> Vec<TargetSpec>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Send,
    {
        let mut admitted = Vec::new();

        for raw in tokens {
            let token = TargetToken::parse(raw);
            if self.admits(&token).await {
                admitted.push(TargetSpec {
                    host: token.host,
                    port: token.port,
                });
            } else {
                debug!(token = raw, "target rejected");
            }
        }

        admitted
    }

    async fn admits(&self, token: &TargetToken) -> bool {
        match token.classify() {
            Ok(HostKind::Literal(addr)) => self.policy.allow_private || !ip::is_restricted(&addr),
            // Whatever the name resolves to is not checked against the policy.
            Ok(HostKind::Name) => self.lookup.resolves(&token.host).await,
            Err(e) => {
                debug!(host = %token.host, error = %e, "not a host");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn unzip_targets(targets: &[TargetSpec]) -> (Vec<&str>, Vec<u16>) {
        targets
            .iter()
            .map(|target| (target.host.as_str(), target.port))
            .unzip()
    }

    /// Resolves only the listed names and records every lookup.
    struct StubLookup {
        known: Vec<&'static str>,
        seen: Mutex<Vec<String>>,
    }

    impl StubLookup {
        fn new(known: &[&'static str]) -> Arc<Self> {
            Arc::new(Self {
                known: known.to_vec(),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl NameLookup for StubLookup {
        async fn resolves(&self, host: &str) -> bool {
            self.seen.lock().unwrap().push(host.to_string());
            self.known.contains(&host)
        }
    }

    fn resolver(allow_private: bool, lookup: Arc<StubLookup>) -> TargetResolver {
        let policy = AdmissionPolicy {
            allow_private,
            ..Default::default()
        };
        TargetResolver::new(policy, lookup)
    }

    #[tokio::test]
    async fn test_private_literals_follow_policy() {
        let tokens = [
            "8.8.8.8",
            "10.0.0.5",
            "127.0.0.1",
            "::1",
            "fd00::1",
            "2001:4860:4860::8888",
            "::ffff:127.0.0.1",
            "::ffff:10.0.0.5",
            "::ffff:192.168.1.1",
        ];

        let strict = resolver(false, StubLookup::new(&[]));
        let targets = strict.resolve(tokens).await;
        let (hosts, _) = unzip_targets(&targets);
        assert_eq!(hosts, vec!["8.8.8.8", "2001:4860:4860::8888"]);

        let permissive = resolver(true, StubLookup::new(&[]));
        let targets = permissive.resolve(tokens).await;
        let (hosts, _) = unzip_targets(&targets);
        assert_eq!(hosts, tokens.to_vec());
    }

    #[tokio::test]
    async fn test_names_need_to_resolve() {
        let lookup = StubLookup::new(&["example.com"]);
        let resolver = resolver(false, lookup.clone());

        let targets = resolver
            .resolve(["example.com", "nothing.invalid", "example.com_80"])
            .await;

        assert_eq!(
            targets,
            vec![
                TargetSpec { host: "example.com".into(), port: 0 },
                TargetSpec { host: "example.com".into(), port: 80 },
            ]
        );
        // One lookup per token, literals never hit the resolver
        assert_eq!(lookup.seen.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_hosts_skip_lookup() {
        let lookup = StubLookup::new(&["-c1000", ""]);
        let resolver = resolver(true, lookup.clone());

        let targets = resolver.resolve(["-c1000", "", "a;b", "$(id)"]).await;

        assert!(targets.is_empty());
        assert!(lookup.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_numeric_shorthand_skips_lookup() {
        let shorthand = ["127.1", "2130706433", "0x7f000001", "10.1"];
        let lookup = StubLookup::new(&shorthand);
        let resolver = resolver(false, lookup.clone());

        assert!(resolver.resolve(shorthand).await.is_empty());
        assert!(lookup.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resolved_names_bypass_private_filter() {
        // A name pointing at loopback is still admitted with allow_private off.
        let resolver = resolver(false, StubLookup::new(&["localhost"]));
        let targets = resolver.resolve(["localhost", "127.0.0.1"]).await;

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].host, "localhost");
    }

    #[tokio::test]
    async fn test_ports_stay_aligned() {
        let resolver = resolver(false, StubLookup::new(&["example.com"]));
        let tokens = [
            "10.0.0.1_53",
            "8.8.8.8_53",
            "bad host_1",
            "1.1.1.1_abc",
            "example.com_443",
            "9.9.9.9",
        ];

        let targets = resolver.resolve(tokens).await;
        let (hosts, ports) = unzip_targets(&targets);

        assert_eq!(hosts.len(), ports.len());
        assert_eq!(hosts, vec!["8.8.8.8", "1.1.1.1", "example.com", "9.9.9.9"]);
        assert_eq!(ports, vec![53, 0, 443, 0]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let resolver = resolver(true, StubLookup::new(&[]));
        assert!(resolver.resolve(Vec::<&str>::new()).await.is_empty());
        assert!(resolver.resolve([""]).await.is_empty());
    }
}
