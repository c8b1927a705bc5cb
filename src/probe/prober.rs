//! RPC endpoint prober
//!
//! Runs the four checks for a target URL and publishes each result into a
//! shared [`ValidationReport`] as soon as it is known. Every invocation of
//! [`RpcProber::validate`] gets a new [`Generation`]; results from an older
//! generation are dropped instead of overwriting the newer report.

use super::{
    BalanceProbe, BlockNumberProbe, ChainIdProbe, CheckStatus, Generation, ValidationReport,
};
use crate::config::ProbeConfig;
use crate::error::{Error, ProbeError, Result};
use crate::registry::{ChainMetadata, ChainRegistry};
use crate::rpc::{parse_quantity, parse_u64_quantity, RpcClient, ZERO_ADDRESS};
use reqwest::Url;
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Checks whether URLs are working JSON-RPC endpoints
///
/// Cloning is cheap; clones share the same report.
#[derive(Clone)]
pub struct RpcProber {
    inner: Arc<Inner>,
}

struct Inner {
    client: RpcClient,
    registry: ChainRegistry,
    /// Latest report. The generation lives inside the report so that resetting
    /// and compare-then-write both happen under the channel's lock.
    report: watch::Sender<ValidationReport>,
}

/// Handle to a running validation
pub struct ValidationHandle {
    generation: Generation,
    task: JoinHandle<ValidationReport>,
}

impl ValidationHandle {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Wait for all four checks of this invocation
    ///
    /// Returns this invocation's own results, even if a later `validate`
    /// call superseded it in the shared report.
    pub async fn finished(self) -> Result<ValidationReport> {
        self.task.await.map_err(|e| Error::Task(e.to_string()))
    }
}

impl RpcProber {
    /// Create a prober
    pub fn new(config: ProbeConfig) -> Result<Self> {
        config.check()?;

        let client = RpcClient::new(config.timeout)?;
        let registry = config.registry();
        let (report, _) = watch::channel(ValidationReport::idle());

        Ok(Self {
            inner: Arc::new(Inner {
                client,
                registry,
                report,
            }),
        })
    }

    /// Chains used to resolve `eth_chainId` results
    pub fn registry(&self) -> &ChainRegistry {
        &self.inner.registry
    }

    /// Start validating `url`, superseding any validation still in flight
    ///
    /// The report is reset to all-pending before this returns. Must be called
    /// from within a tokio runtime.
    pub fn validate(&self, url: impl Into<String>) -> ValidationHandle {
        let target = url.into();

        let mut generation = Generation::INITIAL;
        self.inner.report.send_modify(|report| {
            generation = report.generation().next();
            *report = ValidationReport::pending(generation, target.clone());
        });

        tracing::info!("Validating {} ({})", target, generation);

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move { inner.run(generation, target).await });

        ValidationHandle { generation, task }
    }

    /// Latest complete snapshot
    pub fn current_report(&self) -> ValidationReport {
        self.inner.report.borrow().clone()
    }

    /// Receive every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<ValidationReport> {
        self.inner.report.subscribe()
    }

    pub fn current_generation(&self) -> Generation {
        self.inner.report.borrow().generation()
    }

    /// Whether `generation` is still the latest invocation
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current_generation() == generation
    }
}

impl Inner {
    async fn run(&self, generation: Generation, target: String) -> ValidationReport {
        let mut local = ValidationReport::pending(generation, target.clone());

        let url = match parse_target(&target) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("{} rejected: {}", generation, e);
                local.fail_all(&e);
                self.publish(generation, |report| report.fail_all(&e));
                return local;
            }
        };

        let url_status = CheckStatus::Succeeded(url.clone());
        local.url = url_status.clone();
        self.publish(generation, |report| report.url = url_status);

        let (chain_id, block_number, balance) = tokio::join!(
            self.check(generation, self.probe_chain_id(&url), |r, s| r.chain_id = s),
            self.check(generation, self.probe_block_number(&url), |r, s| r.block_number = s),
            self.check(generation, self.probe_balance(&url), |r, s| r.balance = s),
        );

        local.chain_id = chain_id;
        local.block_number = block_number;
        local.balance = balance;

        tracing::info!(
            "{} finished for {}: {}",
            generation,
            target,
            if local.all_valid() { "valid" } else { "invalid" }
        );

        local
    }

    /// Await one probe and publish its status into the matching slot
    async fn check<T, F>(
        &self,
        generation: Generation,
        probe: F,
        assign: impl Fn(&mut ValidationReport, CheckStatus<T>),
    ) -> CheckStatus<T>
    where
        T: Clone,
        F: Future<Output = CheckStatus<T>>,
    {
        let status = probe.await;
        self.publish(generation, |report| assign(report, status.clone()));
        status
    }

    /// Apply `update` only if `generation` is still current
    fn publish(&self, generation: Generation, update: impl FnOnce(&mut ValidationReport)) -> bool {
        let applied = self.report.send_if_modified(|report| {
            if report.generation() != generation {
                return false;
            }
            update(report);
            true
        });

        if !applied {
            tracing::debug!("Discarding result from superseded validation {}", generation);
        }
        applied
    }

    async fn probe_chain_id(&self, url: &Url) -> CheckStatus<ChainIdProbe> {
        self.call(url, "eth_chainId", json!([]))
            .await
            .map(|(raw, latency)| {
                let chain_id = parse_u64_quantity(&raw);
                let identity = chain_id
                    .and_then(|id| self.registry.resolve(id))
                    .map(ChainMetadata::identity);

                if identity.is_none() {
                    tracing::debug!("Chain ID {} is not in the registry", raw);
                }

                ChainIdProbe {
                    raw,
                    chain_id,
                    identity,
                    latency,
                }
            })
            .into()
    }

    async fn probe_block_number(&self, url: &Url) -> CheckStatus<BlockNumberProbe> {
        self.call(url, "eth_blockNumber", json!([]))
            .await
            .map(|(raw, latency)| BlockNumberProbe {
                block_number: parse_u64_quantity(&raw),
                latency,
            })
            .into()
    }

    async fn probe_balance(&self, url: &Url) -> CheckStatus<BalanceProbe> {
        self.call(url, "eth_getBalance", json!([ZERO_ADDRESS.to_string()]))
            .await
            .map(|(raw, latency)| BalanceProbe {
                balance: parse_quantity(&raw),
                latency,
            })
            .into()
    }

    async fn call(
        &self,
        url: &Url,
        method: &str,
        params: serde_json::Value,
    ) -> std::result::Result<(serde_json::Value, std::time::Duration), ProbeError> {
        let result = self.client.call(url, method, params).await;
        if let Err(e) = &result {
            tracing::debug!("{} failed on {}: {}", method, url, e);
        }
        result
    }
}

/// URL syntax check: the target must be an absolute URL with a scheme
pub fn parse_target(target: &str) -> std::result::Result<Url, ProbeError> {
    Url::parse(target).map_err(|e| ProbeError::MalformedUrl(format!("'{}' ({})", target, e)))
}
