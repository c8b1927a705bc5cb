//! JSON rendering

use crate::error::ProbeError;
use crate::probe::{ChainResolution, CheckStatus, ValidationReport};
use serde_json::{json, Map, Value};
use std::time::Duration;

/// Report as a JSON document
pub fn to_json(report: &ValidationReport) -> Value {
    let url = check(report.url(), |url| (json!(url.as_str()), None));
    let chain_id = check(report.chain_id(), |p| (json!(p.chain_id), Some(p.latency)));
    let block_number = check(report.block_number(), |p| {
        (json!(p.block_number), Some(p.latency))
    });
    let balance = check(report.balance(), |p| {
        (json!(p.balance.map(|b| b.to_string())), Some(p.latency))
    });

    json!({
        "target": report.target(),
        "generation": report.generation().get(),
        "all_valid": report.all_valid(),
        "checks": {
            "url": url,
            "chain_id": chain_id,
            "block_number": block_number,
            "balance": balance,
        },
        "chain": chain(report),
    })
}

fn check<T>(status: &CheckStatus<T>, value: impl Fn(&T) -> (Value, Option<Duration>)) -> Value {
    let mut out = Map::new();
    out.insert("status".into(), json!(status.label()));

    match status {
        CheckStatus::Succeeded(v) => {
            let (v, latency) = value(v);
            out.insert("value".into(), v);
            if let Some(latency) = latency {
                out.insert("latency_ms".into(), json!(latency.as_millis() as u64));
            }
        }
        CheckStatus::Failed(e) => {
            out.insert("error".into(), error(e));
        }
        CheckStatus::NotStarted | CheckStatus::Pending => {}
    }

    Value::Object(out)
}

fn error(e: &ProbeError) -> Value {
    json!({
        "code": e.code(),
        "message": e.to_string(),
    })
}

fn chain(report: &ValidationReport) -> Value {
    match report.chain() {
        ChainResolution::NotProbed => json!({ "status": "not_probed" }),
        ChainResolution::Failed(_) => json!({ "status": "failed" }),
        ChainResolution::Unknown { chain_id } => json!({
            "status": "unknown",
            "id": chain_id,
        }),
        ChainResolution::Known(identity) => json!({
            "status": "known",
            "id": identity.id,
            "name": identity.name,
            "mainnet": identity.mainnet,
            "info_url": identity.info_url,
        }),
    }
}
