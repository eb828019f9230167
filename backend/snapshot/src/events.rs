//! Balance-changing events of the SENSO token, decoded from a `getEvents`
//! export.
//!
//! | Topic      | Topics after the symbol | Effect                       |
//! |------------|-------------------------|------------------------------|
//! | `mint`     | `minter`, `to`          | `to += amount`               |
//! | `transfer` | `from`, `to`            | `from -= amount; to += amount` |
//! | `burn`     | `from`                  | `from -= amount`             |
//! | `unfrozen` | `to`, `duration`        | `to += amount`               |
//!
//! Frozen mints are not spendable and only reach a balance through
//! `unfrozen`, so `frozen` events are ignored here.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, SnapshotError};

// ─────────────────────────────────────────────────────────
// Export file shape
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EventsExport {
    pub events: Vec<RawEvent>,
}

impl EventsExport {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawEvent {
    /// XDR-decoded topic list, one JSON document per entry
    pub topic: Vec<String>,
    /// XDR-decoded event data
    pub value: Value,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
}

// ─────────────────────────────────────────────────────────
// Decoded events
// ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Mint,
    Transfer,
    Burn,
    Unfrozen,
    /// Anything that leaves spendable balances untouched.
    Other,
}

impl EventKind {
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "mint" => Self::Mint,
            "transfer" => Self::Transfer,
            "burn" => Self::Burn,
            "unfrozen" => Self::Unfrozen,
            _ => Self::Other,
        }
    }
}

/// A balance movement. `from == None` creates tokens, `to == None` destroys them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: i128,
    pub ledger: u64,
}

/// Decode the balance-changing events of an export, in file order.
///
/// Events from failed contract calls are dropped.
pub fn decode_movements(raw: &[RawEvent]) -> Result<Vec<Movement>> {
    let mut movements = Vec::new();
    for event in raw {
        if event.in_successful_contract_call == Some(false) {
            continue;
        }
        if let Some(movement) = decode_single(event)? {
            movements.push(movement);
        }
    }
    debug!("Decoded {} movements from {} events", movements.len(), raw.len());
    Ok(movements)
}

fn decode_single(raw: &RawEvent) -> Result<Option<Movement>> {
    let Some(first_topic) = raw.topic.first() else {
        return Ok(None);
    };
    let kind = EventKind::from_topic(&extract_value(first_topic));
    if kind == EventKind::Other {
        return Ok(None);
    }

    let topic = |index: usize| -> Result<String> {
        raw.topic
            .get(index)
            .map(|t| extract_value(t))
            .ok_or_else(|| SnapshotError::EventParse(format!("{kind:?} event without topic {index}")))
    };
    let ledger = raw.ledger.unwrap_or(0);
    let amount = extract_amount(&raw.value)?;

    let (from, to) = match kind {
        EventKind::Mint => (None, Some(topic(2)?)),
        EventKind::Transfer => (Some(topic(1)?), Some(topic(2)?)),
        EventKind::Burn => (Some(topic(1)?), None),
        EventKind::Unfrozen => (None, Some(topic(1)?)),
        EventKind::Other => return Ok(None),
    };

    Ok(Some(Movement {
        from,
        to,
        amount,
        ledger,
    }))
}

/// A topic entry is `{"type":"symbol","value":"mint"}`, or the bare value.
fn extract_value(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(s) = v.get("value").and_then(|x| x.as_str()) {
            return s.to_string();
        }
    }
    raw.to_string()
}

/// Event data is an `i128`, rendered as a number, a decimal string or a
/// `{"type":"i128","value":…}` object.
fn extract_amount(value: &Value) -> Result<i128> {
    let parsed: Option<i128> = match value {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.parse().ok(),
        Value::Object(map) => {
            let inner = map
                .get("value")
                .ok_or_else(|| SnapshotError::EventParse(format!("No amount in {value}")))?;
            return extract_amount(inner);
        }
        _ => None,
    };
    parsed.ok_or_else(|| SnapshotError::EventParse(format!("Invalid amount: {value}")))
}

/// Closing time of the last ledger in the export, for logging.
pub fn last_closed_at(raw: &[RawEvent]) -> Option<chrono::DateTime<chrono::FixedOffset>> {
    raw.iter()
        .rev()
        .find_map(|e| e.ledger_closed_at.as_deref())
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
