use std::sync::Arc;

use serde::Serialize;

use crate::token::{AccountId, TokenId};

/// Fire-and-forget sink for diagnostic log lines. Failures are not
/// observable to the ledger.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

/// Sink that forwards every line to `tracing` at info level.
#[derive(Debug, Default)]
pub struct TracingLog;

impl LogSink for TracingLog {
    fn log(&self, message: &str) {
        tracing::info!(target: "collectible_ledger", "{message}");
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "standard")]
#[must_use = "don't forget to `.emit()` this event"]
#[serde(rename_all = "snake_case")]
pub(crate) enum LedgerEvent<'a> {
    Collectible(CollectibleEvent<'a>),
}

impl<'a> LedgerEvent<'a> {
    fn to_json_string(&self) -> String {
        // Events cannot fail to serialize so fine to panic on error
        serde_json::to_string(self).expect("event serialization")
    }

    fn to_json_event_string(&self) -> String {
        format!("EVENT_JSON:{}", self.to_json_string())
    }

    /// Writes the event line to every subscribed sink. This is required to
    /// ensure that the event is triggered and to consume the event.
    pub(crate) fn emit(self, sinks: &[Arc<dyn LogSink>]) {
        let line = self.to_json_event_string();
        for sink in sinks {
            sink.log(&line);
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
enum CollectibleEventKind<'a> {
    Transfer(&'a [Transfer<'a>]),
}

#[derive(Serialize, Debug)]
pub(crate) struct CollectibleEvent<'a> {
    version: &'static str,
    #[serde(flatten)]
    event_kind: CollectibleEventKind<'a>,
}

fn new_collectible<'a>(
    version: &'static str,
    event_kind: CollectibleEventKind<'a>,
) -> LedgerEvent<'a> {
    LedgerEvent::Collectible(CollectibleEvent { version, event_kind })
}

fn new_collectible_v1(event_kind: CollectibleEventKind) -> LedgerEvent {
    new_collectible("1.0.0", event_kind)
}

/// Unit movement between holdings. A mint carries no `old_owner_id`.
#[must_use]
#[derive(Serialize, Debug, Clone)]
pub(crate) struct Transfer<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_owner_id: Option<&'a AccountId>,
    pub new_owner_id: &'a AccountId,
    pub token_ids: &'a [TokenId],
    pub amounts: &'a [&'a str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<&'a str>,
}

impl Transfer<'_> {
    pub(crate) fn emit(self, sinks: &[Arc<dyn LogSink>]) {
        Self::emit_many(&[self], sinks)
    }

    pub(crate) fn emit_many(data: &[Transfer<'_>], sinks: &[Arc<dyn LogSink>]) {
        new_collectible_v1(CollectibleEventKind::Transfer(data)).emit(sinks)
    }
}
