use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::domain::HintKind;
use crate::gateway::{AiGateway, GatewayError};

/// Data URI returned by a successful scripted morph.
pub const SCRIPTED_MORPH: &str = "data:image/png;base64,TU9SUEg=";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Morph { source: String, shape: String },
    Hint { creature_name: String, kind: HintKind },
}

/// In-memory [`AiGateway`] that records calls and replays scripted answers.
///
/// By default morphs succeed with [`SCRIPTED_MORPH`] and hints echo their kind.
pub struct ScriptedGateway {
    calls: Mutex<Vec<GatewayCall>>,
    morph_fails: bool,
    morph: String,
    hints_fail: bool,
    hints: Mutex<VecDeque<String>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            morph_fails: false,
            morph: SCRIPTED_MORPH.to_string(),
            hints_fail: false,
            hints: Mutex::new(VecDeque::new()),
            gate: None,
        }
    }

    pub fn failing_morph(mut self) -> Self {
        self.morph_fails = true;
        self
    }

    /// Answer successful morphs with `url` instead of [`SCRIPTED_MORPH`].
    pub fn with_morph(mut self, url: impl Into<String>) -> Self {
        self.morph = url.into();
        self
    }

    pub fn failing_hints(mut self) -> Self {
        self.hints_fail = true;
        self
    }

    /// Hints handed out in order before falling back to the echo text.
    pub fn with_hints<I, S>(self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints.lock().extend(hints.into_iter().map(Into::into));
        self
    }

    /// Every call waits for `gate.notify_one()` before answering.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().clone()
    }

    pub fn hint_kinds(&self) -> Vec<HintKind> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                GatewayCall::Hint { kind, .. } => Some(*kind),
                GatewayCall::Morph { .. } => None,
            })
            .collect()
    }

    async fn wait_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiGateway for ScriptedGateway {
    async fn morph(
        &self,
        source_image_url: &str,
        shape_image_url: &str,
    ) -> Result<String, GatewayError> {
        self.calls.lock().push(GatewayCall::Morph {
            source: source_image_url.to_string(),
            shape: shape_image_url.to_string(),
        });
        self.wait_gate().await;

        if self.morph_fails {
            Err(GatewayError::NoImage)
        } else {
            Ok(self.morph.clone())
        }
    }

    async fn generate_hint(
        &self,
        creature_name: &str,
        kind: HintKind,
    ) -> Result<String, GatewayError> {
        self.calls.lock().push(GatewayCall::Hint {
            creature_name: creature_name.to_string(),
            kind,
        });
        self.wait_gate().await;

        if self.hints_fail {
            return Err(GatewayError::Backend {
                status: 503,
                body: "model overloaded".to_string(),
            });
        }
        let scripted = self.hints.lock().pop_front();
        Ok(scripted.unwrap_or_else(|| format!("{kind:?} hint")))
    }
}
