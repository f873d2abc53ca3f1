//! Recommendation pipeline.
//!
//! Flow: rank catalog → build prompt → one completion call → `Recommendation`.
//!
//! The ranking is complete before the network call starts, so a failed call
//! only replaces the advice text; the shortlist is always returned.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::{rank_kits, DrumKit, Preferences, ScoredKit};
use crate::llm_client::{ChatCompleter, FailureKind};
use crate::recommend::prompts::build_messages;

/// What the completion endpoint produced for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Advice {
    Generated { text: String },
    Failed { kind: FailureKind, message: String },
}

impl Advice {
    /// Text shown to the user in place of the model output.
    pub fn display_text(&self) -> String {
        match self {
            Advice::Generated { text } => text.clone(),
            Advice::Failed { kind, message } => {
                format!("AI call failed: {}: {}", kind.as_str(), message)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub preferences: Preferences,
    pub shortlist: Vec<ScoredKit<'a>>,
    pub advice: Advice,
}

/// Ranks `catalog` for `prefs` and asks the model to explain the top `k`.
///
/// Never fails: completion errors are captured as `Advice::Failed`.
pub async fn recommend<'a>(
    llm: &dyn ChatCompleter,
    catalog: &'a [DrumKit],
    prefs: Preferences,
    k: usize,
) -> Recommendation<'a> {
    let id = Uuid::new_v4();

    let shortlist: Vec<ScoredKit<'a>> = rank_kits(catalog, &prefs).into_iter().take(k).collect();
    let kits: Vec<&DrumKit> = shortlist.iter().map(|scored| scored.kit).collect();
    info!(
        %id,
        top = ?shortlist.iter().map(|s| (s.kit.id, s.score)).collect::<Vec<_>>(),
        "Shortlist ranked"
    );

    let messages = build_messages(&prefs, &kits);
    let advice = match llm.complete(&messages).await {
        Ok(text) => Advice::Generated { text },
        Err(e) => {
            warn!(%id, kind = e.kind().as_str(), "LLM call failed: {e}");
            Advice::Failed {
                kind: e.kind(),
                message: e.to_string(),
            }
        }
    };

    Recommendation {
        id,
        generated_at: Utc::now(),
        preferences: prefs,
        shortlist,
        advice,
    }
}
