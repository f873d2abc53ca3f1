// Shared prompt fragments.
// Each feature that calls the LLM builds its own prompts alongside it and
// reuses these cross-cutting instructions.

/// Keeps the model from recommending anything it was not handed.
pub const GROUNDING_INSTRUCTION: &str = "Use ONLY the provided shortlist.";

/// Register for user-facing advice.
pub const TONE_INSTRUCTION: &str = "Be direct and practical.";
