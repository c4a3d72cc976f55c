// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt for every structured-extraction call.
///
/// Role framing lives in the per-feature prompt templates; this fragment
/// only pins the output contract. The normalizer copes when the model
/// ignores it (fences, preamble, truncation), but asking keeps the
/// strict-parse path the common case.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
