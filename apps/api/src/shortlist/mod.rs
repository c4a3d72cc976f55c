// Shortlisting: threshold filtering over LLM-produced match scores, plus a
// pure deterministic skill-overlap scorer for the no-LLM comparison path.
//
// Precedence rule: wherever a CandidateAnalysis exists, its overall_match is
// authoritative. The overlap scorer never overwrites an LLM score.

pub mod handlers;
pub mod scorer;
pub mod shortlister;
