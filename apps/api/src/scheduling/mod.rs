// Interview scheduling: business-day slot proposal, invitation drafting
// (LLM with a deterministic template fallback), and the email-transport
// seam. Actual delivery happens on the far side of the transport trait.

pub mod email;
pub mod handlers;
pub mod prompts;
pub mod slots;
pub mod transport;
