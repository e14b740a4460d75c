//! Rule-based advice for the duck house environment.
//!
//! [`advise`] turns the latest temperature, humidity and ammonia readings into
//! an ordered list of [`Recommendation`]s. Every rule is evaluated on its own;
//! the output order is the rule order. When no rule fires the list holds the
//! single [`Recommendation::AllOptimal`] entry, so it is never empty.

mod engine;
mod readings;
mod recommendation;

pub use engine::{advise, messages};
pub use readings::Readings;
pub use recommendation::Recommendation;
