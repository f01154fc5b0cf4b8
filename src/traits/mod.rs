//! Trait seams to collaborators outside the simulation core.
//!
//! Only the insight feature talks to the outside world; its provider is
//! abstracted by [`InsightProvider`].

mod insight_provider;

pub use insight_provider::InsightProvider;
