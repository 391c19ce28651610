//! Publication — turning a resume into a website under a purchased domain.
//!
//! Coordination only: the domain check and registration belong to the
//! external registrar, persistence to the site store, and the document
//! itself to the static site generator. What this module owns is the
//! sequencing contract (check before publish, at-most-once registration,
//! no partial record on failure) in [`flow`].

pub mod domain;
pub mod flow;
pub mod handlers;
pub mod registrar;
pub mod store;
