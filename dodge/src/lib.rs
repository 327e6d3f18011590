//! # Dodge: cube orientation runner
//!
//! Entry point for both the documentation and the executable. The binary
//! loads a scenario, drives the orient/translate episode loop at a fixed
//! timestep with a simple policy, and logs how each episode went.
//!
//! ### The Crates
//!
//! -   **[`physics`]:** poses, oriented boxes, ray casts and contacts.
//! -   **[`rl`]:** the cube agent, the episode orchestrator and the `Env`
//!     adapter.
//! -   **[`scenario`]:** JSON scene files.

pub mod app;

pub use physics;
pub use rl;
pub use scenario;
