//! Host embedding layer
//!
//! The engine runs one tick per render callback supplied by the host. On the
//! web that callback is `requestAnimationFrame`, owned here as an explicit
//! cancellable handle: stopping the mini-game removes the simulation from the
//! callback schedule, so no tick ever runs after teardown.
//!
//! The simulation compiles and tests without any of this; native consumers
//! drive `Engine::frame` from whatever loop they own.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::ArcadeApp;
