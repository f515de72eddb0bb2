//! Elasticity & State Demo Library
//!
//! A small HTTP service used to demonstrate how cloud-native applications scale
//! and where their state should live. The binary (`main.rs`) wires these
//! modules into an axum server.
//!
//! ## Modules
//! - **`cart`**: the stateful (in-process) and stateless (Redis-backed) carts.
//! - **`perfect`**: a deliberately slow perfect-number search to generate CPU load.
//! - **`mlp`**: Fashion-MNIST training endpoint, delegated to `burn`.
//! - **`greeting`**: the hello endpoint.
//! - **`router`**: route table and shared state injection.
//! - **`config`**, **`error`**, **`instance`**: configuration, HTTP error mapping,
//!   and per-instance identity.

pub mod cart;
pub mod config;
pub mod error;
pub mod greeting;
pub mod instance;
pub mod mlp;
pub mod perfect;
pub mod router;
