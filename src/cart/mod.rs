//! Shopping Cart Module
//!
//! Two interchangeable cart implementations that make the difference between
//! stateful and stateless services visible.
//!
//! ## Core Concepts
//! - **Stateful (`_SF`)**: `InProcessCartStore` keeps the cart in the memory of the
//!   instance serving the request. Behind a load balancer every instance has its
//!   own cart, and a restart empties it.
//! - **Stateless (`_SL`)**: `ExternalCartStore` keeps the cart in an external list
//!   store (Redis) under a fixed key, so every instance sees the same cart.
//! - **Access**: both implement `CartStore`, so the HTTP handlers are generic and
//!   are instantiated once per store in the router.

pub mod external;
pub mod handlers;
pub mod memory;
pub mod protocol;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
