//! EasyShop cart client library.
//!
//! Keeps a local mirror of the remote authoritative shopping cart and
//! implements the partial-selection checkout protocol against the EasyShop
//! API.
//!
//! # Architecture
//!
//! - [`state::CartState`] - local mirror, only ever rebuilt wholesale from
//!   a server snapshot
//! - [`store::CartStore`] - the remote store seam; [`store::HttpCartStore`]
//!   is the production `reqwest` implementation
//! - [`service::CartService`] - the orchestrator driving add/load/clear
//!   and the checkout state machine
//! - [`ui::CartUi`] - the boundary to whatever renders the cart and
//!   surfaces messages
//!
//! The server is the sole source of truth: every mutation returns the
//! canonical `{ total, items }` snapshot, and the client replaces its
//! local view with it in one step. Nothing is patched incrementally.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod selection;
pub mod service;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod ui;

pub use checkout::CheckoutOutcome;
pub use config::{CartConfig, ConfigError};
pub use error::CartError;
pub use selection::{CheckoutSummary, SelectionSet};
pub use service::CartService;
pub use session::UserSession;
pub use snapshot::{CartItem, CartSnapshot, CheckoutRequest, OrderConfirmation, Product};
pub use state::CartState;
pub use store::{CartStore, HttpCartStore};
pub use ui::CartUi;
