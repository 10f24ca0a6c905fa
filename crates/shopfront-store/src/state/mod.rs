//! # State Module
//!
//! The Store state container and its consumer handle.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                               │
//! │                                                                     │
//! │  ┌──────────────────────────────────────────────────────────────┐   │
//! │  │  StoreHandle (Arc<Mutex<Store>>)                             │   │
//! │  │  one per application, cloned into every consumer             │   │
//! │  └──────────────────────────────┬───────────────────────────────┘   │
//! │                                 ▼                                   │
//! │  ┌──────────────────────────────────────────────────────────────┐   │
//! │  │  Store                                                       │   │
//! │  │  products mirror │ cart │ detail/modal selection │ totals    │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! │                                                                     │
//! │  THREAD SAFETY: every operation (mutation + totals recompute +     │
//! │  snapshot) runs under a single Mutex hold.                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
mod handle;
mod store;

pub use cart::{CartEntry, Totals};
pub use handle::StoreHandle;
pub use store::Store;
