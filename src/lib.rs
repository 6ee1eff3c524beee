//! Core of SpendTUI: transaction state and the reports derived from it.
//!
//! The terminal front-end in `main.rs` only calls into this crate and renders
//! what it returns.

pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod models;
pub mod report;
pub mod seed;
pub mod store;

pub use error::{Error, Result, ValidationError};
pub use models::{
    categories_for, Budget, CategoryCatalog, Transaction, TransactionForm, TransactionId,
    TransactionType,
};
pub use store::TransactionStore;
