//! # Core Menu Logic
//!
//! Everything that decides *what* the navigation menu shows. It knows nothing
//! about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • classify()           │
//!                    │  • active matching      │
//!                    │  • compose_click()      │
//!                    │  • MenuRenderer         │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ MenuView
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`node`]: `NavNode`, the navigation tree entry
//! - [`classify`]: Branch / EmptyBranch / Leaf
//! - [`active`]: identity and ancestor matching against the active node
//! - [`click`]: click effect + dismiss composition
//! - [`icons`], [`catalog`]: injected lookups for icons and empty-state messages
//! - [`render`]: `MenuRenderer`, producing a `MenuView`
//! - [`state`], [`action`]: demo app state and its reducer

pub mod action;
pub mod active;
pub mod catalog;
pub mod classify;
pub mod click;
pub mod config;
pub mod icons;
pub mod node;
pub mod render;
pub mod sample;
pub mod state;
