//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: top bar with the active page and status message
//! - `MenuItem`: one clickable row (icon, label, highlight badge, URL)
//! - `MenuSection`: section title plus rows, or plus an empty-state message
//! - `MenuItemWrapper`: picks section or row for a `MenuView`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `MegaMenu`: overlay stacking all top-level entries with a row cursor
//!
//! ## Composition
//!
//! `MegaMenu` renders one `MenuItemWrapper` per top-level entry, which
//! renders a `MenuSection` or a `MenuItem`; sections render `MenuItem`s.
//! Each level returns plain `Line`s (`LineComponent`) so the overlay can
//! scroll them as one paragraph.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                (this file)
//! ├── title_bar.rs          (Top status bar)
//! ├── menu_item.rs          (Single clickable row)
//! ├── menu_section.rs       (Section with rows or empty message)
//! ├── menu_item_wrapper.rs  (Variant dispatch)
//! └── mega_menu.rs          (Overlay + cursor state)
//! ```

pub mod mega_menu;
pub mod menu_item;
pub mod menu_item_wrapper;
pub mod menu_section;
mod title_bar;

pub use mega_menu::{MegaMenu, MegaMenuEvent, MegaMenuState, MenuRow, clickable_rows};
pub use menu_item_wrapper::MenuItemWrapper;
pub use title_bar::TitleBar;
