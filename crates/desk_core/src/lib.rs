//! # desk_core - Helpdesk Console Engine
//!
//! This crate provides the data and behavior behind the support console:
//! - Inbox of customer conversations with quick filters and search
//! - Customer directory with search and column sorting
//! - Chat sessions where the agent writes and a simulated assistant
//!   answers after a fixed delay
//! - Day-grouped transcript timelines for rendering
//! - Dashboard and settings snapshots
//!
//! All data comes from built-in fixtures behind a simulated network delay.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │   DataSource    │────▶│      Desk       │────▶│   ChatSession   │
//! │ (fixtures + lag)│     │ (pages, queries)│     │ (reply timers)  │
//! └─────────────────┘     └─────────────────┘     └────────┬────────┘
//!                                                          ▼
//!                                                 ┌─────────────────┐
//!                                                 │   Transcript    │
//!                                                 │   + Timeline    │
//!                                                 └─────────────────┘
//! ```

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod desk;
pub mod error;
pub mod fixtures;
pub mod query;
pub mod session;
pub mod settings;
pub mod source;
pub mod transcript;
pub mod types;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ConsoleConfig;
pub use dashboard::Dashboard;
pub use desk::{CustomerPage, Desk, InboxPage};
pub use error::{DeskError, DeskResult};
pub use query::{CustomerQuery, CustomerSortKey, InboxFilter, InboxQuery, SortOrder};
pub use session::{ChatSession, SessionEvent};
pub use settings::{Settings, SettingsTab};
pub use source::{DataSource, SimulatedSource};
pub use transcript::Transcript;
pub use types::*;
pub use view::{build_timeline, TimelineItem};
