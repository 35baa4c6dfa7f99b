//! Session lifecycle: identity changes in, profile and item snapshots out.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  SessionPhase                                                   │
//! │  ├── Anonymous: defaults shown, nothing editable                │
//! │  ├── Loading: identity seen, profile being read or provisioned  │
//! │  └── Active: profile adopted, items subscription live           │
//! │                                                                 │
//! │  SessionController                                              │
//! │  ├── state: Arc<RwLock<SessionSnapshot>>                        │
//! │  ├── items_subscription: at most one, tagged with its uid       │
//! │  └── event_tx: broadcast::Sender<SessionEvent>                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod controller;
mod events;
mod state;

pub use controller::SessionController;
pub use events::SessionEvent;
pub use state::{SessionPhase, SessionSnapshot};
