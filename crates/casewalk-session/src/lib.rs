//! Case navigation and host-scene loading for the NIfTI case browser.
//!
//! The [`BrowserSession`] owns the scan configuration, the case index, and a
//! [`NavigationCursor`], and exposes one handler per host UI event. The host
//! viewer itself is abstracted behind the [`HostScene`] trait, so the session
//! is independent of any UI toolkit.
//!
//! # Example
//!
//! ```ignore
//! use casewalk_model::{NnUnetSplit, ScanConfig};
//! use casewalk_session::BrowserSession;
//!
//! let mut session = BrowserSession::new(ScanConfig::nnunet("/data", NnUnetSplit::Train));
//! session.search()?;
//! session.select("017");
//! let report = session.load_current(&mut scene)?;
//! for failure in &report.failures {
//!     eprintln!("failed to load {}: {}", failure.path.display(), failure.message);
//! }
//! ```

mod cursor;
mod error;
mod host;
mod session;

// === Error Types ===
pub use error::{Result, SessionError};

// === Navigation ===
pub use cursor::NavigationCursor;

// === Host Integration ===
pub use host::HostScene;

// === Session ===
pub use session::{BrowserSession, CaseLoadReport, LoadFailure};
