//! Report rendering and delivery
//!
//! - [`table`]: fixed-width console table and banner
//! - [`slack`]: notification sink posting the table to a Slack webhook

pub mod slack;
pub mod table;

pub use slack::{Notifier, NotifyError, SlackNotifier};
pub use table::{BANNER, render_table};
