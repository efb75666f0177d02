//! `nodes` crate — the contract between the (external) authentication tree
//! engine and the nodes it drives.
//!
//! A node implements [`AuthNode`]. The engine hands it a [`TreeContext`] on
//! every round trip and follows the returned [`Action`]: either move on to
//! the node wired to the named outcome, or relay callbacks to the user and
//! re-invoke the node with the answers.

pub mod action;
pub mod callbacks;
pub mod error;
pub mod outcome;
pub mod traits;

pub use action::Action;
pub use callbacks::{Callback, ConfirmationCallback, MessageType};
pub use error::NodeError;
pub use outcome::{Outcome, OutcomeProvider, PreferredLocales};
pub use traits::{AuthNode, TreeContext};
