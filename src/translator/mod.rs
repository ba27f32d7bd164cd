//! Signature translator: one function signature -> rpc line plus optional
//! request/reply messages.

pub mod naming;
pub mod stanza;

pub use stanza::{method_stanza, reply_message, request_message, ResultNaming};
