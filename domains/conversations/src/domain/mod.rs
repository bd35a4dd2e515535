//! Domain types and rules for conversations

pub mod entities;
pub mod moderation;
