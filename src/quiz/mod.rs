//! Quiz content and rules
//!
//! This module contains the question data model, the catalog questions are
//! drawn from, the answer judge and the session state machine. Nothing in
//! here talks to speech or rendering.

pub mod bank;
pub mod engine;
pub mod judge;
pub mod question;
