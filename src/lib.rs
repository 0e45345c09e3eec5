//! Vivot - Mood-Aware Travel Planning Backend
//!
//! This crate implements a chat-driven trip generator with adaptive
//! re-planning: group mood readings can trigger a "pivot" that swaps a
//! planned activity for a lower-energy alternative while keeping the
//! budget ledger consistent.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
