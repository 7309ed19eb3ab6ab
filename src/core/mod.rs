//! # Core Message Components
//!
//! The message data model and its wire representation.
//!
//! This module provides the foundation of the outbound pipeline: building
//! typed messages, assigning IDs and rendering the canonical wire JSON.
//!
//! ## Components
//! - **Message**: write-once outbound event record with a typed extension map
//! - **Wire**: hand-assembled JSON with contract-fixed field order
//! - **Escape**: byte-preserving JSON string escaping
//! - **Id**: timestamp-counter message IDs
//!
//! ## Wire Format
//! ```text
//! {"id":..,"type":..,"response_to":..,"server":..,"channel":..,
//!  "nick":..,"text"|"task":..,"timestamp":..,"level":..,"is_own":..,
//!  "extra":{..}}
//! ```
//!
//! Field order and escaping are a compatibility contract with deployed
//! front-ends; see `core::wire`.

pub mod escape;
pub mod id;
pub mod message;
pub mod wire;
