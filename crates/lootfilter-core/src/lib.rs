//! Lootfilter Core Types and Reference Data
//!
//! This crate provides the foundational types shared by the item filter
//! parser and its front ends. It includes:
//!
//! - **Text**: Zero-based line/character positions and ranges ([`text::Range`])
//! - **Colors**: Normalized RGBA colors extracted from color rules ([`color::Color`])
//! - **Sounds**: Alert sound cues extracted from sound rules ([`sound`] module)
//! - **Data**: Read-only reference data consulted during validation ([`data`] module)

pub mod color;
pub mod data;
pub mod sound;
pub mod text;
