//! Persona Builder - multi-step wizard that renders a portable `personality.md`.
//!
//! The user answers four steps (identity, voice, per-platform calibration,
//! export). The crate holds those answers in a [`domain::persona::WizardState`]
//! and renders them into a Markdown document meant to be used as a system
//! prompt prefix for LLM agents.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
