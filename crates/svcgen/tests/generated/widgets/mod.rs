//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Widget Service: Module wiring
//! Source: service-2.json
//! Version: 2024-01-01
//! Generated by `svcgen`

pub mod resources;
pub mod shapes;
