//! Interactive travel-expense map rendered to a browser canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It loads a
//! CSV of expense records and a GeoJSON world map, fits a Mercator projection
//! to the records, and draws every record as a circle sized by amount and
//! colored by category. Records sharing identical coordinates form a "nest"
//! that can be exploded into a readable ring or spiral. A legend filters and
//! highlights categories.
//!
//! Everything except [`render`], [`engine::Engine`] and the `browser` feature's
//! `app` module is free of DOM access and tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`record`] | Expense records and CSV parsing |
//! | [`world`] | GeoJSON world boundaries |
//! | [`projection`] | Mercator projection fitted to the viewport |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`scale`] | Radius, color and bar-width scales |
//! | [`nest`] | Grouping of co-located records |
//! | [`spread`] | Declustering layout for exploded nests |
//! | [`interaction`] | Interaction state and pointer/touch strategies |
//! | [`style`] | Visibility and opacity derived from interaction state |
//! | [`anim`] | Fire-and-forget tweens |
//! | [`input`] | Pointer input types and the gesture state machine |
//! | [`hit`] | Hit-testing against legend rows and circles |
//! | [`legend`] | Category sums and legend layout |
//! | [`tooltip`] | Tooltip content and placement |
//! | [`render`] | Scene rendering |
//! | `app` | Browser bootstrap, feature `browser` |
//! | [`config`] | Runtime configuration |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric constants and colors |

pub mod anim;
pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod interaction;
pub mod legend;
pub mod nest;
pub mod projection;
pub mod record;
pub mod render;
pub mod scale;
pub mod spread;
pub mod style;
pub mod tooltip;
pub mod world;

#[cfg(feature = "browser")]
pub mod app;
