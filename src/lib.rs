// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]

//! Secondary-structure ribbon geometry for protein backbones.
//!
//! Plico turns a fixed-column structural text buffer (PDB) into renderable
//! geometry: a colored backbone polyline plus triangulated tube meshes for
//! helix and sheet runs. It owns no window, camera, or draw call — the
//! returned [`scene::SceneGeometry`] value is handed to whatever rendering
//! backend the caller prefers.
//!
//! # Key entry points
//!
//! - [`pipeline::build_scene`] - complete text buffer in,
//!   [`scene::SceneGeometry`] out
//! - [`options::RibbonOptions`] - radii, tessellation, chain-break policy,
//!   with TOML preset load/save
//!
//! # Architecture
//!
//! A pure, synchronous pipeline of five stages connected by explicit data
//! values: record decoding → residue assembly → secondary-structure
//! classification → backbone path building → ribbon mesh generation. Each
//! stage is independently testable. Malformed lines, cross-chain ranges,
//! and degenerate runs degrade to "contributes nothing"; only a buffer
//! with no recognizable structural records fails outright.

pub mod backbone;
pub mod error;
pub mod geometry;
pub mod options;
pub mod pipeline;
pub mod record;
pub mod residue;
pub mod scene;
pub mod secondary_structure;
