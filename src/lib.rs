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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics allowances, kept in step with the [lints] table
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::module_name_repetitions)]
// Tests may unwrap and compare floats freely.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

//! Camera direction for an interactive 3D solar-system view.
//!
//! Orrery decides where the camera looks: it frames the overview, zooms to
//! a selected planet with a radius-based heuristic, and locks a
//! first-person camera to a body's surface. Rendering, orbit simulation and
//! selection handling belong to the host; this crate consumes their state
//! as read-only snapshots and hands back a camera pose.
//!
//! # Key entry points
//!
//! - [`rig::CameraRig`] - owns both cameras and receives host notifications
//! - [`camera::director::CameraDirector`] - selection and surface logic
//! - [`camera::controller::OrbitController`] - damped orbit camera
//! - [`catalog::BodyCatalog`] - static body names and radii
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the host's render thread. The host calls
//! [`rig::CameraRig::selection_changed`],
//! [`rig::CameraRig::positions_updated`] and
//! [`rig::CameraRig::sun_moved`] when the matching state changes, and
//! [`rig::CameraRig::frame`] once per rendered frame. None of these block
//! or fail; a body without a position yet is simply skipped until the next
//! call.

pub mod camera;
pub mod catalog;
pub mod error;
pub mod input;
pub mod options;
pub mod rig;
pub mod scene;
pub mod util;

pub use catalog::{BodyCatalog, CelestialBody};
pub use error::OrreryError;
pub use options::Options;
pub use rig::{CameraMode, CameraRig};
pub use scene::{PositionMap, SceneSnapshot, SurfaceCameraState};
