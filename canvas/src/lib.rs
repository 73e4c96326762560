//! Touch-driven viewport controller for a document canvas.
//!
//! This crate maps finger drags and pinch gestures to document panning and
//! zooming. Drags feed an inertial motion engine that keeps the document
//! moving after the finger lifts and pushes back elastically past the
//! document edges; pinches drive a zoom state machine that previews the
//! scale live and commits it on release. The crate is synchronous and
//! toolkit-independent: the host owns the timer and the event loop and talks
//! to rendering and scrollbars through the traits in [`surface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::CanvasController`], the single owner of all viewport state |
//! | [`bounds`] | Valid pan range derived from viewport/document size, margin and overscroll |
//! | [`motion`] | Fixed-timestep momentum integration with edge resistance |
//! | [`zoom`] | Pinch gesture state machine and anchored zoom math |
//! | [`input`] | [`input::ControllerEvent`], the tagged union of input events |
//! | [`surface`] | Collaborator traits: render surface and offset observers |
//! | [`config`] | Tunable constants and their validation |
//! | [`geometry`] | Points, sizes and rectangles |
//! | [`consts`] | Shared numeric defaults |

pub mod bounds;
pub mod config;
pub mod consts;
pub mod controller;
pub mod geometry;
pub mod input;
pub mod motion;
pub mod surface;
pub mod zoom;
