//! Level editor core for Hotdog Havoc.
//!
//! Levels are grids of solid ground blocks. This crate owns everything the
//! editor needs that is not drawing or networking: the bounded block grid,
//! soil/grass auto-tiling, the scroll camera, the mapping between screen
//! pixels and world blocks, and the pointer state machine that paints and
//! erases blocks. The host forwards DOM/window events to [`editor::EditorCore`]
//! and processes the [`editor::Action`]s it returns; persistence goes through
//! a [`level::LevelStore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | Top-level [`editor::EditorCore`] and the sink-driving [`editor::Editor`] |
//! | [`grid`] | Bounded set of filled blocks |
//! | [`tiles`] | Soil/grass auto-tile layer derived from the grid |
//! | [`coords`] | Screen ⇄ world block coordinate mapping |
//! | [`camera`] | Clamped scroll offset, immediate and eased panning |
//! | [`paint`] | Pointer gesture state machine (paint, erase, drag-pan) |
//! | [`input`] | Input event types |
//! | [`hit`] | Reserved UI chrome regions |
//! | [`render`] | Render sink trait and viewport culling |
//! | [`level`] | Level records, stores and lenient block parsing |
//! | [`preview`] | Minimap projection of a block list |
//! | [`config`] | Editor configuration |
//! | [`consts`] | Shared numeric defaults |

pub mod camera;
pub mod config;
pub mod consts;
pub mod coords;
pub mod editor;
pub mod grid;
pub mod hit;
pub mod input;
pub mod level;
pub mod paint;
pub mod preview;
pub mod render;
pub mod tiles;
