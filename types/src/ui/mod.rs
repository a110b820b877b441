//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod layout;
mod modal;
mod reveal;
mod view_state;

pub use animation::AnimPhase;
pub use layout::{Area, DocSpan, FrameLayout, ItemSpan, LinkSpan, NavHit, PageLayout};
pub use modal::{ModalEffect, ModalEffectKind};
pub use reveal::{RevealPhase, RevealTrack, StaggerProfile};
pub use view_state::{UiOptions, ViewState};
