pub mod event;
pub mod machine;
pub mod state;

pub use event::{GestureOutcome, PointerEvent};
pub use machine::{click_target, InteractionController, Modes, MIN_REGION_EXTENT_PCT};
pub use state::{CursorStyle, InteractionState};
