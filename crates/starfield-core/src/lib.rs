//! Platform-independent core of the starfield animations.
//!
//! Nothing here touches browser APIs: hosts supply time deltas, input events,
//! a [`Surface`] to draw on and a [`FrameScheduler`] to request frames.

pub mod clock;
pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod field;
pub mod input;
pub mod project;
pub mod scheduler;
pub mod speed;
pub mod surface;
pub mod trail;
pub mod transition;
pub mod waves;

pub use clock::*;
pub use config::*;
pub use effects::*;
pub use error::*;
pub use field::*;
pub use input::*;
pub use project::*;
pub use scheduler::*;
pub use speed::*;
pub use surface::*;
pub use trail::*;
pub use transition::*;
pub use waves::*;
