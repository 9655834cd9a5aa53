//! Everything between the simulation and the pixels: where shapes go, what
//! the camera looks at, and when things get updated. Nothing in here depends
//! on a particular windowing library; see [Surface].

mod camera;
mod scheduler;
mod sheet;
mod surface;
mod visuals;

pub use camera::{Focus, FocusCamera};
pub use scheduler::Scheduler;
pub use sheet::{Sheet, SheetLabel, SheetShape};
pub use surface::{estimate_label_extent, to_screen, LabelId, ShapeId, Surface};
pub use visuals::{Visual, Visuals};
