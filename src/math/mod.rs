pub mod transform;

pub use transform::{rotate_local_z, translate_local, view_forward, Decomposed, VIEW_FORWARD};
