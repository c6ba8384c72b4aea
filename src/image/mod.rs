pub mod binary;
pub mod io;
pub mod traits;

pub use self::binary::{BinaryImage, BACKGROUND, INK, INK_CUTOFF};
pub use self::traits::{ImageView, ImageViewMut, Rows};
