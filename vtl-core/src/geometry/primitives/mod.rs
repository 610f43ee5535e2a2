mod dims;
mod rect;
mod size;

#[doc(inline)]
pub use dims::Dims3;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use size::Size;
