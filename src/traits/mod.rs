mod justify;

pub use justify::Justify;
