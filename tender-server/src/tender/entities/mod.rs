mod tender;

pub use tender::*;
