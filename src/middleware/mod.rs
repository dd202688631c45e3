mod bearer;

pub use bearer::*;
