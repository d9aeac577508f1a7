pub mod color;
pub mod mock;
pub mod value;
pub mod vector;
pub mod world;
