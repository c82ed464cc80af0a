pub mod curve;
pub mod fee;
