pub mod triangulation;
pub mod zhash;

#[doc(inline)]
pub use triangulation::Triangulate;
