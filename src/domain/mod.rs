// Domain layer: catalog value types. No dependencies beyond std/serde.

pub mod model;
