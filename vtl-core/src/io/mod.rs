/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Top-down SVG drawings of the layers of a solution
pub mod svg;
