//! External (JSON) representation of requests and results, kept separate from
//! the internal entities, plus SVG rendering of finished sheets.

pub mod export;
pub mod ext_repr;
pub mod import;
pub mod layout_to_svg;
