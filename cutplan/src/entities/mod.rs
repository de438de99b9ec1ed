mod piece;
mod result;
mod sheet;

#[doc(inline)]
pub use piece::{PieceInstance, PieceType};
#[doc(inline)]
pub use result::{CostBreakdown, OptimizationResult, PackSolution, WasteAnalysis};
#[doc(inline)]
pub use sheet::{PlacedPiece, Rotation, SheetLayout};
