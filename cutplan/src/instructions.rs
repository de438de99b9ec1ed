use crate::entities::SheetLayout;
use itertools::Itertools;

/// Operator-facing cutting instructions for one sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetInstructions {
    pub sheet_index: usize,
    pub setup: Vec<String>,
    /// One line per placed piece, in placement order.
    pub cut_list: Vec<String>,
    pub safety_notes: Vec<String>,
    pub qc_checkpoints: Vec<String>,
}

const SAFETY_NOTES: [&str; 3] = [
    "Keep hands clear of the blade path at all times",
    "Verify the blade guard is in place before powering the cutter",
    "Do not cut through pins, clips or weights",
];

const QC_CHECKPOINTS: [&str; 4] = [
    "Count cut pieces against the cut list before clearing the table",
    "Measure the first piece of every type against the marker",
    "Check notches and grain alignment on one piece per shelf",
    "Tag offcuts wider than 20cm for the remnant bin",
];

/// Renders one instruction block per sheet, in sheet order. Pure templating:
/// no measurement is derived here beyond formatting the layout.
pub fn generate_instructions(
    sheets: &[SheetLayout],
    fabric_type: &str,
    special_requirements: &[String],
) -> Vec<SheetInstructions> {
    sheets
        .iter()
        .map(|sheet| {
            let mut setup = vec![
                format!("Load the {fabric_type} roll face up, selvedge aligned to the left edge"),
                format!(
                    "Unroll {:.0}cm of fabric and square the leading edge",
                    sheet.length.ceil()
                ),
                format!(
                    "Confirm a usable width of {:.0}cm before marking",
                    sheet.width
                ),
                format!(
                    "Mark {} pieces per the cut list below",
                    sheet.placed.len()
                ),
            ];
            setup.extend(special_requirements.iter().cloned());

            let cut_list = sheet
                .placed
                .iter()
                .map(|p| {
                    let rotated = match p.rotation.degrees() {
                        0 => "",
                        _ => ", rotated 90°",
                    };
                    format!(
                        "Piece {} copy {}: {:.1} x {:.1}cm at ({:.1}, {:.1}){rotated}",
                        p.piece_id, p.copy, p.width, p.height, p.x, p.y
                    )
                })
                .collect_vec();

            SheetInstructions {
                sheet_index: sheet.index,
                setup,
                cut_list,
                safety_notes: SAFETY_NOTES.iter().map(|s| s.to_string()).collect(),
                qc_checkpoints: QC_CHECKPOINTS.iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PlacedPiece, Rotation};

    fn sheet(index: usize) -> SheetLayout {
        SheetLayout {
            index,
            width: 160.0,
            length: 80.0,
            placed: vec![
                PlacedPiece {
                    piece_id: 7,
                    copy: 0,
                    x: 0.0,
                    y: 0.0,
                    width: 31.0,
                    height: 41.0,
                    rotation: Rotation::None,
                },
                PlacedPiece {
                    piece_id: 7,
                    copy: 1,
                    x: 31.0,
                    y: 0.0,
                    width: 41.0,
                    height: 31.0,
                    rotation: Rotation::Ninety,
                },
            ],
        }
    }

    #[test]
    fn one_block_per_sheet_in_sheet_order() {
        let blocks = generate_instructions(&[sheet(0), sheet(1)], "cotton twill", &[]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].sheet_index, 0);
        assert_eq!(blocks[1].sheet_index, 1);
    }

    #[test]
    fn cut_list_follows_placement_order_and_marks_rotation() {
        let blocks = generate_instructions(&[sheet(0)], "cotton twill", &[]);
        let cut_list = &blocks[0].cut_list;
        assert_eq!(cut_list.len(), 2);
        assert!(cut_list[0].contains("copy 0"));
        assert!(!cut_list[0].contains("rotated"));
        assert!(cut_list[1].contains("rotated 90°"));
    }

    #[test]
    fn special_requirements_are_appended_to_setup() {
        let reqs = vec!["Pre-shrink before cutting".to_string()];
        let blocks = generate_instructions(&[sheet(0)], "linen", &reqs);
        assert!(blocks[0].setup.iter().any(|s| s.contains("Pre-shrink")));
        assert!(blocks[0].setup.iter().any(|s| s.contains("linen")));
    }

    #[test]
    fn safety_and_qc_blocks_are_fixed() {
        let a = generate_instructions(&[sheet(0)], "linen", &[]);
        let b = generate_instructions(&[sheet(0)], "denim", &[]);
        assert_eq!(a[0].safety_notes, b[0].safety_notes);
        assert_eq!(a[0].qc_checkpoints, b[0].qc_checkpoints);
        assert!(!a[0].safety_notes.is_empty());
        assert!(!a[0].qc_checkpoints.is_empty());
    }
}
