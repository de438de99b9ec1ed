#[cfg(test)]
mod tests {
    use std::path::Path;

    use cutplan::advisory::assess;
    use cutplan::instructions::generate_instructions;
    use cutplan::io::export::export_solution;
    use cutplan::io::import::import_request;
    use cutplan::optimize::{CutConfig, optimize};
    use cutplan::util::assertions;
    use cutplan_cli::io;
    use test_case::test_case;

    #[test_case("../assets/tshirt.json" ; "tshirt")]
    #[test_case("../assets/jacket.json" ; "jacket")]
    #[test_case("../assets/oversize.json" ; "oversize")]
    fn full_pipeline_upholds_the_layout_invariants(instance_path: &str) {
        let ext_request = io::read_request(Path::new(instance_path)).unwrap();
        let request = import_request(&ext_request).unwrap();
        let config = CutConfig::default();

        let result = optimize(&request, &config).unwrap();

        for sheet in &result.sheets {
            assert!(assertions::no_overlaps(sheet));
            assert!(assertions::within_bounds(sheet));
            assert!(sheet.length <= request.max_fabric_length);
            assert!(!sheet.placed.is_empty());
        }

        // every requested copy is either placed or explicitly unplaced
        let pack_view = cutplan::entities::PackSolution {
            sheets: result.sheets.clone(),
            unplaced: result.unplaced.clone(),
        };
        assert!(assertions::conservation_holds(&request.pieces, &pack_view));

        assert!(result.utilization_pct >= 0.0 && result.utilization_pct <= 100.0);
        assert!(result.cutting_time_mins >= 0.0);
        assert!(result.cost.total >= 0.0);

        // a second run must reproduce the layout exactly
        let rerun = optimize(&request, &config).unwrap();
        assert_eq!(result, rerun);

        // downstream consumers: advisory, instructions, JSON export
        let advisory = assess(
            result.utilization_pct,
            result.waste.waste_pct,
            result.cutting_time_mins,
            config.piece_complexity,
        );
        assert!(advisory.score <= 100);

        let blocks = generate_instructions(&result.sheets, "cotton", &[]);
        assert_eq!(blocks.len(), result.sheets.len());

        let ext = export_solution(&result);
        serde_json::to_string(&ext).unwrap();
    }

    #[test]
    fn oversize_panel_is_reported_unplaced() {
        let ext_request = io::read_request(Path::new("../assets/oversize.json")).unwrap();
        let request = import_request(&ext_request).unwrap();

        let result = optimize(&request, &CutConfig::default()).unwrap();

        assert_eq!(result.unplaced.len(), 1);
        assert_eq!(result.unplaced[0].piece_id, 1);
        // the remaining four valid pieces still pack
        let placed: usize = result.sheets.iter().map(|s| s.placed.len()).sum();
        assert_eq!(placed, 4);
    }

    #[test]
    fn request_defaults_fill_in_omitted_fields() {
        let ext_request = io::read_request(Path::new("../assets/oversize.json")).unwrap();
        assert_eq!(ext_request.max_fabric_length_cm, 1000.0);
        assert_eq!(ext_request.seam_allowance_cm, 0.5);
    }
}
