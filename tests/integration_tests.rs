//! Integration tests for the full parse/aggregate/export pipeline

use ceatab::{export_table, parse_report, CeaError, ExportFormat};

/// A trimmed-down CEA report: two result instances with surrounding
/// report noise, the second instance missing one species.
const TWO_INSTANCE_REPORT: &str = r#"
 THERMODYNAMIC EQUILIBRIUM COMBUSTION PROPERTIES AT ASSIGNED PRESSURES

 P, BAR            20.000
 T, K             3033.41

 MOLE FRACTIONS

 CH4              0.00001
 CO               0.08433
 CO2              0.06370
 H2O              0.27035
 *

 P, BAR            40.000
 T, K             3120.77

 MOLE FRACTIONS

 CH4              0.00002
 CO               0.08911
 H2O              0.26644
 *

 PRODUCTS WHICH WERE CONSIDERED BUT WHOSE MOLE FRACTIONS
 WERE LESS THAN 5.000000E-06 FOR ALL ASSIGNED CONDITIONS
"#;

fn temp_base(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("ceatab-it-{}-{}", std::process::id(), name))
}

// ============================================================================
// Parsing scenarios
// ============================================================================

mod parsing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_markers_yields_empty_table() {
        let output = parse_report("THERMODYNAMIC PROPERTIES\n P, BAR 1.0\n T, K 300.0");
        assert!(output.table.is_empty());
        assert_eq!(output.table.block_count(), 0);
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_single_block() {
        let output = parse_report("MOLE FRACTIONS CH4 0.123 O2 0.456 N2 0.789 *");
        let table = &output.table;
        assert_eq!(table.block_count(), 1);
        assert_eq!(table.concatenated("CH4"), Some(vec!["0.123"]));
        assert_eq!(table.concatenated("O2"), Some(vec!["0.456"]));
        assert_eq!(table.concatenated("N2"), Some(vec!["0.789"]));
    }

    #[test]
    fn test_two_blocks_merge_in_document_order() {
        let output = parse_report(
            "MOLE FRACTIONS CH4 0.1 O2 0.2 * noise MOLE FRACTIONS CH4 0.3 O2 0.4 *",
        );
        let table = &output.table;
        assert_eq!(table.block_count(), 2);
        assert_eq!(table.concatenated("CH4"), Some(vec!["0.1", "0.3"]));
        assert_eq!(table.concatenated("O2"), Some(vec!["0.2", "0.4"]));
    }

    #[test]
    fn test_realistic_report() {
        let output = parse_report(TWO_INSTANCE_REPORT);
        let table = &output.table;
        assert!(output.warnings.is_empty());
        assert_eq!(table.block_count(), 2);
        assert_eq!(table.concatenated("CH4"), Some(vec!["0.00001", "0.00002"]));
        assert_eq!(table.concatenated("CO"), Some(vec!["0.08433", "0.08911"]));
        // CO2 only appears in the first instance; no padding in the
        // concatenated view
        assert_eq!(table.concatenated("CO2"), Some(vec!["0.06370"]));
        let species: Vec<&str> = table.species().collect();
        assert_eq!(species, vec!["CH4", "CO", "CO2", "H2O"]);
    }

    #[test]
    fn test_unterminated_final_block_runs_to_end() {
        let output = parse_report("MOLE FRACTIONS CH4 0.1 O2 0.2");
        assert_eq!(output.table.concatenated("O2"), Some(vec!["0.2"]));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_report(TWO_INSTANCE_REPORT);
        let second = parse_report(TWO_INSTANCE_REPORT);
        assert_eq!(first.table, second.table);
    }
}

// ============================================================================
// Export
// ============================================================================

mod export {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_csv_golden_output() {
        let output = parse_report(
            "MOLE FRACTIONS CH4 0.1 O2 0.2 * MOLE FRACTIONS CH4 0.3 O2 0.4 *",
        );
        let base = temp_base("golden");
        let path = export_table(&output.table, &base, ExportFormat::Csv).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(written, "Species,1,2\nCH4,0.1,0.3\nO2,0.2,0.4\n");
    }

    #[test]
    fn test_csv_pads_missing_species_to_block_column() {
        let output = parse_report(TWO_INSTANCE_REPORT);
        let base = temp_base("padded");
        let path = export_table(&output.table, &base, ExportFormat::Csv).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let co2_line = written
            .lines()
            .find(|l| l.starts_with("CO2"))
            .expect("CO2 row");
        // Value stays in instance 1's column; instance 2 is an empty cell
        assert_eq!(co2_line, "CO2,0.06370,");
    }

    #[test]
    fn test_empty_table_exports_header_only_csv() {
        let output = parse_report("no tables in this report");
        let base = temp_base("empty");
        let path = export_table(&output.table, &base, ExportFormat::Csv).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(written.trim_end(), "Species");
    }

    #[test]
    fn test_xlsx_export_writes_workbook() {
        let output = parse_report(TWO_INSTANCE_REPORT);
        let base = temp_base("workbook");
        let path = export_table(&output.table, &base, ExportFormat::Xlsx).unwrap();

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(&bytes[..2], b"PK");
    }
}

// ============================================================================
// Failure modes
// ============================================================================

mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_input_file_is_hard_failure() {
        let err = ceatab::parse_report_file("/no/such/cea_results.txt").unwrap_err();
        assert!(matches!(err, CeaError::DocumentUnavailable { .. }));
    }

    #[test]
    fn test_unwritable_sink_is_export_failure() {
        let output = parse_report("MOLE FRACTIONS CH4 0.1 *");
        let err = export_table(
            &output.table,
            "/nonexistent-dir/combustion_data",
            ExportFormat::Csv,
        )
        .unwrap_err();
        assert!(matches!(err, CeaError::ExportFailure { .. }));
    }

    #[test]
    fn test_zero_prefixed_species_name_does_not_crash() {
        // Pathological token: a name-like string starting with '0' is
        // absorbed as a value of the preceding row
        let output = parse_report("MOLE FRACTIONS CH4 0.1 0H2 O2 0.2 *");
        assert!(output.warnings.is_empty());
        assert_eq!(output.table.concatenated("CH4"), Some(vec!["0.1", "0H2"]));
        assert_eq!(output.table.concatenated("O2"), Some(vec!["0.2"]));
    }
}
