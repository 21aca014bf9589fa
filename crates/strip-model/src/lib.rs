pub mod error;
pub mod history;
pub mod ids;
pub mod report;
pub mod result;
pub mod status;
pub mod strip;

pub use error::ModelError;
pub use history::{HistoryEntry, HistoryFilter};
pub use ids::StripId;
pub use report::{AnalysisReport, StatusCounts};
pub use result::BiomarkerResult;
pub use status::Status;
pub use strip::{StripType, validate_hex_color};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_counts_tally() {
        let results = vec![
            BiomarkerResult::for_status("Glucose", Status::Normal, "#22C55E", 80),
            BiomarkerResult::for_status("Protein", Status::Critical, "#EF4444", 91),
            BiomarkerResult::for_status("pH", Status::Normal, "#4ADE80", 77),
        ];
        let counts = StatusCounts::from_results(&results);
        assert_eq!(counts.normal, 2);
        assert_eq!(counts.attention, 0);
        assert_eq!(counts.critical, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = BiomarkerResult::for_status("Sodium", Status::Attention, "#FBBF24", 88);
        let json = serde_json::to_string(&result).expect("serialize result");
        assert!(json.contains("\"detectedColor\":\"#FBBF24\""));
        assert!(json.contains("\"referenceRange\":\"Slightly above range\""));
        assert!(json.contains("\"status\":\"attention\""));
    }
}
