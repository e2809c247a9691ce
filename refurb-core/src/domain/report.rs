//! Closed-job report

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Asset;
use crate::pricing::PricingRule;

/// Summary of a closed job
///
/// Computed once at closure from the job's asset list; this is also the
/// record shape stored in `job_history.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub job_id: String,
    pub total_count: usize,
    pub wiped_drives_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
    pub products: Vec<Asset>,
}

impl Report {
    /// Builds a report from a job's assets
    ///
    /// Pure function of its inputs: the same assets and rule always yield
    /// the same report.
    pub fn generate(job_id: &str, products: &[Asset], pricing: &PricingRule) -> Self {
        Self {
            job_id: job_id.to_string(),
            total_count: products.len(),
            wiped_drives_count: products.iter().filter(|p| p.is_hard_drive_wiped).count(),
            total_cost: products.iter().map(|p| pricing.cost(p)).sum(),
            products: products.to_vec(),
        }
    }

    /// Whether any asset in this report carries the given serial number
    pub fn contains_serial(&self, serial_number: &str) -> bool {
        self.products
            .iter()
            .any(|p| p.serial_number == serial_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: u64, is_desktop: bool, is_hard_drive_wiped: bool) -> Asset {
        Asset {
            id: format!("Asset-{}", id),
            model: "EliteBook 840".to_string(),
            serial_number: format!("SN{}", id),
            hard_drive_details: "128GB SSD".to_string(),
            cosmetic_condition: "Grade A".to_string(),
            is_desktop,
            is_hard_drive_wiped,
        }
    }

    #[test]
    fn test_generate_counts_and_cost() {
        let products = vec![asset(1, false, true), asset(2, true, true), asset(3, false, false)];
        let rule = PricingRule::default();

        let report = Report::generate("JOB-1", &products, &rule);

        assert_eq!(report.job_id, "JOB-1");
        assert_eq!(report.total_count, 3);
        assert_eq!(report.wiped_drives_count, 2);
        let expected: Decimal = products.iter().map(|p| rule.cost(p)).sum();
        assert_eq!(report.total_cost, expected);
        assert_eq!(report.total_cost, Decimal::new(20, 0));
        assert_eq!(report.products, products);
    }

    #[test]
    fn test_generate_empty_job() {
        let report = Report::generate("JOB-4", &[], &PricingRule::default());
        assert_eq!(report.total_count, 0);
        assert_eq!(report.wiped_drives_count, 0);
        assert_eq!(report.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let products = vec![asset(1, true, false), asset(2, false, true)];
        let rule = PricingRule::default();

        assert_eq!(
            Report::generate("JOB-2", &products, &rule),
            Report::generate("JOB-2", &products, &rule)
        );
    }

    #[test]
    fn test_total_cost_is_a_json_number() {
        let report = Report::generate("JOB-1", &[asset(1, true, true)], &PricingRule::default());

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total_cost"], serde_json::json!(12.5));

        let back: Report = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_integer_total_cost_accepted() {
        let json = r#"{"job_id":"JOB-9","total_count":0,"wiped_drives_count":0,"total_cost":0,"products":[]}"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_contains_serial() {
        let report = Report::generate("JOB-1", &[asset(7, false, false)], &PricingRule::default());
        assert!(report.contains_serial("SN7"));
        assert!(!report.contains_serial("SN8"));
    }
}
