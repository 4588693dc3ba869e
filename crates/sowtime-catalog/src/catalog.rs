//! The static crop table: Central Florida vegetables (Zone 9b-10a).

use crate::types::PlantRecord;

/// Immutable, ordered collection of crops. Constructed once at startup;
/// no mutation operations exist.
#[derive(Debug, Clone)]
pub struct PlantCatalog {
    plants: Vec<PlantRecord>,
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl PlantCatalog {
    /// The built-in Central Florida (Zone 9b-10a) vegetable table.
    pub fn central_florida() -> Self {
        let plants = vec![
            PlantRecord {
                id: "tomato".to_string(),
                name: "Tomato (heat-tolerant)".to_string(),
                sow_months: vec![2, 3, 8, 9],
                transplant_months: vec![3, 4, 9, 10],
                fertilize_months: vec![3, 5, 8, 10],
                companions: names(&["basil", "marigold", "onion"]),
                antagonists: names(&["fennel"]),
                days_to_harvest: 70,
                spacing_inches: 24.0,
                planting_depth_inches: 0.25,
                succession_interval_days: 21,
                reminder_text: "Start seeds indoors or transplant heat-tolerant varieties."
                    .to_string(),
                notes: "Provide afternoon shade in summer; consistent moisture helps prevent \
                        blossom end rot."
                    .to_string(),
            },
            PlantRecord {
                id: "broccoli".to_string(),
                name: "Broccoli".to_string(),
                sow_months: vec![9, 10, 11],
                transplant_months: vec![10, 11, 12],
                fertilize_months: vec![10, 12],
                companions: names(&["onion", "beet", "marigold"]),
                antagonists: names(&["tomato"]),
                days_to_harvest: 60,
                spacing_inches: 18.0,
                planting_depth_inches: 0.5,
                succession_interval_days: 14,
                reminder_text: "Sow for cool-season harvest; transplant as temperatures drop."
                    .to_string(),
                notes: "Cool-season crop; side-dress when heads begin to form.".to_string(),
            },
            PlantRecord {
                id: "cucumber".to_string(),
                name: "Cucumber".to_string(),
                sow_months: vec![3, 4, 8, 9],
                transplant_months: vec![4, 9],
                fertilize_months: vec![4, 6, 9],
                companions: names(&["bean", "radish"]),
                antagonists: names(&["potato"]),
                days_to_harvest: 55,
                spacing_inches: 12.0,
                planting_depth_inches: 0.5,
                succession_interval_days: 14,
                reminder_text: "Direct sow when soil warms; trellis for airflow.".to_string(),
                notes: "Mulch and steady watering reduce bitterness.".to_string(),
            },
            PlantRecord {
                id: "okra".to_string(),
                name: "Okra".to_string(),
                sow_months: vec![4, 5, 6, 7],
                transplant_months: vec![],
                fertilize_months: vec![5, 7],
                companions: names(&["pepper", "eggplant"]),
                antagonists: vec![],
                days_to_harvest: 55,
                spacing_inches: 12.0,
                planting_depth_inches: 1.0,
                succession_interval_days: 30,
                reminder_text: "Sow directly after last frost; thrives in heat.".to_string(),
                notes: "Harvest pods young (2\u{2013}4 in).".to_string(),
            },
            PlantRecord {
                id: "sweet_corn".to_string(),
                name: "Sweet Corn".to_string(),
                sow_months: vec![2, 3, 8, 9],
                transplant_months: vec![],
                fertilize_months: vec![3, 8],
                companions: names(&["bean", "squash"]),
                antagonists: names(&["tomato"]),
                days_to_harvest: 75,
                spacing_inches: 12.0,
                planting_depth_inches: 1.0,
                succession_interval_days: 10,
                reminder_text: "Plant in blocks for pollination; needs rich soil.".to_string(),
                notes: "Heavy feeder; side-dress at 12\u{2013}18 in tall.".to_string(),
            },
            PlantRecord {
                id: "pepper".to_string(),
                name: "Bell Pepper".to_string(),
                sow_months: vec![1, 2, 7, 8],
                transplant_months: vec![3, 8, 9],
                fertilize_months: vec![3, 6, 9],
                companions: names(&["basil", "carrot"]),
                antagonists: names(&["bean"]),
                days_to_harvest: 75,
                spacing_inches: 18.0,
                planting_depth_inches: 0.25,
                succession_interval_days: 21,
                reminder_text: "Transplant after danger of frost; keep soil evenly moist."
                    .to_string(),
                notes: "Mulch to keep roots cool; avoid excessive nitrogen.".to_string(),
            },
            PlantRecord {
                id: "carrot".to_string(),
                name: "Carrot".to_string(),
                sow_months: vec![9, 10, 11, 12, 1, 2],
                transplant_months: vec![],
                fertilize_months: vec![11, 1],
                companions: names(&["tomato", "onion"]),
                antagonists: names(&["dill"]),
                days_to_harvest: 70,
                spacing_inches: 2.0,
                planting_depth_inches: 0.25,
                succession_interval_days: 14,
                reminder_text: "Sow in loose soil; thin seedlings early.".to_string(),
                notes: "Avoid fresh manure to prevent forked roots.".to_string(),
            },
        ];

        Self { plants }
    }

    /// The full table in display order.
    pub fn all(&self) -> &[PlantRecord] {
        &self.plants
    }

    /// Case-insensitive substring match on `name`, preserving catalog
    /// order. An empty or whitespace query returns the full catalog.
    pub fn search(&self, query: &str) -> Vec<&PlantRecord> {
        let query = query.trim().to_lowercase();
        self.plants
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_stable() {
        let catalog = PlantCatalog::central_florida();
        let ids: Vec<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "tomato",
                "broccoli",
                "cucumber",
                "okra",
                "sweet_corn",
                "pepper",
                "carrot"
            ]
        );
    }

    #[test]
    fn months_stay_within_calendar_bounds() {
        let catalog = PlantCatalog::central_florida();
        for plant in catalog.all() {
            for &m in plant
                .sow_months
                .iter()
                .chain(&plant.transplant_months)
                .chain(&plant.fertilize_months)
            {
                assert!((1..=12).contains(&m), "{}: month {} out of range", plant.id, m);
            }
        }
    }

    #[test]
    fn measurements_are_strictly_positive() {
        let catalog = PlantCatalog::central_florida();
        for plant in catalog.all() {
            assert!(plant.days_to_harvest > 0, "{}", plant.id);
            assert!(plant.spacing_inches > 0.0, "{}", plant.id);
            assert!(plant.planting_depth_inches > 0.0, "{}", plant.id);
            assert!(plant.succession_interval_days > 0, "{}", plant.id);
        }
    }

    #[test]
    fn every_crop_has_a_sow_window() {
        let catalog = PlantCatalog::central_florida();
        for plant in catalog.all() {
            assert!(!plant.sow_months.is_empty(), "{}", plant.id);
            assert!(!plant.reminder_text.is_empty(), "{}", plant.id);
        }
    }

    #[test]
    fn empty_search_returns_full_catalog() {
        let catalog = PlantCatalog::central_florida();
        assert_eq!(catalog.search("").len(), catalog.all().len());
        assert_eq!(catalog.search("   ").len(), catalog.all().len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = PlantCatalog::central_florida();

        let hits = catalog.search("TOM");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Tomato (heat-tolerant)");

        let hits = catalog.search("pepper");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "pepper");
    }

    #[test]
    fn search_preserves_catalog_order() {
        let catalog = PlantCatalog::central_florida();
        // "c" hits Broccoli, Cucumber, Sweet Corn and Carrot, in table order.
        let ids: Vec<&str> = catalog.search("c").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["broccoli", "cucumber", "sweet_corn", "carrot"]);
    }

    #[test]
    fn unmatched_search_is_empty_not_an_error() {
        let catalog = PlantCatalog::central_florida();
        assert!(catalog.search("durian").is_empty());
    }
}
