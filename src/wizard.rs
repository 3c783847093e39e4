//! Provider onboarding wizard: a four-step, DOM-free state machine.
//!
//! The page component owns a `Wizard` behind a signal and renders from it;
//! every rule lives here so it can be exercised without a browser. Steps
//! advance only through [`Wizard::next_step`], which gates on the current
//! step's validation; backward navigation never re-validates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::types::ResponseTime;
use crate::validate;

pub const TOTAL_STEPS: u8 = 4;

/// Version stamp for the persisted form state; bump on layout changes and
/// older payloads are discarded on load
pub const SCHEMA_VERSION: u32 = 1;

/// Visual state of a category checkbox derived from its services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Service coverage choice on the location step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRadius {
    Km(u32),
    County,
    Region,
}

impl ServiceRadius {
    pub const OPTIONS: [ServiceRadius; 6] = [
        ServiceRadius::Km(5),
        ServiceRadius::Km(10),
        ServiceRadius::Km(25),
        ServiceRadius::Km(50),
        ServiceRadius::County,
        ServiceRadius::Region,
    ];

    pub fn as_value(&self) -> String {
        match self {
            ServiceRadius::Km(km) => km.to_string(),
            ServiceRadius::County => "county".to_string(),
            ServiceRadius::Region => "region".to_string(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "county" => Some(ServiceRadius::County),
            "region" => Some(ServiceRadius::Region),
            other => other.parse().ok().map(ServiceRadius::Km),
        }
    }

    pub fn coverage_text(&self) -> String {
        match self {
            ServiceRadius::County => {
                "You will serve customers throughout the entire county".to_string()
            }
            ServiceRadius::Region => {
                "You will serve customers throughout the entire region".to_string()
            }
            ServiceRadius::Km(km) => {
                format!("You will serve customers within {km} km of your selected location")
            }
        }
    }
}

/// Key under which a specific service is tracked: `category:Service Name`
pub fn service_key(category: &str, service_name: &str) -> String {
    format!("{category}:{service_name}")
}

/// The union of all wizard field values. Account-sourced identity fields
/// (name, email, phone) are autofilled and locked; they are never part of
/// the persisted snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardForm {
    // Step 1 - identity
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub description: String,

    // Step 2 - services
    pub selected_services: BTreeSet<String>,
    pub response_time: Option<ResponseTime>,

    // Step 3 - location
    pub county: String,
    pub sub_county: String,
    pub ward: String,
    pub area: String,
    pub coordinates: Option<(f64, f64)>,
    pub full_address: String,
    pub detailed_address: String,
    pub service_radius: Option<ServiceRadius>,

    // Step 4 - rates
    pub min_rate: Option<u32>,
    pub max_rate: Option<u32>,
    pub pricing_notes: String,
}

impl WizardForm {
    /// Tri-state of a category checkbox: checked iff all of its services
    /// are selected, indeterminate iff some are, unchecked iff none are
    pub fn category_state(&self, category_key: &str) -> TriState {
        let services = catalog::services_for(category_key);
        if services.is_empty() {
            return TriState::Unchecked;
        }
        let selected = services
            .iter()
            .filter(|s| self.selected_services.contains(&service_key(category_key, s.name)))
            .count();
        if selected == 0 {
            TriState::Unchecked
        } else if selected == services.len() {
            TriState::Checked
        } else {
            TriState::Indeterminate
        }
    }

    /// Checking a category selects all of its services; unchecking clears
    /// them all
    pub fn set_category(&mut self, category_key: &str, on: bool) {
        for service in catalog::services_for(category_key) {
            let key = service_key(category_key, service.name);
            if on {
                self.selected_services.insert(key);
            } else {
                self.selected_services.remove(&key);
            }
        }
    }

    pub fn set_service(&mut self, category_key: &str, service_name: &str, on: bool) {
        let key = service_key(category_key, service_name);
        if on {
            self.selected_services.insert(key);
        } else {
            self.selected_services.remove(&key);
        }
    }

    pub fn is_service_selected(&self, category_key: &str, service_name: &str) -> bool {
        self.selected_services
            .contains(&service_key(category_key, service_name))
    }

    /// Categories submitted as whole-category selections: exactly those
    /// whose checkbox is fully checked
    pub fn full_categories(&self) -> Vec<&'static str> {
        catalog::categories()
            .iter()
            .filter(|c| self.category_state(c.key) == TriState::Checked)
            .map(|c| c.key)
            .collect()
    }

    pub fn has_service_selection(&self) -> bool {
        !self.selected_services.is_empty()
    }

    /// Changing a higher-level select clears everything below it
    pub fn set_county(&mut self, county: String) {
        self.county = county;
        self.sub_county.clear();
        self.ward.clear();
        self.area.clear();
    }

    pub fn set_sub_county(&mut self, sub_county: String) {
        self.sub_county = sub_county;
        self.ward.clear();
        self.area.clear();
    }

    pub fn set_ward(&mut self, ward: String) {
        self.ward = ward;
        self.area.clear();
    }

    /// Human-readable primary location, e.g. "Kilimani, Nairobi"
    pub fn primary_location(&self) -> String {
        match (self.ward.is_empty(), self.county.is_empty()) {
            (false, false) => format!("{}, {}", self.ward, self.county),
            (false, true) => self.ward.clone(),
            (true, false) => self.county.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Result of validating one step: errors block the transition, warnings
/// are shown but do not
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl StepOutcome {
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    pub step: u8,
    pub form: WizardForm,
    /// Whether a map picker is present; without one, manual address entry
    /// is the accepted path and missing coordinates draw no warning
    pub maps_available: bool,
    /// Identity fields came from the signed-in account and are readonly
    pub identity_locked: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: 1,
            form: WizardForm::default(),
            maps_available: false,
            identity_locked: false,
        }
    }

    /// Wizard prefilled from the signed-in account; the identity trio is
    /// locked against edits and excluded from autosave
    pub fn for_account(name: &str, email: &str, phone: Option<&str>) -> Self {
        let mut wizard = Self::new();
        wizard.form.full_name = name.to_string();
        wizard.form.email = email.to_string();
        wizard.form.phone = phone.unwrap_or_default().to_string();
        wizard.identity_locked = true;
        wizard
    }

    /// Progress fraction shown by the step indicator
    pub fn progress(&self) -> f64 {
        f64::from(self.step) / f64::from(TOTAL_STEPS)
    }

    pub fn validate_current_step(&self) -> StepOutcome {
        let mut out = StepOutcome::default();
        let form = &self.form;

        match self.step {
            1 => {
                if form.full_name.trim().is_empty() {
                    out.errors.push("Please enter your full name".into());
                }
                if form.email.trim().is_empty() {
                    out.errors.push("Please enter your email address".into());
                } else if !validate::is_valid_email(&form.email) {
                    out.errors.push("Please enter a valid email address".into());
                }
                if form.phone.trim().is_empty() {
                    out.errors.push("Please enter your phone number".into());
                } else if !validate::is_valid_kenyan_phone(&form.phone) {
                    out.errors.push("Please enter a valid Kenyan phone number".into());
                }
            }
            2 => {
                if !form.has_service_selection() {
                    out.errors.push(
                        "Please select at least one service category or specific service".into(),
                    );
                }
                if form.response_time.is_none() {
                    out.errors.push("Please select your typical response time".into());
                }
            }
            3 => {
                if form.county.is_empty() {
                    out.errors.push("Please select a county".into());
                }
                if form.sub_county.is_empty() {
                    out.errors.push("Please select a sub-county".into());
                }
                if form.ward.is_empty() {
                    out.errors.push("Please select a ward".into());
                }
                match form.coordinates {
                    Some((lat, lng)) => {
                        if !validate::within_kenya(lat, lng) {
                            out.errors.push(
                                "Selected location appears to be outside Kenya. \
                                 Please select a location within Kenya."
                                    .into(),
                            );
                        }
                    }
                    None => {
                        if self.maps_available {
                            out.warnings.push(
                                "Pick your exact location on the map, or rely on the \
                                 address fields above."
                                    .into(),
                            );
                        }
                    }
                }
                if form.service_radius.is_none() {
                    out.errors.push("Please select your service coverage radius".into());
                }
            }
            4 => {
                if !validate::is_valid_rate_range(form.min_rate, form.max_rate) {
                    out.errors
                        .push("Maximum rate must be higher than minimum rate".into());
                }
            }
            _ => {}
        }

        out
    }

    /// Validate and, on success, advance by exactly one step
    pub fn next_step(&mut self) -> StepOutcome {
        let outcome = self.validate_current_step();
        if outcome.ok() && self.step < TOTAL_STEPS {
            self.step += 1;
        }
        outcome
    }

    /// Unconditional; never re-validates
    pub fn prev_step(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    pub fn snapshot(&self) -> SavedWizardState {
        let form = &self.form;
        SavedWizardState {
            version: SCHEMA_VERSION,
            step: self.step,
            business_name: form.business_name.clone(),
            description: form.description.clone(),
            selected_services: form.selected_services.iter().cloned().collect(),
            full_categories: form.full_categories().iter().map(|k| k.to_string()).collect(),
            response_time: form.response_time.map(|rt| rt.as_value().to_string()),
            county: form.county.clone(),
            sub_county: form.sub_county.clone(),
            ward: form.ward.clone(),
            area: form.area.clone(),
            latitude: form.coordinates.map(|(lat, _)| lat),
            longitude: form.coordinates.map(|(_, lng)| lng),
            full_address: form.full_address.clone(),
            detailed_address: form.detailed_address.clone(),
            service_radius: form.service_radius.map(|r| r.as_value()),
            min_rate: form.min_rate,
            max_rate: form.max_rate,
            pricing_notes: form.pricing_notes.clone(),
        }
    }

    /// Apply a saved snapshot on top of the current (possibly prefilled)
    /// form. Identity fields are untouched; the step jumps to where the
    /// user left off.
    pub fn restore(&mut self, saved: SavedWizardState) {
        let form = &mut self.form;
        form.business_name = saved.business_name;
        form.description = saved.description;

        form.selected_services = saved.selected_services.into_iter().collect();
        // Whole-category selections re-expand against the current catalog,
        // healing any drift in the service list
        for category in saved.full_categories {
            form.set_category(&category, true);
        }

        form.response_time = saved
            .response_time
            .as_deref()
            .and_then(ResponseTime::from_value);
        form.county = saved.county;
        form.sub_county = saved.sub_county;
        form.ward = saved.ward;
        form.area = saved.area;
        form.coordinates = match (saved.latitude, saved.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        };
        form.full_address = saved.full_address;
        form.detailed_address = saved.detailed_address;
        form.service_radius = saved.service_radius.as_deref().and_then(ServiceRadius::from_value);
        form.min_rate = saved.min_rate;
        form.max_rate = saved.max_rate;
        form.pricing_notes = saved.pricing_notes;

        self.step = saved.step.clamp(1, TOTAL_STEPS);
    }

    /// Flat field list for the multipart application payload
    pub fn submission_fields(&self) -> Vec<(String, String)> {
        let form = &self.form;
        let mut fields: Vec<(String, String)> = vec![
            ("fullName".into(), form.full_name.clone()),
            ("businessName".into(), form.business_name.clone()),
            ("email".into(), form.email.clone()),
            ("phone".into(), form.phone.clone()),
            ("description".into(), form.description.clone()),
            (
                "responseTime".into(),
                form.response_time
                    .map(|rt| rt.as_value().to_string())
                    .unwrap_or_default(),
            ),
            ("county".into(), form.county.clone()),
            ("subCounty".into(), form.sub_county.clone()),
            ("ward".into(), form.ward.clone()),
            ("specificLocation".into(), form.area.clone()),
            ("primaryLocation".into(), form.primary_location()),
            ("fullAddress".into(), form.full_address.clone()),
            ("detailedAddress".into(), form.detailed_address.clone()),
            (
                "serviceRadius".into(),
                form.service_radius.map(|r| r.as_value()).unwrap_or_default(),
            ),
            (
                "minRate".into(),
                form.min_rate.map(|r| r.to_string()).unwrap_or_default(),
            ),
            (
                "maxRate".into(),
                form.max_rate.map(|r| r.to_string()).unwrap_or_default(),
            ),
            ("pricingNotes".into(), form.pricing_notes.clone()),
        ];

        if let Some((lat, lng)) = form.coordinates {
            fields.push(("latitude".into(), lat.to_string()));
            fields.push(("longitude".into(), lng.to_string()));
        }

        let categories: Vec<&str> = form.full_categories();
        let services: Vec<&String> = form.selected_services.iter().collect();
        fields.push((
            "selectedCategories".into(),
            serde_json::to_string(&categories).unwrap_or_else(|_| "[]".into()),
        ));
        fields.push((
            "selectedServices".into(),
            serde_json::to_string(&services).unwrap_or_else(|_| "[]".into()),
        ));

        fields
    }
}

/// Persisted wizard state: every non-readonly field plus the reached step.
/// The account-sourced identity trio is deliberately absent so a restore
/// can never clobber server-trusted fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedWizardState {
    pub version: u32,
    pub step: u8,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub selected_services: Vec<String>,
    #[serde(default)]
    pub full_categories: Vec<String>,
    #[serde(default)]
    pub response_time: Option<String>,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub sub_county: String,
    #[serde(default)]
    pub ward: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub full_address: String,
    #[serde(default)]
    pub detailed_address: String,
    #[serde(default)]
    pub service_radius: Option<String>,
    #[serde(default)]
    pub min_rate: Option<u32>,
    #[serde(default)]
    pub max_rate: Option<u32>,
    #[serde(default)]
    pub pricing_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_step1(wizard: &mut Wizard) {
        wizard.form.full_name = "Jane Doe".into();
        wizard.form.email = "jane@example.com".into();
        wizard.form.phone = "0712345678".into();
    }

    #[test]
    fn failing_validation_leaves_step_unchanged() {
        let mut wizard = Wizard::new();
        let outcome = wizard.next_step();
        assert!(!outcome.ok());
        assert_eq!(wizard.step, 1);
    }

    #[test]
    fn passing_validation_advances_by_exactly_one() {
        let mut wizard = Wizard::new();
        filled_step1(&mut wizard);
        assert_eq!(wizard.progress(), 0.25);
        let outcome = wizard.next_step();
        assert!(outcome.ok());
        assert_eq!(wizard.step, 2);
        assert_eq!(wizard.progress(), 0.5);
    }

    #[test]
    fn prev_step_never_validates() {
        let mut wizard = Wizard::new();
        wizard.step = 3;
        // Step 3 would fail validation; going back must not care
        wizard.prev_step();
        assert_eq!(wizard.step, 2);
        wizard.prev_step();
        wizard.prev_step();
        assert_eq!(wizard.step, 1, "prev saturates at step 1");
    }

    #[test]
    fn step1_requires_valid_email_and_phone() {
        let mut wizard = Wizard::new();
        filled_step1(&mut wizard);
        wizard.form.phone = "0712345".into();
        let outcome = wizard.validate_current_step();
        assert!(outcome
            .errors
            .iter()
            .any(|e| e.contains("Kenyan phone number")));

        wizard.form.phone = "254712345678".into();
        wizard.form.email = "not-an-email".into();
        let outcome = wizard.validate_current_step();
        assert!(outcome.errors.iter().any(|e| e.contains("valid email")));
    }

    #[test]
    fn step2_requires_selection_and_response_time() {
        let mut wizard = Wizard::new();
        wizard.step = 2;
        let outcome = wizard.validate_current_step();
        assert_eq!(outcome.errors.len(), 2);

        wizard.form.set_service("plumbing", "Leak Repair", true);
        wizard.form.response_time = Some(ResponseTime::SameDay);
        assert!(wizard.validate_current_step().ok());
    }

    #[test]
    fn tri_state_tracks_sibling_selection() {
        let mut form = WizardForm::default();
        assert_eq!(form.category_state("plumbing"), TriState::Unchecked);

        form.set_service("plumbing", "Leak Repair", true);
        assert_eq!(form.category_state("plumbing"), TriState::Indeterminate);

        form.set_category("plumbing", true);
        assert_eq!(form.category_state("plumbing"), TriState::Checked);
        assert_eq!(form.full_categories(), vec!["plumbing"]);

        // Removing any one service drops the category to indeterminate
        form.set_service("plumbing", "Leak Repair", false);
        assert_eq!(form.category_state("plumbing"), TriState::Indeterminate);
        assert!(form.full_categories().is_empty());

        form.set_category("plumbing", false);
        assert_eq!(form.category_state("plumbing"), TriState::Unchecked);
        assert!(!form.has_service_selection());
    }

    #[test]
    fn step3_warns_without_coordinates_but_blocks_outside_kenya() {
        let mut wizard = Wizard::new();
        wizard.step = 3;
        wizard.maps_available = true;
        wizard.form.set_county("Nairobi".into());
        wizard.form.set_sub_county("Westlands".into());
        wizard.form.set_ward("Kitisuru".into());
        wizard.form.service_radius = Some(ServiceRadius::Km(10));

        // Missing coordinates: warning only, step still passes
        let outcome = wizard.validate_current_step();
        assert!(outcome.ok());
        assert_eq!(outcome.warnings.len(), 1);

        // Coordinates outside Kenya: hard error
        wizard.form.coordinates = Some((51.5, -0.12));
        let outcome = wizard.validate_current_step();
        assert!(!outcome.ok());

        wizard.form.coordinates = Some((-1.29, 36.82));
        assert!(wizard.validate_current_step().ok());
    }

    #[test]
    fn step3_requires_full_hierarchy_and_radius() {
        let mut wizard = Wizard::new();
        wizard.step = 3;
        wizard.form.set_county("Nairobi".into());
        let outcome = wizard.validate_current_step();
        assert!(outcome.errors.iter().any(|e| e.contains("sub-county")));
        assert!(outcome.errors.iter().any(|e| e.contains("ward")));
        assert!(outcome.errors.iter().any(|e| e.contains("radius")));
    }

    #[test]
    fn step4_enforces_strict_rate_ordering() {
        let mut wizard = Wizard::new();
        wizard.step = 4;
        assert!(wizard.validate_current_step().ok(), "rates are optional");

        wizard.form.min_rate = Some(1500);
        wizard.form.max_rate = Some(500);
        assert!(!wizard.validate_current_step().ok());

        wizard.form.max_rate = Some(1500);
        assert!(!wizard.validate_current_step().ok(), "equal rates rejected");

        wizard.form.max_rate = Some(2500);
        assert!(wizard.validate_current_step().ok());
    }

    #[test]
    fn cascading_selects_clear_descendants() {
        let mut form = WizardForm::default();
        form.set_county("Nairobi".into());
        form.set_sub_county("Westlands".into());
        form.set_ward("Kitisuru".into());
        form.area = "Runda Estate".into();

        form.set_sub_county("Langata".into());
        assert!(form.ward.is_empty());
        assert!(form.area.is_empty());
        assert_eq!(form.county, "Nairobi");

        form.set_county("Mombasa".into());
        assert!(form.sub_county.is_empty());
    }

    #[test]
    fn snapshot_restore_round_trip_excludes_identity() {
        let mut wizard = Wizard::for_account("Jane Doe", "jane@example.com", Some("0712345678"));
        wizard.form.business_name = "Jane's Plumbing".into();
        wizard.form.description = "20 years of experience".into();
        wizard.form.set_category("plumbing", true);
        wizard.form.set_service("electrical", "Wiring Installation", true);
        wizard.form.response_time = Some(ResponseTime::Within48h);
        wizard.form.set_county("Nairobi".into());
        wizard.form.set_sub_county("Dagoretti North".into());
        wizard.form.set_ward("Kilimani".into());
        wizard.form.coordinates = Some((-1.2921, 36.8219));
        wizard.form.service_radius = Some(ServiceRadius::County);
        wizard.form.min_rate = Some(500);
        wizard.step = 3;

        let json = serde_json::to_string(&wizard.snapshot()).unwrap();
        assert!(!json.contains("jane@example.com"), "identity leaked into snapshot");
        assert!(!json.contains("0712345678"));

        let saved: SavedWizardState = serde_json::from_str(&json).unwrap();
        let mut restored = Wizard::for_account("Jane Doe", "jane@example.com", None);
        restored.restore(saved);

        assert_eq!(restored.step, 3);
        assert_eq!(restored.form.business_name, "Jane's Plumbing");
        assert_eq!(restored.form.min_rate, Some(500));
        assert_eq!(restored.form.category_state("plumbing"), TriState::Checked);
        assert_eq!(
            restored.form.category_state("electrical"),
            TriState::Indeterminate
        );
        assert_eq!(restored.form.response_time, Some(ResponseTime::Within48h));
        assert_eq!(restored.form.coordinates, Some((-1.2921, 36.8219)));
        assert_eq!(restored.form.service_radius, Some(ServiceRadius::County));
        // Prefill survives because the snapshot never carried identity
        assert_eq!(restored.form.full_name, "Jane Doe");
        assert_eq!(restored.form.email, "jane@example.com");
    }

    #[test]
    fn restore_clamps_out_of_range_step() {
        let mut saved = Wizard::new().snapshot();
        saved.step = 9;
        let mut wizard = Wizard::new();
        wizard.restore(saved);
        assert_eq!(wizard.step, TOTAL_STEPS);
    }

    #[test]
    fn submission_fields_carry_selections_as_json() {
        let mut wizard = Wizard::for_account("Jane Doe", "jane@example.com", Some("0712345678"));
        wizard.form.set_category("plumbing", true);
        wizard.form.set_service("electrical", "Wiring Installation", true);
        wizard.form.set_county("Nairobi".into());
        wizard.form.set_sub_county("Westlands".into());
        wizard.form.set_ward("Kitisuru".into());
        wizard.form.coordinates = Some((-1.25, 36.8));

        let fields = wizard.submission_fields();
        let get = |name: &str| {
            fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
                .unwrap_or_else(|| panic!("missing field {name}"))
        };

        assert_eq!(get("primaryLocation"), "Kitisuru, Nairobi");
        assert_eq!(get("latitude"), "-1.25");
        let categories: Vec<String> = serde_json::from_str(&get("selectedCategories")).unwrap();
        assert_eq!(categories, vec!["plumbing"]);
        let services: Vec<String> = serde_json::from_str(&get("selectedServices")).unwrap();
        assert!(services.contains(&"electrical:Wiring Installation".to_string()));
        assert!(services.iter().any(|s| s.starts_with("plumbing:")));
    }

    #[test]
    fn service_radius_values_round_trip() {
        for radius in ServiceRadius::OPTIONS {
            assert_eq!(ServiceRadius::from_value(&radius.as_value()), Some(radius));
        }
        assert_eq!(ServiceRadius::from_value("everywhere"), None);
    }
}
