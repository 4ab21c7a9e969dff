//! Client identity validation
//!
//! # Validation Rules
//!
//! - First and last names present, at least 2 characters each
//! - National id numeric with 8-10 digits
//! - Phone exactly 10 digits and starting with the mobile prefix 3
//! - Email well-formed
//! - Date of birth in the past, age at most 150 years

use chrono::Utc;

use crate::client::ClientProfile;

/// Result of profile validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the profile is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for client registration profiles
///
/// All field checks run on every call so the caller gets the full list of
/// problems at once instead of fixing them one at a time.
pub struct ClientValidator;

impl ClientValidator {
    /// Validates a registration profile
    pub fn validate(profile: &ClientProfile) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_names(profile, &mut result);
        Self::validate_national_id(&profile.national_id, &mut result);
        Self::validate_phone(&profile.phone, &mut result);
        Self::validate_email(&profile.email, &mut result);
        Self::validate_date_of_birth(profile, &mut result);

        result
    }

    fn validate_names(profile: &ClientProfile, result: &mut ValidationResult) {
        if profile.first_names.trim().len() < 2 {
            result.add_error("First names must have at least 2 characters");
        }
        if profile.last_names.trim().len() < 2 {
            result.add_error("Last names must have at least 2 characters");
        }
    }

    fn validate_national_id(national_id: &str, result: &mut ValidationResult) {
        if !national_id.chars().all(|c| c.is_ascii_digit()) {
            result.add_error("National id must contain only digits");
            return;
        }
        if national_id.len() < 8 || national_id.len() > 10 {
            result.add_error("National id must have between 8 and 10 digits");
        }
    }

    fn validate_phone(phone: &str, result: &mut ValidationResult) {
        if !phone.chars().all(|c| c.is_ascii_digit()) {
            result.add_error("Phone must contain only digits");
            return;
        }
        if phone.len() != 10 {
            result.add_error("Phone must have exactly 10 digits");
            return;
        }
        if !phone.starts_with('3') {
            result.add_error("Phone must start with the mobile prefix 3");
        }
    }

    fn validate_email(email: &str, result: &mut ValidationResult) {
        let well_formed = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
            }
            None => false,
        };
        if !well_formed {
            result.add_error(format!("Invalid email format: {email}"));
        }
    }

    fn validate_date_of_birth(profile: &ClientProfile, result: &mut ValidationResult) {
        let today = Utc::now().date_naive();
        if profile.date_of_birth >= today {
            result.add_error("Date of birth must be in the past");
            return;
        }

        let age = today.years_since(profile.date_of_birth).unwrap_or(0);
        if age > 150 {
            result.add_error(format!("Invalid age: {age} years"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_profile() -> ClientProfile {
        ClientProfile {
            first_names: "Maria".to_string(),
            last_names: "Lopez Rodriguez".to_string(),
            national_id: "1034567890".to_string(),
            phone: "3109876543".to_string(),
            email: "maria@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 22).unwrap(),
            address: Some("Carrera 10 #20-30".to_string()),
            city: Some("Bogota".to_string()),
        }
    }

    #[test]
    fn test_valid_profile() {
        let result = ClientValidator::validate(&valid_profile());
        assert!(result.is_valid, "Errors: {:?}", result.errors);
    }

    #[test]
    fn test_national_id_too_short() {
        let mut profile = valid_profile();
        profile.national_id = "1234567".to_string();
        let result = ClientValidator::validate(&profile);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("8 and 10")));
    }

    #[test]
    fn test_national_id_not_numeric() {
        let mut profile = valid_profile();
        profile.national_id = "12345abc".to_string();
        let result = ClientValidator::validate(&profile);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("only digits")));
    }

    #[test]
    fn test_phone_wrong_prefix() {
        let mut profile = valid_profile();
        profile.phone = "4123456789".to_string();
        let result = ClientValidator::validate(&profile);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("mobile prefix")));
    }

    #[test]
    fn test_phone_wrong_length() {
        let mut profile = valid_profile();
        profile.phone = "312345678".to_string();
        let result = ClientValidator::validate(&profile);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("exactly 10")));
    }

    #[test]
    fn test_invalid_email() {
        let mut profile = valid_profile();
        profile.email = "not-an-email".to_string();
        let result = ClientValidator::validate(&profile);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("email")));
    }

    #[test]
    fn test_future_date_of_birth() {
        let mut profile = valid_profile();
        profile.date_of_birth = Utc::now().date_naive() + chrono::Duration::days(1);
        let result = ClientValidator::validate(&profile);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("past")));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let profile = ClientProfile {
            first_names: "J".to_string(),
            last_names: "P".to_string(),
            national_id: "12".to_string(),
            phone: "555".to_string(),
            email: "bad".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: None,
            city: None,
        };
        let result = ClientValidator::validate(&profile);
        assert!(!result.is_valid);
        assert!(result.errors.len() >= 5, "Errors: {:?}", result.errors);
    }
}
