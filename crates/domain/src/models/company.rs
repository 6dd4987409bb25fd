//! Company information and portfolio domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Entity;

/// A link with information about the company ("About us", contacts, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationAboutCompany {
    pub id: i32,
    pub name: String,
    pub url: String,
}

impl Entity for InformationAboutCompany {
    const TABLE: &'static str = "informationaboutcompany";

    fn id(&self) -> i32 {
        self.id
    }
}

/// A portfolio project the company has delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckCompanyPortfolio {
    pub id: i32,
    pub project_name: String,
    pub url: String,
}

impl Entity for CheckCompanyPortfolio {
    const TABLE: &'static str = "checkcompanyportfolio";

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewInformationAboutCompany {
    #[validate(length(max = 48, message = "Name must be at most 48 characters"))]
    pub name: String,

    #[validate(length(max = 128, message = "URL must be at most 128 characters"))]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCheckCompanyPortfolio {
    #[validate(length(max = 48, message = "Project name must be at most 48 characters"))]
    pub project_name: String,

    #[validate(length(max = 128, message = "URL must be at most 128 characters"))]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_information_valid() {
        let input = NewInformationAboutCompany {
            name: "О компании".to_string(),
            url: "https://example.com/about".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_new_information_name_limit() {
        let input = NewInformationAboutCompany {
            name: "n".repeat(49),
            url: "https://example.com".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_new_portfolio_valid() {
        let input = NewCheckCompanyPortfolio {
            project_name: "CRM для автосалона".to_string(),
            url: "https://example.com/cases/crm".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_new_portfolio_url_limit() {
        let input = NewCheckCompanyPortfolio {
            project_name: String::new(),
            url: "u".repeat(129),
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(!fields.contains_key("project_name"));
        assert!(fields.contains_key("url"));
    }

    #[test]
    fn test_new_portfolio_empty_name_allowed() {
        let input = NewCheckCompanyPortfolio {
            project_name: String::new(),
            url: String::new(),
        };
        assert!(input.validate().is_ok());
    }
}
