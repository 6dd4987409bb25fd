//! Company information entities (database row mappings).

use sqlx::FromRow;

/// Database row mapping for the informationaboutcompany table.
#[derive(Debug, Clone, FromRow)]
pub struct InformationAboutCompanyEntity {
    pub id: i32,
    pub name: String,
    pub url: String,
}

impl From<InformationAboutCompanyEntity> for domain::models::InformationAboutCompany {
    fn from(entity: InformationAboutCompanyEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            url: entity.url,
        }
    }
}

/// Database row mapping for the checkcompanyportfolio table.
#[derive(Debug, Clone, FromRow)]
pub struct CheckCompanyPortfolioEntity {
    pub id: i32,
    pub project_name: String,
    pub url: String,
}

impl From<CheckCompanyPortfolioEntity> for domain::models::CheckCompanyPortfolio {
    fn from(entity: CheckCompanyPortfolioEntity) -> Self {
        Self {
            id: entity.id,
            project_name: entity.project_name,
            url: entity.url,
        }
    }
}
