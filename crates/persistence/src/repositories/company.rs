//! Company information and portfolio repository.

use sqlx::PgPool;
use validator::Validate;

use super::db_error;
use crate::entities::{CheckCompanyPortfolioEntity, InformationAboutCompanyEntity};
use crate::metrics::QueryTimer;
use crate::PersistenceError;
use domain::models::{NewCheckCompanyPortfolio, NewInformationAboutCompany};

const INFO_TABLE: &str = "informationaboutcompany";
const PORTFOLIO_TABLE: &str = "checkcompanyportfolio";

/// Repository for the informational company records.
#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_info(
        &self,
        input: &NewInformationAboutCompany,
    ) -> Result<InformationAboutCompanyEntity, PersistenceError> {
        input.validate()?;

        let timer = QueryTimer::new(INFO_TABLE, "create");
        let result = sqlx::query_as::<_, InformationAboutCompanyEntity>(
            r#"
            INSERT INTO informationaboutcompany (name, url)
            VALUES ($1, $2)
            RETURNING id, name, url
            "#,
        )
        .bind(&input.name)
        .bind(&input.url)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(INFO_TABLE))
    }

    pub async fn find_info_by_id(
        &self,
        id: i32,
    ) -> Result<Option<InformationAboutCompanyEntity>, PersistenceError> {
        let timer = QueryTimer::new(INFO_TABLE, "find_by_id");
        let result = sqlx::query_as::<_, InformationAboutCompanyEntity>(
            r#"
            SELECT id, name, url
            FROM informationaboutcompany
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(INFO_TABLE))
    }

    pub async fn list_info(&self) -> Result<Vec<InformationAboutCompanyEntity>, PersistenceError> {
        let timer = QueryTimer::new(INFO_TABLE, "list");
        let result = sqlx::query_as::<_, InformationAboutCompanyEntity>(
            r#"
            SELECT id, name, url
            FROM informationaboutcompany
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(INFO_TABLE))
    }

    pub async fn create_portfolio_project(
        &self,
        input: &NewCheckCompanyPortfolio,
    ) -> Result<CheckCompanyPortfolioEntity, PersistenceError> {
        input.validate()?;

        let timer = QueryTimer::new(PORTFOLIO_TABLE, "create");
        let result = sqlx::query_as::<_, CheckCompanyPortfolioEntity>(
            r#"
            INSERT INTO checkcompanyportfolio (project_name, url)
            VALUES ($1, $2)
            RETURNING id, project_name, url
            "#,
        )
        .bind(&input.project_name)
        .bind(&input.url)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(PORTFOLIO_TABLE))
    }

    pub async fn find_portfolio_project_by_id(
        &self,
        id: i32,
    ) -> Result<Option<CheckCompanyPortfolioEntity>, PersistenceError> {
        let timer = QueryTimer::new(PORTFOLIO_TABLE, "find_by_id");
        let result = sqlx::query_as::<_, CheckCompanyPortfolioEntity>(
            r#"
            SELECT id, project_name, url
            FROM checkcompanyportfolio
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(PORTFOLIO_TABLE))
    }

    pub async fn list_portfolio(
        &self,
    ) -> Result<Vec<CheckCompanyPortfolioEntity>, PersistenceError> {
        let timer = QueryTimer::new(PORTFOLIO_TABLE, "list");
        let result = sqlx::query_as::<_, CheckCompanyPortfolioEntity>(
            r#"
            SELECT id, project_name, url
            FROM checkcompanyportfolio
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(PORTFOLIO_TABLE))
    }
}
