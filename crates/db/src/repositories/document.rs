//! Document repository implementing the core document store trait.

use chrono::Utc;
use realty_core::document::{
    CreateDocumentInput, Document, DocumentError, DocumentRepository as DocumentRepoTrait,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::documents;

/// Document repository implementation.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    db: DatabaseConnection,
}

impl DocumentRepository {
    /// Create a new document repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DocumentRepoTrait for DocumentRepository {
    async fn create(&self, input: CreateDocumentInput) -> Result<Document, DocumentError> {
        let active_model = documents::ActiveModel {
            filename: Set(input.filename),
            filepath: Set(input.filepath),
            realtor_id: Set(input.realtor_id),
            agency_id: Set(input.agency_id),
            property_id: Set(input.property_id),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| DocumentError::repository(e.to_string()))?;

        Ok(model.into())
    }

    async fn find(&self, id: i32, agency_id: i32) -> Result<Option<Document>, DocumentError> {
        let model = documents::Entity::find()
            .filter(documents::Column::Id.eq(id))
            .filter(documents::Column::AgencyId.eq(agency_id))
            .one(&self.db)
            .await
            .map_err(|e| DocumentError::repository(e.to_string()))?;

        Ok(model.map(Into::into))
    }

    async fn list_by_agency(&self, agency_id: i32) -> Result<Vec<Document>, DocumentError> {
        let models = documents::Entity::find()
            .filter(documents::Column::AgencyId.eq(agency_id))
            .order_by_desc(documents::Column::CreatedAt)
            .order_by_desc(documents::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DocumentError::repository(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i32, agency_id: i32) -> Result<bool, DocumentError> {
        let result = documents::Entity::delete_many()
            .filter(documents::Column::Id.eq(id))
            .filter(documents::Column::AgencyId.eq(agency_id))
            .exec(&self.db)
            .await
            .map_err(|e| DocumentError::repository(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
