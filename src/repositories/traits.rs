//! Common repository traits
//!
//! Generic interfaces shared by the per-table repositories.

/// Insert support.
///
/// # Type Parameters
/// * `Entity` - type returned after the insert (id assigned by the database)
/// * `CreateDTO` - payload used for the insert (no id yet)
pub trait Create<Entity, CreateDTO> {
    /// Inserts a new row and returns the stored entity, id included.
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Lookup by primary key.
pub trait Read<Entity, Id> {
    /// Fetches one entity by primary key.
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - row found
    /// * `Ok(None)` - no row with that id
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Full-table listing.
pub trait ReadAll<Entity> {
    /// Fetches every row of the table.
    async fn read_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Full-row rewrite (no partial updates anywhere in this API).
pub trait Update<Entity, UpdateDTO, Id> {
    /// Rewrites an existing row.
    ///
    /// # Returns
    /// * `Ok(Entity)` - the row as stored after the update
    /// * `Err(sqlx::Error::RowNotFound)` - no row matched the id
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, sqlx::Error>;
}

/// Row removal.
pub trait Delete<Id> {
    /// Deletes a row by primary key.
    ///
    /// # Returns
    /// * `Ok(())` - row removed
    /// * `Err(sqlx::Error::RowNotFound)` - no row matched the id
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}
