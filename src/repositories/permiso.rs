//! PermisoRepository - Repository per la gestione dei permessi

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreatePermisoDTO, UpdatePermisoDTO};
use crate::entities::Permiso;
use sqlx::{Error, MySqlPool};

// PERMISO REPO
pub struct PermisoRepository {
    connection_pool: MySqlPool,
}

impl PermisoRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    pub async fn exists(&self, id_permiso: &i32) -> Result<bool, Error> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM permisos WHERE id_permiso = ?")
                .bind(id_permiso)
                .fetch_one(&self.connection_pool)
                .await?;

        Ok(count > 0)
    }
}

impl ReadAll<Permiso> for PermisoRepository {
    async fn read_all(&self) -> Result<Vec<Permiso>, Error> {
        let permisos =
            sqlx::query_as::<_, Permiso>("SELECT id_permiso, nombre_permiso FROM permisos")
                .fetch_all(&self.connection_pool)
                .await?;

        Ok(permisos)
    }
}

impl Read<Permiso, i32> for PermisoRepository {
    async fn read(&self, id: &i32) -> Result<Option<Permiso>, Error> {
        let permiso = sqlx::query_as::<_, Permiso>(
            "SELECT id_permiso, nombre_permiso FROM permisos WHERE id_permiso = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(permiso)
    }
}

impl Create<Permiso, CreatePermisoDTO> for PermisoRepository {
    async fn create(&self, data: &CreatePermisoDTO) -> Result<Permiso, Error> {
        let result = sqlx::query("INSERT INTO permisos (nombre_permiso) VALUES (?)")
            .bind(&data.nombre_permiso)
            .execute(&self.connection_pool)
            .await?;

        Ok(Permiso {
            id_permiso: result.last_insert_id() as i32,
            nombre_permiso: data.nombre_permiso.clone(),
        })
    }
}

impl Update<Permiso, UpdatePermisoDTO, i32> for PermisoRepository {
    async fn update(&self, id: &i32, data: &UpdatePermisoDTO) -> Result<Permiso, Error> {
        let result = sqlx::query("UPDATE permisos SET nombre_permiso = ? WHERE id_permiso = ?")
            .bind(&data.nombre_permiso)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(Permiso {
            id_permiso: *id,
            nombre_permiso: data.nombre_permiso.clone(),
        })
    }
}

impl Delete<i32> for PermisoRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM permisos WHERE id_permiso = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(())
    }
}
