//! EtiquetaRepository - Repository per la gestione delle etichette

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateEtiquetaDTO, UpdateEtiquetaDTO};
use crate::entities::Etiqueta;
use sqlx::{Error, MySqlPool};

// ETIQUETA REPO
pub struct EtiquetaRepository {
    connection_pool: MySqlPool,
}

impl EtiquetaRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

impl ReadAll<Etiqueta> for EtiquetaRepository {
    async fn read_all(&self) -> Result<Vec<Etiqueta>, Error> {
        let etiquetas =
            sqlx::query_as::<_, Etiqueta>("SELECT id_etiqueta, nombre_etiqueta FROM etiquetas")
                .fetch_all(&self.connection_pool)
                .await?;

        Ok(etiquetas)
    }
}

impl Read<Etiqueta, i32> for EtiquetaRepository {
    async fn read(&self, id: &i32) -> Result<Option<Etiqueta>, Error> {
        let etiqueta = sqlx::query_as::<_, Etiqueta>(
            "SELECT id_etiqueta, nombre_etiqueta FROM etiquetas WHERE id_etiqueta = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(etiqueta)
    }
}

impl Create<Etiqueta, CreateEtiquetaDTO> for EtiquetaRepository {
    async fn create(&self, data: &CreateEtiquetaDTO) -> Result<Etiqueta, Error> {
        let result = sqlx::query("INSERT INTO etiquetas (nombre_etiqueta) VALUES (?)")
            .bind(&data.nombre_etiqueta)
            .execute(&self.connection_pool)
            .await?;

        Ok(Etiqueta {
            id_etiqueta: result.last_insert_id() as i32,
            nombre_etiqueta: data.nombre_etiqueta.clone(),
        })
    }
}

impl Update<Etiqueta, UpdateEtiquetaDTO, i32> for EtiquetaRepository {
    async fn update(&self, id: &i32, data: &UpdateEtiquetaDTO) -> Result<Etiqueta, Error> {
        let result = sqlx::query("UPDATE etiquetas SET nombre_etiqueta = ? WHERE id_etiqueta = ?")
            .bind(&data.nombre_etiqueta)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(Etiqueta {
            id_etiqueta: *id,
            nombre_etiqueta: data.nombre_etiqueta.clone(),
        })
    }
}

impl Delete<i32> for EtiquetaRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM etiquetas WHERE id_etiqueta = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(())
    }
}
