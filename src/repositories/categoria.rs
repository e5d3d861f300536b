//! CategoriaRepository - Repository per la gestione delle categorie

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateCategoriaDTO, UpdateCategoriaDTO};
use crate::entities::Categoria;
use sqlx::{Error, MySqlPool};

// CATEGORIA REPO
pub struct CategoriaRepository {
    connection_pool: MySqlPool,
}

impl CategoriaRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

impl ReadAll<Categoria> for CategoriaRepository {
    async fn read_all(&self) -> Result<Vec<Categoria>, Error> {
        let categorias =
            sqlx::query_as::<_, Categoria>("SELECT id_categoria, nombre_categoria FROM categorias")
                .fetch_all(&self.connection_pool)
                .await?;

        Ok(categorias)
    }
}

impl Read<Categoria, i32> for CategoriaRepository {
    async fn read(&self, id: &i32) -> Result<Option<Categoria>, Error> {
        let categoria = sqlx::query_as::<_, Categoria>(
            "SELECT id_categoria, nombre_categoria FROM categorias WHERE id_categoria = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(categoria)
    }
}

impl Create<Categoria, CreateCategoriaDTO> for CategoriaRepository {
    async fn create(&self, data: &CreateCategoriaDTO) -> Result<Categoria, Error> {
        let result = sqlx::query("INSERT INTO categorias (nombre_categoria) VALUES (?)")
            .bind(&data.nombre_categoria)
            .execute(&self.connection_pool)
            .await?;

        Ok(Categoria {
            id_categoria: result.last_insert_id() as i32,
            nombre_categoria: data.nombre_categoria.clone(),
        })
    }
}

impl Update<Categoria, UpdateCategoriaDTO, i32> for CategoriaRepository {
    async fn update(&self, id: &i32, data: &UpdateCategoriaDTO) -> Result<Categoria, Error> {
        let result =
            sqlx::query("UPDATE categorias SET nombre_categoria = ? WHERE id_categoria = ?")
                .bind(&data.nombre_categoria)
                .bind(id)
                .execute(&self.connection_pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(Categoria {
            id_categoria: *id,
            nombre_categoria: data.nombre_categoria.clone(),
        })
    }
}

impl Delete<i32> for CategoriaRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM categorias WHERE id_categoria = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(())
    }
}
