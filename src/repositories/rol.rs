//! RolRepository - Repository per la gestione dei ruoli e della
//! tabella di join roles_permisos

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateRolDTO, UpdateRolDTO};
use crate::entities::Rol;
use sqlx::{Error, MySqlPool};

// ROL REPO
pub struct RolRepository {
    connection_pool: MySqlPool,
}

impl RolRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    pub async fn exists(&self, id_rol: &i32) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM roles WHERE id_rol = ?")
            .bind(id_rol)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }

    /// INSERT IGNORE sulla chiave composta: riassegnare lo stesso
    /// permesso allo stesso ruolo è un no-op, mai una riga duplicata.
    pub async fn asignar_permiso(&self, id_rol: &i32, id_permiso: &i32) -> Result<(), Error> {
        sqlx::query("INSERT IGNORE INTO roles_permisos (id_rol, id_permiso) VALUES (?, ?)")
            .bind(id_rol)
            .bind(id_permiso)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl ReadAll<Rol> for RolRepository {
    async fn read_all(&self) -> Result<Vec<Rol>, Error> {
        let roles = sqlx::query_as::<_, Rol>("SELECT id_rol, nombre_rol FROM roles")
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(roles)
    }
}

impl Read<Rol, i32> for RolRepository {
    async fn read(&self, id: &i32) -> Result<Option<Rol>, Error> {
        let rol = sqlx::query_as::<_, Rol>("SELECT id_rol, nombre_rol FROM roles WHERE id_rol = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(rol)
    }
}

impl Create<Rol, CreateRolDTO> for RolRepository {
    async fn create(&self, data: &CreateRolDTO) -> Result<Rol, Error> {
        let result = sqlx::query("INSERT INTO roles (nombre_rol) VALUES (?)")
            .bind(&data.nombre_rol)
            .execute(&self.connection_pool)
            .await?;

        Ok(Rol {
            id_rol: result.last_insert_id() as i32,
            nombre_rol: data.nombre_rol.clone(),
        })
    }
}

impl Update<Rol, UpdateRolDTO, i32> for RolRepository {
    async fn update(&self, id: &i32, data: &UpdateRolDTO) -> Result<Rol, Error> {
        let result = sqlx::query("UPDATE roles SET nombre_rol = ? WHERE id_rol = ?")
            .bind(&data.nombre_rol)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(Rol {
            id_rol: *id,
            nombre_rol: data.nombre_rol.clone(),
        })
    }
}

impl Delete<i32> for RolRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id_rol = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(())
    }
}
