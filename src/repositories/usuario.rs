//! UsuarioRepository - Repository per la gestione degli utenti

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{PerfilRow, RegistroUsuarioDTO, UpdateUsuarioDTO, UsuarioInfoDTO};
use crate::entities::Usuario;
use sqlx::{Error, MySqlPool};

const CAMPOS_USUARIO: &str = "id_usuario, nombre, nickname, correo, contrasenia, imagen_perfil, \
                              numero_telefono, fecha_nacimiento, fecha_registro";

// USUARIO REPO
pub struct UsuarioRepository {
    connection_pool: MySqlPool,
}

impl UsuarioRepository {
    pub fn new(connection_pool: MySqlPool) -> UsuarioRepository {
        Self { connection_pool }
    }

    /// Ricerca per il form di accesso: il "login" può essere il nickname
    /// oppure il correo.
    pub async fn find_by_login(&self, login: &str) -> Result<Option<Usuario>, Error> {
        let usuario = sqlx::query_as::<_, Usuario>(&format!(
            "SELECT {CAMPOS_USUARIO} FROM usuarios WHERE nickname = ? OR correo = ?"
        ))
        .bind(login)
        .bind(login)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(usuario)
    }

    /// Controllo di unicità in fase di registrazione.
    pub async fn nickname_o_correo_en_uso(
        &self,
        nickname: &str,
        correo: &str,
    ) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM usuarios WHERE nickname = ? OR correo = ?",
        )
        .bind(nickname)
        .bind(correo)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count > 0)
    }

    /// Controllo di unicità in fase di update: esclude la riga stessa.
    pub async fn nickname_en_uso_por_otro(
        &self,
        nickname: &str,
        id_usuario: &i32,
    ) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM usuarios WHERE nickname = ? AND id_usuario <> ?",
        )
        .bind(nickname)
        .bind(id_usuario)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn correo_en_uso_por_otro(
        &self,
        correo: &str,
        id_usuario: &i32,
    ) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM usuarios WHERE correo = ? AND id_usuario <> ?",
        )
        .bind(correo)
        .bind(id_usuario)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count > 0)
    }

    /// Join usuario -> roles -> permisos. Una riga per ogni match della
    /// join (il fan-out viene collassato da `PerfilDTO::from_filas`).
    /// L'ORDER BY rende deterministico quale ruolo finisce nel profilo.
    pub async fn find_perfil(&self, id_usuario: &i32) -> Result<Vec<PerfilRow>, Error> {
        let filas = sqlx::query_as::<_, PerfilRow>(
            r#"
            SELECT
                u.id_usuario,
                u.nombre,
                u.nickname,
                u.correo,
                u.imagen_perfil,
                u.numero_telefono,
                u.fecha_nacimiento,
                u.fecha_registro,
                r.nombre_rol AS rol,
                rp.id_permiso
            FROM usuarios u
            LEFT JOIN usuarios_roles ur ON u.id_usuario = ur.id_usuario
            LEFT JOIN roles r ON ur.id_rol = r.id_rol
            LEFT JOIN roles_permisos rp ON r.id_rol = rp.id_rol
            WHERE u.id_usuario = ?
            ORDER BY r.id_rol, rp.id_permiso
            "#,
        )
        .bind(id_usuario)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(filas)
    }

    /// Dati pubblici di un utente (niente hash, niente telefono).
    pub async fn find_info(&self, id_usuario: &i32) -> Result<Option<UsuarioInfoDTO>, Error> {
        let info = sqlx::query_as::<_, UsuarioInfoDTO>(
            "SELECT id_usuario, nombre, correo, fecha_registro FROM usuarios WHERE id_usuario = ?",
        )
        .bind(id_usuario)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(info)
    }

    pub async fn exists(&self, id_usuario: &i32) -> Result<bool, Error> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM usuarios WHERE id_usuario = ?")
                .bind(id_usuario)
                .fetch_one(&self.connection_pool)
                .await?;

        Ok(count > 0)
    }

    /// INSERT IGNORE sulla chiave composta: riassegnare lo stesso ruolo
    /// allo stesso utente è un no-op, mai una riga duplicata.
    pub async fn asignar_rol(&self, id_usuario: &i32, id_rol: &i32) -> Result<(), Error> {
        sqlx::query("INSERT IGNORE INTO usuarios_roles (id_usuario, id_rol) VALUES (?, ?)")
            .bind(id_usuario)
            .bind(id_rol)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl ReadAll<Usuario> for UsuarioRepository {
    async fn read_all(&self) -> Result<Vec<Usuario>, Error> {
        let usuarios =
            sqlx::query_as::<_, Usuario>(&format!("SELECT {CAMPOS_USUARIO} FROM usuarios"))
                .fetch_all(&self.connection_pool)
                .await?;

        Ok(usuarios)
    }
}

impl Read<Usuario, i32> for UsuarioRepository {
    async fn read(&self, id: &i32) -> Result<Option<Usuario>, Error> {
        let usuario = sqlx::query_as::<_, Usuario>(&format!(
            "SELECT {CAMPOS_USUARIO} FROM usuarios WHERE id_usuario = ?"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(usuario)
    }
}

impl Create<Usuario, RegistroUsuarioDTO> for UsuarioRepository {
    /// `data.contrasenia` deve essere già un hash bcrypt: il repository
    /// persiste quello che riceve.
    async fn create(&self, data: &RegistroUsuarioDTO) -> Result<Usuario, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO usuarios (nombre, nickname, correo, contrasenia, imagen_perfil, numero_telefono, fecha_nacimiento)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.nombre)
        .bind(&data.nickname)
        .bind(&data.correo)
        .bind(&data.contrasenia)
        .bind(&data.imagen_perfil)
        .bind(&data.numero_telefono)
        .bind(data.fecha_nacimiento)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        // Rilettura per avere anche fecha_registro assegnata dal database
        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }
}

impl Update<Usuario, UpdateUsuarioDTO, i32> for UsuarioRepository {
    /// Full-row update, password inclusa (già hashata dal service).
    async fn update(&self, id: &i32, data: &UpdateUsuarioDTO) -> Result<Usuario, Error> {
        sqlx::query(
            r#"
            UPDATE usuarios SET
                nombre = ?,
                nickname = ?,
                correo = ?,
                contrasenia = ?,
                imagen_perfil = ?,
                numero_telefono = ?,
                fecha_nacimiento = ?
            WHERE id_usuario = ?
            "#,
        )
        .bind(&data.nombre)
        .bind(&data.nickname)
        .bind(&data.correo)
        .bind(&data.contrasenia)
        .bind(&data.imagen_perfil)
        .bind(&data.numero_telefono)
        .bind(data.fecha_nacimiento)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for UsuarioRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id_usuario = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(())
    }
}
