//! ArticuloRepository - Repository per la gestione degli articoli e
//! delle loro join verso categorie ed etichette
//!
//! Le scritture multi-statement (insert/update/delete con le righe di
//! join) girano dentro una transazione: o si applica tutto, o niente.

use crate::dtos::{
    ArticuloConAutorDTO, ArticuloDeUsuarioDTO, ArticuloEnCategoriaDTO, ArticuloResumenDTO,
    CreateArticuloDTO, UpdateArticuloDTO,
};
use crate::entities::{Articulo, Categoria, Etiqueta};
use sqlx::{Error, MySqlPool};
use tracing::{debug, info, instrument};

// ARTICULO REPOSITORY
pub struct ArticuloRepository {
    connection_pool: MySqlPool,
}

impl ArticuloRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Lista completa con il nome dell'autore, dal più recente.
    pub async fn find_all_con_autor(&self) -> Result<Vec<ArticuloResumenDTO>, Error> {
        let articulos = sqlx::query_as::<_, ArticuloResumenDTO>(
            r#"
            SELECT
                a.id_articulo,
                a.fecha_publicacion,
                a.titulo,
                a.contenido,
                u.nombre AS nombre_usuario
            FROM articulos a
            LEFT JOIN usuarios u ON a.id_usuario = u.id_usuario
            ORDER BY a.fecha_publicacion DESC
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(articulos)
    }

    /// Articolo singolo con i dati dell'autore (INNER JOIN: un articolo
    /// senza autore valido non viene restituito).
    pub async fn find_con_autor(&self, id_articulo: &i32) -> Result<Option<ArticuloConAutorDTO>, Error> {
        let articulo = sqlx::query_as::<_, ArticuloConAutorDTO>(
            r#"
            SELECT
                u.id_usuario,
                u.nombre,
                a.id_articulo,
                a.titulo,
                a.contenido,
                a.imagen_cover,
                a.estado,
                a.fecha_publicacion
            FROM usuarios u
            JOIN articulos a ON u.id_usuario = a.id_usuario
            WHERE a.id_articulo = ?
            "#,
        )
        .bind(id_articulo)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(articulo)
    }

    /// Categorie associate a un articolo, come coppie `{id, nombre}`.
    pub async fn categorias_de(&self, id_articulo: &i32) -> Result<Vec<Categoria>, Error> {
        let categorias = sqlx::query_as::<_, Categoria>(
            r#"
            SELECT c.id_categoria, c.nombre_categoria
            FROM articulos_categorias ac
            JOIN categorias c ON ac.id_categoria = c.id_categoria
            WHERE ac.id_articulo = ?
            "#,
        )
        .bind(id_articulo)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(categorias)
    }

    /// Etichette associate a un articolo, come coppie `{id, nombre}`.
    pub async fn etiquetas_de(&self, id_articulo: &i32) -> Result<Vec<Etiqueta>, Error> {
        let etiquetas = sqlx::query_as::<_, Etiqueta>(
            r#"
            SELECT e.id_etiqueta, e.nombre_etiqueta
            FROM articulos_etiquetas ae
            JOIN etiquetas e ON ae.id_etiqueta = e.id_etiqueta
            WHERE ae.id_articulo = ?
            "#,
        )
        .bind(id_articulo)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(etiquetas)
    }

    /// Inserisce l'articolo e le righe di join in una sola transazione.
    /// Ritorna l'id generato.
    #[instrument(skip(self, data), fields(id_usuario = %data.id_usuario))]
    pub async fn create(&self, data: &CreateArticuloDTO) -> Result<i32, Error> {
        debug!("Creating new article");
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO articulos (id_usuario, titulo, contenido, imagen_cover, estado)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.id_usuario)
        .bind(&data.titulo)
        .bind(&data.contenido)
        .bind(&data.imagen_cover)
        .bind(data.estado.clone().unwrap_or_default())
        .execute(&mut *tx)
        .await?;

        let id_articulo = result.last_insert_id() as i32;

        for id_etiqueta in data.etiquetas.iter().flatten() {
            sqlx::query("INSERT INTO articulos_etiquetas (id_articulo, id_etiqueta) VALUES (?, ?)")
                .bind(id_articulo)
                .bind(id_etiqueta)
                .execute(&mut *tx)
                .await?;
        }

        for id_categoria in data.categorias.iter().flatten() {
            sqlx::query(
                "INSERT INTO articulos_categorias (id_articulo, id_categoria) VALUES (?, ?)",
            )
            .bind(id_articulo)
            .bind(id_categoria)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!("Article created with id {}", id_articulo);
        Ok(id_articulo)
    }

    /// Full-row update dei campi scalari. Per ogni relazione fornita
    /// (anche vuota) le associazioni esistenti vengono cancellate e
    /// rimpiazzate dal nuovo insieme; relazione omessa -> intatta.
    /// `Err(RowNotFound)` se l'articolo non esiste.
    #[instrument(skip(self, data), fields(id_articulo = %id_articulo))]
    pub async fn update(&self, id_articulo: &i32, data: &UpdateArticuloDTO) -> Result<(), Error> {
        debug!("Updating article");
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE articulos SET
                id_usuario = ?,
                titulo = ?,
                contenido = ?,
                imagen_cover = ?,
                estado = ?
            WHERE id_articulo = ?
            "#,
        )
        .bind(data.id_usuario)
        .bind(&data.titulo)
        .bind(&data.contenido)
        .bind(&data.imagen_cover)
        .bind(data.estado.clone())
        .bind(id_articulo)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        if let Some(etiquetas) = &data.etiquetas {
            sqlx::query("DELETE FROM articulos_etiquetas WHERE id_articulo = ?")
                .bind(id_articulo)
                .execute(&mut *tx)
                .await?;

            for id_etiqueta in etiquetas {
                sqlx::query(
                    "INSERT INTO articulos_etiquetas (id_articulo, id_etiqueta) VALUES (?, ?)",
                )
                .bind(id_articulo)
                .bind(id_etiqueta)
                .execute(&mut *tx)
                .await?;
            }
        }

        if let Some(categorias) = &data.categorias {
            sqlx::query("DELETE FROM articulos_categorias WHERE id_articulo = ?")
                .bind(id_articulo)
                .execute(&mut *tx)
                .await?;

            for id_categoria in categorias {
                sqlx::query(
                    "INSERT INTO articulos_categorias (id_articulo, id_categoria) VALUES (?, ?)",
                )
                .bind(id_articulo)
                .bind(id_categoria)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        info!("Article updated");
        Ok(())
    }

    /// Cancella prima le righe di join (nessun CASCADE sullo schema),
    /// poi l'articolo. `Err(RowNotFound)` se l'articolo non esiste.
    #[instrument(skip(self), fields(id_articulo = %id_articulo))]
    pub async fn delete(&self, id_articulo: &i32) -> Result<(), Error> {
        debug!("Deleting article with its join rows");
        let mut tx = self.connection_pool.begin().await?;

        sqlx::query("DELETE FROM articulos_etiquetas WHERE id_articulo = ?")
            .bind(id_articulo)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM articulos_categorias WHERE id_articulo = ?")
            .bind(id_articulo)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM articulos WHERE id_articulo = ?")
            .bind(id_articulo)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        tx.commit().await?;

        info!("Article deleted");
        Ok(())
    }

    /// Articoli di un utente, con i dati dell'autore.
    pub async fn find_por_usuario(
        &self,
        id_usuario: &i32,
    ) -> Result<Vec<ArticuloDeUsuarioDTO>, Error> {
        let articulos = sqlx::query_as::<_, ArticuloDeUsuarioDTO>(
            r#"
            SELECT
                a.id_articulo,
                a.titulo,
                a.contenido,
                a.imagen_cover,
                a.estado,
                a.fecha_publicacion,
                u.id_usuario,
                u.nombre,
                u.nickname
            FROM articulos a
            JOIN usuarios u ON a.id_usuario = u.id_usuario
            WHERE u.id_usuario = ?
            "#,
        )
        .bind(id_usuario)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(articulos)
    }

    /// Tutti gli articoli di un utente, soli campi scalari.
    pub async fn find_todos_por_usuario(&self, id_usuario: &i32) -> Result<Vec<Articulo>, Error> {
        let articulos = sqlx::query_as::<_, Articulo>(
            r#"
            SELECT id_articulo, id_usuario, titulo, contenido, imagen_cover, estado, fecha_publicacion
            FROM articulos
            WHERE id_usuario = ?
            "#,
        )
        .bind(id_usuario)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(articulos)
    }

    /// Articoli appartenenti a una categoria, con il nome della categoria.
    pub async fn find_por_categoria(
        &self,
        id_categoria: &i32,
    ) -> Result<Vec<ArticuloEnCategoriaDTO>, Error> {
        let articulos = sqlx::query_as::<_, ArticuloEnCategoriaDTO>(
            r#"
            SELECT
                a.id_articulo,
                a.titulo,
                a.contenido,
                a.imagen_cover,
                a.estado,
                c.nombre_categoria
            FROM articulos a
            JOIN articulos_categorias ac ON a.id_articulo = ac.id_articulo
            JOIN categorias c ON ac.id_categoria = c.id_categoria
            WHERE c.id_categoria = ?
            "#,
        )
        .bind(id_categoria)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(articulos)
    }
}
