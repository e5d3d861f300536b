//! Integration tests per il CRUD degli articoli e il fan-out sulle
//! tabelle di join articulos_etiquetas / articulos_categorias
//!
//! Tutte le rotte /articulos richiedono il bearer token.

mod common;

#[cfg(test)]
mod articulo_tests {
    use super::common::*;
    use axum_test::TestServer;
    use axum_test::http::{HeaderName, StatusCode};
    use serde_json::json;
    use sqlx::MySqlPool;

    fn server_y_token(pool: MySqlPool) -> (TestServer, String) {
        let state = create_test_state(pool);
        let server = create_test_server(state);
        let token = create_test_jwt(1, JWT_SECRET_DI_TEST);
        (server, token)
    }

    async fn cuenta_joins(pool: &MySqlPool, tabla: &str, id_articulo: i64) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {tabla} WHERE id_articulo = ?"
        ))
        .bind(id_articulo)
        .fetch_one(pool)
        .await
        .expect("count query")
    }

    // ============================================================
    // Test per POST /articulos - create_articulo
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios", "catalogos")))]
    async fn test_create_articulo_con_joins(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool.clone());

        let body = json!({
            "id_usuario": 1,
            "titulo": "Nuevo artículo",
            "contenido": "Texto del artículo.",
            "etiquetas": [1, 2],
            "categorias": [1, 2, 3]
        });

        let response = server
            .post("/articulos")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .json(&body)
            .await;

        response.assert_status(StatusCode::CREATED);
        let cuerpo: serde_json::Value = response.json();
        let id_articulo = cuerpo["id_articulo"].as_i64().expect("id generado");

        // N etichette e M categorie -> esattamente N e M righe di join
        assert_eq!(cuenta_joins(&pool, "articulos_etiquetas", id_articulo).await, 2);
        assert_eq!(cuenta_joins(&pool, "articulos_categorias", id_articulo).await, 3);

        // estado assente nel body -> default 'borrador'
        let estado = sqlx::query_scalar::<_, String>(
            "SELECT estado FROM articulos WHERE id_articulo = ?",
        )
        .bind(id_articulo)
        .fetch_one(&pool)
        .await?;
        assert_eq!(estado, "borrador");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios")))]
    async fn test_create_articulo_sin_token(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .post("/articulos")
            .json(&json!({
                "id_usuario": 1,
                "titulo": "Nuevo artículo",
                "contenido": "Texto."
            }))
            .await;

        response.assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios")))]
    async fn test_create_articulo_sin_titulo(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool);

        let response = server
            .post("/articulos")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .json(&json!({ "id_usuario": 1, "contenido": "Texto." }))
            .await;

        response.assert_status_unprocessable_entity();
        Ok(())
    }

    // ============================================================
    // Test per GET /articulos - get_articulos
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios", "catalogos", "articulos")))]
    async fn test_get_articulos_ordenados(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool);

        let response = server
            .get("/articulos")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .await;

        response.assert_status_ok();
        let articulos: Vec<serde_json::Value> = response.json();
        assert_eq!(articulos.len(), 2);

        // fecha_publicacion decrescente: prima il più recente
        assert_eq!(articulos[0]["id_articulo"], 2);
        assert_eq!(articulos[1]["id_articulo"], 1);
        assert_eq!(articulos[1]["nombre_usuario"], "Alicia Herrera");

        Ok(())
    }

    // ============================================================
    // Test per GET /articulos/{id} - get_articulo_por_id
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios", "catalogos", "articulos")))]
    async fn test_get_articulo_por_id(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool);

        let response = server
            .get("/articulos/1")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .await;

        response.assert_status_ok();
        let articulo: serde_json::Value = response.json();

        assert_eq!(articulo["titulo"], "Primer artículo");
        assert_eq!(articulo["nombre"], "Alicia Herrera");

        // array annidati di coppie {id, nombre}
        let categorias = articulo["categorias"].as_array().expect("array categorias");
        assert_eq!(categorias.len(), 2);
        assert!(categorias[0].get("nombre_categoria").is_some());

        let etiquetas = articulo["etiquetas"].as_array().expect("array etiquetas");
        assert_eq!(etiquetas.len(), 2);
        assert!(etiquetas[0].get("nombre_etiqueta").is_some());

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios")))]
    async fn test_get_articulo_inexistente(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool);

        let response = server
            .get("/articulos/999")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Test per PUT /articulos/{id} - update_articulo
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios", "catalogos", "articulos")))]
    async fn test_update_reemplaza_etiquetas(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool.clone());

        // lista fornita -> replace-all della relazione
        let body = json!({
            "id_usuario": 1,
            "titulo": "Primer artículo (rev)",
            "contenido": "Contenido revisado.",
            "estado": "publicado",
            "etiquetas": [3]
        });

        let response = server
            .put("/articulos/1")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .json(&body)
            .await;

        response.assert_status_ok();

        let etiquetas = sqlx::query_scalar::<_, i32>(
            "SELECT id_etiqueta FROM articulos_etiquetas WHERE id_articulo = 1",
        )
        .fetch_all(&pool)
        .await?;
        assert_eq!(etiquetas, vec![3]);

        // categorias omessa -> associazioni intatte
        assert_eq!(cuenta_joins(&pool, "articulos_categorias", 1).await, 2);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios", "catalogos", "articulos")))]
    async fn test_update_etiquetas_vacias(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool.clone());

        // lista vuota: rimuove tutte le associazioni e non ne aggiunge
        let body = json!({
            "id_usuario": 1,
            "titulo": "Primer artículo",
            "contenido": "Contenido del primer artículo.",
            "estado": "publicado",
            "etiquetas": []
        });

        let response = server
            .put("/articulos/1")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .json(&body)
            .await;

        response.assert_status_ok();
        assert_eq!(cuenta_joins(&pool, "articulos_etiquetas", 1).await, 0);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios", "catalogos", "articulos")))]
    async fn test_update_sin_listas_deja_joins(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool.clone());

        let body = json!({
            "id_usuario": 1,
            "titulo": "Primer artículo",
            "contenido": "Contenido del primer artículo.",
            "estado": "archivado"
        });

        let response = server
            .put("/articulos/1")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .json(&body)
            .await;

        response.assert_status_ok();
        assert_eq!(cuenta_joins(&pool, "articulos_etiquetas", 1).await, 2);
        assert_eq!(cuenta_joins(&pool, "articulos_categorias", 1).await, 2);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios")))]
    async fn test_update_articulo_inexistente(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool);

        let body = json!({
            "id_usuario": 1,
            "titulo": "No existe",
            "contenido": "Nada.",
            "estado": "borrador"
        });

        let response = server
            .put("/articulos/999")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .json(&body)
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Test per DELETE /articulos/{id} - delete_articulo
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios", "catalogos", "articulos")))]
    async fn test_delete_articulo(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool.clone());

        let response = server
            .delete("/articulos/1")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .await;

        response.assert_status_ok();

        // prima le join, poi la riga: alla fine non resta niente
        assert_eq!(cuenta_joins(&pool, "articulos_etiquetas", 1).await, 0);
        assert_eq!(cuenta_joins(&pool, "articulos_categorias", 1).await, 0);

        let get_response = server
            .get("/articulos/1")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", create_test_jwt(1, JWT_SECRET_DI_TEST)),
            )
            .await;
        get_response.assert_status_not_found();

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("usuarios")))]
    async fn test_delete_articulo_inexistente(pool: MySqlPool) -> sqlx::Result<()> {
        let (server, token) = server_y_token(pool);

        let response = server
            .delete("/articulos/999")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Scenario end-to-end: register -> login -> create -> fetch
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("catalogos")))]
    async fn test_flujo_completo(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        // register
        let registro: serde_json::Value = server
            .post("/register")
            .json(&json!({
                "nombre": "Ana Autora",
                "nickname": "ana",
                "correo": "ana@example.com",
                "contrasenia": "Secreta123"
            }))
            .await
            .json();
        let id_usuario = registro["usuario"]["id_usuario"].as_i64().unwrap();

        // login
        let login: serde_json::Value = server
            .post("/login")
            .json(&json!({ "login": "ana", "contrasenia": "Secreta123" }))
            .await
            .json();
        let token = login["token"].as_str().unwrap().to_string();

        // create con due etichette
        let creado: serde_json::Value = server
            .post("/articulos")
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .json(&json!({
                "id_usuario": id_usuario,
                "titulo": "T",
                "contenido": "B",
                "etiquetas": [1, 2]
            }))
            .await
            .json();
        let id_articulo = creado["id_articulo"].as_i64().unwrap();

        // fetch per id: autore, titolo e due etichette
        let articulo: serde_json::Value = server
            .get(&format!("/articulos/{}", id_articulo))
            .add_header(
                HeaderName::from_static("authorization"),
                format!("Bearer {}", token),
            )
            .await
            .json();

        assert_eq!(articulo["nombre"], "Ana Autora");
        assert_eq!(articulo["titulo"], "T");
        assert_eq!(articulo["etiquetas"].as_array().unwrap().len(), 2);

        Ok(())
    }
}
