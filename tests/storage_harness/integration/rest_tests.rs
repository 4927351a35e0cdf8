//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that drive
//! the whole application over a backend: JSON → access guard → payload
//! checks → DataService → derived views → JSON.

/// Generate a REST integration test suite for a storage backend.
///
/// `$factory` must produce a fresh, empty store implementing
/// [`TestStore`](crate::storage_harness::TestStore).
///
/// # Generated Tests
///
/// - Surface: health, `/api` index, access policy
/// - CRUD: create, retrieve, PUT/PATCH, delete, 404 and malformed ids
/// - Validation: required fields, choices, ranges, work order rules
/// - Constraints: unique fields, composite plan names, cascade and nullify
/// - Lists: filter, search, ordering, pagination
/// - Actions: `ficha_tecnica`, `cambiar_estado`
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::{HeaderValue, StatusCode, header::AUTHORIZATION};
            use axum_test::TestServer;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let store = $factory;
                build_test_server(store).await
            }

            /// Client → equipment, returning both representations
            async fn client_with_equipment(server: &TestServer) -> (Value, Value) {
                let client =
                    create_via_api(server, "/api/clientes", client_body("76.000.001-1", "Acme"))
                        .await;
                let eq = create_via_api(
                    server,
                    "/api/equipos",
                    equipment_body(&id_of(&client), "EQ-001"),
                )
                .await;
                (client, eq)
            }

            fn field_names(body: &Value) -> Vec<String> {
                body["details"]["fields"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|e| e["field"].as_str().unwrap().to_string())
                    .collect()
            }

            fn codes(body: &Value) -> Vec<String> {
                body["data"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|e| e["codigo"].as_str().unwrap().to_string())
                    .collect()
            }

            // ==============================================================
            // Surface
            // ==============================================================

            #[tokio::test]
            async fn test_health() {
                let server = make_server().await;
                for path in ["/health", "/healthz"] {
                    let response = server.get(path).await;
                    response.assert_status(StatusCode::OK);
                    let body: Value = response.json();
                    assert_eq!(body["status"], "ok");
                }
            }

            #[tokio::test]
            async fn test_api_index_lists_resources() {
                let server = make_server().await;
                let response = server.get("/api").await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                assert_eq!(body["clientes"], "/api/clientes");
                assert_eq!(body["ordenes"], "/api/ordenes");
                assert_eq!(body.as_object().unwrap().len(), 6);
            }

            // ==============================================================
            // Access policy
            // ==============================================================

            #[tokio::test]
            async fn test_anonymous_read_allowed() {
                let server = make_server().await;
                let response = server.get("/api/clientes").await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                assert_eq!(body["data"], json!([]));
                assert_eq!(body["pagination"]["total"], 0);
                assert_eq!(body["pagination"]["page"], 1);
            }

            #[tokio::test]
            async fn test_anonymous_write_rejected_before_validation() {
                let server = make_server().await;

                // An invalid body still gets 401, not 400
                let response = server.post("/api/clientes").json(&json!({})).await;
                response.assert_status(StatusCode::UNAUTHORIZED);
                let body: Value = response.json();
                assert_eq!(body["code"], "UNAUTHORIZED");

                let body: Value = server.get("/api/clientes").await.json();
                assert_eq!(body["pagination"]["total"], 0);
            }

            #[tokio::test]
            async fn test_unknown_token_rejected() {
                let server = make_server().await;
                let response = server
                    .get("/api/clientes")
                    .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer nope"))
                    .await;
                response.assert_status(StatusCode::UNAUTHORIZED);
            }

            #[tokio::test]
            async fn test_users_require_authentication() {
                let server = make_server().await;
                server
                    .get("/api/usuarios")
                    .await
                    .assert_status(StatusCode::UNAUTHORIZED);

                let response = server.get("/api/usuarios").as_admin().await;
                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                let admin = &body["data"][0];
                assert_eq!(admin["username"], "admin");
                assert_eq!(admin["email"], "admin@example.com");
                assert!(admin.get("date_joined").is_none());
            }

            #[tokio::test]
            async fn test_users_are_read_only() {
                let server = make_server().await;
                let response = server
                    .post("/api/usuarios")
                    .as_admin()
                    .json(&json!({"username": "eve"}))
                    .await;
                response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_create_and_retrieve_client() {
                let server = make_server().await;
                let created =
                    create_via_api(&server, "/api/clientes", client_body("76.000.001-1", "Acme"))
                        .await;
                assert_eq!(created["rut"], "76.000.001-1");
                assert_eq!(created["activo"], true);
                assert!(created["fecha_registro"].is_string());

                let response = server.get(&format!("/api/clientes/{}", id_of(&created))).await;
                response.assert_status(StatusCode::OK);
                let fetched: Value = response.json();
                assert_eq!(fetched, created);

                let body: Value = server.get("/api/clientes").await.json();
                assert_eq!(body["pagination"]["total"], 1);
            }

            #[tokio::test]
            async fn test_missing_required_fields() {
                let server = make_server().await;
                let response = server.post("/api/clientes").as_admin().json(&json!({})).await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["code"], "VALIDATION_ERROR");
                let fields = field_names(&body);
                for field in ["rut", "razon_social", "giro", "direccion", "telefono", "email"] {
                    assert!(fields.contains(&field.to_string()), "missing {}", field);
                }
                assert_eq!(body["details"]["fields"][0]["message"], "This field is required.");
            }

            #[tokio::test]
            async fn test_invalid_email_and_overlong_rut() {
                let server = make_server().await;
                let mut body = client_body("76.000.001-1-000", "Acme");
                body["email"] = json!("not-an-email");

                let response = server.post("/api/clientes").as_admin().json(&body).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let fields = field_names(&response.json());
                assert!(fields.contains(&"email".to_string()));
                assert!(fields.contains(&"rut".to_string()));
            }

            #[tokio::test]
            async fn test_malformed_json_rejected() {
                let server = make_server().await;
                let response = server
                    .post("/api/clientes")
                    .as_admin()
                    .json(&json!(["not", "an", "object"]))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_BODY");
            }

            #[tokio::test]
            async fn test_duplicate_rut_is_constraint_violation() {
                let server = make_server().await;
                create_via_api(&server, "/api/clientes", client_body("76.000.001-1", "Acme")).await;

                let response = server
                    .post("/api/clientes")
                    .as_admin()
                    .json(&client_body("76.000.001-1", "Otra"))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "CONSTRAINT_VIOLATION");
                assert_eq!(body["details"]["fields"][0]["field"], "rut");
                assert_eq!(
                    body["details"]["fields"][0]["message"],
                    "Client with this rut already exists."
                );
            }

            #[tokio::test]
            async fn test_patch_is_partial_and_put_is_full() {
                let server = make_server().await;
                let created =
                    create_via_api(&server, "/api/clientes", client_body("76.000.001-1", "Acme"))
                        .await;
                let path = format!("/api/clientes/{}", id_of(&created));

                let response = server
                    .patch(&path)
                    .as_admin()
                    .json(&json!({"telefono": "+56 2 9999 9999"}))
                    .await;
                response.assert_status(StatusCode::OK);
                let patched: Value = response.json();
                assert_eq!(patched["telefono"], "+56 2 9999 9999");
                assert_eq!(patched["razon_social"], "Acme");
                assert_eq!(patched["fecha_registro"], created["fecha_registro"]);

                let response = server
                    .put(&path)
                    .as_admin()
                    .json(&json!({"telefono": "+56 2 0000 0000"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(field_names(&response.json()).contains(&"rut".to_string()));

                let response = server
                    .put(&path)
                    .as_admin()
                    .json(&client_body("76.000.001-1", "Acme Renombrada"))
                    .await;
                response.assert_status(StatusCode::OK);
                let replaced: Value = response.json();
                assert_eq!(replaced["razon_social"], "Acme Renombrada");
            }

            #[tokio::test]
            async fn test_delete_then_not_found() {
                let server = make_server().await;
                let created =
                    create_via_api(&server, "/api/clientes", client_body("76.000.001-1", "Acme"))
                        .await;
                let path = format!("/api/clientes/{}", id_of(&created));

                server
                    .delete(&path)
                    .await
                    .assert_status(StatusCode::UNAUTHORIZED);
                server
                    .delete(&path)
                    .as_admin()
                    .await
                    .assert_status(StatusCode::NO_CONTENT);

                let response = server.get(&path).await;
                response.assert_status(StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert_eq!(body["code"], "ENTITY_NOT_FOUND");

                server
                    .delete(&path)
                    .as_admin()
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_malformed_id_rejected() {
                let server = make_server().await;
                let response = server.get("/api/equipos/not-a-uuid").await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_ENTITY_ID");
            }

            #[tokio::test]
            async fn test_update_unknown_id_is_not_found_whatever_the_body() {
                let server = make_server().await;
                let ghost = uuid::Uuid::new_v4();

                let response = server
                    .patch(&format!("/api/ordenes/{}", ghost))
                    .as_admin()
                    .json(&json!({"estado": "FIN"}))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert_eq!(body["code"], "ENTITY_NOT_FOUND");

                let response = server
                    .put(&format!("/api/clientes/{}", ghost))
                    .as_admin()
                    .json(&json!({}))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);

                let response = server
                    .put(&format!("/api/clientes/{}", ghost))
                    .as_admin()
                    .text("{not json")
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_length_limits_reported_under_wire_names() {
                let server = make_server().await;
                let (client, eq) = client_with_equipment(&server).await;
                let long_code = "X".repeat(51);

                let body = equipment_body(&id_of(&client), &long_code);
                let response = server.post("/api/equipos").as_admin().json(&body).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(field_names(&response.json()), vec!["codigo".to_string()]);

                let body = order_body(&id_of(&eq), &long_code);
                let response = server.post("/api/ordenes").as_admin().json(&body).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(field_names(&response.json()), vec!["codigo".to_string()]);

                let mut body = technician_body(&admin_id(&server).await, "12.345.678-9");
                body["telefono"] = json!("9".repeat(21));
                let response = server.post("/api/tecnicos").as_admin().json(&body).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "VALIDATION_ERROR");
                assert_eq!(field_names(&body), vec!["telefono".to_string()]);
            }

            // ==============================================================
            // Equipment
            // ==============================================================

            #[tokio::test]
            async fn test_equipment_view_and_references() {
                let server = make_server().await;
                let (client, eq) = client_with_equipment(&server).await;
                assert_eq!(eq["cliente"], client["id"]);
                assert_eq!(eq["cliente_nombre"], "Acme");
                assert_eq!(eq["tipo"], "MAQ");

                let ghost = uuid::Uuid::new_v4().to_string();
                let response = server
                    .post("/api/equipos")
                    .as_admin()
                    .json(&equipment_body(&ghost, "EQ-404"))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["details"]["fields"][0]["field"], "cliente");
            }

            #[tokio::test]
            async fn test_equipment_invalid_choice() {
                let server = make_server().await;
                let client =
                    create_via_api(&server, "/api/clientes", client_body("76.000.001-1", "Acme"))
                        .await;
                let mut body = equipment_body(&id_of(&client), "EQ-001");
                body["tipo"] = json!("XXX");

                let response = server.post("/api/equipos").as_admin().json(&body).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(field_names(&response.json()), vec!["tipo".to_string()]);
            }

            #[tokio::test]
            async fn test_technical_sheet_action() {
                let server = make_server().await;
                let (_, eq) = client_with_equipment(&server).await;

                let response = server
                    .get(&format!("/api/equipos/{}/ficha_tecnica", id_of(&eq)))
                    .await;
                response.assert_status(StatusCode::OK);
                let sheet: Value = response.json();
                assert_eq!(sheet["codigo"], "EQ-001");
                assert_eq!(sheet["ficha_tecnica"], "Caudal 10 m3/h");
                assert_eq!(sheet["fecha_instalacion"], "2023-01-20");
                assert!(sheet.get("cliente").is_none());
                assert!(sheet.get("id").is_none());

                let missing = uuid::Uuid::new_v4();
                server
                    .get(&format!("/api/equipos/{}/ficha_tecnica", missing))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Lists
            // ==============================================================

            #[tokio::test]
            async fn test_filter_search_and_ordering() {
                let server = make_server().await;
                let (client, _) = client_with_equipment(&server).await;
                let mut vehicle = equipment_body(&id_of(&client), "EQ-002");
                vehicle["tipo"] = json!("VEH");
                vehicle["marca"] = json!("Volvo");
                create_via_api(&server, "/api/equipos", vehicle).await;

                let body: Value = server
                    .get("/api/equipos")
                    .add_query_param("tipo", "VEH")
                    .await
                    .json();
                assert_eq!(codes(&body), vec!["EQ-002"]);

                let body: Value = server
                    .get("/api/equipos")
                    .add_query_param("search", "volvo")
                    .await
                    .json();
                assert_eq!(codes(&body), vec!["EQ-002"]);

                let body: Value = server.get("/api/equipos").await.json();
                assert_eq!(codes(&body), vec!["EQ-001", "EQ-002"]);

                let body: Value = server
                    .get("/api/equipos")
                    .add_query_param("ordering", "-codigo")
                    .await
                    .json();
                assert_eq!(codes(&body), vec!["EQ-002", "EQ-001"]);

                // Unknown filters and ordering fields are ignored
                let body: Value = server
                    .get("/api/equipos")
                    .add_query_param("color", "rojo")
                    .add_query_param("ordering", "color")
                    .await
                    .json();
                assert_eq!(codes(&body), vec!["EQ-001", "EQ-002"]);
            }

            #[tokio::test]
            async fn test_unparseable_filter_rejected() {
                let server = make_server().await;
                create_via_api(&server, "/api/clientes", client_body("76.000.001-1", "Acme")).await;

                let response = server
                    .get("/api/clientes")
                    .add_query_param("activo", "maybe")
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_FILTER");
            }

            #[tokio::test]
            async fn test_pagination() {
                let server = make_server().await;
                for (i, name) in ["Delta", "Alfa", "Charlie", "Bravo"].iter().enumerate() {
                    let rut = format!("76.000.00{}-1", i);
                    create_via_api(&server, "/api/clientes", client_body(&rut, name)).await;
                }

                let body: Value = server.get("/api/clientes").await.json();
                let names: Vec<&str> = body["data"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|c| c["razon_social"].as_str().unwrap())
                    .collect();
                assert_eq!(names, vec!["Alfa", "Bravo", "Charlie"]);
                assert_eq!(body["pagination"]["total"], 4);
                assert_eq!(body["pagination"]["total_pages"], 2);
                assert_eq!(body["pagination"]["has_next"], true);

                let body: Value = server
                    .get("/api/clientes")
                    .add_query_param("page", "last")
                    .await
                    .json();
                assert_eq!(body["pagination"]["page"], 2);
                assert_eq!(body["data"][0]["razon_social"], "Delta");
                assert_eq!(body["pagination"]["has_prev"], true);

                for page in ["3", "0", "abc"] {
                    let response = server
                        .get("/api/clientes")
                        .add_query_param("page", page)
                        .await;
                    response.assert_status(StatusCode::NOT_FOUND);
                    let body: Value = response.json();
                    assert_eq!(body["code"], "INVALID_PAGE");
                }
            }

            // ==============================================================
            // Technicians and plans
            // ==============================================================

            #[tokio::test]
            async fn test_technician_view_and_one_per_user() {
                let server = make_server().await;
                let user_id = admin_id(&server).await;

                let tech =
                    create_via_api(&server, "/api/tecnicos", technician_body(&user_id, "12.345.678-9"))
                        .await;
                assert_eq!(tech["usuario"], user_id.as_str());
                assert_eq!(tech["usuario_nombre"], "Ada Admin");
                assert_eq!(tech["usuario_email"], "admin@example.com");
                assert_eq!(tech["especialidad"], "MEC");
                assert_eq!(tech["activo"], true);

                let response = server
                    .post("/api/tecnicos")
                    .as_admin()
                    .json(&technician_body(&user_id, "9.876.543-2"))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["details"]["fields"][0]["field"], "usuario");

                let body: Value = server
                    .get("/api/tecnicos")
                    .add_query_param("search", "admin")
                    .await
                    .json();
                assert_eq!(body["pagination"]["total"], 1);
            }

            #[tokio::test]
            async fn test_plan_rules_and_view() {
                let server = make_server().await;
                let (_, eq) = client_with_equipment(&server).await;
                let eq_id = id_of(&eq);

                let mut zero = plan_body(&eq_id, "Mensual");
                zero["duracion_estimada"] = json!(0);
                let response = server.post("/api/planes").as_admin().json(&zero).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["details"]["fields"][0]["field"], "duracion_estimada");
                assert_eq!(
                    body["details"]["fields"][0]["message"],
                    "Ensure this value is greater than or equal to 1."
                );

                let created = create_via_api(&server, "/api/planes", plan_body(&eq_id, "Mensual")).await;
                assert_eq!(created["equipo_codigo"], "EQ-001");
                assert_eq!(created["frecuencia"], "MEN");

                let response = server
                    .post("/api/planes")
                    .as_admin()
                    .json(&plan_body(&eq_id, "Mensual"))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["details"]["fields"][0]["field"], "non_field_errors");

                let body: Value = server
                    .get("/api/planes")
                    .add_query_param("search", "EQ-001")
                    .await
                    .json();
                assert_eq!(body["pagination"]["total"], 1);
            }

            // ==============================================================
            // Work orders
            // ==============================================================

            #[tokio::test]
            async fn test_work_order_defaults_and_view() {
                let server = make_server().await;
                let (_, eq) = client_with_equipment(&server).await;

                let order =
                    create_via_api(&server, "/api/ordenes", order_body(&id_of(&eq), "OT-001")).await;
                assert_eq!(order["estado"], "PEN");
                assert_eq!(order["prioridad"], "ALT");
                assert_eq!(order["costo_estimado"], "250000.00");
                assert_eq!(order["costo_real"], Value::Null);
                assert_eq!(order["tecnico"], Value::Null);
                assert_eq!(order["equipo_codigo"], "EQ-001");
                assert_eq!(order["tecnico_nombre"], Value::Null);
                assert_eq!(order["plan_nombre"], Value::Null);
                assert!(order["fecha_solicitud"].is_string());
            }

            #[tokio::test]
            async fn test_work_order_cross_field_rules() {
                let server = make_server().await;
                let (_, eq) = client_with_equipment(&server).await;
                let eq_id = id_of(&eq);

                let mut finished = order_body(&eq_id, "OT-001");
                finished["estado"] = json!("FIN");
                let response = server.post("/api/ordenes").as_admin().json(&finished).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["details"]["fields"][0]["field"], "estado");
                assert_eq!(
                    body["details"]["fields"][0]["message"],
                    "A finished order must have an end date."
                );

                let mut backwards = order_body(&eq_id, "OT-002");
                backwards["fecha_inicio"] = json!("2024-07-02T10:00:00Z");
                backwards["fecha_fin"] = json!("2024-07-01T10:00:00Z");
                let response = server.post("/api/ordenes").as_admin().json(&backwards).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(field_names(&response.json()), vec!["fecha_fin".to_string()]);

                let mut negative = order_body(&eq_id, "OT-003");
                negative["costo_real"] = json!("-1.00");
                let response = server.post("/api/ordenes").as_admin().json(&negative).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(field_names(&response.json()), vec!["costo_real".to_string()]);

                let mut too_precise = order_body(&eq_id, "OT-004");
                too_precise["costo_estimado"] = json!("10.123");
                let response = server.post("/api/ordenes").as_admin().json(&too_precise).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(field_names(&response.json()), vec!["costo_estimado".to_string()]);

                let mut done = order_body(&eq_id, "OT-005");
                done["estado"] = json!("FIN");
                done["fecha_inicio"] = json!("2024-07-01T08:00:00Z");
                done["fecha_fin"] = json!("2024-07-01T12:00:00Z");
                done["costo_real"] = json!("240000.5");
                let order = create_via_api(&server, "/api/ordenes", done).await;
                assert_eq!(order["estado"], "FIN");
                assert_eq!(order["costo_real"], "240000.50");
            }

            #[tokio::test]
            async fn test_change_status_action() {
                let server = make_server().await;
                let (_, eq) = client_with_equipment(&server).await;
                let order =
                    create_via_api(&server, "/api/ordenes", order_body(&id_of(&eq), "OT-001")).await;
                let path = format!("/api/ordenes/{}/cambiar_estado", id_of(&order));

                let response = server.post(&path).json(&json!({"estado": "PRO"})).await;
                response.assert_status(StatusCode::UNAUTHORIZED);

                let response = server
                    .post(&path)
                    .as_admin()
                    .json(&json!({"estado": "XYZ"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_CHOICE");
                assert_eq!(body["details"]["allowed"], json!(["PEN", "PRO", "FIN", "CAN"]));

                let response = server
                    .post(&path)
                    .as_admin()
                    .json(&json!({"estado": "FIN"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(field_names(&response.json()), vec!["estado".to_string()]);

                let response = server
                    .post(&path)
                    .as_admin()
                    .json(&json!({"estado": "PRO", "descripcion": "ignored"}))
                    .await;
                response.assert_status(StatusCode::OK);
                let changed: Value = response.json();
                assert_eq!(changed["estado"], "PRO");
                assert_eq!(changed["descripcion"], order["descripcion"]);

                let missing = format!("/api/ordenes/{}/cambiar_estado", uuid::Uuid::new_v4());
                server
                    .post(&missing)
                    .as_admin()
                    .json(&json!({"estado": "PRO"}))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);

                let body: Value = server
                    .get("/api/ordenes")
                    .add_query_param("estado", "PRO")
                    .await
                    .json();
                assert_eq!(codes(&body), vec!["OT-001"]);
            }

            #[tokio::test]
            async fn test_change_status_to_finished_with_end_date() {
                let server = make_server().await;
                let (_, eq) = client_with_equipment(&server).await;
                let mut body = order_body(&id_of(&eq), "OT-001");
                body["fecha_fin"] = json!("2024-07-01T12:00:00Z");
                let order = create_via_api(&server, "/api/ordenes", body).await;

                let response = server
                    .post(&format!("/api/ordenes/{}/cambiar_estado", id_of(&order)))
                    .as_admin()
                    .json(&json!({"estado": "FIN"}))
                    .await;
                response.assert_status(StatusCode::OK);
                let changed: Value = response.json();
                assert_eq!(changed["estado"], "FIN");
            }

            // ==============================================================
            // Delete fan-out
            // ==============================================================

            #[tokio::test]
            async fn test_client_delete_cascades() {
                let server = make_server().await;
                let (client, eq) = client_with_equipment(&server).await;
                create_via_api(&server, "/api/planes", plan_body(&id_of(&eq), "Mensual")).await;
                create_via_api(&server, "/api/ordenes", order_body(&id_of(&eq), "OT-001")).await;

                server
                    .delete(&format!("/api/clientes/{}", id_of(&client)))
                    .as_admin()
                    .await
                    .assert_status(StatusCode::NO_CONTENT);

                for path in ["/api/equipos", "/api/planes", "/api/ordenes"] {
                    let body: Value = server.get(path).await.json();
                    assert_eq!(body["pagination"]["total"], 0, "{} not emptied", path);
                }
            }

            #[tokio::test]
            async fn test_technician_and_plan_delete_clear_order_links() {
                let server = make_server().await;
                let (_, eq) = client_with_equipment(&server).await;
                let tech = create_via_api(
                    &server,
                    "/api/tecnicos",
                    technician_body(&admin_id(&server).await, "12.345.678-9"),
                )
                .await;
                let plan = create_via_api(&server, "/api/planes", plan_body(&id_of(&eq), "Mensual")).await;

                let mut body = order_body(&id_of(&eq), "OT-001");
                body["tecnico"] = tech["id"].clone();
                body["plan_mantencion"] = plan["id"].clone();
                let order = create_via_api(&server, "/api/ordenes", body).await;
                assert_eq!(order["tecnico_nombre"], "Ada Admin");
                assert_eq!(order["plan_nombre"], "Mensual");

                for path in [
                    format!("/api/tecnicos/{}", id_of(&tech)),
                    format!("/api/planes/{}", id_of(&plan)),
                ] {
                    server
                        .delete(&path)
                        .as_admin()
                        .await
                        .assert_status(StatusCode::NO_CONTENT);
                }

                let order: Value = server
                    .get(&format!("/api/ordenes/{}", id_of(&order)))
                    .await
                    .json();
                assert_eq!(order["tecnico"], Value::Null);
                assert_eq!(order["plan_mantencion"], Value::Null);
                assert_eq!(order["tecnico_nombre"], Value::Null);
            }
        }
    };
}
