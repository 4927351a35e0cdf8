//! Storage contract test macro.
//!
//! `store_contract_tests!` generates tests that every backend must pass:
//! record round-trips, insertion order, unique and foreign-key rules, and
//! the cascade/nullify fan-out on delete.

/// Generate the storage contract suite for a backend.
///
/// `$factory` must produce a fresh, empty store implementing
/// [`TestStore`](crate::storage_harness::TestStore). It is evaluated inside
/// an async test body, so `.await` is allowed.
#[macro_export]
macro_rules! store_contract_tests {
    ($factory:expr) => {
        mod store_contract_tests {
            use super::*;
            use maintenance::core::{DataService, StoreError};
            use maintenance::entities::{
                Client, Equipment, MaintenancePlan, Status, Technician, User, WorkOrder,
            };
            use rust_decimal::Decimal;
            use uuid::Uuid;

            // ==============================================================
            // Round-trips
            // ==============================================================

            #[tokio::test]
            async fn test_create_then_get() {
                let store = $factory;
                let created = store.create(client("76.111.111-1")).await.unwrap();

                let found: Client = fetch(&store, created.id).await.unwrap();
                assert_eq!(found, created);
            }

            #[tokio::test]
            async fn test_get_unknown_is_none() {
                let store = $factory;
                let found: Option<Client> = fetch(&store, Uuid::new_v4()).await;
                assert!(found.is_none());
            }

            #[tokio::test]
            async fn test_work_order_round_trip_keeps_optionals_and_costs() {
                let store = $factory;
                let owner = store.create(client("76.111.111-1")).await.unwrap();
                let eq = store.create(equipment(owner.id, "EQ-001")).await.unwrap();
                let tech_user = store.create(user("jperez")).await.unwrap();
                let tech = store.create(technician(tech_user.id, "12.345.678-9")).await.unwrap();

                let mut order = work_order(eq.id, "OT-001");
                order.technician_id = Some(tech.id);
                order.status = Status::Finished;
                order.started_at = Some(now());
                order.finished_at = Some(now());
                order.actual_cost = Some(Decimal::new(12345, 2));
                let created = store.create(order).await.unwrap();

                let found: WorkOrder = fetch(&store, created.id).await.unwrap();
                assert_eq!(found.technician_id, Some(tech.id));
                assert_eq!(found.plan_id, None);
                assert_eq!(found.status, Status::Finished);
                assert_eq!(found.estimated_cost, Decimal::new(15000, 2));
                assert_eq!(found.actual_cost, Some(Decimal::new(12345, 2)));
                assert_eq!(found.finished_at, created.finished_at);
            }

            #[tokio::test]
            async fn test_list_keeps_insertion_order() {
                let store = $factory;
                for rut in ["3", "1", "2"] {
                    store.create(client(rut)).await.unwrap();
                }

                let ruts: Vec<String> = all::<Client, _>(&store)
                    .await
                    .into_iter()
                    .map(|c| c.tax_id)
                    .collect();
                assert_eq!(ruts, vec!["3", "1", "2"]);
            }

            #[tokio::test]
            async fn test_update_replaces_fields_in_place() {
                let store = $factory;
                let first = store.create(client("1")).await.unwrap();
                store.create(client("2")).await.unwrap();

                let mut changed = first.clone();
                changed.legal_name = "Nuevo Nombre SpA".to_string();
                changed.active = false;
                let updated = store.update(&first.id, changed).await.unwrap();
                assert_eq!(updated.legal_name, "Nuevo Nombre SpA");

                let listed = all::<Client, _>(&store).await;
                assert_eq!(listed[0].id, first.id);
                assert!(!listed[0].active);
            }

            #[tokio::test]
            async fn test_update_unknown_is_not_found() {
                let store = $factory;
                let ghost = client("1");
                let result = store.update(&ghost.id, ghost.clone()).await;
                assert!(matches!(result, Err(StoreError::NotFound { .. })));
            }

            #[tokio::test]
            async fn test_delete_unknown_is_not_found() {
                let store = $factory;
                let result = remove::<Client, _>(&store, Uuid::new_v4()).await;
                assert!(matches!(result, Err(StoreError::NotFound { .. })));
            }

            // ==============================================================
            // Unique rules
            // ==============================================================

            #[tokio::test]
            async fn test_duplicate_client_rut_rejected() {
                let store = $factory;
                store.create(client("76.111.111-1")).await.unwrap();

                let errors = violations(store.create(client("76.111.111-1")).await);
                assert_eq!(
                    errors,
                    vec![(
                        "rut".to_string(),
                        "Client with this rut already exists.".to_string()
                    )]
                );
                assert_eq!(all::<Client, _>(&store).await.len(), 1);
            }

            #[tokio::test]
            async fn test_update_into_existing_rut_rejected() {
                let store = $factory;
                store.create(client("1")).await.unwrap();
                let second = store.create(client("2")).await.unwrap();

                let mut clash = second.clone();
                clash.tax_id = "1".to_string();
                let errors = violations(store.update(&second.id, clash).await);
                assert_eq!(errors[0].0, "rut");

                let kept: Client = fetch(&store, second.id).await.unwrap();
                assert_eq!(kept.tax_id, "2");
            }

            #[tokio::test]
            async fn test_update_keeping_own_unique_value_allowed() {
                let store = $factory;
                let created = store.create(client("1")).await.unwrap();
                let mut same = created.clone();
                same.phone = "+56 2 0000 0000".to_string();
                assert!(store.update(&created.id, same).await.is_ok());
            }

            #[tokio::test]
            async fn test_duplicate_equipment_code_rejected() {
                let store = $factory;
                let owner = store.create(client("1")).await.unwrap();
                store.create(equipment(owner.id, "EQ-001")).await.unwrap();

                let mut dup = equipment(owner.id, "EQ-001");
                dup.serial_number = "OTHER".to_string();
                let errors = violations(store.create(dup).await);
                assert_eq!(errors[0].0, "codigo");
            }

            #[tokio::test]
            async fn test_duplicate_serial_number_rejected() {
                let store = $factory;
                let owner = store.create(client("1")).await.unwrap();
                store.create(equipment(owner.id, "EQ-001")).await.unwrap();

                let mut dup = equipment(owner.id, "EQ-002");
                dup.serial_number = "SN-EQ-001".to_string();
                let errors = violations(store.create(dup).await);
                assert_eq!(errors[0].0, "numero_serie");
            }

            #[tokio::test]
            async fn test_one_technician_per_user() {
                let store = $factory;
                let u = store.create(user("jperez")).await.unwrap();
                store.create(technician(u.id, "1")).await.unwrap();

                let errors = violations(store.create(technician(u.id, "2")).await);
                assert_eq!(errors[0].0, "usuario");
            }

            #[tokio::test]
            async fn test_plan_name_unique_per_equipment() {
                let store = $factory;
                let owner = store.create(client("1")).await.unwrap();
                let a = store.create(equipment(owner.id, "EQ-A")).await.unwrap();
                let b = store.create(equipment(owner.id, "EQ-B")).await.unwrap();
                store.create(plan(a.id, "Mensual")).await.unwrap();

                // Same name on another equipment is fine
                store.create(plan(b.id, "Mensual")).await.unwrap();

                let errors = violations(store.create(plan(a.id, "Mensual")).await);
                assert_eq!(
                    errors,
                    vec![(
                        "non_field_errors".to_string(),
                        "The fields equipo, nombre must make a unique set.".to_string()
                    )]
                );
            }

            #[tokio::test]
            async fn test_duplicate_work_order_code_rejected() {
                let store = $factory;
                let owner = store.create(client("1")).await.unwrap();
                let eq = store.create(equipment(owner.id, "EQ-001")).await.unwrap();
                store.create(work_order(eq.id, "OT-001")).await.unwrap();

                let errors = violations(store.create(work_order(eq.id, "OT-001")).await);
                assert_eq!(errors[0].0, "codigo");
            }

            #[tokio::test]
            async fn test_duplicate_username_rejected() {
                let store = $factory;
                store.create(user("jperez")).await.unwrap();
                let errors = violations(store.create(user("jperez")).await);
                assert_eq!(errors[0].0, "username");
            }

            // ==============================================================
            // Foreign keys
            // ==============================================================

            #[tokio::test]
            async fn test_equipment_requires_existing_client() {
                let store = $factory;
                let ghost = Uuid::new_v4();
                let errors = violations(store.create(equipment(ghost, "EQ-001")).await);
                assert_eq!(errors[0].0, "cliente");
                assert_eq!(
                    errors[0].1,
                    format!("Invalid pk \"{}\" - object does not exist.", ghost)
                );
            }

            #[tokio::test]
            async fn test_work_order_optional_references_checked() {
                let store = $factory;
                let owner = store.create(client("1")).await.unwrap();
                let eq = store.create(equipment(owner.id, "EQ-001")).await.unwrap();

                let mut order = work_order(eq.id, "OT-001");
                order.technician_id = Some(Uuid::new_v4());
                let errors = violations(store.create(order).await);
                assert_eq!(errors[0].0, "tecnico");

                let mut order = work_order(eq.id, "OT-002");
                order.plan_id = Some(Uuid::new_v4());
                let errors = violations(store.create(order).await);
                assert_eq!(errors[0].0, "plan_mantencion");
            }

            #[tokio::test]
            async fn test_technician_requires_existing_user() {
                let store = $factory;
                let errors = violations(store.create(technician(Uuid::new_v4(), "1")).await);
                assert_eq!(errors[0].0, "usuario");
            }

            // ==============================================================
            // Delete fan-out
            // ==============================================================

            #[tokio::test]
            async fn test_delete_client_cascades_through_equipment() {
                let store = $factory;
                let owner = store.create(client("1")).await.unwrap();
                let other = store.create(client("2")).await.unwrap();
                let eq = store.create(equipment(owner.id, "EQ-001")).await.unwrap();
                let kept_eq = store.create(equipment(other.id, "EQ-002")).await.unwrap();
                store.create(plan(eq.id, "Mensual")).await.unwrap();
                store.create(work_order(eq.id, "OT-001")).await.unwrap();
                store.create(work_order(kept_eq.id, "OT-002")).await.unwrap();

                remove::<Client, _>(&store, owner.id).await.unwrap();

                let equipment: Vec<Equipment> = all(&store).await;
                assert_eq!(equipment.len(), 1);
                assert_eq!(equipment[0].id, kept_eq.id);
                assert!(all::<MaintenancePlan, _>(&store).await.is_empty());
                let orders: Vec<WorkOrder> = all(&store).await;
                assert_eq!(orders.len(), 1);
                assert_eq!(orders[0].code, "OT-002");
            }

            #[tokio::test]
            async fn test_delete_technician_clears_order_reference() {
                let store = $factory;
                let owner = store.create(client("1")).await.unwrap();
                let eq = store.create(equipment(owner.id, "EQ-001")).await.unwrap();
                let u = store.create(user("jperez")).await.unwrap();
                let tech = store.create(technician(u.id, "1")).await.unwrap();
                let mut order = work_order(eq.id, "OT-001");
                order.technician_id = Some(tech.id);
                let order = store.create(order).await.unwrap();

                remove::<Technician, _>(&store, tech.id).await.unwrap();

                let order: WorkOrder = fetch(&store, order.id).await.unwrap();
                assert_eq!(order.technician_id, None);
            }

            #[tokio::test]
            async fn test_delete_plan_clears_order_reference() {
                let store = $factory;
                let owner = store.create(client("1")).await.unwrap();
                let eq = store.create(equipment(owner.id, "EQ-001")).await.unwrap();
                let p = store.create(plan(eq.id, "Mensual")).await.unwrap();
                let mut order = work_order(eq.id, "OT-001");
                order.plan_id = Some(p.id);
                let order = store.create(order).await.unwrap();

                remove::<MaintenancePlan, _>(&store, p.id).await.unwrap();

                let order: WorkOrder = fetch(&store, order.id).await.unwrap();
                assert_eq!(order.plan_id, None);
            }

            #[tokio::test]
            async fn test_delete_user_cascades_to_technician() {
                let store = $factory;
                let u = store.create(user("jperez")).await.unwrap();
                store.create(technician(u.id, "1")).await.unwrap();

                remove::<User, _>(&store, u.id).await.unwrap();

                assert!(all::<Technician, _>(&store).await.is_empty());
            }
        }
    };
}
