use anyhow::Result;
use rtable::{
    balance, generate_rows, header_rows, Column, ColumnId, LayoutError, LeafColumn, ReorderReconciler,
    ResizeCoordinator, Table, TableConfig, TableEvent, WidthRegistry, DEMO_SCHEMA,
};

/// Config with no border or chrome allowance, so usable width equals available width.
fn bare_config() -> TableConfig {
    TableConfig {
        column_gutter: 0.0,
        chrome_allowance: 0.0,
        ..TableConfig::default()
    }
}

fn flat(widths: &[(&str, f64)]) -> Vec<Column> {
    widths
        .iter()
        .map(|&(id, width)| LeafColumn::new(id, id.to_uppercase(), width).draggable().into())
        .collect()
}

#[test]
fn test_registry_updates_and_rejects_negative_width() -> Result<()> {
    let mut registry = WidthRegistry::new();
    registry.initialize(&flat(&[("a", 100.0)]))?;
    let a = ColumnId::from("a");

    assert_eq!(registry.update_by_increment(&a, 50.0)?, 150.0);
    assert_eq!(registry.width(&a), Some(150.0));

    let err = registry.update(&a, -1.0).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidWidth { .. }));
    assert_eq!(registry.width(&a), Some(150.0));

    assert_eq!(registry.update_by_multiplier(&a, 2.0)?, 300.0);
    assert!(registry.update_by_increment(&"b".into(), 1.0).is_err());

    Ok(())
}

#[test]
fn test_registry_cleanup_releases_entries() -> Result<()> {
    let mut registry = WidthRegistry::new();
    registry.initialize(&flat(&[("a", 100.0), ("b", 80.0)]))?;
    assert_eq!(registry.entry_count(), 2);

    registry.cleanup();
    registry.cleanup();
    assert!(registry.is_released());
    assert_eq!(registry.entry_count(), 0);

    // Writes after release are dropped
    registry.update(&"a".into(), 10.0)?;
    assert_eq!(registry.width(&"a".into()), None);

    Ok(())
}

#[test]
fn test_tables_do_not_share_width_rules() -> Result<()> {
    let mut first = Table::new(flat(&[("a", 100.0)]), Vec::new(), bare_config())?;
    let second = Table::new(flat(&[("a", 100.0)]), Vec::new(), bare_config())?;
    assert_ne!(first.registry().table_id(), second.registry().table_id());

    first.handle(TableEvent::Resizing { column: "a".into(), width: 60.0 })?;
    assert_eq!(first.width_of(&"a".into()), Some(60.0));
    assert_eq!(second.width_of(&"a".into()), Some(100.0));

    Ok(())
}

#[test]
fn test_balance_properties() {
    assert_eq!(balance(&[100.0, 100.0, 200.0], 200.0, 0), vec![50.0, 50.0, 100.0]);

    let balanced = balance(&[35.0, 35.0, 135.0], 200.0, 0);
    assert_eq!(balanced, vec![34.0, 34.0, 132.0]);
    assert!(balance(&[], 200.0, 0).is_empty());
}

#[test]
fn test_resize_coordinator_rebalances_to_container() -> Result<()> {
    let mut registry = WidthRegistry::new();
    let columns = registry.initialize(&flat(&[("a", 100.0), ("b", 100.0), ("c", 200.0)]))?;
    let leaves = rtable::leaves(&columns);
    let mut coordinator = ResizeCoordinator::new(400.0, bare_config());

    assert_eq!(
        coordinator.on_container_resize(&mut registry, &leaves, 400.0)?,
        vec![100.0, 100.0, 200.0]
    );
    assert_eq!(
        coordinator.on_container_resize(&mut registry, &leaves, 200.0)?,
        vec![50.0, 50.0, 100.0]
    );

    let ids: Vec<&ColumnId> = leaves.iter().map(|leaf| &leaf.id).collect();
    assert_eq!(registry.widths(ids)?, vec![50.0, 50.0, 100.0]);

    Ok(())
}

#[test]
fn test_reorder_swaps_widths() -> Result<()> {
    let mut registry = WidthRegistry::new();
    let columns = registry.initialize(&flat(&[("a", 100.0), ("b", 200.0)]))?;
    let reconciler: ReorderReconciler = ReorderReconciler::default();

    let reordered = reconciler
        .reconcile(&mut registry, &columns, &"a".into(), &"b".into())
        .expect("move should be accepted");

    let order: Vec<&str> = rtable::leaves(&reordered.columns)
        .iter()
        .map(|leaf| leaf.id.as_str())
        .collect();
    assert_eq!(order, vec!["b", "a"]);
    assert_eq!(reordered.source.width, 200.0);
    assert_eq!(reordered.target.width, 100.0);
    assert_eq!(registry.width(&"a".into()), Some(200.0));
    assert_eq!(registry.width(&"b".into()), Some(100.0));

    // Dropping a column onto itself changes nothing
    assert!(reconciler
        .reconcile(&mut registry, &reordered.columns, &"a".into(), &"a".into())
        .is_none());
    assert_eq!(registry.width(&"a".into()), Some(200.0));

    Ok(())
}

#[test]
fn test_table_follows_container_end_to_end() -> Result<()> {
    let columns = flat(&[("w", 112.5), ("x", 112.5), ("y", 112.5), ("z", 112.5)]);
    let mut table = Table::new(columns, Vec::new(), bare_config())?;
    assert_eq!(table.total_width(), 450.0);

    assert!(table.handle(TableEvent::ContainerResized { available_width: 900.0 })?);
    assert_eq!(table.widths()?, vec![225.0; 4]);
    assert_eq!(table.total_width(), 900.0);

    // A window narrower than nothing clamps every column to zero
    table.handle(TableEvent::ContainerResized { available_width: 0.0 })?;
    assert_eq!(table.widths()?, vec![0.0; 4]);

    Ok(())
}

#[test]
fn test_drag_then_resize_keeps_user_proportions() -> Result<()> {
    let mut table = Table::new(flat(&[("a", 100.0), ("b", 100.0)]), Vec::new(), bare_config())?;
    table.handle(TableEvent::ContainerResized { available_width: 200.0 })?;

    table.handle(TableEvent::ResizeStarted { column: "a".into() })?;
    table.handle(TableEvent::Resizing { column: "a".into(), width: 150.0 })?;
    table.handle(TableEvent::ResizeFinished { column: "a".into(), width: 150.0 })?;
    assert_eq!(table.leaves()[0].width, 150.0);

    // 150:100 scaled onto 400
    table.handle(TableEvent::ContainerResized { available_width: 400.0 })?;
    assert_eq!(table.widths()?, vec![240.0, 160.0]);

    Ok(())
}

#[test]
fn test_composite_header_rows() -> Result<()> {
    let columns = vec![
        Column::leaf("name", "Name", 100.0),
        Column::group(
            "Details",
            vec![Column::leaf("address", "Address", 200.0), Column::leaf("age", "Age", 50.0)],
        ),
    ];
    let table = Table::new(columns.clone(), Vec::new(), TableConfig::default())?;

    let rows = table.header_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1].label, "Details");
    assert_eq!(rows[0][1].col_span, 2);
    assert_eq!(rows[0][0].row_span, 2);
    assert_eq!(rows[1].len(), 2);

    // Cells of the bound table carry their style class
    assert!(rows[1].iter().all(|cell| cell.style.is_some()));
    assert!(header_rows(&columns)[1].iter().all(|cell| cell.style.is_none()));

    Ok(())
}

#[test]
fn test_sample_rows_render_through_columns() -> Result<()> {
    let rows = generate_rows(10, &DEMO_SCHEMA, 99);
    assert_eq!(rows, generate_rows(10, &DEMO_SCHEMA, 99));

    let table = Table::new(flat(&[("name", 100.0), ("age", 50.0)]), rows, TableConfig::default())?;
    for row in table.rows() {
        let name = table.leaves()[0].cell_text(row);
        assert!(!name.is_empty());
        let age: i64 = table.leaves()[1].cell_text(row).parse()?;
        assert!((18..=90).contains(&age));
    }

    Ok(())
}

#[test]
fn test_invalid_declared_width_is_rejected() {
    let result = Table::new(flat(&[("a", f64::INFINITY)]), Vec::new(), TableConfig::default());
    assert!(matches!(result, Err(LayoutError::InvalidWidth { .. })));
}
