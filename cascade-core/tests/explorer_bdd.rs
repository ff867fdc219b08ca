//! BDD scenarios for the cascading explorer over the embedded fixture.

use cascade_core::{DetailView, ExplorerView, Fixture, InspectionContext, Selection, SelectionStage};

fn column_pairs(view: &DetailView) -> Vec<String> {
    view.table()
        .expect("table detail")
        .columns
        .iter()
        .map(|c| format!("{}:{}", c.name, c.type_label))
        .collect()
}

#[test]
fn bdd_scenario_filter_then_drill_into_view() {
    let fixture = Fixture::builtin();
    let mut sel = Selection::new();

    // GIVEN catalog "main" is selected
    assert!(sel.select_catalog(&fixture, "main"));
    let view = ExplorerView::derive(&fixture, &sel);
    assert_eq!(view.schema_names(), vec!["gold_sales", "silver_inventory"]);

    // WHEN the schema filter is set to "silver"
    sel.set_schema_filter("silver");
    let view = ExplorerView::derive(&fixture, &sel);
    assert_eq!(view.schema_names(), vec!["silver_inventory"]);

    // AND schema "silver_inventory" is selected
    assert!(sel.select_schema(&fixture, "silver_inventory"));
    let view = ExplorerView::derive(&fixture, &sel);
    assert_eq!(view.table_names(), vec!["inventory_items", "inventory_history"]);

    // AND table "inventory_history" is selected
    assert!(sel.select_table(&fixture, "inventory_history"));
    let view = ExplorerView::derive(&fixture, &sel);

    // THEN the detail shows the view's owner, storage and columns
    let detail = DetailView::from_table(view.table);
    let d = detail.table().unwrap();
    assert_eq!(d.title, "inventory_history");
    assert_eq!(d.owner, "data_team");
    assert_eq!(
        d.storage,
        "ss://data-lake/main/silver_inventory/inventory_history"
    );
    assert_eq!(
        column_pairs(&detail),
        vec!["history_id:INT", "item_id:INT", "change_date:DATE"]
    );
}

#[test]
fn bdd_scenario_switching_catalog_resets_lower_levels() {
    let fixture = Fixture::builtin();
    let mut sel = Selection::new();

    // GIVEN analytics → reports is selected
    assert!(sel.select_catalog(&fixture, "analytics"));
    assert_eq!(ExplorerView::derive(&fixture, &sel).schema_names(), vec!["reports"]);
    assert!(sel.select_schema(&fixture, "reports"));
    assert_eq!(
        ExplorerView::derive(&fixture, &sel).table_names(),
        vec!["daily_summary"]
    );
    assert!(sel.select_table(&fixture, "daily_summary"));
    assert_eq!(sel.stage(), SelectionStage::TableSelected);

    // WHEN catalog "main" is selected
    assert!(sel.select_catalog(&fixture, "main"));

    // THEN schema and table are cleared and the detail shows the placeholder
    assert_eq!(sel.schema(), None);
    assert_eq!(sel.table(), None);
    let view = ExplorerView::derive(&fixture, &sel);
    assert!(view.tables.is_empty());
    assert_eq!(
        DetailView::from_table(view.table),
        DetailView::from_table(None)
    );
}

#[test]
fn bdd_scenario_every_catalog_lists_its_schemas_in_order() {
    let fixture = Fixture::builtin();
    for catalog in &fixture.catalogs {
        let mut sel = Selection::new();
        assert!(sel.select_catalog(&fixture, &catalog.name));
        let view = ExplorerView::derive(&fixture, &sel);
        assert_eq!(view.schema_names(), catalog.schema_names());
    }
}

#[test]
fn bdd_scenario_inspect_selected_table() {
    let fixture = Fixture::builtin();
    let mut sel = Selection::new();
    assert!(sel.select_catalog(&fixture, "main"));
    assert!(sel.select_schema(&fixture, "gold_sales"));

    // No table yet → nothing to hand off
    let view = ExplorerView::derive(&fixture, &sel);
    assert!(InspectionContext::for_table(view.table).is_none());

    assert!(sel.select_table(&fixture, "fact_sales transactions"));
    let view = ExplorerView::derive(&fixture, &sel);
    let ctx = InspectionContext::for_table(view.table).unwrap().to_string();
    assert!(ctx.starts_with("Inspecting table: fact_sales transactions\n"));
    assert!(ctx.contains("price:DECIMAL(10,2)"));
    assert!(ctx.ends_with("Storage: ss://data-lake/main/gold_sales/fact_sales_transactions"));
}

#[test]
fn bdd_scenario_names_outside_the_selected_branch_are_rejected() {
    let fixture = Fixture::builtin();
    let mut sel = Selection::new();

    // GIVEN catalog "analytics" is selected
    assert!(sel.select_catalog(&fixture, "analytics"));

    // WHEN a schema and table of catalog "main" are requested
    let schema_accepted = sel.select_schema(&fixture, "gold_sales");
    let table_accepted = sel.select_table(&fixture, "fact_sales transactions");

    // THEN both are refused and the stage still matches what resolves
    assert!(!schema_accepted);
    assert!(!table_accepted);
    assert_eq!(sel.stage(), SelectionStage::CatalogSelected);

    // AND an unknown catalog leaves the selection as it was
    assert!(!sel.select_catalog(&fixture, "no_such_catalog"));
    assert_eq!(sel.catalog(), Some("analytics"));
}
