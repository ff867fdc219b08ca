//! Inspection hand-off - the opening message an assistant session would be
//! started with when the user asks to inspect the selected table.

use std::fmt;

use crate::model::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionContext {
    pub table_name: String,
    /// `name:TYPE` pairs in stored order.
    pub columns: Vec<String>,
    pub storage: Option<String>,
}

impl InspectionContext {
    /// `None` when no table is resolved.
    pub fn for_table(table: Option<&Table>) -> Option<Self> {
        let table = table?;
        let storage = if table.storage.trim().is_empty() {
            None
        } else {
            Some(table.storage.clone())
        };
        Some(Self {
            table_name: table.name.clone(),
            columns: table
                .columns
                .iter()
                .map(|c| format!("{}:{}", c.name, c.data_type))
                .collect(),
            storage,
        })
    }
}

impl fmt::Display for InspectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inspecting table: {}", self.table_name)?;
        if !self.columns.is_empty() {
            write!(f, "\nColumns: {}", self.columns.join(", "))?;
        }
        if let Some(storage) = &self.storage {
            write!(f, "\nStorage: {storage}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableKind;

    fn bare_table() -> Table {
        Table {
            name: "scratch".into(),
            kind: TableKind::Table,
            owner: "me".into(),
            storage: "  ".into(),
            columns: vec![],
        }
    }

    #[test]
    fn no_table_no_context() {
        assert!(InspectionContext::for_table(None).is_none());
    }

    #[test]
    fn full_context_text() {
        let f = crate::Fixture::builtin();
        let daily = &f.catalogs[1].schemas[0].tables[0];
        let ctx = InspectionContext::for_table(Some(daily)).unwrap();
        assert_eq!(
            ctx.to_string(),
            "Inspecting table: daily_summary\n\
             Columns: date:DATE, total_revenue:DECIMAL(12,2), total_transactions:INT\n\
             Storage: ss://data-lake/analytics/reports/daily_summary"
        );
    }

    #[test]
    fn omits_empty_parts() {
        let table = bare_table();
        let ctx = InspectionContext::for_table(Some(&table)).unwrap();
        assert_eq!(ctx.to_string(), "Inspecting table: scratch");
    }
}
