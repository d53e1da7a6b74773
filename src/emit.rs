use crate::column::ColumnSchema;
use crate::config::GenerationConfig;
use crate::error::Result;
use crate::ident::format_name;
use crate::type_map::map_type;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Generated Go source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedOutput {
    text: String,
}

impl EmittedOutput {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Renders one struct per table. `columns` must be contiguous per table and in
/// column order; tables are split on adjacent `table_name` changes only.
pub fn emit(columns: &[ColumnSchema], config: &GenerationConfig) -> Result<EmittedOutput> {
    let mut imports = BTreeSet::new();
    let mut blocks = Vec::new();

    for (table, cols) in &columns.iter().chunk_by(|c| c.table_name.as_str()) {
        let mut block = format!("type {} struct{{\n", format_name(table));

        for col in cols {
            let mapped = map_type(col)?;
            if let Some(import) = mapped.import {
                imports.insert(import);
            }

            let _ = write!(block, "\t{} {}", format_name(&col.column_name), mapped.type_name);
            if !config.tag_label.is_empty() {
                let _ = write!(block, "\t`{}:\"{}\"`", config.tag_label, col.column_name);
            }
            block.push('\n');
        }

        block.push_str("}\n");
        log::debug!("Emitted struct for table {table}");
        blocks.push(block);
    }

    let mut text = format!("package {}\n\n", config.package_name);

    if !imports.is_empty() {
        text.push_str("import (\n");
        for import in &imports {
            let _ = writeln!(text, "\t\"{import}\"");
        }
        text.push_str(")\n\n");
    }

    text.push_str(&blocks.join("\n"));

    log::debug!(
        "Generated {} structs, imports: {:?}",
        blocks.len(),
        imports.iter().collect_vec()
    );

    Ok(EmittedOutput { text })
}
