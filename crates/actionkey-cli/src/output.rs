use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Render rows as left-aligned columns under `headers`.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let render = |cells: Vec<&str>| -> String {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        line.join("  ").trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render(headers.to_vec()));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(render(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    println!("{}", format_table(headers, rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_padded_to_widest_cell() {
        let rows = vec![
            vec!["CREATE".to_string(), "CREATE".to_string()],
            vec!["ERROR".to_string(), "CREATE_ERROR".to_string()],
        ];
        let table = format_table(&["SUBACTION", "KEY"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "SUBACTION  KEY");
        assert_eq!(lines[1], "---------  ------------");
        assert_eq!(lines[3], "ERROR      CREATE_ERROR");
    }

    #[test]
    fn empty_rows_render_header_only() {
        let table = format_table(&["KEY"], &[]);
        assert_eq!(table.lines().count(), 2);
    }
}
