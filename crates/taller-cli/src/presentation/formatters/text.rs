/// Cut `text` to at most `max` characters, marking the cut with `…`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max - 1).collect();
    format!("{}…", kept)
}

/// Width of each column: the widest of header and cells, capped at `limit`
pub fn column_widths(headers: &[String], rows: &[Vec<String>], limit: Option<usize>) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest = rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0);
            match limit {
                Some(limit) => widest.min(limit),
                None => widest,
            }
        })
        .collect()
}

/// Render cells left-aligned in their columns, two spaces apart
pub fn table_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", truncate(cell, width), width = width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Rotacion", 20), "Rotacion");
        assert_eq!(truncate("Cambio de amortiguador", 10), "Cambio de…");
        assert_eq!(truncate("Día", 3), "Día");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_table_row_alignment() {
        let headers = vec!["ID".to_string(), "Nombre".to_string()];
        let rows = vec![vec!["10".to_string(), "Encina".to_string()]];
        let widths = column_widths(&headers, &rows, None);
        assert_eq!(widths, vec![2, 6]);
        assert_eq!(table_row(&rows[0], &widths), "10  Encina");
        assert_eq!(
            table_row(&["1".to_string(), "Mitre".to_string()], &widths),
            "1   Mitre"
        );
    }

    #[test]
    fn test_column_limit_truncates() {
        let headers = vec!["Nombre".to_string()];
        let rows = vec![vec!["Cambio de pastilla/disco de freno".to_string()]];
        let widths = column_widths(&headers, &rows, Some(12));
        assert_eq!(widths, vec![12]);
        assert_eq!(table_row(&rows[0], &widths), "Cambio de p…");
    }
}
