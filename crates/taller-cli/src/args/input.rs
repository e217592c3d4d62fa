//! Parsers for form input given on the command line.

/// `--set field=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub field: String,
    pub value: String,
}

/// `--line section:item:quantity:amount`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInput {
    pub section: String,
    pub item: u32,
    pub quantity: i64,
    pub amount: i64,
}

pub fn parse_assignment(input: &str) -> Result<Assignment, String> {
    let (field, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", input))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{}'", input));
    }

    Ok(Assignment {
        field: field.to_string(),
        value: value.to_string(),
    })
}

pub fn parse_line(input: &str) -> Result<LineInput, String> {
    let parts: Vec<&str> = input.split(':').map(str::trim).collect();
    let [section, item, quantity, amount] = parts.as_slice() else {
        return Err(format!(
            "expected SECTION:ITEM:QTY:AMOUNT, got '{}'",
            input
        ));
    };

    if section.is_empty() {
        return Err(format!("missing section in '{}'", input));
    }

    Ok(LineInput {
        section: section.to_string(),
        item: item
            .parse()
            .map_err(|_| format!("item must be a numeric id, got '{}'", item))?,
        quantity: quantity
            .parse()
            .map_err(|_| format!("quantity must be an integer, got '{}'", quantity))?,
        amount: amount
            .parse()
            .map_err(|_| format!("amount must be an integer, got '{}'", amount))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment_keeps_value_verbatim() {
        let assignment = parse_assignment("email=a=b@example.com").unwrap();
        assert_eq!(assignment.field, "email");
        assert_eq!(assignment.value, "a=b@example.com");

        let empty = parse_assignment("observacion=").unwrap();
        assert_eq!(empty.value, "");
    }

    #[test]
    fn test_parse_assignment_rejects_missing_parts() {
        assert!(parse_assignment("nombre").is_err());
        assert!(parse_assignment("=Lavalle").is_err());
    }

    #[test]
    fn test_parse_line() {
        let line = parse_line("repuestos:3:2:30000").unwrap();
        assert_eq!(
            line,
            LineInput {
                section: "repuestos".to_string(),
                item: 3,
                quantity: 2,
                amount: 30000,
            }
        );
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("repuestos:3:2").is_err());
        assert!(parse_line(":3:2:1").is_err());
        assert!(parse_line("repuestos:x:2:1").is_err());
        // Range checks belong to the line editor, not the parser
        assert!(parse_line("repuestos:1:0:-5").is_ok());
    }
}
