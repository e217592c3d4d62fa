use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use taller_types::{EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub title: &'static str,
    pub value: String,
}

/// Summary cards over freshly mounted seed data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Latest appointment date, the "day" the cards refer to
    pub date: Option<String>,
    pub cards: Vec<DashboardCard>,
}

impl Dashboard {
    pub fn compute() -> Self {
        Self::from_records(
            &taller_catalog::seed(EntityKind::Appointments),
            &taller_catalog::seed(EntityKind::Sales),
            &taller_catalog::seed(EntityKind::WorkOrders),
            &taller_catalog::seed(EntityKind::Clients),
        )
    }

    pub fn from_records(
        appointments: &[Record],
        sales: &[Record],
        work_orders: &[Record],
        clients: &[Record],
    ) -> Self {
        let day = latest_date(appointments);
        let appointments_today = appointments
            .iter()
            .filter(|r| day.is_some() && record_date(r) == day)
            .count();

        let sales_month = latest_date(sales);
        let sales_total: i64 = sales
            .iter()
            .filter(|r| match (record_date(r), sales_month) {
                (Some(date), Some(month)) => {
                    date.year() == month.year() && date.month() == month.month()
                }
                _ => false,
            })
            .filter_map(|r| r.integer("monto"))
            .sum();

        let open_orders = work_orders
            .iter()
            .filter(|r| r.text("estado") != Some("Completado"))
            .count();

        Self {
            date: day.map(|d| d.format("%Y-%m-%d").to_string()),
            cards: vec![
                DashboardCard {
                    title: "Turnos del día",
                    value: appointments_today.to_string(),
                },
                DashboardCard {
                    title: "Ventas del mes",
                    value: format!("${}", sales_total),
                },
                DashboardCard {
                    title: "Autos en taller",
                    value: open_orders.to_string(),
                },
                DashboardCard {
                    title: "Clientes atendidos hoy",
                    value: clients.len().to_string(),
                },
            ],
        }
    }
}

fn record_date(record: &Record) -> Option<NaiveDate> {
    record
        .text("fecha")
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn latest_date(records: &[Record]) -> Option<NaiveDate> {
    records.iter().filter_map(record_date).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use taller_types::{FieldValue, RecordId};

    #[test]
    fn test_seed_dashboard() {
        let dashboard = Dashboard::compute();
        assert_eq!(dashboard.date.as_deref(), Some("2025-08-21"));

        let values: Vec<&str> = dashboard.cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["3", "$35000", "1", "2"]);
    }

    fn sale(id: u32, fecha: &str, monto: i64) -> Record {
        let mut fields = taller_types::Fields::new();
        fields.insert("fecha".to_string(), FieldValue::text(fecha));
        fields.insert("monto".to_string(), FieldValue::Integer(monto));
        Record::new(RecordId::new(id), fields)
    }

    #[test]
    fn test_sales_card_sums_only_the_latest_month() {
        let sales = vec![
            sale(1, "2025-07-30", 9000),
            sale(2, "2025-08-02", 1000),
            sale(3, "2025-08-20", 2500),
            sale(4, "2024-08-20", 7000),
        ];
        let dashboard = Dashboard::from_records(&[], &sales, &[], &[]);

        assert_eq!(dashboard.cards[1].title, "Ventas del mes");
        assert_eq!(dashboard.cards[1].value, "$3500");
    }

    #[test]
    fn test_empty_lists() {
        let dashboard = Dashboard::from_records(&[], &[], &[], &[]);
        assert_eq!(dashboard.date, None);
        assert!(dashboard.cards.iter().all(|c| c.value == "0" || c.value == "$0"));
    }
}
