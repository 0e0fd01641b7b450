use super::csv_import::{SchemaProfile, WhenColumns};

/// Known header fingerprints of the payment-file variants.
/// Returns a ready SchemaProfile if the layout is recognized, None otherwise.
///
/// The variants drifted over time: the portfolio column has been exported
/// as "Cartera_x", "Cartera_y" and "Cartera_Pagos", and one variant carries
/// a full payment date instead of the Mes_Creacion/Dia pair.
pub(crate) fn detect_schema(headers: &[String]) -> Option<SchemaProfile> {
    let h: Vec<String> = headers
        .iter()
        .map(|s| s.to_lowercase().trim().to_string())
        .collect();

    // Merged exports: "Cartera_y" (the right-hand side of the join)
    if let Some(cartera) = col_index(&h, "cartera_y") {
        return Some(SchemaProfile {
            name: "Pagos Cruzados (Cartera_y)".into(),
            cartera_column: cartera,
            when: WhenColumns::MonthDay {
                month: col_index(&h, "mes_creacion").unwrap_or(1),
                day: col_index(&h, "dia").unwrap_or(2),
            },
            amount_column: col_index(&h, "pagos").unwrap_or(3),
            has_header: true,
            skip_rows: 0,
            normalize_labels: true,
        });
    }

    // Older merged exports: "Cartera_x" (left-hand side)
    if let Some(cartera) = col_index(&h, "cartera_x") {
        return Some(SchemaProfile {
            name: "Pagos Cruzados (Cartera_x)".into(),
            cartera_column: cartera,
            when: WhenColumns::MonthDay {
                month: col_index(&h, "mes_creacion").unwrap_or(1),
                day: col_index(&h, "dia").unwrap_or(2),
            },
            amount_column: col_index(&h, "pagos").unwrap_or(3),
            has_header: true,
            skip_rows: 0,
            normalize_labels: true,
        });
    }

    // Flat exports: "Cartera_Pagos"
    if let Some(cartera) = col_index(&h, "cartera_pagos") {
        return Some(SchemaProfile {
            name: "Pagos (Cartera_Pagos)".into(),
            cartera_column: cartera,
            when: WhenColumns::MonthDay {
                month: col_index(&h, "mes_creacion").unwrap_or(1),
                day: col_index(&h, "dia").unwrap_or(2),
            },
            amount_column: col_index(&h, "pagos").unwrap_or(3),
            has_header: true,
            skip_rows: 0,
            normalize_labels: true,
        });
    }

    // Raw exports: plain "Cartera" with a full payment date
    if let Some(cartera) = col_index(&h, "cartera") {
        if let Some(fecha) = col_index(&h, "fecha_pago").or_else(|| col_index(&h, "fecha")) {
            return Some(SchemaProfile {
                name: "Pagos (Fecha)".into(),
                cartera_column: cartera,
                when: WhenColumns::Date {
                    column: fecha,
                    format: "%Y-%m-%d".into(),
                },
                amount_column: col_index(&h, "pagos").unwrap_or(2),
                has_header: true,
                skip_rows: 0,
                normalize_labels: true,
            });
        }
    }

    None
}

fn col_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
