// Formateo de textos de paquetes (card y resumen del formulario)

/// Precio con dos decimales; sin precio se muestra como 0
pub fn format_price(price: Option<f64>) -> String {
    format!("${}", to_fixed_2(price.unwrap_or(0.0)))
}

/// "86 diamonds" o "86 diamonds + 8 bonus"
pub fn format_diamonds(diamonds: u64, bonus: Option<u64>) -> String {
    match bonus {
        Some(bonus) if bonus > 0 => format!("{} diamonds + {} bonus", diamonds, bonus),
        _ => format!("{} diamonds", diamonds),
    }
}

// Redondeo half-up sobre el valor decimal exacto del f64 (como toFixed(2)).
// `{:.2}` redondea los empates exactos a par: 0.125 -> 0.12
fn to_fixed_2(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let digits = format!("{:.40}", value.abs());
    let Some((int_part, frac)) = digits.split_once('.') else {
        return format!("{:.2}", value);
    };
    let (Ok(units), Ok(cents)) = (int_part.parse::<u64>(), frac[..2].parse::<u64>()) else {
        return format!("{:.2}", value);
    };

    let round_up = frac.as_bytes()[2] >= b'5';
    let total = units
        .checked_mul(100)
        .and_then(|t| t.checked_add(cents + u64::from(round_up)));
    match total {
        Some(0) => "0.00".to_string(),
        Some(total) => format!("{}{}.{:02}", sign, total / 100, total % 100),
        None => format!("{:.2}", value),
    }
}
