//! Sequential naming of sales cycles within a month.

use chrono::NaiveDateTime;

use mercado_core::{CycleData, Result};

use crate::date::{month_name_pt, parse_iso};

/// Names a cycle `"{n}º Ciclo de {Mês} {Ano}"`.
///
/// `n` is the 1-based position of `inicio_ofertas` among `ciclos_do_mes`
/// ordered by start date. Siblings without a start date are ignored. The
/// position is found by exact text match on the start date; when nothing
/// matches the cycle is placed after the last sibling. Two siblings with the
/// same start text both resolve to the first one's position.
///
/// An empty or unreadable start date yields an empty string; use
/// [`try_cycle_name`] to tell the two apart.
///
/// ```
/// use mercado_core::CycleData;
/// use mercado_cycle::cycle_name;
///
/// let siblings = [CycleData::new("2025-10-13T00:00"), CycleData::new("2025-10-22T00:00")];
/// assert_eq!(cycle_name("2025-10-22T00:00", &siblings), "2º Ciclo de Outubro 2025");
/// ```
#[must_use]
pub fn cycle_name(inicio_ofertas: &str, ciclos_do_mes: &[CycleData]) -> String {
    try_cycle_name(inicio_ofertas, ciclos_do_mes).unwrap_or_default()
}

/// Strict variant of [`cycle_name`].
///
/// # Errors
///
/// Returns [`MarketError::InvalidDate`](mercado_core::MarketError::InvalidDate)
/// when `inicio_ofertas` is non-empty and not an ISO-like date.
pub fn try_cycle_name(inicio_ofertas: &str, ciclos_do_mes: &[CycleData]) -> Result<String> {
    if inicio_ofertas.is_empty() {
        return Ok(String::new());
    }

    let start = parse_iso(inicio_ofertas)?;
    let ordered = order_by_start(ciclos_do_mes);
    let position = ordered
        .iter()
        .position(|c| c.inicio_ofertas == inicio_ofertas)
        .map_or(ordered.len() + 1, |i| i + 1);

    Ok(format!(
        "{position}º Ciclo de {} {}",
        month_name_pt(start),
        start.format("%Y")
    ))
}

/// Siblings with a start date, stably sorted by it; unreadable dates go last.
fn order_by_start(cycles: &[CycleData]) -> Vec<&CycleData> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &CycleData)> = cycles
        .iter()
        .filter(|c| !c.inicio_ofertas.is_empty())
        .map(|c| (parse_iso(&c.inicio_ofertas).ok(), c))
        .collect();
    keyed.sort_by_key(|(at, _)| (at.is_none(), *at));
    keyed.into_iter().map(|(_, c)| c).collect()
}
