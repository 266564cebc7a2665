//! Text rendering of the bestseller ranking.

use crate::report::ProductSales;

const BAR: char = '█';

/// Horizontal bar chart, one product per line, bars scaled to `width`.
///
/// Every product with sales gets at least one block.
pub fn render_bestseller_chart(ranked: &[ProductSales], width: usize) -> String {
    let Some(max_units) = ranked.iter().map(|p| p.units).max().filter(|m| *m > 0) else {
        return "No sales yet.\n".to_string();
    };
    let width = width.max(1) as u64;
    let label_width = ranked
        .iter()
        .map(|p| p.product.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for p in ranked {
        let len = (p.units * width).div_ceil(max_units) as usize;
        let bar: String = std::iter::repeat_n(BAR, len).collect();
        out.push_str(&format!(
            "{:<label_width$}  {:<bar_width$} {}\n",
            p.product,
            bar,
            p.units,
            bar_width = width as usize,
        ));
    }
    out
}
