// SVG bar chart of the risk factor values

use health_risk_domain::entities::assessment::ChartFactor;
use health_risk_domain::services::report::format_decimal;

use super::html_escape;

const WIDTH: u32 = 680;
const HEIGHT: u32 = 320;
const MARGIN: u32 = 50;
/// Distance between value-axis grid lines
const TICK_STEP: f64 = 20.0;
const BAR_COLOR: &str = "#1f77b4";

/// Render the factor bar chart.
///
/// Bars are scaled against `upper_bound`, the top of the value axis.
pub fn render_factor_chart(factors: &[ChartFactor], upper_bound: f64) -> String {
    if factors.is_empty() || upper_bound <= 0.0 {
        return String::from("<svg></svg>");
    }

    let chart_width = (WIDTH - 2 * MARGIN) as f64;
    let chart_height = (HEIGHT - 2 * MARGIN) as f64;
    let slot_width = chart_width / factors.len() as f64;
    let bar_width = slot_width * 0.6;
    let baseline = (MARGIN as f64) + chart_height;

    let mut grid = String::new();
    let mut tick = 0.0;
    while tick <= upper_bound {
        let y = baseline - (tick / upper_bound) * chart_height;
        grid.push_str(&format!(
            r##"<line x1="{x1}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="#e5e7eb" stroke-width="1"/><text x="{tx}" y="{ty:.1}" text-anchor="end" font-size="11" fill="#6b7280">{label}</text>"##,
            x1 = MARGIN,
            x2 = WIDTH - MARGIN,
            y = y,
            tx = MARGIN - 6,
            ty = y + 4.0,
            label = tick,
        ));
        tick += TICK_STEP;
    }

    let mut bars = String::new();
    for (i, factor) in factors.iter().enumerate() {
        let bar_height = (factor.value.max(0.0) / upper_bound).min(1.0) * chart_height;
        let x = MARGIN as f64 + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = baseline - bar_height;
        let center = x + bar_width / 2.0;

        bars.push_str(&format!(
            r##"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{color}"><title>{label}: {value}</title></rect>"##,
            x = x,
            y = y,
            w = bar_width,
            h = bar_height,
            color = BAR_COLOR,
            label = html_escape(&factor.label),
            value = format_decimal(factor.value),
        ));
        bars.push_str(&format!(
            r##"<text x="{cx:.1}" y="{vy:.1}" text-anchor="middle" font-size="11" fill="#374151">{value}</text><text x="{cx:.1}" y="{ly}" text-anchor="middle" font-size="12" fill="#374151">{label}</text>"##,
            cx = center,
            vy = y - 6.0,
            value = format_decimal(factor.value),
            ly = HEIGHT - MARGIN + 20,
            label = html_escape(&factor.label),
        ));
    }

    format!(
        r##"<svg class="factor-chart" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img" style="background:white; border-radius:8px">
  <text x="15" y="{mid}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, 15, {mid})">Relative Risk Impact</text>
  {grid}
  <line x1="{m}" y1="{base}" x2="{right}" y2="{base}" stroke="#9ca3af" stroke-width="2"/>
  <line x1="{m}" y1="{m}" x2="{m}" y2="{base}" stroke="#9ca3af" stroke-width="2"/>
  {bars}
</svg>"##,
        width = WIDTH,
        height = HEIGHT,
        mid = HEIGHT / 2,
        grid = grid,
        m = MARGIN,
        base = baseline,
        right = WIDTH - MARGIN,
        bars = bars,
    )
}
