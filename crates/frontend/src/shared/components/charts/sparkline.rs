use leptos::prelude::*;

/// Sparkline - миниатюрная линия истории продаж для ячейки таблицы
#[component]
pub fn Sparkline(
    /// Числовые замеры (история продаж товара)
    values: Vec<f64>,
) -> impl IntoView {
    const W: f64 = 90.0;
    const H: f64 = 24.0;
    const PAD: f64 = 2.0;

    if values.len() < 2 {
        return view! { <span style="color: #d1d5db;">"—"</span> }.into_any();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let step = (W - 2.0 * PAD) / (values.len() - 1) as f64;

    let points = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PAD + step * i as f64;
            let y = if span > 0.0 {
                PAD + (H - 2.0 * PAD) * (1.0 - (v - min) / span)
            } else {
                H / 2.0
            };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <svg width="90" height="24" viewBox=format!("0 0 {W} {H}") aria-hidden="true">
            <polyline
                points=points
                fill="none"
                stroke="#10b981"
                stroke-width="1.5"
                stroke-linejoin="round"
                stroke-linecap="round"
            />
        </svg>
    }
    .into_any()
}
