use leptos::prelude::*;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 140.0;
const PAD: f64 = 10.0;

/// Координаты ломаной для SVG polyline.
///
/// X распределяется равномерно, Y нормируется на диапазон серии;
/// вырожденная серия (один уровень) рисуется горизонтальной линией
/// посередине.
fn polyline_points(values: &[f64], width: f64, height: f64, pad: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = pad + step * i as f64;
            let y = if span > 0.0 {
                pad + inner_h * (1.0 - (v - min) / span)
            } else {
                height / 2.0
            };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// LineChart - линия тренда по месяцам (динамика маржинальности)
#[component]
pub fn LineChart(
    #[prop(into)] title: String,
    /// Пары (месяц, значение)
    data: Vec<(String, f64)>,
    /// Суффикс значения для подписей ("%")
    #[prop(optional, into)]
    unit: String,
) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
    let points = polyline_points(&values, WIDTH, HEIGHT, PAD);
    let last_label = data
        .last()
        .map(|(month, value)| format!("{month}: {value:.1}{unit}"));

    view! {
        <div class="chart-card" style="border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; background: #fff; flex: 1; min-width: 280px;">
            <div style="font-size: 14px; font-weight: 600; margin-bottom: 12px; color: #374151;">{title}</div>
            {if data.is_empty() {
                view! { <div style="color: #9ca3af; font-size: 13px;">"Нет данных"</div> }.into_any()
            } else {
                view! {
                    <svg
                        viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                        style="width: 100%; height: 140px;"
                        preserveAspectRatio="none"
                    >
                        <polyline
                            points=points.clone()
                            fill="none"
                            stroke="#3b82f6"
                            stroke-width="2"
                            stroke-linejoin="round"
                            stroke-linecap="round"
                        />
                    </svg>
                    <div style="display: flex; justify-content: space-between; font-size: 11px; color: #6b7280;">
                        <span>{data.first().map(|(month, _)| month.clone())}</span>
                        <span>{last_label}</span>
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_span_the_padded_width() {
        let points = polyline_points(&[1.0, 2.0, 3.0], 320.0, 140.0, 10.0);
        let coords: Vec<&str> = points.split(' ').collect();
        assert_eq!(coords.len(), 3);
        assert!(coords[0].starts_with("10.0,"));
        assert!(coords[2].starts_with("310.0,"));
    }

    #[test]
    fn min_maps_to_bottom_max_to_top() {
        let points = polyline_points(&[0.0, 10.0], 320.0, 140.0, 10.0);
        let coords: Vec<&str> = points.split(' ').collect();
        assert!(coords[0].ends_with(",130.0"));
        assert!(coords[1].ends_with(",10.0"));
    }

    #[test]
    fn flat_series_is_a_midline() {
        let points = polyline_points(&[5.0, 5.0], 320.0, 140.0, 10.0);
        for coord in points.split(' ') {
            assert!(coord.ends_with(",70.0"));
        }
    }

    #[test]
    fn empty_series_yields_no_points() {
        assert_eq!(polyline_points(&[], 320.0, 140.0, 10.0), "");
    }
}
