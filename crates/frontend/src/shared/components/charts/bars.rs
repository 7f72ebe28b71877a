use crate::shared::components::table::number_format::format_money;
use leptos::prelude::*;

/// Ширина полосы в процентах от максимума серии
fn bar_width_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// BarChart - горизонтальные полосы "подпись / значение"
/// (выручка в разрезе каналов)
#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    /// Пары (подпись, значение)
    data: Vec<(String, f64)>,
) -> impl IntoView {
    let max = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    view! {
        <div class="chart-card" style="border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; background: #fff; flex: 1; min-width: 280px;">
            <div style="font-size: 14px; font-weight: 600; margin-bottom: 12px; color: #374151;">{title}</div>
            {if data.is_empty() {
                view! { <div style="color: #9ca3af; font-size: 13px;">"Нет данных"</div> }.into_any()
            } else {
                data.into_iter().map(|(label, value)| {
                    let width = bar_width_pct(value, max);
                    view! {
                        <div style="margin-bottom: 10px;">
                            <div style="display: flex; justify-content: space-between; font-size: 13px; margin-bottom: 3px;">
                                <span style="color: #374151;">{label}</span>
                                <span style="color: #6b7280;">{format_money(value)}</span>
                            </div>
                            <div style="background: #f3f4f6; border-radius: 3px; height: 8px;">
                                <div style=format!("background: #3b82f6; border-radius: 3px; height: 8px; width: {width:.1}%;")></div>
                            </div>
                        </div>
                    }
                }).collect_view().into_any()
            }}
        </div>
    }
}

/// GroupedBars - вертикальные пары столбцов по месяцам
/// (заказы против выручки; каждая серия нормируется на свой максимум)
#[component]
pub fn GroupedBars(
    #[prop(into)] title: String,
    /// Тройки (месяц, заказы, выручка)
    data: Vec<(String, f64, f64)>,
    #[prop(into)] left_legend: String,
    #[prop(into)] right_legend: String,
) -> impl IntoView {
    let max_left = data.iter().map(|(_, a, _)| *a).fold(0.0_f64, f64::max);
    let max_right = data.iter().map(|(_, _, b)| *b).fold(0.0_f64, f64::max);

    view! {
        <div class="chart-card" style="border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; background: #fff; flex: 1; min-width: 280px;">
            <div style="font-size: 14px; font-weight: 600; margin-bottom: 4px; color: #374151;">{title}</div>
            <div style="display: flex; gap: 14px; font-size: 12px; color: #6b7280; margin-bottom: 10px;">
                <span><span style="display: inline-block; width: 10px; height: 10px; background: #3b82f6; border-radius: 2px; margin-right: 4px;"></span>{left_legend}</span>
                <span><span style="display: inline-block; width: 10px; height: 10px; background: #10b981; border-radius: 2px; margin-right: 4px;"></span>{right_legend}</span>
            </div>
            {if data.is_empty() {
                view! { <div style="color: #9ca3af; font-size: 13px;">"Нет данных"</div> }.into_any()
            } else {
                view! {
                    <div style="display: flex; align-items: flex-end; gap: 12px; height: 140px;">
                        {data.into_iter().map(|(month, left, right)| {
                            let left_pct = bar_width_pct(left, max_left);
                            let right_pct = bar_width_pct(right, max_right);
                            view! {
                                <div style="flex: 1; display: flex; flex-direction: column; align-items: center; height: 100%;">
                                    <div style="display: flex; align-items: flex-end; gap: 3px; flex: 1; width: 100%; justify-content: center;">
                                        <div
                                            style=format!("background: #3b82f6; width: 14px; border-radius: 2px 2px 0 0; height: {left_pct:.1}%;")
                                            title=format!("{left:.0}")
                                        ></div>
                                        <div
                                            style=format!("background: #10b981; width: 14px; border-radius: 2px 2px 0 0; height: {right_pct:.1}%;")
                                            title=format_money(right)
                                        ></div>
                                    </div>
                                    <div style="font-size: 11px; color: #6b7280; margin-top: 4px; white-space: nowrap;">{month}</div>
                                </div>
                            }
                        }).collect_view()}
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
    fn width_scales_to_series_max() {
        assert_eq!(bar_width_pct(50.0, 100.0), 50.0);
        assert_eq!(bar_width_pct(100.0, 100.0), 100.0);
    }

    #[test]
    fn degenerate_series_collapses_to_zero() {
        assert_eq!(bar_width_pct(10.0, 0.0), 0.0);
        assert_eq!(bar_width_pct(-5.0, 100.0), 0.0);
        assert_eq!(bar_width_pct(f64::NAN, 100.0), 0.0);
    }
}
