use crate::engine::ChartPoint;
use crate::models::theme::ThemeStore;
use yew::{Html, Properties, function_component, html};
use yewdux::prelude::use_store;

const VIEW_WIDTH: f32 = 720.0;
const VIEW_HEIGHT: f32 = 360.0;
const MARGIN_LEFT: f32 = 40.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct BarRect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

/// Bar geometry inside the fixed viewBox. Bars occupy 60% of their slot
/// and heights scale linearly against `max_value`.
fn bar_rect(count: usize, index: usize, value: f32, max_value: f32) -> BarRect {
    let plot_width = VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let slot = plot_width / count.max(1) as f32;
    let width = slot * 0.6;
    let x = MARGIN_LEFT + index as f32 * slot + slot * 0.2;

    let ratio = if max_value > 0.0 {
        (value / max_value).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let height = plot_height * ratio;
    let y = MARGIN_TOP + plot_height - height;

    BarRect {
        x,
        y,
        width,
        height,
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub points: Vec<ChartPoint>,
    pub max_value: f32,
    #[prop_or_default]
    pub title: String,
}

/// Vertical bar chart rendered as plain SVG, themed from the store.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let (theme, _) = use_store::<ThemeStore>();

    let bar_fill = theme.pick("#F6E05E", "#4299E1");
    let axis_stroke = theme.pick("#4A5568", "#CBD5E0");
    let text_fill = theme.pick("#E2E8F0", "#4A5568");

    let count = props.points.len();
    let baseline = VIEW_HEIGHT - MARGIN_BOTTOM;

    html! {
        <figure class="w-full">
            if !props.title.is_empty() {
                <figcaption class="text-2xl font-semibold mb-4">{ props.title.clone() }</figcaption>
            }
            <svg
                viewBox={format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")}
                class="w-full h-auto"
                role="img"
            >
                <line
                    x1={MARGIN_LEFT.to_string()}
                    y1={baseline.to_string()}
                    x2={(VIEW_WIDTH - MARGIN_RIGHT).to_string()}
                    y2={baseline.to_string()}
                    stroke={axis_stroke}
                    stroke-width="1"
                />
                { for props.points.iter().enumerate().map(|(index, point)| {
                    let rect = bar_rect(count, index, point.value, props.max_value);
                    let label_x = rect.x + rect.width / 2.0;
                    html! {
                        <g key={point.label.clone()}>
                            <rect
                                x={rect.x.to_string()}
                                y={rect.y.to_string()}
                                width={rect.width.to_string()}
                                height={rect.height.to_string()}
                                rx="4"
                                fill={bar_fill}
                            />
                            <text
                                x={label_x.to_string()}
                                y={(rect.y - 6.0).to_string()}
                                text-anchor="middle"
                                font-size="12"
                                fill={text_fill}
                            >
                                { format!("{:.1}", point.value) }
                            </text>
                            <text
                                x={label_x.to_string()}
                                y={(baseline + 20.0).to_string()}
                                text-anchor="middle"
                                font-size="12"
                                fill={text_fill}
                            >
                                { point.label.clone() }
                            </text>
                        </g>
                    }
                })}
            </svg>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_scales_with_value() {
        let full = bar_rect(4, 0, 5.0, 5.0);
        let half = bar_rect(4, 0, 2.5, 5.0);

        assert!((full.height - 2.0 * half.height).abs() < 1e-3);
        assert!(full.y < half.y);
    }

    #[test]
    fn test_zero_max_yields_flat_bars() {
        let rect = bar_rect(3, 1, 4.0, 0.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn test_bars_stay_inside_plot_area() {
        for index in 0..8 {
            let rect = bar_rect(8, index, 5.0, 5.0);
            assert!(rect.x >= MARGIN_LEFT);
            assert!(rect.x + rect.width <= VIEW_WIDTH - MARGIN_RIGHT + 1e-3);
            assert!(rect.y >= MARGIN_TOP - 1e-3);
        }
    }

    #[test]
    fn test_values_above_max_are_clamped() {
        let rect = bar_rect(2, 0, 10.0, 5.0);
        let plot_height = VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        assert!((rect.height - plot_height).abs() < 1e-3);
    }
}
